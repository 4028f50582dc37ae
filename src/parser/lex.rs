use regex::Regex;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Or,
    Xor,
    Xnor,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Or => write!(f, "+"),
            Op::Xor => write!(f, "xor"),
            Op::Xnor => write!(f, "xnor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Variable(char),
    LeftParen,
    RightParen,
    Not,
    Binop(Op),
}

impl Token {
    fn op_from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            '\'' => Some(Token::Not),
            '+' => Some(Token::Binop(Op::Or)),
            '^' => Some(Token::Binop(Op::Xor)),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(name) => write!(f, "variable '{}'", name),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::Not => write!(f, "\"'\""),
            Token::Binop(op) => write!(f, "operator '{}'", op),
        }
    }
}

#[derive(Debug)]
pub struct LexError {
    pub ch: char,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LexError: unexpected character {:?}", self.ch)
    }
}

impl Error for LexError {}

// longest keyword first, `xor` is a prefix of `xnor`
const KEYWORDS: [(&str, Op); 2] = [("xnor", Op::Xnor), ("xor", Op::Xor)];

pub fn lex(s: &str) -> Result<Vec<Token>, Box<dyn Error>> {
    let whitespace = Regex::new(r"\s+")?;
    let text = whitespace.replace_all(s, "");

    let mut tokens = vec![];
    let mut rest: &str = &text;

    'scan: while let Some(c) = rest.chars().next() {
        for (keyword, op) in KEYWORDS.iter() {
            if let Some(tail) = rest.strip_prefix(*keyword) {
                tokens.push(Token::Binop(*op));
                rest = tail;
                continue 'scan;
            }
        }

        if let Some(op) = Token::op_from_char(c) {
            tokens.push(op);
        } else if c.is_ascii_alphabetic() {
            tokens.push(Token::Variable(c));
        } else {
            return Err(Box::new(LexError { ch: c }));
        }
        rest = &rest[c.len_utf8()..];
    }

    Ok(tokens)
}
