use super::lex::{Op, Token};
use std::{
    collections::{BTreeSet, HashMap, VecDeque},
    error::Error,
    fmt,
};

pub type Assignment = HashMap<char, bool>;

pub const MAX_DEPTH: u16 = 1024;

/// `Term Binop Expr`, a lone `Term`, or a negated parenthesized group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Term(Term),
    Not(Box<Expr>),
    Binop(Term, Op, Box<Expr>),
}

/// Implicit conjunction of one or more operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Cons(Operand, Box<Term>),
    End(Operand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Var(MaybeVar),
    Group(Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaybeVar {
    Var(char),
    NegVar(char),
}

#[derive(Debug)]
pub struct ParseError {
    error: String,
}

impl ParseError {
    pub fn new<S: ToString>(error: S) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParseError: {}", self.error)
    }
}

impl Error for ParseError {}

#[derive(Debug)]
pub struct UnboundVariable {
    pub name: char,
}

impl fmt::Display for UnboundVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no value assigned to variable '{}'", self.name)
    }
}

impl Error for UnboundVariable {}

fn unexpected(found: Option<Token>, expected: &str) -> Box<dyn Error> {
    let err = match found {
        Some(tk) => ParseError::new(format!("expected {}, got {}", expected, tk)),
        None => ParseError::new(format!(
            "expected {}, got unexpected end of expression",
            expected
        )),
    };
    Box::new(err)
}

fn descend(depth: u16) -> Result<u16, Box<dyn Error>> {
    if depth == 0 {
        let err: Box<dyn Error> = Box::new(ParseError::new("Expression too deep"));
        return Err(err);
    }
    Ok(depth - 1)
}

/// Parses a complete token stream. Leftover tokens are an error.
pub fn parse(tokens: Vec<Token>) -> Result<Expr, Box<dyn Error>> {
    let mut tokens = VecDeque::from(tokens);
    let ast = Expr::munch_tokens(&mut tokens, MAX_DEPTH)?;

    if let Some(tk) = tokens.front() {
        return Err(Box::new(ParseError::new(format!(
            "expected end of expression, found extra tokens starting at {}",
            tk
        ))));
    }

    Ok(ast)
}

impl Expr {
    pub fn munch_tokens(tokens: &mut VecDeque<Token>, depth: u16) -> Result<Self, Box<dyn Error>> {
        let depth = descend(depth)?;

        match tokens.front().copied() {
            Some(Token::Variable(_)) | Some(Token::LeftParen) => {
                let term = Term::munch_tokens(tokens, depth)?;

                match tokens.front().copied() {
                    Some(Token::Binop(op)) => {
                        let _ = tokens.pop_front();
                        let rhs = Self::munch_tokens(tokens, depth)?;
                        Ok(Expr::Binop(term, op, Box::new(rhs)))
                    }
                    _ => Ok(Expr::Term(term)),
                }
            }
            found => Err(unexpected(found, "variable or '('")),
        }
    }

    pub fn eval(&self, assignment: &Assignment) -> Result<bool, Box<dyn Error>> {
        let result = match self {
            Self::Term(term) => term.eval(assignment)?,
            Self::Not(inner) => !inner.eval(assignment)?,
            Self::Binop(lhs, op, rhs) => {
                let lhs = lhs.eval(assignment)?;
                let rhs = rhs.eval(assignment)?;
                match op {
                    Op::Or => lhs || rhs,
                    Op::Xor => lhs ^ rhs,
                    Op::Xnor => !(lhs ^ rhs),
                }
            }
        };

        Ok(result)
    }

    pub fn collect_variables(&self, names: &mut BTreeSet<char>) {
        match self {
            Self::Term(term) => term.collect_variables(names),
            Self::Not(inner) => inner.collect_variables(names),
            Self::Binop(lhs, _, rhs) => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
        }
    }
}

impl Term {
    pub fn munch_tokens(tokens: &mut VecDeque<Token>, depth: u16) -> Result<Self, Box<dyn Error>> {
        let depth = descend(depth)?;

        let operand = match tokens.front().copied() {
            Some(Token::LeftParen) => {
                let _ = tokens.pop_front();
                let inner = Expr::munch_tokens(tokens, depth)?;

                match tokens.pop_front() {
                    Some(Token::RightParen) => {}
                    found => return Err(unexpected(found, "closing bracket")),
                }

                // a trailing ' negates the whole group
                if tokens.front() == Some(&Token::Not) {
                    let _ = tokens.pop_front();
                    Operand::Group(Box::new(Expr::Not(Box::new(inner))))
                } else {
                    Operand::Group(Box::new(inner))
                }
            }
            Some(Token::Variable(_)) => Operand::Var(MaybeVar::munch_tokens(tokens)?),
            found => return Err(unexpected(found, "variable or '('")),
        };

        match tokens.front() {
            Some(Token::LeftParen) | Some(Token::Variable(_)) => Ok(Term::Cons(
                operand,
                Box::new(Self::munch_tokens(tokens, depth)?),
            )),
            _ => Ok(Term::End(operand)),
        }
    }

    pub fn operands(&self) -> Vec<&Operand> {
        let mut operands = vec![];
        let mut cur = self;
        loop {
            match cur {
                Term::Cons(operand, rest) => {
                    operands.push(operand);
                    cur = rest.as_ref();
                }
                Term::End(operand) => {
                    operands.push(operand);
                    return operands;
                }
            }
        }
    }

    pub fn eval(&self, assignment: &Assignment) -> Result<bool, Box<dyn Error>> {
        let result = match self {
            Self::End(operand) => operand.eval(assignment)?,
            Self::Cons(operand, rest) => operand.eval(assignment)? && rest.eval(assignment)?,
        };

        Ok(result)
    }

    fn collect_variables(&self, names: &mut BTreeSet<char>) {
        for operand in self.operands() {
            match operand {
                Operand::Var(mvar) => {
                    names.insert(mvar.name());
                }
                Operand::Group(expr) => expr.collect_variables(names),
            }
        }
    }
}

impl Operand {
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, Box<dyn Error>> {
        match self {
            Self::Var(mvar) => mvar.eval(assignment),
            Self::Group(expr) => expr.eval(assignment),
        }
    }
}

impl MaybeVar {
    pub fn munch_tokens(tokens: &mut VecDeque<Token>) -> Result<Self, Box<dyn Error>> {
        match tokens.pop_front() {
            Some(Token::Variable(name)) => {
                if tokens.front() == Some(&Token::Not) {
                    let _ = tokens.pop_front();
                    Ok(MaybeVar::NegVar(name))
                } else {
                    Ok(MaybeVar::Var(name))
                }
            }
            found => Err(unexpected(found, "variable")),
        }
    }

    pub fn name(&self) -> char {
        match self {
            Self::Var(name) | Self::NegVar(name) => *name,
        }
    }

    pub fn eval(&self, assignment: &Assignment) -> Result<bool, Box<dyn Error>> {
        let value = match assignment.get(&self.name()) {
            Some(value) => *value,
            None => return Err(Box::new(UnboundVariable { name: self.name() })),
        };

        match self {
            Self::Var(_) => Ok(value),
            Self::NegVar(_) => Ok(!value),
        }
    }
}

// Fully parenthesized rendering, for inspection only.

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term(term) => write!(f, "{}", term),
            Self::Not(inner) => write!(f, "!{}", inner),
            Self::Binop(lhs, Op::Or, rhs) => write!(f, "({} || {})", lhs, rhs),
            Self::Binop(lhs, Op::Xor, rhs) => write!(f, "({} ^ {})", lhs, rhs),
            Self::Binop(lhs, Op::Xnor, rhs) => write!(f, "!({} ^ {})", lhs, rhs),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::End(operand) => write!(f, "{}", operand),
            Self::Cons(..) => {
                let operands = self
                    .operands()
                    .iter()
                    .map(|x| x.to_string())
                    .collect::<Vec<String>>()
                    .join(" && ");
                write!(f, "({})", operands)
            }
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(mvar) => write!(f, "{}", mvar),
            Self::Group(expr) => write!(f, "{}", expr),
        }
    }
}

impl fmt::Display for MaybeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(name) => write!(f, "{}", name),
            Self::NegVar(name) => write!(f, "!{}", name),
        }
    }
}
