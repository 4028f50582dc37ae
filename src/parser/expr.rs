use std::{collections::BTreeSet, error::Error};

use super::ast::{parse, Assignment, Expr};
use super::lex::lex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileConfig {
    pub verbose: bool,
}

impl CompileConfig {
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

/// A compiled boolean expression, callable on a named assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    ast: Expr,
}

impl Predicate {
    pub fn call(&self, assignment: &Assignment) -> Result<bool, Box<dyn Error>> {
        self.ast.eval(assignment)
    }

    pub fn ast(&self) -> &Expr {
        &self.ast
    }
}

/// Returns the expression's variables in canonical (sorted) order together
/// with its predicate.
pub fn compile(ast: Expr, config: &CompileConfig) -> (Vec<char>, Predicate) {
    let mut names = BTreeSet::new();
    ast.collect_variables(&mut names);
    let vnames: Vec<char> = names.into_iter().collect();

    if config.verbose {
        info!("variables: {:?}", vnames);
        info!("compiled: {}", ast);
    }

    (vnames, Predicate { ast })
}

pub fn full_compile(s: &str, config: &CompileConfig) -> Result<(Vec<char>, Predicate), Box<dyn Error>> {
    let tokens = lex(s)?;
    debug!("{:?} lexed into {} tokens", s, tokens.len());

    let ast = parse(tokens)?;
    Ok(compile(ast, config))
}
