pub mod ast;
pub mod expr;
pub mod lex;

pub use ast::Assignment;
pub use expr::{full_compile, CompileConfig, Predicate};
