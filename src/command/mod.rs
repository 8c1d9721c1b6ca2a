//! Command grammar module
//!
//! This module parses the line-oriented command grammar into an AST:
//! - Lexer (tokens)
//! - Parser (commands, conditions, assignments, value lists)

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Assignment, Command, Condition};
pub use lexer::Lexer;
pub use parser::Parser;
pub use token::Token;
