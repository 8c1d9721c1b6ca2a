//! Command token definitions
//!
//! This module defines all tokens that can appear in a command line.

use std::fmt;

/// Command token types
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // ========== Keywords ==========
    Create,
    Drop,
    Show,
    Tables,
    Describe,
    Insert,
    Into,
    Values,
    Select,
    From,
    Where,
    Update,
    Set,
    Delete,
    Info,
    Help,
    Exit,

    // Boolean Literals
    True,
    False,

    // ========== Literals ==========
    /// Integer literal
    IntegerLiteral(i64),
    /// String literal (quoted)
    StringLiteral(String),
    /// Identifier (table name, column name, type name)
    Identifier(String),

    // ========== Punctuation ==========
    /// (
    LParen,
    /// )
    RParen,
    /// ,
    Comma,
    /// :
    Colon,
    /// =
    Eq,

    /// End of input
    Eof,
}

impl Token {
    /// Look up a keyword by its (case-insensitive) spelling
    pub fn keyword(word: &str) -> Option<Token> {
        match word.to_ascii_lowercase().as_str() {
            "create" => Some(Token::Create),
            "drop" => Some(Token::Drop),
            "show" => Some(Token::Show),
            "tables" => Some(Token::Tables),
            "describe" => Some(Token::Describe),
            "insert" => Some(Token::Insert),
            "into" => Some(Token::Into),
            "values" => Some(Token::Values),
            "select" => Some(Token::Select),
            "from" => Some(Token::From),
            "where" => Some(Token::Where),
            "update" => Some(Token::Update),
            "set" => Some(Token::Set),
            "delete" => Some(Token::Delete),
            "info" => Some(Token::Info),
            "help" => Some(Token::Help),
            "exit" | "quit" => Some(Token::Exit),
            "true" => Some(Token::True),
            "false" => Some(Token::False),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Create => write!(f, "create"),
            Token::Drop => write!(f, "drop"),
            Token::Show => write!(f, "show"),
            Token::Tables => write!(f, "tables"),
            Token::Describe => write!(f, "describe"),
            Token::Insert => write!(f, "insert"),
            Token::Into => write!(f, "into"),
            Token::Values => write!(f, "values"),
            Token::Select => write!(f, "select"),
            Token::From => write!(f, "from"),
            Token::Where => write!(f, "where"),
            Token::Update => write!(f, "update"),
            Token::Set => write!(f, "set"),
            Token::Delete => write!(f, "delete"),
            Token::Info => write!(f, "info"),
            Token::Help => write!(f, "help"),
            Token::Exit => write!(f, "exit"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::IntegerLiteral(n) => write!(f, "{}", n),
            Token::StringLiteral(s) => write!(f, "\"{}\"", s),
            Token::Identifier(s) => write!(f, "{}", s),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Colon => write!(f, ":"),
            Token::Eq => write!(f, "="),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_is_case_insensitive() {
        assert_eq!(Token::keyword("SELECT"), Some(Token::Select));
        assert_eq!(Token::keyword("Where"), Some(Token::Where));
        assert_eq!(Token::keyword("quit"), Some(Token::Exit));
        assert_eq!(Token::keyword("users"), None);
    }
}
