//! Command lexer (tokenizer)
//!
//! This module converts a command line into a stream of tokens.

use super::token::Token;
use crate::error::{Error, Result};

/// Command lexer
pub struct Lexer {
    /// Input characters
    input: Vec<char>,
    /// Current position in input
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given input
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            if token == Token::Eof {
                tokens.push(token);
                break;
            }
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        if self.is_at_end() {
            return Ok(Token::Eof);
        }

        let ch = self.current_char();

        match ch {
            '(' => {
                self.advance();
                return Ok(Token::LParen);
            }
            ')' => {
                self.advance();
                return Ok(Token::RParen);
            }
            ',' => {
                self.advance();
                return Ok(Token::Comma);
            }
            ':' => {
                self.advance();
                return Ok(Token::Colon);
            }
            '=' => {
                self.advance();
                return Ok(Token::Eq);
            }
            '-' => {
                self.advance();
                if !self.is_at_end() && self.current_char().is_ascii_digit() {
                    return match self.read_number()? {
                        Token::IntegerLiteral(n) => Ok(Token::IntegerLiteral(-n)),
                        other => Ok(other),
                    };
                }
                return Err(Error::UnexpectedCharacter('-', self.position));
            }
            '"' | '\'' => {
                return self.read_string(ch);
            }
            _ => {}
        }

        // Numbers
        if ch.is_ascii_digit() {
            return self.read_number();
        }

        // Identifiers and keywords
        if ch.is_alphabetic() || ch == '_' {
            return Ok(self.read_identifier());
        }

        Err(Error::UnexpectedCharacter(ch, self.position))
    }

    /// Check if we've reached the end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get the current character
    fn current_char(&self) -> char {
        self.input[self.position]
    }

    /// Move to the next character
    fn advance(&mut self) {
        self.position += 1;
    }

    /// Skip whitespace characters
    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    /// Read a quoted string literal; `quote` is the opening delimiter
    fn read_string(&mut self, quote: char) -> Result<Token> {
        let start = self.position;
        self.advance(); // consume opening quote

        let mut value = String::new();
        while !self.is_at_end() {
            let ch = self.current_char();
            if ch == quote {
                self.advance(); // consume closing quote
                return Ok(Token::StringLiteral(value));
            }
            value.push(ch);
            self.advance();
        }

        Err(Error::UnterminatedString(start))
    }

    /// Read a base-10 integer literal
    fn read_number(&mut self) -> Result<Token> {
        let start = self.position;
        let mut text = String::new();

        while !self.is_at_end() && self.current_char().is_ascii_digit() {
            text.push(self.current_char());
            self.advance();
        }

        // A digit run glued to letters is not a number or an identifier
        if !self.is_at_end() && (self.current_char().is_alphabetic() || self.current_char() == '_')
        {
            return Err(Error::InvalidNumber(start));
        }

        text.parse::<i64>()
            .map(Token::IntegerLiteral)
            .map_err(|_| Error::InvalidNumber(start))
    }

    /// Read an identifier or keyword
    fn read_identifier(&mut self) -> Token {
        let mut text = String::new();

        while !self.is_at_end()
            && (self.current_char().is_alphanumeric() || self.current_char() == '_')
        {
            text.push(self.current_char());
            self.advance();
        }

        Token::keyword(&text).unwrap_or(Token::Identifier(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize().unwrap()
    }

    #[test]
    fn test_tokenize_insert() {
        let tokens = lex(r#"insert into users values ("Sergei", 28, true)"#);
        assert_eq!(
            tokens,
            vec![
                Token::Insert,
                Token::Into,
                Token::Identifier("users".to_string()),
                Token::Values,
                Token::LParen,
                Token::StringLiteral("Sergei".to_string()),
                Token::Comma,
                Token::IntegerLiteral(28),
                Token::Comma,
                Token::True,
                Token::RParen,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_tokenize_column_declaration() {
        let tokens = lex("create users name:str age:int");
        assert_eq!(tokens[2], Token::Identifier("name".to_string()));
        assert_eq!(tokens[3], Token::Colon);
        assert_eq!(tokens[4], Token::Identifier("str".to_string()));
    }

    #[test]
    fn test_negative_integer() {
        let tokens = lex("-42");
        assert_eq!(tokens[0], Token::IntegerLiteral(-42));
    }

    #[test]
    fn test_single_quoted_string() {
        let tokens = lex("'hello world'");
        assert_eq!(tokens[0], Token::StringLiteral("hello world".to_string()));
    }

    #[test]
    fn test_unterminated_string() {
        let result = Lexer::new(r#""oops"#).tokenize();
        assert!(matches!(result, Err(Error::UnterminatedString(0))));
    }

    #[test]
    fn test_unexpected_character() {
        let result = Lexer::new("select @").tokenize();
        assert!(matches!(result, Err(Error::UnexpectedCharacter('@', _))));
    }
}
