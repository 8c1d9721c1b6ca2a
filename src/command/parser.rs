//! Command parser
//!
//! This module parses command tokens into an AST. It is purely syntactic:
//! condition and assignment columns come out as raw names, and literal
//! typing follows the token shape (quoted → str, bare digits → int,
//! true/false → bool). Schema-bound checks happen in the engine.

use super::ast::{Assignment, Command, Condition};
use super::lexer::Lexer;
use super::token::Token;
use crate::catalog::{Column, DataType};
use crate::error::{Error, Result};
use crate::storage::Value;

/// Command parser
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Create a new parser from a command line
    pub fn new(line: &str) -> Result<Self> {
        let mut lexer = Lexer::new(line);
        let tokens = lexer.tokenize()?;

        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Parse one full command; trailing input is an error
    pub fn parse(&mut self) -> Result<Command> {
        let command = self.parse_command()?;
        self.expect(&Token::Eof)?;
        Ok(command)
    }

    fn parse_command(&mut self) -> Result<Command> {
        match self.current() {
            Token::Create => self.parse_create(),
            Token::Show => self.parse_show(),
            Token::Describe => self.parse_one_table(Token::Describe, |table| Command::Describe {
                table,
            }),
            Token::Drop => self.parse_one_table(Token::Drop, |table| Command::Drop { table }),
            Token::Insert => self.parse_insert(),
            Token::Select => self.parse_select(),
            Token::Update => self.parse_update(),
            Token::Delete => self.parse_delete(),
            Token::Info => self.parse_one_table(Token::Info, |table| Command::Info { table }),
            Token::Help => {
                self.advance();
                Ok(Command::Help)
            }
            Token::Exit => {
                self.advance();
                Ok(Command::Exit)
            }
            other => Err(Error::UnexpectedToken {
                expected: "create, show, describe, drop, insert, select, update, delete, info, \
                           help, or exit"
                    .to_string(),
                found: format!("{}", other),
            }),
        }
    }

    // ========== Statements ==========

    fn parse_create(&mut self) -> Result<Command> {
        self.expect(&Token::Create)?;
        let table = self.expect_identifier("table name")?;

        let mut columns = Vec::new();
        while !self.check(&Token::Eof) {
            columns.push(self.parse_column_declaration()?);
        }

        if columns.is_empty() {
            return Err(Error::Parse(
                "create needs at least one <col:type> declaration".to_string(),
            ));
        }

        Ok(Command::Create { table, columns })
    }

    fn parse_column_declaration(&mut self) -> Result<Column> {
        let name = self.expect_identifier("column name")?;
        self.expect(&Token::Colon)?;
        let type_name = self.expect_identifier("type name")?;
        Ok(Column::new(name, DataType::parse(&type_name)?))
    }

    fn parse_show(&mut self) -> Result<Command> {
        self.expect(&Token::Show)?;
        self.expect(&Token::Tables)?;
        Ok(Command::ShowTables)
    }

    fn parse_one_table(
        &mut self,
        keyword: Token,
        build: impl FnOnce(String) -> Command,
    ) -> Result<Command> {
        self.expect(&keyword)?;
        let table = self.expect_identifier("table name")?;
        Ok(build(table))
    }

    fn parse_insert(&mut self) -> Result<Command> {
        self.expect(&Token::Insert)?;
        self.expect(&Token::Into)?;
        let table = self.expect_identifier("table name")?;
        self.expect(&Token::Values)?;
        let values = self.parse_values_list()?;
        Ok(Command::Insert { table, values })
    }

    fn parse_select(&mut self) -> Result<Command> {
        self.expect(&Token::Select)?;
        self.expect(&Token::From)?;
        let table = self.expect_identifier("table name")?;
        let condition = self.parse_optional_where()?;
        Ok(Command::Select { table, condition })
    }

    fn parse_update(&mut self) -> Result<Command> {
        self.expect(&Token::Update)?;
        let table = self.expect_identifier("table name")?;
        self.expect(&Token::Set)?;
        let assignments = self.parse_assignments()?;
        let condition = self.parse_optional_where()?;
        Ok(Command::Update {
            table,
            assignments,
            condition,
        })
    }

    fn parse_delete(&mut self) -> Result<Command> {
        self.expect(&Token::Delete)?;
        self.expect(&Token::From)?;
        let table = self.expect_identifier("table name")?;
        let condition = self.parse_optional_where()?;
        Ok(Command::Delete { table, condition })
    }

    // ========== Fragments ==========

    /// Parse a parenthesized, comma-separated value list; at least one value
    fn parse_values_list(&mut self) -> Result<Vec<Value>> {
        self.expect(&Token::LParen)?;

        if self.check(&Token::RParen) {
            return Err(Error::Parse("empty value list".to_string()));
        }

        let mut values = Vec::new();
        loop {
            values.push(self.parse_literal()?);

            if !self.check(&Token::Comma) {
                break;
            }
            self.advance(); // consume comma
        }

        self.expect(&Token::RParen)?;
        Ok(values)
    }

    /// Parse a comma-separated SET clause; at least one assignment
    fn parse_assignments(&mut self) -> Result<Vec<Assignment>> {
        let mut assignments = Vec::new();
        loop {
            let column = self.expect_identifier("column name")?;
            self.expect(&Token::Eq)?;
            let value = self.parse_literal()?;
            assignments.push(Assignment { column, value });

            if !self.check(&Token::Comma) {
                break;
            }
            self.advance(); // consume comma
        }

        Ok(assignments)
    }

    /// Parse `where <col> = <value>` if present; absence means "all rows"
    fn parse_optional_where(&mut self) -> Result<Option<Condition>> {
        if !self.check(&Token::Where) {
            return Ok(None);
        }
        self.advance();

        let column = self.expect_identifier("column name")?;
        self.expect(&Token::Eq)?;
        let value = self.parse_literal()?;
        Ok(Some(Condition { column, value }))
    }

    /// Type a literal token. A bare word is not a string: strings must be
    /// quoted, so the parser never guesses between identifier and text.
    fn parse_literal(&mut self) -> Result<Value> {
        let token = self.current().clone();
        let value = match token {
            Token::IntegerLiteral(n) => Value::Int(n),
            Token::StringLiteral(s) => Value::Str(s),
            Token::True => Value::Bool(true),
            Token::False => Value::Bool(false),
            Token::Identifier(word) => {
                return Err(Error::Parse(format!(
                    "string values must be quoted: {}",
                    word
                )));
            }
            other => {
                return Err(Error::UnexpectedToken {
                    expected: "a literal value".to_string(),
                    found: format!("{}", other),
                });
            }
        };
        self.advance();
        Ok(value)
    }

    // ========== Token helpers ==========

    fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
    }

    fn check(&self, token: &Token) -> bool {
        self.current() == token
    }

    fn expect(&mut self, token: &Token) -> Result<()> {
        if self.check(token) {
            self.advance();
            return Ok(());
        }
        Err(Error::UnexpectedToken {
            expected: format!("{}", token),
            found: format!("{}", self.current()),
        })
    }

    fn expect_identifier(&mut self, what: &str) -> Result<String> {
        match self.current().clone() {
            Token::Identifier(name) => {
                self.advance();
                Ok(name)
            }
            other => Err(Error::UnexpectedToken {
                expected: what.to_string(),
                found: format!("{}", other),
            }),
        }
    }
}
