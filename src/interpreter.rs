use std::io::Write;

use crate::builtin::BinOp;
use crate::config::Limits;
use crate::error::{Error, SemanticError, SyntaxError};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::symbols::SymbolTable;

/// Recursive-descent parser that executes each statement as soon as it is recognised.
///
/// ```text
/// Program     := Statement* EOF
/// Statement   := Declaration | PrintStmt
/// Declaration := "int" Identifier "=" Expression ";"
/// PrintStmt   := "print" "(" Identifier ")" ";"
/// Expression  := Term (("+" | "-") Term)*
/// Term        := Factor (("*" | "/") Factor)*
/// Factor      := Number | Identifier
/// ```
pub struct Interpreter<'a, 's, W: Write> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    symbols: &'s mut SymbolTable,
    out: W,
}

impl<'a, 's, W: Write> Interpreter<'a, 's, W> {
    /// Loads the first token, so this can already fail on an oversized lexeme.
    pub fn new(
        source: &'a str,
        symbols: &'s mut SymbolTable,
        limits: Limits,
        out: W,
    ) -> Result<Self, Error> {
        let mut lexer = Lexer::new(source, limits.max_lexeme_len);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            symbols,
            out,
        })
    }

    /// Runs statements until the end of input.
    pub fn run(&mut self) -> Result<(), Error> {
        while self.current != Token::Eof {
            self.statement()?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn statement(&mut self) -> Result<(), Error> {
        match self.current {
            Token::Int => self.declaration(),
            Token::Print => self.print_statement(),
            _ => Err(self.unexpected("'int' or 'print' statement")),
        }
    }

    fn declaration(&mut self) -> Result<(), Error> {
        let line = self.lexer.line();
        self.expect(TokenKind::Int, "int")?;
        let name = self.identifier("identifier after int")?;
        self.expect(TokenKind::Assign, "=")?;
        let value = self.expression()?;
        self.expect(TokenKind::Semicolon, ";")?;

        self.symbols
            .set(name, value)
            .map_err(|error| Error::Semantic { line, error })
    }

    fn print_statement(&mut self) -> Result<(), Error> {
        let line = self.lexer.line();
        self.expect(TokenKind::Print, "print")?;
        self.expect(TokenKind::LParen, "(")?;
        let name = self.identifier("identifier inside print()")?;
        self.expect(TokenKind::RParen, ")")?;
        self.expect(TokenKind::Semicolon, ";")?;

        let value = self
            .symbols
            .get(name)
            .map_err(|error| Error::Semantic { line, error })?;
        writeln!(self.out, "{}", value)?;
        Ok(())
    }

    fn expression(&mut self) -> Result<i32, Error> {
        let mut left = self.term()?;
        while let Some(op) = BinOp::additive(&self.current) {
            self.advance()?;
            let right = self.term()?;
            left = op.apply(left, right).map_err(|e| self.semantic(e))?;
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<i32, Error> {
        let mut left = self.factor()?;
        while let Some(op) = BinOp::multiplicative(&self.current) {
            self.advance()?;
            let right = self.factor()?;
            left = op.apply(left, right).map_err(|e| self.semantic(e))?;
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<i32, Error> {
        let value = match self.current {
            Token::Number(literal) => literal.parse::<i32>().map_err(|_| {
                self.semantic(SemanticError::NumberOutOfRange {
                    literal: literal.to_string(),
                })
            })?,
            Token::Identifier(name) => self.symbols.get(name).map_err(|e| self.semantic(e))?,
            _ => return Err(self.unexpected("number or identifier in expression")),
        };
        self.advance()?;
        Ok(value)
    }

    fn advance(&mut self) -> Result<(), Error> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Consumes the current token if it has the given kind.
    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), Error> {
        if self.current.kind() != kind {
            return Err(self.unexpected(expected));
        }
        self.advance()
    }

    fn identifier(&mut self, expected: &'static str) -> Result<&'a str, Error> {
        match self.current {
            Token::Identifier(name) => {
                self.advance()?;
                Ok(name)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn unexpected(&self, expected: &'static str) -> Error {
        Error::Syntax {
            line: self.lexer.line(),
            error: SyntaxError::UnexpectedToken {
                expected,
                found: self.current.kind(),
                lexeme: self.current.text().map(str::to_string),
            },
        }
    }

    fn semantic(&self, error: SemanticError) -> Error {
        Error::Semantic {
            line: self.lexer.line(),
            error,
        }
    }
}
