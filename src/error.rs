//! Error taxonomy shared by the lexer, the symbol table and the evaluator.
//!
//! Every error is fatal: nothing here is ever retried or turned into a default
//! value. The binary prints the [`Display`] form and exits with status 1.

use std::fmt;
use std::io;

use crate::lexer::TokenKind;

/// A token of the wrong shape where the grammar required something specific.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// The current token does not fit the active production.
    UnexpectedToken {
        /// What the production wanted, e.g. `;` or `identifier after int`.
        expected: &'static str,
        found: TokenKind,
        /// Only kept for identifiers, numbers and unknown characters.
        lexeme: Option<String>,
    },
    /// An identifier or number ran past the configured maximum length.
    LexemeTooLong {
        kind: TokenKind,
        len: usize,
        limit: usize,
    },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnexpectedToken {
                expected,
                found,
                lexeme,
            } => {
                write!(f, "Expected {} but found {}", expected, found)?;
                if let Some(lexeme) = lexeme {
                    write!(f, "({})", lexeme)?;
                }
                Ok(())
            }
            SyntaxError::LexemeTooLong { kind, len, limit } => write!(
                f,
                "{} is {} characters long, the limit is {}",
                kind, len, limit
            ),
        }
    }
}

/// Errors that depend on runtime values rather than on token shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    UndefinedVariable { name: String },
    DivisionByZero,
    TooManyVariables { limit: usize },
    Overflow { op: char, lhs: i32, rhs: i32 },
    NumberOutOfRange { literal: String },
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticError::UndefinedVariable { name } => {
                write!(f, "Variable '{}' used before declaration", name)
            }
            SemanticError::DivisionByZero => write!(f, "Division by zero"),
            SemanticError::TooManyVariables { limit } => {
                write!(f, "Too many variables (limit is {})", limit)
            }
            SemanticError::Overflow { op, lhs, rhs } => {
                write!(f, "Integer overflow in {} {} {}", lhs, op, rhs)
            }
            SemanticError::NumberOutOfRange { literal } => {
                write!(f, "Number {} does not fit in an int", literal)
            }
        }
    }
}

/// Top-level error returned by [`crate::run`].
#[derive(Debug)]
pub enum Error {
    Syntax { line: usize, error: SyntaxError },
    Semantic { line: usize, error: SemanticError },
    /// Writing program output failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax { line, error } => write!(f, "Syntax Error (line {}): {}", line, error),
            Error::Semantic { line, error } => {
                write!(f, "Semantic Error (line {}): {}", line, error)
            }
            Error::Io(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
