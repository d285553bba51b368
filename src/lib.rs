//! A tiny integer language: `int` declarations, `+ - * /` arithmetic and `print`.
//!
//! There is no syntax tree. The [`Interpreter`] pulls tokens from the
//! [`Lexer`] one at a time and executes every statement as soon as it has
//! been recognised.
//!
//! ```
//! use picolang::{run, Limits};
//!
//! let mut out = Vec::new();
//! run("int x = 2 + 3 * 4; print(x);", Limits::default(), &mut out).unwrap();
//! assert_eq!(out, b"14\n");
//! ```

pub mod builtin;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod symbols;

use std::io::Write;

pub use config::Limits;
pub use error::{Error, SemanticError, SyntaxError};
pub use interpreter::Interpreter;
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use symbols::SymbolTable;

/// Executes `source`, writing `print` output to `out`, and returns the final variables.
pub fn run<W: Write>(source: &str, limits: Limits, out: W) -> Result<SymbolTable, Error> {
    let mut symbols = SymbolTable::with_capacity_limit(limits.max_variables);
    Interpreter::new(source, &mut symbols, limits, out)?.run()?;
    Ok(symbols)
}
