use std::fmt::{self, Display};

use logos::Logos;

use crate::config::Limits;
use crate::error::{Error, SyntaxError};

#[derive(Logos, Debug, PartialEq, Eq)]
enum LogosToken {
    //keywords
    #[token("int")]
    Int,

    #[token("print")]
    Print,

    #[regex(r"[A-Za-z][A-Za-z0-9]*")]
    Identifier,

    #[regex(r"[0-9]+")]
    Number,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("=")]
    Assign,

    #[token(";")]
    Semicolon,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // first byte of any character nothing else claims
    #[regex(r".", priority = 0)]
    Unknown,

    #[error]
    #[regex(r"[ \t\n\r\x0B\x0C]+", logos::skip)]
    Error,
}

/// The closed set of token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Int,
    Print,
    Identifier,
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    Semicolon,
    LParen,
    RParen,
    Eof,
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Int => "TOKEN_INT",
            TokenKind::Print => "TOKEN_PRINT",
            TokenKind::Identifier => "TOKEN_IDENTIFIER",
            TokenKind::Number => "TOKEN_NUMBER",
            TokenKind::Plus => "TOKEN_PLUS",
            TokenKind::Minus => "TOKEN_MINUS",
            TokenKind::Star => "TOKEN_MUL",
            TokenKind::Slash => "TOKEN_DIV",
            TokenKind::Assign => "TOKEN_ASSIGN",
            TokenKind::Semicolon => "TOKEN_SEMICOLON",
            TokenKind::LParen => "TOKEN_LPAREN",
            TokenKind::RParen => "TOKEN_RPAREN",
            TokenKind::Eof => "TOKEN_EOF",
            TokenKind::Unknown => "TOKEN_UNKNOWN",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Int,
    Print,
    Identifier(&'a str),
    Number(&'a str),
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    Semicolon,
    LParen,
    RParen,
    Eof,
    Unknown(&'a str),
}

impl<'a> Token<'a> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Int => TokenKind::Int,
            Token::Print => TokenKind::Print,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Number(_) => TokenKind::Number,
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::Star => TokenKind::Star,
            Token::Slash => TokenKind::Slash,
            Token::Assign => TokenKind::Assign,
            Token::Semicolon => TokenKind::Semicolon,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::Eof => TokenKind::Eof,
            Token::Unknown(_) => TokenKind::Unknown,
        }
    }

    /// The matched lexeme, for the kinds that carry one.
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            Token::Identifier(s) | Token::Number(s) | Token::Unknown(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => write!(f, "{}({})", self.kind(), text),
            None => write!(f, "{}", self.kind()),
        }
    }
}

/// Pulls tokens out of the source one at a time.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    max_lexeme_len: usize,
    line: usize,
    scanned: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str, max_lexeme_len: usize) -> Self {
        Self {
            inner: LogosToken::lexer(text),
            max_lexeme_len,
            line: 1,
            scanned: 0,
        }
    }

    /// 1-based line of the most recently returned token.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Classifies the next lexeme. Keeps returning [`Token::Eof`] once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token<'a>, Error> {
        let raw = match self.inner.next() {
            Some(raw) => raw,
            None => {
                self.skip_lines_to(self.inner.source().len());
                return Ok(Token::Eof);
            }
        };
        self.skip_lines_to(self.inner.span().start);

        let token = match raw {
            LogosToken::Int => Token::Int,
            LogosToken::Print => Token::Print,
            LogosToken::Identifier => Token::Identifier(self.inner.slice()),
            LogosToken::Number => Token::Number(self.inner.slice()),
            LogosToken::Plus => Token::Plus,
            LogosToken::Minus => Token::Minus,
            LogosToken::Star => Token::Star,
            LogosToken::Slash => Token::Slash,
            LogosToken::Assign => Token::Assign,
            LogosToken::Semicolon => Token::Semicolon,
            LogosToken::LParen => Token::LParen,
            LogosToken::RParen => Token::RParen,
            LogosToken::Unknown | LogosToken::Error => Token::Unknown(self.whole_char()),
        };

        if let Token::Identifier(text) | Token::Number(text) = token {
            let len = text.chars().count();
            if len > self.max_lexeme_len {
                return Err(Error::Syntax {
                    line: self.line,
                    error: SyntaxError::LexemeTooLong {
                        kind: token.kind(),
                        len,
                        limit: self.max_lexeme_len,
                    },
                });
            }
        }

        Ok(token)
    }

    /// The unknown token matched a single byte; widen it to the full character.
    fn whole_char(&mut self) -> &'a str {
        let source = self.inner.source();
        let start = self.inner.span().start;
        let width = source[start..].chars().next().map_or(1, char::len_utf8);
        self.inner.bump(width.saturating_sub(self.inner.span().len()));
        &source[start..start + width]
    }

    fn skip_lines_to(&mut self, offset: usize) {
        let skipped = &self.inner.source()[self.scanned..offset];
        self.line += skipped.bytes().filter(|&b| b == b'\n').count();
        self.scanned = offset;
    }
}

/// Lexes the whole source, end-marker included.
pub fn tokenize(text: &str, limits: Limits) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(text, limits.max_lexeme_len);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        tokens.push(token);
        if token == Token::Eof {
            return Ok(tokens);
        }
    }
}
