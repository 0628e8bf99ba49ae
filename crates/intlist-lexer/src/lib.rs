//! Lexical analysis for integer-list text
//!
//! Turns input such as `10, 20 30` into tokens with spans using logos.
//! The [`reader`] module builds an `IntList` from those tokens.

use intlist_core::Span;
use logos::Logos;

pub mod reader;

pub use reader::{parse_list, parse_list_with_filename};

/// Integer-list tokens
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Decimal integer literal, optionally negative
    #[regex(r"-?[0-9]+")]
    Integer,

    #[token(",")]
    Comma,

    #[token("\n")]
    Newline,

    /// Comment running to end of line (ignored)
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    /// Whitespace (ignored)
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Whitespace,

    /// End of input
    Eof,

    /// Lexer error
    Error,
}

impl Token {
    #[must_use]
    pub const fn is_separator(self) -> bool {
        matches!(self, Self::Comma | Self::Newline)
    }
}

/// Token with source location information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub text: String,
}

/// Lexer that produces tokens with spans
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
        }
    }

    /// Get the next token with span information
    pub fn next_token(&mut self) -> SpannedToken {
        match self.lexer.next() {
            Some(result) => {
                let span = self.lexer.span();
                SpannedToken {
                    token: result.unwrap_or(Token::Error),
                    span: Span::new(span.start, span.end),
                    text: self.input[span].to_string(),
                }
            }
            None => SpannedToken {
                token: Token::Eof,
                span: Span::new(self.input.len(), self.input.len()),
                text: String::new(),
            },
        }
    }

    /// Tokenize the entire input. The last token is always `Eof`.
    pub fn tokenize(&mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
