//! Build an `IntList` from integer-list text

use intlist_core::{IntList, ListError, SourceMap};
use log::debug;

use crate::{Lexer, Token};

/// Parse `input` into a list, reporting errors against `<input>`
///
/// # Errors
///
/// Returns `ListError` for unexpected characters, missing separators and
/// literals outside the `i32` range
pub fn parse_list(input: &str) -> Result<IntList, ListError> {
    parse_list_with_filename(input, "<input>")
}

/// Parse `input` into a list, reporting errors against `filename`
///
/// Values keep the order they appear in. Whitespace, commas and newlines
/// all separate values; two literals must not touch.
///
/// # Errors
///
/// Returns `ListError` for unexpected characters, missing separators and
/// literals outside the `i32` range
pub fn parse_list_with_filename(input: &str, filename: &str) -> Result<IntList, ListError> {
    let source_map = SourceMap::new(input);
    let tokens = Lexer::new(input).tokenize();
    debug!("lexed {} tokens from {filename}", tokens.len());

    let mut values = Vec::new();
    let mut previous_end = None;

    for token in &tokens {
        match token.token {
            Token::Integer => {
                if previous_end == Some(token.span.start) {
                    return Err(ListError::syntax(
                        format!("Missing separator before {}", token.text),
                        token.span,
                        &source_map,
                        filename,
                    ));
                }
                let value = token.text.parse::<i32>().map_err(|_| {
                    ListError::integer_range(token.text.clone(), token.span, &source_map, filename)
                })?;
                values.push(value);
                previous_end = Some(token.span.end);
            }
            Token::Comma | Token::Newline => previous_end = None,
            Token::Eof => break,
            Token::Error | Token::Comment | Token::Whitespace => {
                return Err(ListError::syntax(
                    format!("Unexpected character: {}", token.text),
                    token.span,
                    &source_map,
                    filename,
                ));
            }
        }
    }

    debug!("read {} values from {filename}", values.len());
    Ok(values.into_iter().collect())
}
