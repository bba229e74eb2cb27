//! Word splitting for the interactive task shell.
//!
//! Lines are split on unquoted whitespace. Single quotes preserve their
//! contents verbatim; double quotes preserve whitespace and honour `\"` and
//! `\\` escapes. Outside quotes a backslash escapes the next character.

use thiserror::Error;

/// Errors returned while splitting a command line.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SplitError {
    /// A quote was opened but never closed.
    #[error("unterminated {0} quote")]
    UnterminatedQuote(char),
    /// The line ended with a lone backslash.
    #[error("trailing backslash")]
    TrailingBackslash,
}

#[derive(Clone, Copy)]
enum Mode {
    Bare,
    Single,
    Double,
}

/// Splits a command line into words.
///
/// # Errors
///
/// Returns [`SplitError`] when a quote is left open or the line ends in an
/// unescaped backslash.
pub fn split_words(line: &str) -> Result<Vec<String>, SplitError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut mode = Mode::Bare;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match (mode, ch) {
            (Mode::Bare, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (Mode::Bare, '\'') => {
                mode = Mode::Single;
                in_word = true;
            }
            (Mode::Bare, '"') => {
                mode = Mode::Double;
                in_word = true;
            }
            (Mode::Bare, '\\') => {
                current.push(chars.next().ok_or(SplitError::TrailingBackslash)?);
                in_word = true;
            }
            (Mode::Single, '\'') | (Mode::Double, '"') => mode = Mode::Bare,
            (Mode::Double, '\\') => match chars.next() {
                Some(escaped @ ('"' | '\\')) => current.push(escaped),
                Some(other) => {
                    current.push('\\');
                    current.push(other);
                }
                None => return Err(SplitError::TrailingBackslash),
            },
            (_, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    match mode {
        Mode::Single => return Err(SplitError::UnterminatedQuote('\'')),
        Mode::Double => return Err(SplitError::UnterminatedQuote('"')),
        Mode::Bare => {}
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
