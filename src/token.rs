//! Splitting lyric text into words and the whitespace between them.
//!
//! Runs of whitespace are kept as tokens of their own so that joining the
//! tokens back together, with nothing in between, reproduces the input
//! exactly.
//!
//! ```
//! use chordshift::token::{tokens, Token};
//!
//! let all: Vec<_> = tokens("Am  F\n").collect();
//! assert_eq!(all, vec![
//!     Token::Word("Am"),
//!     Token::Whitespace("  "),
//!     Token::Word("F"),
//!     Token::Whitespace("\n"),
//! ]);
//! ```

/// Whether `c` separates words.
///
/// This is the ECMAScript whitespace set: Unicode `White_Space` plus the
/// byte order mark `U+FEFF`, minus next line `U+0085`.
pub fn is_separator(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// A maximal run of either whitespace or non-whitespace characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Whitespace(&'a str),
    Word(&'a str)
}

impl<'a> Token<'a> {
    /// The slice of the input this token covers.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Token::Whitespace(s) | Token::Word(s) => s,
        }
    }
}

/// Iterator over the tokens of a string. See `tokens`.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    rest: &'a str
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let first = self.rest.chars().next()?;
        let space = is_separator(first);

        let end = self.rest
            .char_indices()
            .find(|&(_, c)| is_separator(c) != space)
            .map_or(self.rest.len(), |(i, _)| i);

        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;

        Some(if space { Token::Whitespace(run) } else { Token::Word(run) })
    }
}

/// Split `text` into alternating runs of whitespace and non-whitespace.
///
/// No empty tokens are produced, so an empty input yields nothing.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}
