//! Recognition of chord symbols inside free-form lyric text.
//!
//! A word is treated as a chord when, after dropping brackets, parentheses,
//! commas and full stops, it matches the following grammar exactly. Plain
//! words which happen to fit (`A`, `Am`, `Em`) are accepted too; there is no
//! context available here to tell them apart.
//!
//! ```text
//! Chord     : Root Accidental? Quality? Digit*
//!           ;
//!
//! Root      : 'A' | 'B' | 'C' | 'D' | 'E' | 'F' | 'G'
//!           ;
//!
//! Accidental: '#' | 'b'
//!           ;
//!
//! Quality   : 'm' | 'min' | 'M' | 'maj' | 'dim' | 'aug' | 'sus'
//!           ;
//! ```

use combine::error::ParseError;
use combine::parser::char::{digit, string};
use combine::{attempt, choice, eof, many, one_of, optional, Parser, Stream};

use crate::chord::{Chord, Note, Quality};
use crate::error::{Error, Result};
use crate::note::{Accidental, NoteClass};

/// Characters removed from a word before it is tested against the grammar.
pub const PUNCTUATION: &[char] = &['[', ']', '(', ')', ',', '.'];

/// Parses a root letter.
///
/// ```text
/// Root : [A-G]
///      ;
/// ```
fn note_class<Input>() -> impl Parser<Input, Output = NoteClass>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    one_of("ABCDEFG".chars())
        .map(|c| match NoteClass::from_char(c) {
            Some(class) => class,
            None => unreachable!(),
        })
        .expected("Root: [A-G]")
}

/// Parses a single accidental.
///
/// ```text
/// Accidental : '#' | 'b'
///            ;
/// ```
fn accidental<Input>() -> impl Parser<Input, Output = Accidental>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    one_of("#b".chars())
        .map(|c| match Accidental::from_char(c) {
            Some(a) => a,
            None => unreachable!(),
        })
        .expected("Accidental: [#b]")
}

/// Parses a root note plus at most one accidental.
fn note<Input>() -> impl Parser<Input, Output = Note>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (note_class(), optional(accidental()))
        .map(|(class, accidental)| Note::new(class, accidental))
}

/// Parses a chord quality.
///
/// The longer spellings are tried first so that `min` is not cut short at
/// `m`. Nothing which begins with `m` can be followed by `in` in a valid
/// chord, so this never rejects a symbol a backtracking matcher would accept.
fn quality<Input>() -> impl Parser<Input, Output = Quality>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    choice([
            attempt(string("min")), attempt(string("maj")),
            attempt(string("dim")), attempt(string("aug")),
            attempt(string("sus")), attempt(string("m")),
            attempt(string("M"))
        ])
        .map(|q| match Quality::from_spelling(q) {
            Some(quality) => quality,
            None => unreachable!(),
        })
        .expected("Quality: m | min | M | maj | dim | aug | sus")
}

/// Recognizes an entire chord symbol, which must span the whole input.
fn chord<Input>() -> impl Parser<Input, Output = Chord>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (note(), optional(quality()), many::<String, _, _>(digit()), eof())
        .map(|(root, quality, extension, _)| Chord { root, quality, extension })
}

/// Remove the punctuation which commonly wraps chords in lyric sheets.
///
/// Every occurrence is removed, not only those at the ends of the word.
pub fn strip_punctuation(word: &str) -> String {
    word.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Parse a chord symbol that has already been cleaned of punctuation.
pub fn parse_chord(symbol: &str) -> Result<Chord> {
    if symbol.is_empty() {
        return Err(Error::EmptyChord);
    }

    chord()
        .parse(symbol)
        .map(|(chord, _)| chord)
        .map_err(|_| Error::NotAChord(symbol.to_string()))
}

/// Decide whether a whitespace-free word from a lyric sheet is a chord.
///
/// ```
/// use chordshift::is_chord;
///
/// assert!(is_chord("F#m"));
/// assert!(is_chord("(Csus4)"));
/// assert!(!is_chord("C/G"));
/// assert!(!is_chord("Hello"));
/// ```
pub fn is_chord(word: &str) -> bool {
    let cleaned = strip_punctuation(word);
    let mut parser = chord();
    let matched = parser.parse(cleaned.as_str()).is_ok();
    matched
}
