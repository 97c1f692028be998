//! Transposition of whole lyric sheets.
//!
//! Text is split into words and whitespace with `token::tokens`. Every word
//! which `is_chord` accepts is transposed with `transpose_chord` and marked
//! up; everything else, whitespace included, is copied to the output as-is.

use tracing::debug;

use crate::chord::transpose_chord;
use crate::markup::Markup;
use crate::note::PITCH_CLASS_COUNT;
use crate::parser::is_chord;
use crate::token::{tokens, Token};

/// A requested shift, plus the capo position the player will use.
///
/// A capo raises every string mechanically, so the chords written on the
/// sheet have to be lowered by the same amount to sound at the requested
/// pitch.
///
/// ```
/// use chordshift::Transposition;
///
/// let t = Transposition::new(2).with_capo(3);
/// assert_eq!(t.effective(), -1);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Transposition {
    /// Semitones the music should move by
    pub semitones: i32,

    /// Fret the capo is placed on, if any
    pub capo: Option<i32>
}

impl Transposition {
    /// Construct a `Transposition` with no capo.
    pub fn new(semitones: i32) -> Transposition {
        Transposition { semitones, capo: None }
    }

    /// Return this `Transposition` with the capo placed on `capo`.
    pub fn with_capo(mut self, capo: i32) -> Transposition {
        self.capo = Some(capo);
        self
    }

    /// The shift to apply to the written chords.
    ///
    /// When the difference does not fit in an `i32` it is reduced into the
    /// octave, which names the same pitch classes.
    pub fn effective(&self) -> i32 {
        let capo = self.capo.unwrap_or(0);

        match self.semitones.checked_sub(capo) {
            Some(shift) => shift,
            None => (self.semitones as i64 - capo as i64).rem_euclid(PITCH_CLASS_COUNT as i64) as i32,
        }
    }

    /// Transpose `text` by the effective shift, with HTML chord markup.
    pub fn apply(&self, text: &str) -> String {
        transpose_text(text, self.effective())
    }
}

/// Transpose every chord in `text`, wrapping each one in a chord span.
///
/// ```
/// use chordshift::transpose_text;
///
/// assert_eq!(
///     transpose_text("Am F", 2),
///     r#"<span class="chord">Bm</span> <span class="chord">G</span>"#,
/// );
/// ```
pub fn transpose_text(text: &str, semitones: i32) -> String {
    transpose_text_with(text, semitones, Markup::Html)
}

/// Transpose every chord in `text`, rendering chords with `markup`.
pub fn transpose_text_with(text: &str, semitones: i32, markup: Markup) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    let mut count = 0usize;

    for token in tokens(text) {
        match token {
            Token::Word(word) if is_chord(word) => {
                markup.write_chord(&mut out, &transpose_chord(word, semitones));
                count += 1;
            }

            token => out.push_str(token.as_str()),
        }
    }

    debug!(semitones, chords = count, bytes = text.len(), "transposed text");
    out
}

/// Iterate over the words of `text` that are recognized as chords, in order.
///
/// Words are yielded exactly as they appear, punctuation included.
pub fn chords(text: &str) -> impl Iterator<Item = &str> {
    tokens(text).filter_map(|token| match token {
        Token::Word(word) if is_chord(word) => Some(word),
        _ => None,
    })
}
