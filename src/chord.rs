//! Chord symbols and single-chord transposition.
//!
//! Transposition works on the text of a chord symbol rather than a parsed
//! value: the root is split off the front, moved around the chromatic scale,
//! and the remaining suffix is reattached exactly as written.
//!
//! ```
//! use chordshift::transpose_chord;
//!
//! assert_eq!(transpose_chord("F#m7", 1), "Gm7");
//! assert_eq!(transpose_chord("Bbsus4", 2), "Csus4");
//! assert_eq!(transpose_chord("Hz", 3), "Hz");
//! ```
//!
//! A typed `Chord` is also available for symbols that have already been
//! cleaned of surrounding punctuation.
//!
//! ```
//! use chordshift::chord::{Chord, Quality};
//!
//! let chord: Chord = "Ebmaj7".parse().unwrap();
//! assert_eq!(chord.quality, Some(Quality::Maj));
//! assert_eq!(chord.extension, "7");
//! assert_eq!(chord.to_string(), "Ebmaj7");
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::Error;
use crate::note::{sharp_spelling, Accidental, NoteClass, PitchClass};
use crate::parser;

/// A chord symbol split into its root spelling and everything after it.
///
/// Both halves borrow from the original symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChordToken<'a> {
    /// The root as typed, e.g. `F#` or `Db`
    pub root: &'a str,

    /// The remainder of the symbol, e.g. `m7`
    pub suffix: &'a str
}

impl<'a> ChordToken<'a> {
    /// Split a symbol after its root.
    ///
    /// The root is the first two characters when the second one is `#` or
    /// `b`, otherwise just the first character. No validation is done here;
    /// `"[Am]"` splits into a root of `[` and a suffix of `Am]`.
    pub fn split(symbol: &'a str) -> ChordToken<'a> {
        let mut chars = symbol.char_indices().skip(1);

        let at = match chars.next() {
            Some((i, c)) if c == '#' || c == 'b' => i + c.len_utf8(),
            Some((i, _)) => i,
            None => symbol.len(),
        };

        let (root, suffix) = symbol.split_at(at);
        ChordToken { root, suffix }
    }

    /// Resolve the root to a pitch class, mapping flat spellings to sharps.
    ///
    /// Returns `None` when the root is not one of the recognized spellings.
    pub fn pitch_class(&self) -> Option<PitchClass> {
        let root = if self.root.contains('b') {
            sharp_spelling(self.root).unwrap_or(self.root)
        } else {
            self.root
        };

        PitchClass::from_name(root)
    }
}

/// Transpose a single chord symbol by a signed number of semitones.
///
/// The root of the result is always spelled with a sharp (or natural), and
/// the suffix is copied through unchanged. A symbol whose root is not a known
/// pitch class is returned as-is.
pub fn transpose_chord(symbol: &str, semitones: i32) -> String {
    let token = ChordToken::split(symbol);

    match token.pitch_class() {
        Some(pitch) => {
            let mut out = String::with_capacity(symbol.len() + 1);
            out.push_str(pitch.transpose(semitones).name());
            out.push_str(token.suffix);
            out
        }

        None => {
            trace!(symbol, root = token.root, "unrecognized root, leaving chord unchanged");
            symbol.to_string()
        }
    }
}

/// The chord qualities recognized after a root.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Quality {
    /// `m`
    Minor,
    /// `min`
    Min,
    /// `M`
    Major,
    /// `maj`
    Maj,
    /// `dim`
    Dim,
    /// `aug`
    Aug,
    /// `sus`
    Sus
}

impl Quality {
    /// Construct a `Quality` from its exact spelling.
    pub fn from_spelling(input: &str) -> Option<Quality> {
        use self::Quality::*;

        match input {
            "m"   => Some(Minor),
            "min" => Some(Min),
            "M"   => Some(Major),
            "maj" => Some(Maj),
            "dim" => Some(Dim),
            "aug" => Some(Aug),
            "sus" => Some(Sus),
            _     => None
        }
    }

    /// The spelling this quality was parsed from.
    pub fn as_str(&self) -> &'static str {
        use self::Quality::*;

        match *self {
            Minor => "m",
            Min   => "min",
            Major => "M",
            Maj   => "maj",
            Dim   => "dim",
            Aug   => "aug",
            Sus   => "sus",
        }
    }
}

/// A root letter with an optional accidental, as written.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Note {
    /// The base letter
    pub class: NoteClass,

    /// A single `#` or `b`, if present
    pub accidental: Option<Accidental>
}

impl Note {
    /// Construct and return a new `Note`.
    pub fn new(class: NoteClass, accidental: Option<Accidental>) -> Note {
        Note { class, accidental }
    }

    /// The pitch class this note names, if it has a spelling in the chromatic
    /// scale or the flat table.
    ///
    /// `E#`, `B#`, `Cb` and `Fb` have neither and return `None`.
    pub fn pitch_class(&self) -> Option<PitchClass> {
        let root = self.to_string();
        ChordToken { root: &root, suffix: "" }.pitch_class()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class.to_char())?;
        if let Some(a) = self.accidental {
            write!(f, "{}", a.to_char())?;
        }
        Ok(())
    }
}

/// A chord symbol that matches the chord grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chord {
    /// The root note
    pub root: Note,

    /// The quality directly after the root, if any
    pub quality: Option<Quality>,

    /// Trailing digits, possibly empty
    pub extension: String
}

impl Chord {
    /// Construct and return a new `Chord`.
    pub fn new(root: Note, quality: Option<Quality>, extension: &str) -> Chord {
        Chord { root, quality, extension: extension.to_string() }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        if let Some(q) = self.quality {
            f.write_str(q.as_str())?;
        }
        f.write_str(&self.extension)
    }
}

impl FromStr for Chord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Chord, Error> {
        parser::parse_chord(s)
    }
}
