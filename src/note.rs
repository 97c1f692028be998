//! Note names and the twelve-tone chromatic scale.
//!
//! All pitch arithmetic in this crate goes through `PitchClass`, whose `ALL`
//! table is the chromatic scale spelled with sharps. Flat spellings are only
//! ever accepted on input and are mapped onto their sharp equivalents with
//! `sharp_spelling`.
//!
//! ```
//! use chordshift::note::PitchClass;
//!
//! let a = PitchClass::from_name("A").unwrap();
//! assert_eq!(a.transpose(2).name(), "B");
//! assert_eq!(a.transpose(-10).name(), "B");
//! ```

use std::fmt;

/// A single note letter without accidentals.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoteClass {
    A, B, C, D, E, F, G
}

impl NoteClass {
    /// Construct a `NoteClass` from a char representation.
    pub fn from_char(input: char) -> Option<NoteClass> {
        use self::NoteClass::*;

        match input {
            'A' => Some(A),
            'B' => Some(B),
            'C' => Some(C),
            'D' => Some(D),
            'E' => Some(E),
            'F' => Some(F),
            'G' => Some(G),
            _   => None
        }
    }

    /// The uppercase letter for this `NoteClass`.
    pub fn to_char(&self) -> char {
        use self::NoteClass::*;

        match *self {
            A => 'A',
            B => 'B',
            C => 'C',
            D => 'D',
            E => 'E',
            F => 'F',
            G => 'G'
        }
    }
}

/// A single accidental following a note letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Accidental {
    Sharp,
    Flat
}

impl Accidental {
    /// Construct an `Accidental` from its ASCII spelling, `#` or `b`.
    pub fn from_char(input: char) -> Option<Accidental> {
        match input {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _   => None
        }
    }

    /// The ASCII spelling of this `Accidental`.
    pub fn to_char(&self) -> char {
        match *self {
            Accidental::Sharp => '#',
            Accidental::Flat  => 'b',
        }
    }
}

/// The number of pitch classes in the chromatic scale.
pub const PITCH_CLASS_COUNT: usize = 12;

/// Flat spellings accepted on input, with the sharp spelling each one is
/// normalized to.
pub const FLAT_TO_SHARP: [(&str, &str); 5] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];

/// Look up the sharp spelling of a flat-spelled root.
///
/// Returns `None` for anything not in `FLAT_TO_SHARP`, including `Cb` and
/// `Fb`, leaving it to the caller to decide on a fallback.
pub fn sharp_spelling(flat: &str) -> Option<&'static str> {
    FLAT_TO_SHARP
        .iter()
        .find(|&&(from, _)| from == flat)
        .map(|&(_, to)| to)
}

/// One of the twelve pitch classes, independent of octave.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PitchClass {
    C, CSharp, D, DSharp, E, F, FSharp, G, GSharp, A, ASharp, B
}

impl PitchClass {
    /// The chromatic scale in ascending order, starting from `C`.
    pub const ALL: [PitchClass; PITCH_CLASS_COUNT] = {
        use self::PitchClass::*;
        [C, CSharp, D, DSharp, E, F, FSharp, G, GSharp, A, ASharp, B]
    };

    /// Position of this pitch class within `ALL`.
    pub fn index(&self) -> usize {
        use self::PitchClass::*;

        match *self {
            C      => 0,
            CSharp => 1,
            D      => 2,
            DSharp => 3,
            E      => 4,
            F      => 5,
            FSharp => 6,
            G      => 7,
            GSharp => 8,
            A      => 9,
            ASharp => 10,
            B      => 11,
        }
    }

    /// Returns the `PitchClass` at a position in `ALL`, wrapping around the
    /// octave.
    pub fn from_index(index: usize) -> PitchClass {
        PitchClass::ALL[index % PITCH_CLASS_COUNT]
    }

    /// The sharp spelling of this pitch class.
    pub fn name(&self) -> &'static str {
        use self::PitchClass::*;

        match *self {
            C      => "C",
            CSharp => "C#",
            D      => "D",
            DSharp => "D#",
            E      => "E",
            F      => "F",
            FSharp => "F#",
            G      => "G",
            GSharp => "G#",
            A      => "A",
            ASharp => "A#",
            B      => "B",
        }
    }

    /// Find the pitch class with the given sharp spelling.
    ///
    /// Only the spellings in `ALL` are recognized; flat spellings should be
    /// passed through `sharp_spelling` first.
    pub fn from_name(name: &str) -> Option<PitchClass> {
        PitchClass::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// Shift this pitch class by a signed number of semitones.
    ///
    /// Any delta is accepted; the result is always reduced into the octave so
    /// `p.transpose(n) == p.transpose(n + 12)`.
    pub fn transpose(&self, semitones: i32) -> PitchClass {
        let shifted = (self.index() as i64 + semitones as i64).rem_euclid(PITCH_CLASS_COUNT as i64);
        PitchClass::from_index(shifted as usize)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
