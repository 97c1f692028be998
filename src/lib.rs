//! # chordshift
//!
//! Finds chord symbols in song lyric sheets and transposes them.
//!
//! The input is free-form text, typically chords written on lines above the
//! lyrics. Words that look like chord symbols are moved by a number of
//! semitones and marked up; every other word and all whitespace is left
//! exactly as it was.
//!
//! ```
//! use chordshift::transpose_text;
//!
//! let sheet = "Am F\nG  C";
//! let out = transpose_text(sheet, 2);
//!
//! assert_eq!(out, concat!(
//!     r#"<span class="chord">Bm</span> <span class="chord">G</span>"#, "\n",
//!     r#"<span class="chord">A</span>  <span class="chord">D</span>"#,
//! ));
//! ```
//!
//! The `note` module holds the chromatic scale, `parser` decides what counts
//! as a chord, `chord` transposes a single symbol and `transpose` drives the
//! whole-text conversion.

pub mod chord;
pub mod error;
pub mod markup;
pub mod note;
pub mod parser;
pub mod token;
pub mod transpose;

pub use chord::{transpose_chord, Chord};
pub use error::{Error, Result};
pub use markup::Markup;
pub use parser::is_chord;
pub use transpose::{chords, transpose_text, transpose_text_with, Transposition};
