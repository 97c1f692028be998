//! Errors returned by the parsing entry points.
//!
//! The transposition functions themselves never fail; anything they cannot
//! make sense of is passed through unchanged.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("empty chord symbol")]
    EmptyChord,

    #[error("`{0}` is not a chord symbol")]
    NotAChord(String),
}
