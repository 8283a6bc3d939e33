// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error type for rejected inputs.
//!
//! Every failure in this crate is an invalid-input failure: the algorithms
//! themselves cannot fail. A word that is not in the grid, a falling price
//! sequence or an empty quote list are ordinary results, not errors.

use thiserror::Error;

/// An input that one of the katas refuses to process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The grid has no rows, or its rows have no cells.
    #[error("grid has no cells")]
    EmptyGrid,

    /// A grid row differs in length from the first row.
    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The word to search for is empty.
    #[error("search word is empty")]
    EmptyWord,

    /// A character passed to the codec encoder is not in its alphabet.
    #[error("character {ch:?} at position {position} is not in the codec alphabet")]
    CharacterOutsideAlphabet { ch: char, position: usize },

    /// A packed character cannot be decoded.
    #[error("packed character {ch:?} at position {position} is malformed: {reason}")]
    MalformedCode {
        ch: char,
        position: usize,
        reason: &'static str,
    },

    /// A character that must be unique appears more than once.
    #[error("character {ch:?} appears more than once")]
    DuplicateCharacter { ch: char },

    /// The codec alphabet has no characters.
    #[error("codec alphabet is empty")]
    EmptyAlphabet,

    /// The codec alphabet would reach the reserved sentinel index.
    #[error("codec alphabet has {len} characters, at most {max} fit below the sentinel")]
    AlphabetTooLarge { len: usize, max: usize },
}
