//! Error types for deal parsing and editing.

use crate::card::Location;
use crate::document::DECK_SIZE;
use bridge_types::{Card, Suit};
use thiserror::Error;

/// Errors that can occur when parsing a PBN Deal string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Deal string must start with N:, E:, S: or W: (got {0:?})")]
    InvalidFirstPlayer(String),

    #[error("Expected 4 hands in deal string, got {0}")]
    HandCount(usize),
}

/// Result type for PBN parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Reasons a card move is refused. The document is unchanged in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocationError {
    #[error("cannot place {card:?} in the {target:?} group of a hand")]
    SuitMismatch { card: Card, target: Suit },

    #[error("{card:?} dropped onto its own container at {location}")]
    SameContainer { card: Card, location: Location },

    #[error("{card:?} not found at claimed source {location}")]
    CardNotFound { card: Card, location: Location },
}

/// Conditions the caller should confirm with the user before writing a deal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveWarning {
    #[error("{count} card(s) in the intermediate zone will not be saved")]
    IntermediateNotEmpty { count: usize },

    #[error("hands hold {total} cards instead of 52")]
    IncompleteHands { total: usize },
}

impl SaveWarning {
    /// Cards missing from the four hands; negative when the hands hold too many.
    pub fn missing(&self) -> i64 {
        match self {
            SaveWarning::IntermediateNotEmpty { .. } => 0,
            SaveWarning::IncompleteHands { total } => DECK_SIZE as i64 - *total as i64,
        }
    }
}
