//! Bridge deal editing over PBN files.
//!
//! Read deals from PBN text, pick one to edit, move individual cards between
//! the four hands and an intermediate holding zone, and write the result back
//! as PBN. Every card keeps its suit, and a card is only ever in one place.
//!
//! # Example
//!
//! ```
//! use pbn_deal_editor::{pbn, Card, DealDocument, Direction, Location, Move, Rank, Suit};
//!
//! let pbn_content = r#"
//! [Board "1"]
//! [Dealer "N"]
//! [Vulnerable "None"]
//! [Deal "N:AKQ.JT9.8765.432 .AKQJ.T987.AK65 JT98765432..QT9.QJ87 432.8765..."]
//! "#;
//!
//! let records = pbn::read_pbn(pbn_content);
//! assert_eq!(records.len(), 1);
//!
//! let mut doc = DealDocument::select(&records[0]);
//! let queen = Card::new(Suit::Spades, Rank::Queen);
//! doc.relocate(Move::card(queen, Location::Hand(Direction::North), Location::Intermediate))
//!     .unwrap();
//! assert_eq!(doc.holding(Location::Hand(Direction::North)).suit_string(Suit::Spades), "AK");
//!
//! let output = pbn::serialize(&doc);
//! assert!(output.contains("[Deal \"N:AK.JT9.8765.432 "));
//! ```

pub mod card;
mod document;
mod error;
pub mod pbn;
mod relocate;
mod session;

pub use card::{Holding, Location};
pub use document::{count_by_location, DealDocument, DECK_SIZE, HAND_SIZE};
pub use error::{ParseError, RelocationError, Result, SaveWarning};
pub use relocate::{Move, Moved};
pub use session::Session;

// Re-export bridge-types for convenience
pub use bridge_types::{Card, Direction, Rank, Suit, Vulnerability};
