//! Moving single cards between hands and the intermediate zone.

use crate::card::Location;
use crate::document::DealDocument;
use crate::error::RelocationError;
use bridge_types::{Card, Suit};
use log::{debug, warn};

/// A request to move one card, as reported by the drag source and drop target.
///
/// `from_suit` and `to_suit` are the suit groups the card was dragged from and
/// dropped on. They are the caller's belief and may be stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub card: Card,
    pub from: Location,
    pub from_suit: Suit,
    pub to: Location,
    pub to_suit: Suit,
}

impl Move {
    pub fn new(card: Card, from: Location, from_suit: Suit, to: Location, to_suit: Suit) -> Self {
        Self {
            card,
            from,
            from_suit,
            to,
            to_suit,
        }
    }

    /// Move a card within its own suit group, the usual drag between hands
    pub fn card(card: Card, from: Location, to: Location) -> Self {
        Self::new(card, from, card.suit, to, card.suit)
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moved {
    pub card: Card,
    pub from: Location,
    pub to: Location,
    /// Set when the claimed source group was not the card's suit and the card
    /// was taken from its own suit at the source instead
    pub recovered: bool,
    /// False when the target already held the card and nothing was added
    pub inserted: bool,
}

impl DealDocument {
    /// Move one card from `mv.from` to `mv.to`.
    ///
    /// A card may only join a hand under its own suit. The intermediate zone
    /// accepts any card but always files it under the card's own suit. On
    /// error the document is unchanged.
    pub fn relocate(&mut self, mv: Move) -> Result<Moved, RelocationError> {
        let Move {
            card,
            from,
            from_suit,
            to,
            to_suit,
        } = mv;

        if matches!(to, Location::Hand(_)) && card.suit != to_suit {
            warn!("Refusing {:?} into {:?} group of {}", card, to_suit, to);
            return Err(RelocationError::SuitMismatch {
                card,
                target: to_suit,
            });
        }

        // Intermediate groups only ever hold their own suit
        let from_suit = match from {
            Location::Intermediate => card.suit,
            Location::Hand(_) => from_suit,
        };
        if from == to && from_suit == card.suit {
            return Err(RelocationError::SameContainer {
                card,
                location: from,
            });
        }

        // A card only ever sits under its own suit, so a different claimed
        // group is stale. The same rank in that group is another card.
        let recovered = from_suit != card.suit;
        if recovered {
            warn!(
                "{:?} claimed in {:?} group of {}, looking under its own suit",
                card, from_suit, from
            );
        }
        if !self.holding_mut(from).remove(card.suit, card.rank) {
            warn!("{:?} not found at {}", card, from);
            return Err(RelocationError::CardNotFound {
                card,
                location: from,
            });
        }

        let inserted = self.holding_mut(to).insert(card.suit, card.rank);
        if !inserted {
            warn!("{:?} already at {}, not added twice", card, to);
        }

        debug!("Moved {:?} from {} to {}", card, from, to);
        Ok(Moved {
            card,
            from,
            to,
            recovered,
            inserted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{DIRECTIONS, SUITS};
    use crate::pbn::read_pbn;
    use bridge_types::{Direction, Rank};

    const NORTH: Location = Location::Hand(Direction::North);
    const EAST: Location = Location::Hand(Direction::East);
    const SOUTH: Location = Location::Hand(Direction::South);
    const INTERMEDIATE: Location = Location::Intermediate;

    fn document(deal: &str) -> DealDocument {
        let pbn = format!("[Deal \"{}\"]", deal);
        DealDocument::select(&read_pbn(&pbn)[0])
    }

    fn full_deal() -> DealDocument {
        document("N:K843.T542.J6.863 AQJ7.K.Q75.AT942 962.AJ7.KT82.J75 T5.Q9863.A943.KQ")
    }

    /// Every (suit, rank) across all five locations
    fn all_cards(doc: &DealDocument) -> Vec<(usize, Rank)> {
        let mut cards = Vec::new();
        for location in Location::ALL {
            for (i, suit) in SUITS.iter().enumerate() {
                for &rank in doc.holding(location).ranks(*suit) {
                    cards.push((i, rank));
                }
            }
        }
        cards.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));
        cards
    }

    #[test]
    fn test_move_to_intermediate() {
        let mut doc =
            document("N:AKQ.JT9.8765.432 .AKQJ.T987.AK65 JT98765432..QT9.QJ87 432.8765...");
        let queen = Card::new(Suit::Spades, Rank::Queen);
        let moved = doc
            .relocate(Move::new(queen, NORTH, Suit::Spades, INTERMEDIATE, Suit::Spades))
            .unwrap();

        assert!(!moved.recovered);
        assert!(moved.inserted);
        assert_eq!(
            doc.holding(NORTH).ranks(Suit::Spades),
            &[Rank::Ace, Rank::King]
        );
        assert_eq!(
            doc.holding(INTERMEDIATE).ranks(Suit::Spades),
            &[Rank::Queen]
        );
    }

    #[test]
    fn test_intermediate_files_card_under_own_suit() {
        let mut doc = full_deal();
        let ace = Card::new(Suit::Hearts, Rank::Ace);
        doc.relocate(Move::new(ace, SOUTH, Suit::Hearts, INTERMEDIATE, Suit::Clubs))
            .unwrap();
        assert_eq!(doc.holding(INTERMEDIATE).ranks(Suit::Hearts), &[Rank::Ace]);
        assert_eq!(doc.holding(INTERMEDIATE).suit_len(Suit::Clubs), 0);
    }

    #[test]
    fn test_move_between_hands_keeps_order() {
        let mut doc = full_deal();
        let ten = Card::new(Suit::Clubs, Rank::Ten);
        doc.relocate(Move::card(ten, EAST, NORTH)).unwrap();
        assert_eq!(doc.holding(NORTH).suit_string(Suit::Clubs), "T863");
        assert_eq!(doc.holding(EAST).suit_string(Suit::Clubs), "A942");
        assert_eq!(doc.count(NORTH), 14);
        assert_eq!(doc.count(EAST), 12);
    }

    #[test]
    fn test_suit_mismatch_rejected() {
        let mut doc = full_deal();
        let before = doc.clone();
        let king = Card::new(Suit::Spades, Rank::King);
        let err = doc
            .relocate(Move::new(king, NORTH, Suit::Spades, EAST, Suit::Hearts))
            .unwrap_err();
        assert_eq!(
            err,
            RelocationError::SuitMismatch {
                card: king,
                target: Suit::Hearts
            }
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn test_drop_onto_self_rejected() {
        let mut doc = full_deal();
        let before = doc.clone();
        let king = Card::new(Suit::Spades, Rank::King);
        assert!(matches!(
            doc.relocate(Move::card(king, NORTH, NORTH)),
            Err(RelocationError::SameContainer { .. })
        ));

        doc.relocate(Move::card(king, NORTH, INTERMEDIATE)).unwrap();
        let after_first = doc.clone();
        // Intermediate to intermediate, whatever group the caller names
        assert!(matches!(
            doc.relocate(Move::new(king, INTERMEDIATE, Suit::Clubs, INTERMEDIATE, Suit::Hearts)),
            Err(RelocationError::SameContainer { .. })
        ));
        assert_eq!(doc, after_first);
        assert_ne!(doc, before);
    }

    #[test]
    fn test_stale_source_suit_recovered() {
        let mut doc = full_deal();
        let king = Card::new(Suit::Spades, Rank::King);
        // Claimed source group is hearts, but the card sits in North's spades.
        // Target intermediate accepts any claimed group.
        let moved = doc
            .relocate(Move::new(king, NORTH, Suit::Hearts, INTERMEDIATE, Suit::Hearts))
            .unwrap();
        assert!(moved.recovered);
        assert_eq!(doc.holding(NORTH).suit_string(Suit::Spades), "843");
        // North's hearts are untouched even though hearts held no king
        assert_eq!(doc.holding(NORTH).suit_string(Suit::Hearts), "T542");
        assert_eq!(doc.holding(INTERMEDIATE).ranks(Suit::Spades), &[Rank::King]);
    }

    #[test]
    fn test_recovery_never_takes_same_rank_of_other_suit() {
        let mut doc = full_deal();
        let before = doc.clone();
        // North holds the spade king, not the club king
        let club_king = Card::new(Suit::Clubs, Rank::King);
        let err = doc
            .relocate(Move::new(club_king, NORTH, Suit::Spades, EAST, Suit::Clubs))
            .unwrap_err();
        assert_eq!(
            err,
            RelocationError::CardNotFound {
                card: club_king,
                location: NORTH
            }
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn test_card_not_at_claimed_location() {
        let mut doc = full_deal();
        let before = doc.clone();
        // The spade ace is East's; the search stays within North
        let ace = Card::new(Suit::Spades, Rank::Ace);
        let err = doc.relocate(Move::card(ace, NORTH, SOUTH)).unwrap_err();
        assert_eq!(
            err,
            RelocationError::CardNotFound {
                card: ace,
                location: NORTH
            }
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn test_duplicate_drop_not_inserted_twice() {
        let mut doc = full_deal();
        let king = Card::new(Suit::Spades, Rank::King);
        doc.relocate(Move::card(king, NORTH, INTERMEDIATE)).unwrap();
        // A stale copy of the card reappears in North and is dropped again
        doc.hands.hand_mut(Direction::North).insert(Suit::Spades, Rank::King);
        let moved = doc.relocate(Move::card(king, NORTH, INTERMEDIATE)).unwrap();
        assert!(!moved.inserted);
        assert_eq!(doc.holding(INTERMEDIATE).ranks(Suit::Spades), &[Rank::King]);
        assert_eq!(doc.holding(NORTH).suit_string(Suit::Spades), "843");
    }

    #[test]
    fn test_conservation_over_many_moves() {
        let mut doc = full_deal();
        let start = all_cards(&doc);
        assert_eq!(start.len(), 52);

        // Shuffle every card through the intermediate zone to the next seat,
        // mixing in rejected moves along the way.
        for (i, &dir) in DIRECTIONS.iter().enumerate() {
            let next = Location::Hand(DIRECTIONS[(i + 1) % 4]);
            for suit in SUITS {
                let ranks = doc.holding(Location::Hand(dir)).ranks(suit).to_vec();
                for rank in ranks {
                    let card = Card::new(suit, rank);
                    let _ = doc.relocate(Move::new(card, Location::Hand(dir), suit, next, Suit::Spades));
                    let _ = doc.relocate(Move::card(card, Location::Hand(dir), INTERMEDIATE));
                    let _ = doc.relocate(Move::card(card, INTERMEDIATE, next));
                }
            }
            assert_eq!(all_cards(&doc), start);
        }

        for location in Location::ALL {
            for suit in SUITS {
                let ranks = doc.holding(location).ranks(suit);
                let mut unique = ranks.to_vec();
                unique.dedup();
                assert_eq!(unique.len(), ranks.len());
            }
        }
        assert_eq!(doc.intermediate_count(), 0);
        assert_eq!(doc.hands_total(), 52);
    }

    #[test]
    fn test_clear_then_rebuild_hand() {
        let mut doc = full_deal();
        doc.clear_all_hands_to_intermediate();
        for rank in [Rank::Ace, Rank::King, Rank::Queen] {
            let card = Card::new(Suit::Diamonds, rank);
            doc.relocate(Move::card(card, INTERMEDIATE, SOUTH)).unwrap();
        }
        assert_eq!(doc.holding(SOUTH).suit_string(Suit::Diamonds), "AKQ");
        assert_eq!(doc.intermediate_count(), 49);
        assert_eq!(doc.hands_total(), 3);
    }
}
