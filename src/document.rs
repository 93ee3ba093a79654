//! The editable deal: four hands, the intermediate zone, and board metadata.

use crate::card::{Holding, Location, DIRECTIONS, SUITS};
use crate::error::SaveWarning;
use crate::pbn::{DealRecord, Hands, TagMap};
use bridge_types::{Direction, Vulnerability};
use log::debug;

/// Cards in a complete hand
pub const HAND_SIZE: usize = 13;

/// Cards in a complete deal
pub const DECK_SIZE: usize = 52;

/// The deal currently being edited.
///
/// Built from a [`DealRecord`] by [`DealDocument::select`]; the record itself
/// is never touched, so it can be selected again later to start over.
#[derive(Debug, Clone, PartialEq)]
pub struct DealDocument {
    pub(crate) hands: Hands,
    pub(crate) intermediate: Holding,
    dealer: Direction,
    vulnerability: Vulnerability,
    board: u32,
    tags: TagMap,
}

impl DealDocument {
    /// Start editing a deal. The intermediate zone starts empty.
    pub fn select(record: &DealRecord) -> Self {
        Self {
            hands: record.hands.clone(),
            intermediate: Holding::new(),
            dealer: record.dealer,
            vulnerability: record.vulnerability,
            board: record.board,
            tags: record.tags.clone(),
        }
    }

    pub fn dealer(&self) -> Direction {
        self.dealer
    }

    pub fn set_dealer(&mut self, dealer: Direction) {
        debug!("Dealer changed to {:?}", dealer);
        self.dealer = dealer;
    }

    pub fn vulnerability(&self) -> Vulnerability {
        self.vulnerability
    }

    pub fn set_vulnerability(&mut self, vulnerability: Vulnerability) {
        debug!("Vulnerability changed to {:?}", vulnerability);
        self.vulnerability = vulnerability;
    }

    /// Board number carried over from the source deal
    pub fn board(&self) -> u32 {
        self.board
    }

    /// Tags captured with the source deal
    pub fn tags(&self) -> &TagMap {
        &self.tags
    }

    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    pub fn holding(&self, location: Location) -> &Holding {
        match location {
            Location::Hand(dir) => self.hands.hand(dir),
            Location::Intermediate => &self.intermediate,
        }
    }

    pub(crate) fn holding_mut(&mut self, location: Location) -> &mut Holding {
        match location {
            Location::Hand(dir) => self.hands.hand_mut(dir),
            Location::Intermediate => &mut self.intermediate,
        }
    }

    /// Number of cards at a location
    pub fn count(&self, location: Location) -> usize {
        self.holding(location).len()
    }

    /// Cards held by North, East, South and West together
    pub fn hands_total(&self) -> usize {
        self.hands.len()
    }

    pub fn intermediate_count(&self) -> usize {
        self.intermediate.len()
    }

    /// Whether a hand holds exactly thirteen cards
    pub fn is_hand_complete(&self, dir: Direction) -> bool {
        self.hands.hand(dir).len() == HAND_SIZE
    }

    /// Move every card from the four hands into the intermediate zone.
    pub fn clear_all_hands_to_intermediate(&mut self) {
        for dir in DIRECTIONS {
            for suit in SUITS {
                for rank in self.hands.hand_mut(dir).take(suit) {
                    self.intermediate.insert(suit, rank);
                }
            }
        }
        debug!(
            "Cleared hands: {} cards in intermediate zone",
            self.intermediate.len()
        );
    }

    /// Conditions to confirm with the user before writing this deal out.
    ///
    /// Cards in the intermediate zone are not written, and a deal whose hands
    /// do not total 52 cards is written as-is.
    pub fn save_warnings(&self) -> Vec<SaveWarning> {
        let mut warnings = Vec::new();
        let count = self.intermediate_count();
        if count > 0 {
            warnings.push(SaveWarning::IntermediateNotEmpty { count });
        }
        let total = self.hands_total();
        if total != DECK_SIZE {
            warnings.push(SaveWarning::IncompleteHands { total });
        }
        warnings
    }
}

/// Number of cards at `location` in a document
pub fn count_by_location(document: &DealDocument, location: Location) -> usize {
    document.count(location)
}
