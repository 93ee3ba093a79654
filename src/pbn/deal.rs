//! Deal string codec: `N:AKQ.JT9.8765.432 .AKQJ.T987.AK65 ...`

use crate::card::{
    direction_char, direction_index, parse_direction, parse_rank, rotation_from, Holding, SUITS,
};
use crate::error::{ParseError, Result};
use bridge_types::Direction;
use log::warn;

/// The four hands of a deal, indexed by seat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hands {
    hands: [Holding; 4],
}

impl Hands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand(&self, dir: Direction) -> &Holding {
        &self.hands[direction_index(dir)]
    }

    pub fn hand_mut(&mut self, dir: Direction) -> &mut Holding {
        &mut self.hands[direction_index(dir)]
    }

    /// Cards held across all four hands
    pub fn len(&self) -> usize {
        self.hands.iter().map(Holding::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.iter().all(Holding::is_empty)
    }

    /// Format as a PBN Deal string with hands listed clockwise from `first`
    pub fn to_pbn(&self, first: Direction) -> String {
        let fields: Vec<String> = rotation_from(first)
            .iter()
            .map(|&dir| self.hand(dir).to_pbn())
            .collect();
        format!("{}:{}", direction_char(first), fields.join(" "))
    }
}

/// Parse a PBN Deal string.
///
/// Ranks outside `AKQJT98765432` are dropped, and a hand with more than four
/// dot-separated fields has the extra fields appended to its clubs.
pub fn parse_deal_string(deal: &str) -> Result<Hands> {
    let mut chars = deal.chars();
    let first = match (chars.next().and_then(parse_direction), chars.next()) {
        (Some(dir), Some(':')) => dir,
        _ => return Err(ParseError::InvalidFirstPlayer(deal.to_string())),
    };

    let fields: Vec<&str> = chars.as_str().split_whitespace().collect();
    if fields.len() != 4 {
        return Err(ParseError::HandCount(fields.len()));
    }

    let mut hands = Hands::new();
    for (&dir, field) in rotation_from(first).iter().zip(fields) {
        *hands.hand_mut(dir) = parse_hand(dir, field);
    }
    Ok(hands)
}

/// Parse one `Spades.Hearts.Diamonds.Clubs` field
fn parse_hand(dir: Direction, field: &str) -> Holding {
    let mut parts: Vec<String> = field.split('.').map(str::to_string).collect();
    if parts.len() > 4 {
        warn!(
            "Hand {} has {} suit fields, folding extras into clubs: {}",
            direction_char(dir),
            parts.len(),
            field
        );
        let extra = parts.split_off(4).concat();
        parts[3].push_str(&extra);
    }

    let mut holding = Holding::new();
    for (&suit, cards) in SUITS.iter().zip(parts.iter()) {
        for rank in cards.chars().filter_map(parse_rank) {
            holding.insert(suit, rank);
        }
    }
    holding
}
