//! Card vocabulary: suit and rank orders, directions, and editing locations.
//!
//! Card types come from bridge-types; this module adds the fixed PBN orders
//! and the per-suit holding used by hands and the intermediate zone.

use bridge_types::{Direction, Rank, Suit};
use std::fmt;

/// Suits in PBN order (Spades first, as written in a Deal string)
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

/// Ranks in PBN order (Ace first, high to low)
pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Jack,
    Rank::Ten,
    Rank::Nine,
    Rank::Eight,
    Rank::Seven,
    Rank::Six,
    Rank::Five,
    Rank::Four,
    Rank::Three,
    Rank::Two,
];

/// Seats in clockwise order starting from North
pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

/// Position of a suit within [`SUITS`]
pub fn suit_index(suit: Suit) -> usize {
    match suit {
        Suit::Spades => 0,
        Suit::Hearts => 1,
        Suit::Diamonds => 2,
        Suit::Clubs => 3,
    }
}

/// Position of a direction within [`DIRECTIONS`]
pub fn direction_index(dir: Direction) -> usize {
    match dir {
        Direction::North => 0,
        Direction::East => 1,
        Direction::South => 2,
        Direction::West => 3,
    }
}

/// Uppercase seat letter
pub fn direction_char(dir: Direction) -> char {
    match dir {
        Direction::North => 'N',
        Direction::East => 'E',
        Direction::South => 'S',
        Direction::West => 'W',
    }
}

/// Parse a seat letter (case-insensitive)
pub fn parse_direction(c: char) -> Option<Direction> {
    match c.to_ascii_uppercase() {
        'N' => Some(Direction::North),
        'E' => Some(Direction::East),
        'S' => Some(Direction::South),
        'W' => Some(Direction::West),
        _ => None,
    }
}

/// Parse a rank character from the PBN alphabet `AKQJT98765432` (case-insensitive)
pub fn parse_rank(c: char) -> Option<Rank> {
    let upper = c.to_ascii_uppercase();
    RANKS.iter().copied().find(|r| r.to_char() == upper)
}

/// Sort ranks high to low (Ace first)
pub fn sort_ranks(ranks: &mut [Rank]) {
    ranks.sort_by(|a, b| b.cmp(a));
}

/// The seats in dealing order starting from `first`
pub fn rotation_from(first: Direction) -> [Direction; 4] {
    let start = direction_index(first);
    [0, 1, 2, 3].map(|i| DIRECTIONS[(start + i) % 4])
}

/// Where a card can sit while a deal is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// One of the four hands
    Hand(Direction),
    /// The holding zone for cards removed from every hand; never written out
    Intermediate,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::Hand(Direction::North),
        Location::Hand(Direction::East),
        Location::Hand(Direction::South),
        Location::Hand(Direction::West),
        Location::Intermediate,
    ];

    /// Parse `N`, `E`, `S`, `W` or `I` (case-insensitive)
    pub fn from_char(c: char) -> Option<Location> {
        if c.eq_ignore_ascii_case(&'I') {
            return Some(Location::Intermediate);
        }
        parse_direction(c).map(Location::Hand)
    }

    pub fn to_char(self) -> char {
        match self {
            Location::Hand(dir) => direction_char(dir),
            Location::Intermediate => 'I',
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The cards one location holds, as a sorted rank list per suit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Holding {
    suits: [Vec<Rank>; 4],
}

impl Holding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranks held in `suit`, Ace first
    pub fn ranks(&self, suit: Suit) -> &[Rank] {
        &self.suits[suit_index(suit)]
    }

    pub fn contains(&self, suit: Suit, rank: Rank) -> bool {
        self.ranks(suit).contains(&rank)
    }

    /// Add a rank unless already present. Returns whether it was added.
    pub fn insert(&mut self, suit: Suit, rank: Rank) -> bool {
        if self.contains(suit, rank) {
            return false;
        }
        let ranks = &mut self.suits[suit_index(suit)];
        ranks.push(rank);
        sort_ranks(ranks);
        true
    }

    /// Remove a rank. Returns whether it was present.
    pub fn remove(&mut self, suit: Suit, rank: Rank) -> bool {
        let ranks = &mut self.suits[suit_index(suit)];
        match ranks.iter().position(|&r| r == rank) {
            Some(pos) => {
                ranks.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Take every rank out of `suit`, leaving it void
    pub fn take(&mut self, suit: Suit) -> Vec<Rank> {
        std::mem::take(&mut self.suits[suit_index(suit)])
    }

    pub fn suit_len(&self, suit: Suit) -> usize {
        self.ranks(suit).len()
    }

    /// Total cards across all suits
    pub fn len(&self) -> usize {
        self.suits.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.suits.iter().all(Vec::is_empty)
    }

    /// The suit as a PBN rank run, e.g. `AKT2`
    pub fn suit_string(&self, suit: Suit) -> String {
        self.ranks(suit).iter().map(|r| r.to_char()).collect()
    }

    /// The hand as `Spades.Hearts.Diamonds.Clubs`
    pub fn to_pbn(&self) -> String {
        SUITS
            .iter()
            .map(|&suit| self.suit_string(suit))
            .collect::<Vec<_>>()
            .join(".")
    }
}
