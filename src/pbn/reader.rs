//! PBN file reader.

use super::deal::{parse_deal_string, Hands};
use super::tags::{get_tag, normalize_vulnerability, scan_tag_pairs, TagMap};
use crate::card::parse_direction;
use bridge_types::{Direction, Vulnerability};
use log::{info, warn};

/// One deal as found in the source text. Never modified after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct DealRecord {
    /// Position among successfully parsed deals (0-based)
    pub index: usize,
    /// `Board` tag value, or `index + 1` when absent or not a number
    pub board: u32,
    pub dealer: Direction,
    pub vulnerability: Vulnerability,
    pub hands: Hands,
    /// Every tag seen since the previous `Deal` tag, including this `Deal`
    pub tags: TagMap,
}

impl DealRecord {
    /// Label for deal pickers, e.g. `Deal 2 (Board 14)`
    pub fn label(&self) -> String {
        format!("Deal {} (Board {})", self.index + 1, self.board)
    }
}

/// Read every deal from PBN content.
///
/// Tags accumulate until a `Deal` tag closes the deal. Deals whose Deal
/// string cannot be parsed are logged and skipped; nothing here is fatal.
pub fn read_pbn(content: &str) -> Vec<DealRecord> {
    let mut records = Vec::new();
    let mut tags = TagMap::new();

    for line in content.lines() {
        for tag in scan_tag_pairs(line) {
            let is_deal = tag.name.eq_ignore_ascii_case("Deal");
            tags.insert(tag.name, tag.value.clone());
            if !is_deal {
                continue;
            }

            match parse_deal_string(&tag.value) {
                Ok(hands) => records.push(build_record(records.len(), hands, &tags)),
                Err(e) => {
                    let board = get_tag(&tags, "Board")
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("#{}", records.len() + 1));
                    warn!("Skipping deal (Board {}): {}: {}", board, e, tag.value);
                }
            }
            tags = TagMap::new();
        }
    }

    info!("Parsed {} deals", records.len());
    records
}

fn build_record(index: usize, hands: Hands, tags: &TagMap) -> DealRecord {
    let board = get_tag(tags, "Board")
        .and_then(parse_board_number)
        .unwrap_or(index as u32 + 1);

    DealRecord {
        index,
        board,
        dealer: resolve_dealer(get_tag(tags, "Dealer")),
        vulnerability: normalize_vulnerability(get_tag(tags, "Vulnerable")),
        hands,
        tags: tags.clone(),
    }
}

/// Leading decimal digits of a Board value, so `"12a"` reads as 12
fn parse_board_number(value: &str) -> Option<u32> {
    let value = value.trim_start();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

/// Dealer from its tag value; North when absent or unrecognised
fn resolve_dealer(value: Option<&str>) -> Direction {
    let Some(value) = value else {
        return Direction::North;
    };
    match value.trim().chars().next().and_then(parse_direction) {
        Some(dir) => dir,
        None => {
            warn!("Unknown Dealer {:?}, using N", value);
            Direction::North
        }
    }
}
