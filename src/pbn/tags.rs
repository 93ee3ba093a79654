//! Tag-pair scanning and the tag values the editor interprets.

use bridge_types::Vulnerability;
use indexmap::IndexMap;

/// Tags observed for one deal, in first-seen order
pub type TagMap = IndexMap<String, String>;

/// Order in which known tags are written back out
pub const PREFERRED_TAG_ORDER: [&str; 14] = [
    "Event",
    "Site",
    "Date",
    "Board",
    "West",
    "North",
    "East",
    "South",
    "Dealer",
    "Vulnerable",
    "Scoring",
    "Declarer",
    "Contract",
    "Result",
];

/// A parsed PBN tag pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPair {
    pub name: String,
    pub value: String,
}

/// Find every `[Name "Value"]` on a line.
///
/// Names are ASCII word characters; values are non-empty and unquoted inside.
pub fn scan_tag_pairs(line: &str) -> Vec<TagPair> {
    let mut tags = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find('[') {
        rest = &rest[open..];
        match parse_tag_pair(rest) {
            Some((tag, consumed)) => {
                tags.push(tag);
                rest = &rest[consumed..];
            }
            None => rest = &rest[1..],
        }
    }

    tags
}

/// Parse a tag pair at the start of `s`, returning it with the bytes consumed
fn parse_tag_pair(s: &str) -> Option<(TagPair, usize)> {
    let inner = s.strip_prefix('[')?;

    let name_len = inner
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(inner.len());
    if name_len == 0 {
        return None;
    }
    let (name, after_name) = inner.split_at(name_len);

    // At least one space between tag name and quoted value
    let quoted = after_name.trim_start();
    if quoted.len() == after_name.len() {
        return None;
    }
    let quoted = quoted.strip_prefix('"')?;
    let close = quoted.find('"')?;
    if close == 0 {
        return None;
    }
    let tail = quoted[close + 1..].strip_prefix(']')?;

    let tag = TagPair {
        name: name.to_string(),
        value: quoted[..close].to_string(),
    };
    Some((tag, s.len() - tail.len()))
}

/// Look up a tag by name, ignoring case. When several spellings were
/// read, the one added last wins.
pub fn get_tag<'a>(tags: &'a TagMap, name: &str) -> Option<&'a str> {
    tags.iter()
        .rev()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

/// Normalize a `Vulnerable` tag value. Unknown or missing values mean none.
///
/// A lone `N` or `S` is PBN shorthand for North-South vulnerable, and
/// likewise `E`/`W` for East-West.
pub fn normalize_vulnerability(value: Option<&str>) -> Vulnerability {
    let Some(value) = value else {
        return Vulnerability::None;
    };
    match value.to_ascii_uppercase().as_str() {
        "NONE" | "-" | "O" => Vulnerability::None,
        "NS" | "N" | "S" => Vulnerability::NorthSouth,
        "EW" | "E" | "W" => Vulnerability::EastWest,
        "ALL" | "BOTH" | "B" => Vulnerability::Both,
        _ => Vulnerability::None,
    }
}

/// The `Vulnerable` tag value written for a vulnerability
pub fn vulnerability_tag(vul: Vulnerability) -> &'static str {
    match vul {
        Vulnerability::None => "None",
        Vulnerability::NorthSouth => "NS",
        Vulnerability::EastWest => "EW",
        Vulnerability::Both => "All",
    }
}
