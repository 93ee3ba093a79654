//! PBN (Portable Bridge Notation) reading and writing.
//!
//! Only the Board, Dealer, Vulnerable and Deal tags are interpreted; every
//! other tag is carried through unchanged.

mod deal;
mod reader;
mod tags;
mod writer;

pub use deal::{parse_deal_string, Hands};
pub use reader::{read_pbn, DealRecord};
pub use tags::{
    get_tag, normalize_vulnerability, scan_tag_pairs, vulnerability_tag, TagMap, TagPair,
    PREFERRED_TAG_ORDER,
};
pub use writer::{serialize, suggested_file_name, write_pbn, WriteOptions, PBN_HEADER};
