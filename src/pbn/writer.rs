//! PBN file writer.

use super::tags::{vulnerability_tag, PREFERRED_TAG_ORDER};
use crate::card::direction_char;
use crate::document::DealDocument;

/// Header lines written at the top of a multi-board export
pub const PBN_HEADER: &str = "% PBN 2.1\n% EXPORT\n";

/// Options for [`write_pbn`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Start the output with [`PBN_HEADER`]
    pub header: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { header: true }
    }
}

/// Convert the edited deal to PBN tag lines.
///
/// Known tags come first in their usual order, with Board, Dealer and
/// Vulnerable taken from the document. Other captured tags follow in the
/// order they were read, and the Deal tag comes last. The intermediate zone
/// is not written.
pub fn serialize(document: &DealDocument) -> String {
    let mut rest = document.tags().clone();
    rest.retain(|name, _| !is_document_tag(name));

    let mut lines = Vec::new();
    for name in PREFERRED_TAG_ORDER {
        let value = match name {
            "Board" => document.board().to_string(),
            "Dealer" => direction_char(document.dealer()).to_string(),
            "Vulnerable" => vulnerability_tag(document.vulnerability()).to_string(),
            _ => match rest.shift_remove(name) {
                Some(value) => value,
                None => continue,
            },
        };
        lines.push(tag_line(name, &value));
    }

    for (name, value) in &rest {
        lines.push(tag_line(name, value));
    }

    let deal = document.hands().to_pbn(document.dealer());
    lines.push(tag_line("Deal", &deal));

    lines.join("\n") + "\n"
}

/// Serialize several edited deals, separated by blank lines
pub fn write_pbn(documents: &[DealDocument], options: WriteOptions) -> String {
    let mut output = String::new();

    if options.header {
        output.push_str(PBN_HEADER);
        output.push('\n');
    }

    for (i, document) in documents.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&serialize(document));
    }

    output
}

/// Default file name for a saved deal, e.g. `deal_7_modified_1700000000.pbn`
pub fn suggested_file_name(board: u32, timestamp: u64) -> String {
    format!("deal_{}_modified_{}.pbn", board, timestamp)
}

/// Tags whose values come from the document rather than the captured map
fn is_document_tag(name: &str) -> bool {
    ["Board", "Dealer", "Vulnerable", "Deal"]
        .iter()
        .any(|t| t.eq_ignore_ascii_case(name))
}

fn tag_line(name: &str, value: &str) -> String {
    format!("[{} \"{}\"]", name, value)
}
