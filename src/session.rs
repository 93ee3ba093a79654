//! An editing session: the deals read from one file and the deal being edited.

use crate::document::DealDocument;
use crate::pbn::{read_pbn, DealRecord};
use log::debug;

/// Parsed deals plus at most one live [`DealDocument`].
///
/// Selecting a deal replaces the live document outright; edits to the old
/// one are discarded.
#[derive(Debug, Default)]
pub struct Session {
    records: Vec<DealRecord>,
    current: Option<(usize, DealDocument)>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session contents with the deals in `content` and select
    /// the first one. Returns the number of deals found.
    pub fn load(&mut self, content: &str) -> usize {
        self.records = read_pbn(content);
        self.current = None;
        if !self.records.is_empty() {
            self.select(0);
        }
        self.records.len()
    }

    pub fn records(&self) -> &[DealRecord] {
        &self.records
    }

    /// Start editing the deal at `index`, dropping any current edits.
    /// Returns `None` when there is no such deal.
    pub fn select(&mut self, index: usize) -> Option<&mut DealDocument> {
        let record = self.records.get(index)?;
        debug!("Selected {}", record.label());
        self.current = Some((index, DealDocument::select(record)));
        self.current_mut()
    }

    pub fn current(&self) -> Option<&DealDocument> {
        self.current.as_ref().map(|(_, doc)| doc)
    }

    pub fn current_mut(&mut self) -> Option<&mut DealDocument> {
        self.current.as_mut().map(|(_, doc)| doc)
    }

    /// Index of the selected deal within [`Session::records`]
    pub fn current_index(&self) -> Option<usize> {
        self.current.as_ref().map(|(index, _)| *index)
    }

    /// Forget all deals and the live document
    pub fn reset(&mut self) {
        self.records.clear();
        self.current = None;
    }
}
