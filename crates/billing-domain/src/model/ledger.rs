//! In-memory ledger of submitted trips

use tracing::debug;

use super::TripRecord;

/// Append-only, insertion-ordered collection of trip records.
///
/// Records can only be added; there is no lookup, update or removal.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<TripRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end of the ledger
    pub fn append(&mut self, record: TripRecord) {
        self.records.push(record);
        debug!(len = self.records.len(), "trip appended to ledger");
    }

    /// All records in submission order
    pub fn snapshot(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
