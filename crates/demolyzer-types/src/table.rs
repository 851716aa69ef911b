use crate::record::TickRecord;

/// Fully materialized, immutable tick-indexed observation table.
///
/// Rows keep the order they were read in. Each player's rows are expected to
/// ascend by tick within that order; no global sort is assumed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetryTable {
    rows: Vec<TickRecord>,
}

impl TelemetryTable {
    pub fn new(rows: Vec<TickRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TickRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TickRecord> {
        self.rows.iter()
    }

    /// Largest tick observed in any row
    pub fn max_tick(&self) -> Option<i64> {
        self.rows.iter().map(|r| r.tick).max()
    }
}

impl FromIterator<TickRecord> for TelemetryTable {
    fn from_iter<T: IntoIterator<Item = TickRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TelemetryTable {
    type Item = &'a TickRecord;
    type IntoIter = std::slice::Iter<'a, TickRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
