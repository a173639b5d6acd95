//! Equivalence classes over the shorter input.
//!
//! Every element of the sequence is recorded together with its position, and
//! the records are sorted by value (ties by position). A run of records with
//! the same value is one class; its final record is flagged so a scan over
//! the class knows where to stop.

/// One element of the indexed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Position of the element in the indexed sequence.
    pub index: usize,
    pub value: u64,
    /// Set on the last entry of each run of equal values.
    pub last: bool,
}

/// Value-sorted index over a sequence.
#[derive(Debug, Clone, Default)]
pub struct Classes {
    entries: Vec<Entry>,
}

impl Classes {
    pub fn build(values: &[u64]) -> Self {
        let mut entries: Vec<Entry> = values
            .iter()
            .enumerate()
            .map(|(index, &value)| Entry {
                index,
                value,
                last: false,
            })
            .collect();
        entries.sort_unstable_by_key(|e| (e.value, e.index));

        let len = entries.len();
        for k in 0..len {
            entries[k].last = k + 1 == len || entries[k].value != entries[k + 1].value;
        }
        Self { entries }
    }

    /// Position of the first entry whose value is `v`.
    ///
    /// Returns [`Classes::len`] when `v` does not occur, so callers can use the
    /// result directly as the start of an (empty) scan.
    pub fn find_first(&self, v: u64) -> usize {
        let n = self.entries.partition_point(|e| e.value < v);
        match self.entries.get(n) {
            Some(e) if e.value == v => n,
            _ => self.entries.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
