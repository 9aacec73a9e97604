use std::collections::HashMap;

use crate::models::Record;

/// Accumulates assembled records for one run and restores a deterministic,
/// user-meaningful order before anything is shown.
///
/// Accumulation is keyed by identity (last write wins, so re-parsing the
/// same page never duplicates). `finalize` is the single place that turns
/// the unordered store into a total order.
#[derive(Debug, Default)]
pub struct CollectionBuilder {
    records: HashMap<String, Record>,
    arrival: Vec<String>,
}

impl CollectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the record for an identity key.
    pub fn add(&mut self, key: impl Into<String>, record: Record) {
        let key = key.into();
        if !self.records.contains_key(&key) {
            self.arrival.push(key.clone());
        }
        self.records.insert(key, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Produce the final ordered sequence.
    ///
    /// When every record carries a source-declared rank, order is ascending
    /// by that rank. Otherwise ranks are reassigned from arrival order
    /// first, so the output is always a total order with no ties.
    pub fn finalize(mut self) -> Vec<Record> {
        let mut out: Vec<Record> = self
            .arrival
            .iter()
            .filter_map(|key| self.records.remove(key))
            .collect();

        let all_ranked = !out.is_empty() && out.iter().all(|r| r.rank > 0);
        if !all_ranked {
            for (i, record) in out.iter_mut().enumerate() {
                record.rank = i as u32 + 1;
            }
        }
        out.sort_by_key(|r| r.rank);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::make_record;

    #[test]
    fn sorts_by_source_rank_when_all_records_have_one() {
        let mut builder = CollectionBuilder::new();
        builder.add("b", make_record("Second", 2));
        builder.add("c", make_record("Third", 3));
        builder.add("a", make_record("First", 1));

        let out = builder.finalize();
        let titles: Vec<&str> = out.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
        assert_eq!(out.iter().map(|r| r.rank).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn assigns_arrival_order_when_ranks_are_missing() {
        let mut builder = CollectionBuilder::new();
        builder.add("x", make_record("Came first", 0));
        builder.add("y", make_record("Came second", 0));
        builder.add("z", make_record("Came third", 0));

        let out = builder.finalize();
        let titles: Vec<&str> = out.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Came first", "Came second", "Came third"]);
        assert_eq!(out.iter().map(|r| r.rank).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn a_single_unranked_record_falls_back_to_arrival_order() {
        let mut builder = CollectionBuilder::new();
        builder.add("a", make_record("Ranked", 5));
        builder.add("b", make_record("Unranked", 0));

        let out = builder.finalize();
        // One missing rank means the source ordering cannot be trusted.
        assert_eq!(out[0].title, "Ranked");
        assert_eq!(out[0].rank, 1);
        assert_eq!(out[1].title, "Unranked");
        assert_eq!(out[1].rank, 2);
    }

    #[test]
    fn repeated_key_overwrites_instead_of_duplicating() {
        let mut builder = CollectionBuilder::new();
        builder.add("a", make_record("Old", 1));
        builder.add("a", make_record("New", 1));

        let out = builder.finalize();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "New");
    }

    #[test]
    fn empty_builder_finalizes_to_empty_sequence() {
        assert!(CollectionBuilder::new().finalize().is_empty());
    }
}
