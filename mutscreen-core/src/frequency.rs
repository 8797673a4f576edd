//! Cohort-wide tallies of observed mutations, combinations and inferred calls.
use fxhash::FxHashMap as HashMap;

use crate::consts::NONE_SENTINEL;
use crate::models::{FrequencyRow, MutationType, SampleRecord};

///
/// Insertion-ordered counter of string keys.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    counts: Vec<(String, u64)>,
    key_to_id: HashMap<String, usize>,
}

impl Tally {
    pub fn add(&mut self, key: &str) {
        match self.key_to_id.get(key) {
            Some(&id) => self.counts[id].1 += 1,
            None => {
                self.key_to_id.insert(key.to_string(), self.counts.len());
                self.counts.push((key.to_string(), 1));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }
}

///
/// Running totals for one cohort.
///
/// Records are folded in one at a time with [FrequencyAccumulator::observe];
/// [FrequencyAccumulator::rows] turns the totals into frequency rows whose
/// denominator is the number of records observed.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyAccumulator {
    pub individual: Tally,
    pub combination: Tally,
    pub inferred: Tally,
    pub total_samples: u64,
}

impl FrequencyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, record: &SampleRecord) {
        self.total_samples += 1;

        record
            .observed_tokens()
            .filter(|token| *token != NONE_SENTINEL)
            .for_each(|token| self.individual.add(token));

        record
            .combinations
            .iter()
            .for_each(|name| self.combination.add(name));

        record
            .inferred
            .iter()
            .for_each(|mutation| self.inferred.add(&mutation.to_string()));
    }

    ///
    /// Fold a whole collection of records in, returning the accumulator.
    ///
    pub fn observe_all<'a>(
        mut self,
        records: impl IntoIterator<Item = &'a SampleRecord>,
    ) -> Self {
        records.into_iter().for_each(|record| self.observe(record));
        self
    }

    ///
    /// Individual rows, then combination rows, then inferred rows, each in
    /// the order its keys were first counted.
    ///
    pub fn rows(&self) -> Vec<FrequencyRow> {
        if self.total_samples == 0 {
            return Vec::new();
        }
        let total = self.total_samples as f64;

        [
            (MutationType::Individual, &self.individual),
            (MutationType::Combination, &self.combination),
            (MutationType::Inferred, &self.inferred),
        ]
        .into_iter()
        .flat_map(|(kind, tally)| {
            tally.iter().map(move |(key, count)| FrequencyRow {
                key: key.to_string(),
                count,
                kind,
                frequency: count as f64 / total,
            })
        })
        .collect()
    }
}
