//! Per-sample and per-cohort screening against a curated list.
use log::{debug, warn};

use crate::combination::detect_combinations;
use crate::frequency::FrequencyAccumulator;
use crate::inference::infer_mutations;
use crate::matcher::match_mutation;
use crate::models::sample::split_tokens;
use crate::models::{CuratedList, FrequencyRow, SampleInput, SampleRecord};

///
/// Screen one sample: match its observed tokens, infer reference calls at
/// unobserved curated positions and detect the combinations both cover.
///
pub fn screen_sample(input: &SampleInput, curated: &CuratedList) -> SampleRecord {
    let all_mutations = input.all_mutations();

    let curated_matches: Vec<_> = split_tokens(&all_mutations)
        .filter_map(|token| match_mutation(token, curated))
        .collect();

    let inferred = infer_mutations(split_tokens(&all_mutations), curated.individual());

    let combinations = detect_combinations(&curated_matches, &inferred, curated.combinations());

    debug!(
        "{}: {} curated, {} inferred, {} combinations",
        input.sequence_id,
        curated_matches.len(),
        inferred.len(),
        combinations.len()
    );

    SampleRecord {
        sequence_id: input.sequence_id.clone(),
        all_mutations,
        curated: curated_matches,
        inferred,
        combinations,
    }
}

///
/// Everything produced for one cohort file.
///
#[derive(Debug, Clone, Default)]
pub struct CohortSummary {
    pub records: Vec<SampleRecord>,
    pub frequencies: Vec<FrequencyRow>,
}

///
/// Screen every sample of a cohort, in order, and tally the results.
///
pub fn screen_cohort(samples: &[SampleInput], curated: &CuratedList) -> CohortSummary {
    if curated.is_empty() {
        warn!("Curated list is empty; only observed mutations will be counted.");
    }

    let records: Vec<SampleRecord> = samples
        .iter()
        .map(|sample| screen_sample(sample, curated))
        .collect();
    let frequencies = FrequencyAccumulator::new().observe_all(&records).rows();

    CohortSummary {
        records,
        frequencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::models::{Mutation, MutationType};

    #[fixture]
    fn curated() -> CuratedList {
        let mut curated = CuratedList::default();
        curated.add_entry("HA", "E75K");
        curated.add_entry("HA", "E75K+M128L");
        curated
    }

    #[rstest]
    fn test_reference_call_does_not_complete_combination(curated: CuratedList) {
        let sample = SampleInput::new("sample1", "HA:M128L", "", "");
        let record = screen_sample(&sample, &curated);

        assert_eq!(record.all_mutations_field(), "HA:M128L");
        assert_eq!(record.curated_field(), "None");
        assert_eq!(record.inferred_field(), "HA:E75E");
        assert_eq!(record.combinations_field(), "None");
    }

    #[rstest]
    fn test_observed_curated_mutations(curated: CuratedList) {
        let mut curated = curated;
        curated.add_entry("HA", "M128X");
        let sample = SampleInput::new("sample1", "HA:E75K,HA:M128L", "HA:K80-", "");
        let record = screen_sample(&sample, &curated);

        assert_eq!(
            record.curated,
            vec![Mutation::new("HA", "E75K"), Mutation::new("HA", "M128L")]
        );
        assert!(record.inferred.is_empty());
        assert_eq!(record.combinations, vec!["E75K+M128L".to_string()]);
        assert_eq!(record.all_mutations, "HA:E75K,HA:M128L,HA:K80-");
    }

    #[rstest]
    fn test_sample_without_mutations(curated: CuratedList) {
        let sample = SampleInput::new("empty", "", "", "");
        let record = screen_sample(&sample, &curated);

        assert_eq!(record.all_mutations_field(), "None");
        assert_eq!(record.inferred, vec![Mutation::new("HA", "E75E")]);
        assert!(record.combinations.is_empty());
    }

    #[rstest]
    fn test_malformed_tokens_kept_in_raw_field(curated: CuratedList) {
        let sample = SampleInput::new("s", "E75K,HA:E75K", "", "");
        let record = screen_sample(&sample, &curated);

        assert_eq!(record.all_mutations, "E75K,HA:E75K");
        assert_eq!(record.curated, vec![Mutation::new("HA", "E75K")]);
    }

    #[rstest]
    fn test_screen_cohort_with_individual_constituent(curated: CuratedList) {
        let mut curated = curated;
        curated.add_entry("HA", "M128L");
        let samples = vec![
            SampleInput::new("s1", "HA:M128L", "", ""),
            SampleInput::new("s2", "HA:E75K,HA:M128L", "", ""),
        ];
        let summary = screen_cohort(&samples, &curated);

        assert_eq!(summary.records[1].combinations, vec!["E75K+M128L".to_string()]);
        let rows: Vec<(&str, u64, MutationType)> = summary
            .frequencies
            .iter()
            .map(|row| (row.key.as_str(), row.count, row.kind))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("HA:M128L", 2, MutationType::Individual),
                ("HA:E75K", 1, MutationType::Individual),
                ("E75K+M128L", 1, MutationType::Combination),
                ("HA:E75E", 1, MutationType::Inferred),
            ]
        );
    }

    #[rstest]
    fn test_screen_cohort(curated: CuratedList) {
        let samples = vec![
            SampleInput::new("s1", "HA:M128L", "", ""),
            SampleInput::new("s2", "HA:E75K,HA:M128L", "", ""),
        ];
        let summary = screen_cohort(&samples, &curated);

        assert_eq!(summary.records.len(), 2);
        // M128L is curated only inside the combination, so s2 cannot complete it
        assert_eq!(summary.records[1].curated, vec![Mutation::new("HA", "E75K")]);
        assert!(summary.records[1].combinations.is_empty());
        let rows: Vec<(&str, u64, MutationType, f64)> = summary
            .frequencies
            .iter()
            .map(|row| (row.key.as_str(), row.count, row.kind, row.frequency))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("HA:M128L", 2, MutationType::Individual, 1.0),
                ("HA:E75K", 1, MutationType::Individual, 0.5),
                ("HA:E75E", 1, MutationType::Inferred, 0.5),
            ]
        );
    }
}
