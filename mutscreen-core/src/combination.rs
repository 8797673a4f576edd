use fxhash::FxHashSet as HashSet;

use crate::models::{Combination, Mutation};

///
/// Names of the combinations whose constituents are all among a sample's
/// curated matches and inferred calls.
///
/// Names come back in the order of `combinations`. A sample with no curated
/// or inferred calls yields an empty list.
///
pub fn detect_combinations(
    curated: &[Mutation],
    inferred: &[Mutation],
    combinations: &[Combination],
) -> Vec<String> {
    let present: HashSet<&Mutation> = curated.iter().chain(inferred.iter()).collect();

    combinations
        .iter()
        .filter(|combination| {
            combination
                .constituents
                .iter()
                .all(|constituent| present.contains(constituent))
        })
        .map(|combination| combination.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::models::CuratedList;

    fn mutations(tokens: &[&str]) -> Vec<Mutation> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[fixture]
    fn curated() -> CuratedList {
        let mut curated = CuratedList::default();
        curated.add_entry("HA", "E75K+M128L");
        curated.add_entry("HA", "E75E+M128L");
        curated.add_entry("NA", "H275Y+I223R");
        curated
    }

    #[rstest]
    fn test_detects_from_curated_and_inferred(curated: CuratedList) {
        let found = detect_combinations(
            &mutations(&["HA:M128L"]),
            &mutations(&["HA:E75E"]),
            curated.combinations(),
        );
        assert_eq!(found, vec!["E75E+M128L".to_string()]);
    }

    #[rstest]
    fn test_partial_combination_is_absent(curated: CuratedList) {
        let found = detect_combinations(
            &mutations(&["NA:H275Y", "HA:M128L"]),
            &[],
            curated.combinations(),
        );
        assert!(found.is_empty());
    }

    #[rstest]
    fn test_order_follows_combinations(curated: CuratedList) {
        let found = detect_combinations(
            &mutations(&["NA:I223R", "NA:H275Y", "HA:E75K", "HA:M128L"]),
            &[],
            curated.combinations(),
        );
        assert_eq!(
            found,
            vec!["E75K+M128L".to_string(), "H275Y+I223R".to_string()]
        );
    }

    #[rstest]
    fn test_empty_sample_yields_nothing(curated: CuratedList) {
        assert!(detect_combinations(&[], &[], curated.combinations()).is_empty());
    }

    #[rstest]
    fn test_presence_is_monotonic(curated: CuratedList) {
        let base = mutations(&["HA:E75K", "HA:M128L"]);
        let before = detect_combinations(&base, &[], curated.combinations());

        let mut extended = base.clone();
        extended.extend(mutations(&["NA:H275Y", "HA:E75E"]));
        let after = detect_combinations(
            &extended,
            &mutations(&["NA:I223R"]),
            curated.combinations(),
        );

        assert!(before.iter().all(|name| after.contains(name)));
        assert_eq!(after.len(), 3);
    }
}
