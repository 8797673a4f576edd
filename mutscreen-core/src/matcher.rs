//! Matching observed mutation tokens against curated entries.
//!
//! A curated entry whose allele ends in the wildcard symbol (`HA:E75X`) matches
//! any observed allele at the same reference and position of the same gene.
//! Every other entry requires the full allele field to be equal.
use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
use log::{debug, warn};

use crate::errors::MutationParseError;
use crate::models::{CuratedList, Mutation};

///
/// Decide whether one observed mutation satisfies one curated entry.
///
pub fn entry_matches(observed: &Mutation, curated: &Mutation) -> bool {
    if observed.gene != curated.gene {
        return false;
    }
    if curated.is_wildcard() && observed.without_alt() == curated.without_alt() {
        return true;
    }
    observed.aa == curated.aa
}

///
/// Lookup structure over curated individual entries, keyed by gene.
///
/// Exact entries are stored by their full allele field and wildcard entries
/// by reference plus position, so a query costs two hash probes regardless
/// of the size of the curated list.
///
#[derive(Debug, Clone, Default)]
pub struct MatchIndex {
    exact: HashMap<String, HashSet<String>>,
    wildcard: HashMap<String, HashSet<String>>,
}

impl MatchIndex {
    pub fn insert(&mut self, curated: &Mutation) {
        self.exact
            .entry(curated.gene.clone())
            .or_default()
            .insert(curated.aa.clone());

        if curated.is_wildcard() {
            self.wildcard
                .entry(curated.gene.clone())
                .or_default()
                .insert(curated.without_alt().to_string());
        }
    }

    pub fn matches(&self, observed: &Mutation) -> bool {
        let exact = self
            .exact
            .get(&observed.gene)
            .is_some_and(|alleles| alleles.contains(&observed.aa));

        exact
            || self
                .wildcard
                .get(&observed.gene)
                .is_some_and(|prefixes| prefixes.contains(observed.without_alt()))
    }
}

///
/// Match a raw observed token against the curated list.
///
/// Tokens that fail to parse never match; the reason is logged and the
/// caller carries on with the next token.
///
pub fn match_mutation(token: &str, curated: &CuratedList) -> Option<Mutation> {
    match token.parse::<Mutation>() {
        Ok(mutation) => curated.index().matches(&mutation).then_some(mutation),
        Err(err @ MutationParseError::DeletionMarker(_)) => {
            debug!("Skipping token for matching: {}", err);
            None
        }
        Err(err) => {
            warn!("Unable to process mutation: {}", err);
            None
        }
    }
}
