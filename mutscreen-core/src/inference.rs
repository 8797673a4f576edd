//! Reference-allele inference for curated positions a sample never reports.
//!
//! The upstream caller only lists differences from the reference sequence, so
//! a curated position that appears nowhere in a sample's observed tokens is
//! taken to carry the reference allele. Coverage is not checked: a position
//! that was never sequenced looks the same as one that matches the reference.
//!
//! Observed positions are pooled across genes. A change at position 75 of one
//! gene therefore suppresses inference at position 75 of every other gene.
use fxhash::FxHashSet as HashSet;
use log::debug;

use crate::models::Mutation;

///
/// Collect the codon positions of all observed tokens, regardless of gene.
///
/// Deletion tokens contribute their position; tokens without a gene
/// separator contribute nothing.
///
pub fn observed_positions<'a>(tokens: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    tokens
        .into_iter()
        .filter_map(Mutation::split_token)
        .map(|mutation| mutation.position())
        .collect()
}

///
/// Infer reference calls for curated individual entries at unobserved
/// positions.
///
/// # Arguments:
/// - `observed`: the sample's observed tokens
/// - `curated`: curated individual entries, in load order
///
/// # Returns:
/// - reference calls (`Gene:RefPosRef`), deduplicated with the first
///   occurrence kept in place
///
pub fn infer_mutations<'a>(
    observed: impl IntoIterator<Item = &'a str>,
    curated: &[Mutation],
) -> Vec<Mutation> {
    let positions = observed_positions(observed);

    let mut candidates = Vec::new();
    for mutation in curated {
        if positions.contains(&mutation.position()) {
            continue;
        }
        match mutation.reference_call() {
            Some(call) => candidates.push(call),
            None => debug!("Curated entry has no reference allele: {}", mutation),
        }
    }

    dedup_in_order(candidates)
}

fn dedup_in_order(mutations: Vec<Mutation>) -> Vec<Mutation> {
    let mut seen = HashSet::default();
    mutations
        .into_iter()
        .filter(|mutation| seen.insert(mutation.clone()))
        .collect()
}
