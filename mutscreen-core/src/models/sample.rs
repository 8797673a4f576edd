use std::fmt::Display;

use crate::consts::{LIST_SEPARATOR, NONE_SENTINEL, TOKEN_SEPARATOR};
use crate::models::mutation::Mutation;

///
/// One row of the sample table: a sequence and the changes the upstream
/// caller reported for it. Missing fields are empty strings.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleInput {
    pub sequence_id: String,
    pub substitutions: String,
    pub deletions: String,
    pub insertions: String,
}

impl SampleInput {
    pub fn new(sequence_id: &str, substitutions: &str, deletions: &str, insertions: &str) -> Self {
        Self {
            sequence_id: sequence_id.to_string(),
            substitutions: substitutions.to_string(),
            deletions: deletions.to_string(),
            insertions: insertions.to_string(),
        }
    }

    ///
    /// Substitutions, deletions and insertions joined by commas, skipping
    /// empty fields.
    ///
    pub fn all_mutations(&self) -> String {
        let separator = TOKEN_SEPARATOR.to_string();
        [&self.substitutions, &self.deletions, &self.insertions]
            .into_iter()
            .filter(|field| !field.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

///
/// Screening result for one sample.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleRecord {
    pub sequence_id: String,
    /// Raw observed field, kept verbatim.
    pub all_mutations: String,
    /// Observed tokens that matched a curated entry, in observed order.
    pub curated: Vec<Mutation>,
    /// Reference calls at curated positions with no observed change.
    pub inferred: Vec<Mutation>,
    /// Names of combinations fully covered by curated and inferred calls.
    pub combinations: Vec<String>,
}

impl SampleRecord {
    ///
    /// Split the raw observed field into trimmed, non-empty tokens.
    ///
    pub fn observed_tokens(&self) -> impl Iterator<Item = &str> {
        split_tokens(&self.all_mutations)
    }

    pub fn all_mutations_field(&self) -> String {
        if self.all_mutations.is_empty() {
            NONE_SENTINEL.to_string()
        } else {
            self.all_mutations.clone()
        }
    }

    pub fn curated_field(&self) -> String {
        join_or_none(&self.curated)
    }

    pub fn inferred_field(&self) -> String {
        join_or_none(&self.inferred)
    }

    pub fn combinations_field(&self) -> String {
        join_or_none(&self.combinations)
    }
}

pub fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(TOKEN_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

///
/// Join a list for a summary cell, writing the sentinel for an empty list.
///
pub fn join_or_none<T: Display>(items: &[T]) -> String {
    if items.is_empty() {
        return NONE_SENTINEL.to_string();
    }
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}
