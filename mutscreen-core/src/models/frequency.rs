#[cfg(feature = "serde")]
use serde::Serialize;

///
/// Which tally a frequency row was counted in.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum MutationType {
    Individual,
    Combination,
    Inferred,
}

///
/// Cohort-level count of one mutation, combination or inferred call.
///
/// `frequency` is always `count` over the number of samples in the cohort.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FrequencyRow {
    #[cfg_attr(feature = "serde", serde(rename = "Mutation/Combination"))]
    pub key: String,
    #[cfg_attr(feature = "serde", serde(rename = "Count"))]
    pub count: u64,
    #[cfg_attr(feature = "serde", serde(rename = "Type"))]
    pub kind: MutationType,
    #[cfg_attr(feature = "serde", serde(rename = "Frequency"))]
    pub frequency: f64,
}
