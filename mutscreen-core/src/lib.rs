//! # Screening engine for curated amino-acid mutations.
//!
//! Given the mutations an upstream caller reported for each sample and a
//! curated list of mutations of interest, this crate decides per sample:
//!
//! - which observed mutations are curated (with `X` wildcard alleles)
//! - which curated positions were never reported, and so carry the
//!   reference allele
//! - which curated combinations are fully present
//!
//! and tallies those calls across the cohort.
//!
//! # Example
//!
//! ```
//! use mutscreen_core::models::{CuratedList, SampleInput};
//! use mutscreen_core::screen_sample;
//!
//! let mut curated = CuratedList::default();
//! curated.add_entry("HA", "E75K");
//! curated.add_entry("HA", "E75K+M128L");
//!
//! let sample = SampleInput::new("sample1", "HA:M128L", "", "");
//! let record = screen_sample(&sample, &curated);
//!
//! assert_eq!(record.inferred_field(), "HA:E75E");
//! assert_eq!(record.combinations_field(), "None");
//! ```
pub mod combination;
pub mod consts;
pub mod errors;
pub mod frequency;
pub mod inference;
pub mod matcher;
pub mod models;
pub mod screen;

// re-exports
pub use combination::detect_combinations;
pub use errors::MutationParseError;
pub use frequency::FrequencyAccumulator;
pub use inference::infer_mutations;
pub use matcher::match_mutation;
pub use screen::{CohortSummary, screen_cohort, screen_sample};
