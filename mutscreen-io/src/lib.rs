//! # Input/Output for mutation screening.
//!
//! This crate sits between the screening engine in `mutscreen-core` and the
//! files around it: the tab-separated sample table written by the variant
//! caller, curated mutation tables, and the `_summary.csv` /
//! `_freq_summary.csv` pair produced per dataset. It also carries the
//! helpers for running many datasets at once, for merging their outputs
//! into cohort-wide tables, and for gathering consensus FASTA files under
//! one naming scheme before they reach the caller.
//!
pub mod batch;
pub mod clean;
pub mod combine;
pub mod consts;
pub mod curated;
pub mod error;
pub mod pipeline;
pub mod prepare;
pub mod samples;
pub mod summary;
pub mod utils;

// re-expose core functions
pub use batch::*;
pub use clean::*;
pub use combine::*;
pub use curated::*;
pub use error::*;
pub use pipeline::*;
pub use prepare::*;
pub use samples::*;
pub use summary::*;
