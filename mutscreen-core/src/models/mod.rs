pub mod curated;
pub mod frequency;
pub mod mutation;
pub mod sample;

// re-export for cleaner imports
pub use self::curated::{Combination, CuratedList};
pub use self::frequency::{FrequencyRow, MutationType};
pub use self::mutation::Mutation;
pub use self::sample::{SampleInput, SampleRecord};
