use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationParseError {
    #[error("Mutation token has no gene separator: {0}")]
    MissingGeneSeparator(String),

    #[error("Mutation token is a deletion: {0}")]
    DeletionMarker(String),
}
