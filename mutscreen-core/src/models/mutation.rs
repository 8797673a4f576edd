use std::fmt::{self, Display};
use std::str::FromStr;

use crate::consts::{DELETION_MARKER, GENE_SEPARATOR, WILDCARD};
use crate::errors::MutationParseError;

///
/// An amino-acid change in `Gene:RefPosAlt` notation, e.g. `HA:E75K`.
///
/// `aa` holds everything after the first gene separator. The reference,
/// position and alternate parts are derived from it on demand, so a token
/// always formats back to exactly what was parsed.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Mutation {
    pub gene: String,
    pub aa: String,
}

impl Mutation {
    pub fn new(gene: &str, aa: &str) -> Self {
        Self {
            gene: gene.to_string(),
            aa: aa.to_string(),
        }
    }

    ///
    /// Split a token at its first gene separator without rejecting deletion
    /// markers. Used where only the position of a token matters.
    ///
    pub fn split_token(token: &str) -> Option<Self> {
        token
            .split_once(GENE_SEPARATOR)
            .map(|(gene, aa)| Self::new(gene, aa))
    }

    ///
    /// Codon position as the digit run of the allele field (`E75K` -> `75`).
    ///
    pub fn position(&self) -> String {
        codon_position(&self.aa)
    }

    /// First symbol of the allele field.
    pub fn reference(&self) -> Option<char> {
        self.aa.chars().next()
    }

    pub fn is_wildcard(&self) -> bool {
        self.aa.ends_with(WILDCARD)
    }

    ///
    /// The allele field without its final symbol: reference plus position.
    ///
    pub fn without_alt(&self) -> &str {
        strip_last_char(&self.aa)
    }

    ///
    /// The reference-allele call at this mutation's position
    /// (`HA:E75K` -> `HA:E75E`). `None` when the allele field is empty.
    ///
    pub fn reference_call(&self) -> Option<Mutation> {
        let reference = self.reference()?;
        Some(Mutation {
            gene: self.gene.clone(),
            aa: format!("{}{}{}", reference, self.position(), reference),
        })
    }

    pub fn as_string(&self) -> String {
        format!("{}{}{}", self.gene, GENE_SEPARATOR, self.aa)
    }
}

impl FromStr for Mutation {
    type Err = MutationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(DELETION_MARKER) {
            return Err(MutationParseError::DeletionMarker(s.to_string()));
        }
        Mutation::split_token(s)
            .ok_or_else(|| MutationParseError::MissingGeneSeparator(s.to_string()))
    }
}

impl Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

///
/// Concatenate every digit of an allele field, in order.
///
/// Letters are discarded wherever they occur, so `E75K` and `75` both give
/// `75` while zero padding is kept (`E075K` -> `075`).
///
pub fn codon_position(aa: &str) -> String {
    aa.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn strip_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
