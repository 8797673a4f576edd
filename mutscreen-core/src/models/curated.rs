use fxhash::FxHashMap as HashMap;

use crate::consts::COMBINATION_SEPARATOR;
use crate::matcher::MatchIndex;
use crate::models::mutation::Mutation;

///
/// A named set of mutations that must all be present to be reported.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub name: String,
    pub constituents: Vec<Mutation>,
}

///
/// The curated mutations of interest for one run.
///
/// Individual entries keep their load order, duplicates included.
/// Combinations keep the order in which each name was first seen; a
/// repeated name replaces the constituents but not the position.
///
#[derive(Debug, Clone, Default)]
pub struct CuratedList {
    individual: Vec<Mutation>,
    combinations: Vec<Combination>,
    combination_to_id: HashMap<String, usize>,
    index: MatchIndex,
}

impl CuratedList {
    ///
    /// Register one row of a curated table.
    ///
    /// An amino-acid field containing `+` defines a combination named by the
    /// whole field, with each part prefixed by the gene. Anything else is an
    /// individual entry `gene:amino_acid`.
    ///
    /// # Arguments:
    /// - `gene`: the gene column of the row
    /// - `amino_acid`: the amino-acid column of the row
    ///
    pub fn add_entry(&mut self, gene: &str, amino_acid: &str) {
        if amino_acid.contains(COMBINATION_SEPARATOR) {
            let constituents = amino_acid
                .split(COMBINATION_SEPARATOR)
                .map(|part| Mutation::new(gene, part))
                .collect();
            self.add_combination(amino_acid, constituents);
        } else {
            self.add_individual(Mutation::new(gene, amino_acid));
        }
    }

    pub fn add_individual(&mut self, mutation: Mutation) {
        self.index.insert(&mutation);
        self.individual.push(mutation);
    }

    pub fn add_combination(&mut self, name: &str, constituents: Vec<Mutation>) {
        match self.combination_to_id.get(name) {
            Some(&id) => self.combinations[id].constituents = constituents,
            None => {
                self.combination_to_id
                    .insert(name.to_string(), self.combinations.len());
                self.combinations.push(Combination {
                    name: name.to_string(),
                    constituents,
                });
            }
        }
    }

    pub fn individual(&self) -> &[Mutation] {
        &self.individual
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    pub fn index(&self) -> &MatchIndex {
        &self.index
    }

    pub fn is_empty(&self) -> bool {
        self.individual.is_empty() && self.combinations.is_empty()
    }
}
