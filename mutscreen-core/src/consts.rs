// notation
pub const GENE_SEPARATOR: char = ':';
pub const DELETION_MARKER: char = '-';
pub const WILDCARD: char = 'X';
pub const COMBINATION_SEPARATOR: char = '+';

// raw observed fields are comma-joined, summary fields are ", "-joined
pub const TOKEN_SEPARATOR: char = ',';
pub const LIST_SEPARATOR: &str = ", ";
pub const NONE_SENTINEL: &str = "None";
