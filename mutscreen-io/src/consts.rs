// sample table (tab separated)
pub const SEQ_NAME_COL: &str = "seqName";
pub const SUBSTITUTIONS_COL: &str = "aaSubstitutions";
pub const DELETIONS_COL: &str = "aaDeletions";
pub const INSERTIONS_COL: &str = "aaInsertions";
pub const SAMPLE_DELIMITER: u8 = b'\t';

// curated table (comma separated)
pub const GENE_COL: &str = "Gene";
pub const AMINO_ACID_COL: &str = "AminoAcid";
pub const COMBINATION_COL: &str = "Combination";
pub const REASON_COL: &str = "Reason_for_Inclusion";
pub const CURATED_COLUMNS: [&str; 4] = [GENE_COL, AMINO_ACID_COL, COMBINATION_COL, REASON_COL];

// per-sample summary
pub const SEQUENCE_ID_COL: &str = "Sequence_ID";
pub const ALL_MUTATIONS_COL: &str = "All_Mutations";
pub const CURATED_MUTATIONS_COL: &str = "Curated_Mutations";
pub const INFERRED_MUTATIONS_COL: &str = "Inferred_Mutations";
pub const COMBINATION_PRESENT_COL: &str = "Combination_Present";
pub const SUMMARY_COLUMNS: [&str; 5] = [
    SEQUENCE_ID_COL,
    ALL_MUTATIONS_COL,
    CURATED_MUTATIONS_COL,
    INFERRED_MUTATIONS_COL,
    COMBINATION_PRESENT_COL,
];

// frequency summary
pub const KEY_COL: &str = "Mutation/Combination";
pub const COUNT_COL: &str = "Count";
pub const TYPE_COL: &str = "Type";
pub const FREQUENCY_COL: &str = "Frequency";
pub const FREQUENCY_COLUMNS: [&str; 4] = [KEY_COL, COUNT_COL, TYPE_COL, FREQUENCY_COL];

// cohort-wide tables
pub const MUTATION_LIST_COL: &str = "Mutation_List";
pub const MUTATION_LIST_FILE: &str = "Mutation_List.csv";
pub const MUTATION_COUNTS_FILE: &str = "Mutation_Counts.csv";

// file naming
pub const SUMMARY_SUFFIX: &str = "_summary.csv";
pub const FREQ_SUMMARY_SUFFIX: &str = "_freq_summary.csv";
pub const CLEANED_SUFFIX: &str = "_cleaned.tsv";
pub const CSV_FILE_EXTENSION: &str = "csv";
pub const TSV_FILE_EXTENSION: &str = "tsv";
pub const GZ_FILE_EXTENSION: &str = "gz";
pub const DEFAULT_OUTPUT_PREFIX: &str = "mutation_summary";

// consensus sequences; checked in order, first match wins
pub const FASTA_SUFFIXES: [&str; 4] = [".consensus.fasta", ".irma.fasta", ".fa", ".fasta"];
pub const FASTA_SUFFIX: &str = ".fasta";
