
use thiserror::Error;

/// All the ways a k-mer analysis call can fail.
#[derive(Error, Debug)]
pub enum KmerError {
    /// A symbol outside of {A, C, G, T} was found in the input
    #[error("invalid nucleotide {symbol:?} at position {position}")]
    InvalidAlphabet {
        /// the offending symbol
        symbol: char,
        /// zero-based position of the symbol in its string
        position: usize
    },
    /// Two strings (or a string and a profile) were required to have the same length
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// the required length
        expected: usize,
        /// the length that was provided
        actual: usize
    },
    /// A numeric parameter is outside of its meaningful range
    #[error("degenerate parameters: {0}")]
    DegenerateParameters(String),
    /// A multi-sequence operation received no sequences
    #[error("empty input: {0}")]
    EmptyInput(String),
    /// `k` is larger than what the requested structure can represent in memory
    #[error("k-mer size {k} exceeds the maximum of {max}")]
    KmerTooLarge {
        /// the requested k-mer size
        k: usize,
        /// the allowed ceiling
        max: usize
    },
    /// The neighborhood of a k-mer is too large to enumerate
    #[error("neighborhood of a {k}-mer with up to {d} mismatches is too large to enumerate")]
    SearchSpaceTooLarge {
        /// the k-mer size
        k: usize,
        /// the mismatch budget
        d: usize
    },
    /// A profile matrix entry is negative or not a finite number
    #[error("invalid profile value {value} for nucleotide {nucleotide} at position {position}")]
    InvalidProfileValue {
        /// the offending entry
        value: f64,
        /// the row of the entry (0=A, 1=C, 2=G, 3=T)
        nucleotide: usize,
        /// the column of the entry
        position: usize
    },
    /// A pattern code does not fit in `k` base-4 digits
    #[error("pattern code {code} is out of range for k={k}")]
    CodeOutOfRange {
        /// the code that was passed in
        code: u64,
        /// the requested k-mer size
        k: usize
    },
    /// Failure while reading a dataset
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A dataset was readable but not parseable
    #[error("malformed dataset: {0}")]
    Dataset(String)
}

/// Shorthand result type used throughout the crate
pub type Result<T> = std::result::Result<T, KmerError>;

/// Helper that fails with `DegenerateParameters` when `k` is zero
/// # Arguments
/// * `k` - the k-mer size to check
#[inline]
pub(crate) fn check_kmer_size(k: usize) -> Result<()> {
    if k == 0 {
        Err(KmerError::DegenerateParameters("k-mer size must be at least 1".to_string()))
    } else {
        Ok(())
    }
}
