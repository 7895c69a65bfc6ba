
use bio::alphabets::dna;

use crate::errors::{KmerError, Result};

/// the nucleotides in code order, A=0, C=1, G=2, T=3
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// marks a byte that is not part of the alphabet in `STRING_TO_INT`
pub const INVALID_BASE: u8 = 4;

/// contains ASCII to integer encoding
const STRING_TO_INT: [u8; 256] = build_stoi();

/// builds up the STRING_TO_INT const for us
const fn build_stoi() -> [u8; 256] {
    let mut ret: [u8; 256] = [INVALID_BASE; 256];

    ret['A' as usize] = 0;
    ret['C' as usize] = 1;
    ret['G' as usize] = 2;
    ret['T' as usize] = 3;

    ret
}

/// Returns the base-4 digit of a nucleotide, or `INVALID_BASE` for anything else
/// # Arguments
/// * `symbol` - the ASCII nucleotide
/// # Examples
/// ```rust
/// use kmotif::string_util::{nucleotide_to_int, INVALID_BASE};
/// assert_eq!(nucleotide_to_int(b'G'), 2);
/// assert_eq!(nucleotide_to_int(b'N'), INVALID_BASE);
/// ```
#[inline]
pub fn nucleotide_to_int(symbol: u8) -> u8 {
    STRING_TO_INT[symbol as usize]
}

/// Checks that every character of `seq` is one of A, C, G, or T.
/// Lower-case symbols are rejected, callers that accept them should upper-case first.
/// # Arguments
/// * `seq` - the sequence to check
/// # Examples
/// ```rust
/// use kmotif::string_util::validate_dna;
/// assert!(validate_dna("ACGTTGCA").is_ok());
/// assert!(validate_dna("ACGNT").is_err());
/// ```
pub fn validate_dna(seq: &str) -> Result<()> {
    for (position, symbol) in seq.chars().enumerate() {
        if !symbol.is_ascii() || STRING_TO_INT[symbol as usize] == INVALID_BASE {
            return Err(KmerError::InvalidAlphabet { symbol, position });
        }
    }
    Ok(())
}

/// Validates every sequence in a collection, see `validate_dna(...)`
/// # Arguments
/// * `dna` - the collection of sequences
#[inline]
pub fn validate_all<S: AsRef<str>>(dna: &[S]) -> Result<()> {
    for seq in dna.iter() {
        validate_dna(seq.as_ref())?;
    }
    Ok(())
}

/// Helper function that converts base-4 digits back to a nucleotide String
/// # Arguments
/// * `iseq` - the digit sequence to convert, every value must be < 4
/// # Examples
/// ```rust
/// use kmotif::string_util::convert_itos;
/// let test: Vec<u8> = vec![3, 2, 1, 0];
/// assert_eq!(&convert_itos(&test), "TGCA");
/// ```
#[inline]
pub fn convert_itos(iseq: &[u8]) -> String {
    iseq.iter()
        .map(|&v| NUCLEOTIDES[v as usize] as char)
        .collect::<String>()
}

/// Returns the reverse complement of a DNA sequence.
/// # Arguments
/// * `seq` - the sequence, must only contain A, C, G, and T
/// # Examples
/// ```rust
/// use kmotif::string_util::reverse_complement;
/// assert_eq!(reverse_complement("AAAACCCGGT").unwrap(), "ACCGGGTTTT");
/// assert!(reverse_complement("ACGU").is_err());
/// ```
pub fn reverse_complement(seq: &str) -> Result<String> {
    validate_dna(seq)?;
    let rc: Vec<u8> = dna::revcomp(seq.as_bytes());

    //validated input means the output is plain ASCII
    String::from_utf8(rc).map_err(|e| KmerError::Dataset(e.to_string()))
}

/// Converts raw bytes from a reader into an upper-case String, the only normalization applied to loaded data
/// # Arguments
/// * `raw` - the raw sequence bytes
#[inline]
pub fn normalize_bytes(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_uppercase()
}
