
extern crate log;

use log::debug;

use crate::errors::{check_kmer_size, KmerError, Result};
use crate::string_util;

/// largest `k` that fits into a u64 pattern code
pub const MAX_CODE_K: usize = 32;

// a frequency array has 4^k slots, 12 gives ~16.7M u64 (~134MB) which is about as much as we want to allocate
// for a single call; 13 would be 4x that
pub const MAX_ARRAY_K: usize = 12;

/// Returns the bit mask covering the 2*k low bits of a code
#[inline]
fn code_mask(k: usize) -> u64 {
    if k >= MAX_CODE_K {
        u64::MAX
    } else {
        (1u64 << (2 * k)) - 1
    }
}

/// Number of slots in a frequency array for `k`, i.e. 4^k
#[inline]
pub fn array_len(k: usize) -> usize {
    1usize << (2 * k)
}

/// Encodes a k-mer that is already known to be valid, A=0, C=1, G=2, T=3 with the first base as the most significant digit
/// # Arguments
/// * `pattern` - the ASCII k-mer, at most 32 long
#[inline]
pub(crate) fn encode_bytes(pattern: &[u8]) -> u64 {
    pattern.iter()
        .fold(0u64, |code, &c| (code << 2) | string_util::nucleotide_to_int(c) as u64)
}

/// Decodes a code into `k` ASCII bases, the code is assumed to be in range
#[inline]
pub(crate) fn decode_bytes(mut code: u64, k: usize) -> Vec<u8> {
    //least significant digit first, then flip it around
    let mut digits: Vec<u8> = Vec::<u8>::with_capacity(k);
    for _ in 0..k {
        digits.push((code % 4) as u8);
        code /= 4;
    }
    digits.reverse();
    string_util::convert_itos(&digits).into_bytes()
}

/// Returns the code of every k-length window of an already validated sequence, in window order.
/// The codes are rolled forward so each window costs O(1) instead of O(k).
/// # Arguments
/// * `seq` - the ASCII sequence
/// * `k` - the window length, at most 32
pub(crate) fn rolling_codes(seq: &[u8], k: usize) -> Vec<u64> {
    if seq.len() < k || k == 0 {
        return vec![];
    }
    let mask = code_mask(k);
    let mut ret: Vec<u64> = Vec::<u64>::with_capacity(seq.len() - k + 1);
    let mut code: u64 = encode_bytes(&seq[..k]);
    ret.push(code);
    for &c in seq[k..].iter() {
        code = ((code << 2) | string_util::nucleotide_to_int(c) as u64) & mask;
        ret.push(code);
    }
    ret
}

/// Maps a k-mer to its base-4 integer code (A=0, C=1, G=2, T=3, most significant digit first).
/// # Arguments
/// * `pattern` - the k-mer to encode, 1 to 32 bases long
/// # Examples
/// ```rust
/// use kmotif::pattern_codec::encode;
/// assert_eq!(encode("A").unwrap(), 0);
/// assert_eq!(encode("ATGCAA").unwrap(), 912);
/// assert!(encode("ACGN").is_err());
/// ```
pub fn encode(pattern: &str) -> Result<u64> {
    let k: usize = pattern.len();
    check_kmer_size(k)?;
    if k > MAX_CODE_K {
        return Err(KmerError::KmerTooLarge { k, max: MAX_CODE_K });
    }
    string_util::validate_dna(pattern)?;
    Ok(encode_bytes(pattern.as_bytes()))
}

/// The inverse of `encode(...)`; produces the length `k` pattern for `code`.
/// # Arguments
/// * `code` - the pattern code, must be less than 4^k
/// * `k` - the length of the pattern to produce
/// # Examples
/// ```rust
/// use kmotif::pattern_codec::decode;
/// assert_eq!(decode(0, 4).unwrap(), "AAAA");
/// assert_eq!(decode(5437, 8).unwrap(), "ACCCATTC");
/// assert!(decode(16, 2).is_err());
/// ```
pub fn decode(code: u64, k: usize) -> Result<String> {
    check_kmer_size(k)?;
    if k > MAX_CODE_K {
        return Err(KmerError::KmerTooLarge { k, max: MAX_CODE_K });
    }
    if code > code_mask(k) {
        return Err(KmerError::CodeOutOfRange { code, k });
    }
    Ok(string_util::normalize_bytes(&decode_bytes(code, k)))
}

/// Counts every k-mer of `sequence` into an array of length 4^k indexed by pattern code.
/// The sum of the array is always `max(0, n-k+1)`.
/// # Arguments
/// * `sequence` - the DNA sequence
/// * `k` - the k-mer size, 1 to `MAX_ARRAY_K`
/// # Examples
/// ```rust
/// use kmotif::pattern_codec::{encode, frequency_array};
/// let counts = frequency_array("ACGCGGCTCTGAAA", 2).unwrap();
/// assert_eq!(counts.len(), 16);
/// assert_eq!(counts[encode("CG").unwrap() as usize], 2);
/// assert_eq!(counts.iter().sum::<u64>(), 13);
/// ```
pub fn frequency_array(sequence: &str, k: usize) -> Result<Vec<u64>> {
    check_kmer_size(k)?;
    if k > MAX_ARRAY_K {
        return Err(KmerError::KmerTooLarge { k, max: MAX_ARRAY_K });
    }
    string_util::validate_dna(sequence)?;

    let mut counts: Vec<u64> = vec![0; array_len(k)];
    for code in rolling_codes(sequence.as_bytes(), k) {
        counts[code as usize] += 1;
    }
    debug!("Built frequency array with {} slots for k={}", counts.len(), k);
    Ok(counts)
}
