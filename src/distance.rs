
use std::collections::HashSet;

use crate::errors::{check_kmer_size, KmerError, Result};
use crate::string_util;

/// Largest neighborhood we are willing to enumerate in one call.
/// This equals 4^12, so a full 12-mer enumeration (used by median string search) is still allowed.
pub const MAX_NEIGHBORHOOD_SIZE: u128 = 1 << 24;

/// Counts mismatched positions of two equal length byte slices; lengths are not checked
#[inline]
pub(crate) fn hamming_bytes(a: &[u8], b: &[u8]) -> usize {
    a.iter()
        .zip(b.iter())
        .filter(|(x, y)| x != y)
        .count()
}

/// Returns the Hamming distance (number of mismatched positions) between two equal length strings.
/// The comparison is symbol based, so any alphabet is accepted here.
/// # Arguments
/// * `a` - the first string
/// * `b` - the second string, must be the same length as `a`
/// # Examples
/// ```rust
/// use kmotif::distance::hamming_distance;
/// assert_eq!(hamming_distance("GGGCCGTTGGT", "GGACCGTTGAC").unwrap(), 3);
/// assert_eq!(hamming_distance("ACGT", "ACGT").unwrap(), 0);
/// assert!(hamming_distance("ACGT", "ACG").is_err());
/// ```
pub fn hamming_distance(a: &str, b: &str) -> Result<usize> {
    if a.len() != b.len() {
        return Err(KmerError::LengthMismatch { expected: a.len(), actual: b.len() });
    }
    Ok(hamming_bytes(a.as_bytes(), b.as_bytes()))
}

/// Returns the number of strings within Hamming distance `d` of a length `k` string, i.e. sum(C(k,i) * 3^i) for i in 0..=min(d,k).
/// The value is saturated once it passes `MAX_NEIGHBORHOOD_SIZE`, which is all a caller needs to decide if enumeration is reasonable.
/// # Arguments
/// * `k` - the pattern length
/// * `d` - the mismatch budget
/// # Examples
/// ```rust
/// use kmotif::distance::neighborhood_size;
/// assert_eq!(neighborhood_size(3, 0), 1);
/// assert_eq!(neighborhood_size(3, 1), 10);
/// assert_eq!(neighborhood_size(4, 4), 256);
/// ```
pub fn neighborhood_size(k: usize, d: usize) -> u128 {
    let mut total: u128 = 0;
    let mut term: u128 = 1; //C(k, 0) * 3^0
    for i in 0..=d.min(k) {
        total += term;
        if total > MAX_NEIGHBORHOOD_SIZE {
            return total;
        }
        //C(k, i+1) * 3^(i+1) from C(k, i) * 3^i; this division is always exact
        term = term * (k - i) as u128 * 3 / (i + 1) as u128;
    }
    total
}

/// Fails with `SearchSpaceTooLarge` if the neighborhood of a `k`-mer at distance `d` is not worth enumerating
/// # Arguments
/// * `k` - the pattern length
/// * `d` - the mismatch budget
pub fn check_neighborhood(k: usize, d: usize) -> Result<()> {
    if neighborhood_size(k, d) > MAX_NEIGHBORHOOD_SIZE {
        Err(KmerError::SearchSpaceTooLarge { k, d })
    } else {
        Ok(())
    }
}

/// Largest number of neighbor strings a single search may generate across all of its expansions.
pub const MAX_SEARCH_WORK: u128 = 1 << 30;

/// Fails with `SearchSpaceTooLarge` if `expansions` separate `d`-neighborhoods of a `k`-mer add up to more than `MAX_SEARCH_WORK` strings.
/// The single neighborhood must also pass `check_neighborhood(...)`.
/// # Arguments
/// * `k` - the pattern length
/// * `d` - the mismatch budget
/// * `expansions` - how many neighborhoods the caller will enumerate
/// # Examples
/// ```rust
/// use kmotif::distance::check_search_work;
/// assert!(check_search_work(9, 1, 1_000_000).is_ok());
/// assert!(check_search_work(12, 6, 2000).is_err());
/// ```
pub fn check_search_work(k: usize, d: usize, expansions: u128) -> Result<()> {
    check_neighborhood(k, d)?;
    if neighborhood_size(k, d).saturating_mul(expansions) > MAX_SEARCH_WORK {
        Err(KmerError::SearchSpaceTooLarge { k, d })
    } else {
        Ok(())
    }
}

/// Core recursive neighbor generation on raw ASCII bases. Strings are produced in a fixed order and without duplicates.
/// For each neighbor of the suffix, if mismatch budget remains then all four first bases are allowed, otherwise only the pattern's own first base.
/// # Arguments
/// * `pattern` - the ASCII pattern, already validated
/// * `d` - the mismatch budget
pub(crate) fn neighbors_bytes(pattern: &[u8], d: usize) -> Vec<Vec<u8>> {
    match pattern.len() {
        0 => vec![vec![]],
        1 => {
            if d == 0 {
                vec![pattern.to_vec()]
            } else {
                string_util::NUCLEOTIDES.iter().map(|&c| vec![c]).collect()
            }
        },
        pattern_len => {
            let first: u8 = pattern[0];
            let suffix: &[u8] = &pattern[1..];
            let mut ret: Vec<Vec<u8>> = vec![];
            for neighbor in neighbors_bytes(suffix, d) {
                if hamming_bytes(suffix, &neighbor) < d {
                    //budget remains, any base can lead
                    for &c in string_util::NUCLEOTIDES.iter() {
                        let mut extended: Vec<u8> = Vec::<u8>::with_capacity(pattern_len);
                        extended.push(c);
                        extended.extend_from_slice(&neighbor);
                        ret.push(extended);
                    }
                } else {
                    let mut extended: Vec<u8> = Vec::<u8>::with_capacity(pattern_len);
                    extended.push(first);
                    extended.extend_from_slice(&neighbor);
                    ret.push(extended);
                }
            }
            ret
        }
    }
}

/// Returns every string over {A,C,G,T} within Hamming distance `d` of `pattern`, including `pattern` itself.
/// # Arguments
/// * `pattern` - the pattern to mutate
/// * `d` - the maximum number of mismatches
/// # Examples
/// ```rust
/// use kmotif::distance::neighbors;
/// let n = neighbors("ACG", 1).unwrap();
/// assert_eq!(n.len(), 10);
/// assert!(n.contains("ACG"));
/// assert!(n.contains("TCG"));
/// assert!(!n.contains("TTG"));
/// ```
pub fn neighbors(pattern: &str, d: usize) -> Result<HashSet<String>> {
    check_kmer_size(pattern.len())?;
    string_util::validate_dna(pattern)?;
    check_neighborhood(pattern.len(), d)?;
    Ok(neighbors_bytes(pattern.as_bytes(), d)
        .iter()
        .map(|n| string_util::normalize_bytes(n))
        .collect())
}
