
extern crate log;

use log::debug;
use std::collections::{HashMap, HashSet};

use crate::distance;
use crate::errors::{check_kmer_size, Result};
use crate::pattern_codec;
use crate::string_util;

/// Returns the starting index of every exact (possibly overlapping) occurrence of `pattern` in `sequence`.
/// # Arguments
/// * `sequence` - the genome to scan
/// * `pattern` - the k-mer to look for
/// # Examples
/// ```rust
/// use kmotif::approx_match::pattern_positions;
/// assert_eq!(pattern_positions("GATATATGCATATACTT", "ATAT").unwrap(), vec![1, 3, 9]);
/// ```
pub fn pattern_positions(sequence: &str, pattern: &str) -> Result<Vec<usize>> {
    approximate_match_positions(pattern, sequence, 0)
}

/// Counts the exact (possibly overlapping) occurrences of `pattern` in `sequence`.
/// # Arguments
/// * `sequence` - the genome to scan
/// * `pattern` - the k-mer to count
/// # Examples
/// ```rust
/// use kmotif::approx_match::pattern_count;
/// assert_eq!(pattern_count("GCGCG", "GCG").unwrap(), 2);
/// ```
pub fn pattern_count(sequence: &str, pattern: &str) -> Result<usize> {
    Ok(pattern_positions(sequence, pattern)?.len())
}

/// Returns every k-mer tied for the most occurrences in `sequence`, counted with a frequency array.
/// An empty set is returned when the sequence has no k-length windows.
/// # Arguments
/// * `sequence` - the genome to scan
/// * `k` - the k-mer size, 1 to `MAX_ARRAY_K`
/// # Examples
/// ```rust
/// use kmotif::approx_match::frequent_patterns;
/// let found = frequent_patterns("ACGTTGCATGTCGCATGATGCATGAGAGCT", 4).unwrap();
/// assert_eq!(found.len(), 2);
/// assert!(found.contains("CATG"));
/// assert!(found.contains("GCAT"));
/// ```
pub fn frequent_patterns(sequence: &str, k: usize) -> Result<HashSet<String>> {
    let counts: Vec<u64> = pattern_codec::frequency_array(sequence, k)?;
    let max_count: u64 = counts.iter().copied().max().unwrap_or(0);
    if max_count == 0 {
        return Ok(HashSet::<String>::new());
    }
    Ok(counts.iter()
        .enumerate()
        .filter(|&(_, &c)| c == max_count)
        .map(|(code, _)| string_util::normalize_bytes(&pattern_codec::decode_bytes(code as u64, k)))
        .collect())
}

/// Returns, in ascending order, every index where a k-length window of `sequence` is within Hamming distance `d` of `pattern`.
/// # Arguments
/// * `pattern` - the pattern to match, `k` is its length
/// * `sequence` - the genome to scan
/// * `d` - the maximum number of mismatches
/// # Examples
/// ```rust
/// use kmotif::approx_match::approximate_match_positions;
/// let genome = "CGCCCGAATCCAGAACGCATTCCCATATTTCGGGACCACTGGCCTCCACGGTACGGACGTCAATCAAAT";
/// let found = approximate_match_positions("ATTCTGGA", genome, 3).unwrap();
/// assert_eq!(found, vec![6, 7, 26, 27]);
/// ```
pub fn approximate_match_positions(pattern: &str, sequence: &str, d: usize) -> Result<Vec<usize>> {
    let k: usize = pattern.len();
    check_kmer_size(k)?;
    string_util::validate_dna(pattern)?;
    string_util::validate_dna(sequence)?;

    let seq: &[u8] = sequence.as_bytes();
    let pat: &[u8] = pattern.as_bytes();
    if seq.len() < k {
        return Ok(vec![]);
    }
    Ok((0..seq.len()-k+1)
        .filter(|&i| distance::hamming_bytes(pat, &seq[i..i+k]) <= d)
        .collect())
}

/// Returns every k-mer tied for the most approximate occurrences in `sequence`.
/// Each window votes for every pattern in its `d`-neighborhood, so a winner does not have to appear exactly.
/// Fails with `SearchSpaceTooLarge` when the windows would generate more than `MAX_SEARCH_WORK` neighbors in total.
/// An empty set is returned when the sequence has no k-length windows.
/// # Arguments
/// * `sequence` - the genome to scan
/// * `k` - the k-mer size
/// * `d` - the maximum number of mismatches
/// # Examples
/// ```rust
/// use kmotif::approx_match::approximate_frequent_patterns;
/// let found = approximate_frequent_patterns("ACGTTGCATGTCGCATGATGCATGAGAGCT", 4, 1).unwrap();
/// assert_eq!(found.len(), 3);
/// assert!(found.contains("GATG"));
/// assert!(found.contains("ATGC"));
/// assert!(found.contains("ATGT"));
/// ```
pub fn approximate_frequent_patterns(sequence: &str, k: usize, d: usize) -> Result<HashSet<String>> {
    check_kmer_size(k)?;
    string_util::validate_dna(sequence)?;
    distance::check_neighborhood(k, d)?;

    let seq: &[u8] = sequence.as_bytes();
    let mut ret: HashSet<String> = HashSet::<String>::new();
    if seq.len() < k {
        return Ok(ret);
    }
    //every window is expanded into its own neighborhood
    distance::check_search_work(k, d, (seq.len()-k+1) as u128)?;

    let mut votes: HashMap<Vec<u8>, u64> = HashMap::<Vec<u8>, u64>::new();
    for i in 0..seq.len()-k+1 {
        for neighbor in distance::neighbors_bytes(&seq[i..i+k], d) {
            *votes.entry(neighbor).or_insert(0) += 1;
        }
    }
    debug!("{} candidate patterns received votes", votes.len());

    let max_votes: u64 = votes.values().copied().max().unwrap_or(0);
    for (pattern, &count) in votes.iter() {
        if count == max_votes {
            ret.insert(string_util::normalize_bytes(pattern));
        }
    }
    Ok(ret)
}
