
extern crate log;

use log::debug;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use crate::errors::{check_kmer_size, KmerError, Result};
use crate::pattern_codec;
use crate::string_util;

/// stores the options shared by every clump finding algorithm
#[derive(Clone, Debug, PartialEq)]
pub struct ClumpParameters {
    /// The length of the k-mers to look for, `k`
    pub kmer_size: usize,
    /// The window length a clump must fit inside of, `L`
    pub window_len: usize,
    /// The minimum number of occurrences inside one window, `t`
    pub min_count: u64
}

impl ClumpParameters {
    /// Checks that the parameters describe a meaningful search.
    /// A `min_count` of 1 is allowed and simply makes every k-mer a clump.
    /// # Examples
    /// ```rust
    /// use kmotif::clump_finder::ClumpParameters;
    /// let params = ClumpParameters { kmer_size: 5, window_len: 50, min_count: 4 };
    /// assert!(params.validate().is_ok());
    /// let params = ClumpParameters { kmer_size: 9, window_len: 8, min_count: 4 };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        check_kmer_size(self.kmer_size)?;
        if self.window_len < self.kmer_size {
            return Err(KmerError::DegenerateParameters(format!(
                "window length {} is shorter than the k-mer size {}", self.window_len, self.kmer_size
            )));
        }
        if self.min_count == 0 {
            return Err(KmerError::DegenerateParameters("minimum count must be at least 1".to_string()));
        }
        Ok(())
    }

    /// The window length actually used for a sequence; a sequence shorter than `L` is its own single window
    #[inline]
    fn effective_window(&self, seq_len: usize) -> usize {
        self.window_len.min(seq_len)
    }
}

/// The available clump finding implementations, all of which return the same set
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClumpAlgorithm {
    /// whole-sequence occurrence lists, then a span check per pattern
    Naive,
    /// a fresh k-mer count for every window
    Chunked,
    /// one frequency array slid across the sequence
    Optimal
}

impl FromStr for ClumpAlgorithm {
    type Err = KmerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "naive" => Ok(ClumpAlgorithm::Naive),
            "chunked" => Ok(ClumpAlgorithm::Chunked),
            "optimal" => Ok(ClumpAlgorithm::Optimal),
            other => Err(KmerError::DegenerateParameters(format!("unknown clump algorithm \"{}\"", other)))
        }
    }
}

/// transient occurrence data for a single pattern in the naive algorithm
struct FrequencyRecord {
    count: u64,
    positions: Vec<usize>
}

/// Finds every k-mer occurring at least `t` times inside some window of length `L` using the selected algorithm.
/// # Arguments
/// * `sequence` - the genome to scan
/// * `params` - the clump parameters (k, L, t)
/// * `algorithm` - which implementation to run
/// # Examples
/// ```rust
/// use kmotif::clump_finder::{find_clumps, ClumpAlgorithm, ClumpParameters};
/// let genome = "CGGACTCGACAGATGTGAAGAACGACAATGTGAAGACTCGACACGACATTGTGAAGAGGACGACAAT";
/// let params = ClumpParameters { kmer_size: 5, window_len: 50, min_count: 4 };
/// let clumps = find_clumps(genome, &params, ClumpAlgorithm::Optimal).unwrap();
/// assert_eq!(clumps.len(), 1);
/// assert!(clumps.contains("CGACA"));
/// ```
pub fn find_clumps(sequence: &str, params: &ClumpParameters, algorithm: ClumpAlgorithm) -> Result<HashSet<String>> {
    let clumps = match algorithm {
        ClumpAlgorithm::Naive => naive_clump_finder(sequence, params)?,
        ClumpAlgorithm::Chunked => chunked_clump_finder(sequence, params)?,
        ClumpAlgorithm::Optimal => optimal_clump_finder(sequence, params)?
    };
    debug!("{:?} clump finder found {} clumps", algorithm, clumps.len());
    Ok(clumps)
}

/// Clump finding by collecting every occurrence of every k-mer over the whole sequence, then checking
/// whether any `t` consecutive occurrences fit inside one window.
/// Worst case is quadratic, only use it on small inputs.
/// # Arguments
/// * `sequence` - the genome to scan
/// * `params` - the clump parameters (k, L, t)
pub fn naive_clump_finder(sequence: &str, params: &ClumpParameters) -> Result<HashSet<String>> {
    params.validate()?;
    string_util::validate_dna(sequence)?;

    let seq: &[u8] = sequence.as_bytes();
    let k: usize = params.kmer_size;
    let mut clumps: HashSet<String> = HashSet::<String>::new();
    if seq.len() < k {
        return Ok(clumps);
    }
    let window: usize = params.effective_window(seq.len());
    let t: usize = params.min_count as usize;

    //first pass, gather every occurrence
    let mut records: HashMap<&[u8], FrequencyRecord> = HashMap::<&[u8], FrequencyRecord>::new();
    for i in 0..seq.len()-k+1 {
        let record = records.entry(&seq[i..i+k]).or_insert(FrequencyRecord {
            count: 0,
            positions: vec![]
        });
        record.count += 1;
        record.positions.push(i);
    }

    //anything under t overall can never be a clump
    for (pattern, record) in records.iter().filter(|(_, r)| r.count >= params.min_count) {
        //positions are sorted, so the tightest run of t occurrences from i always ends at i+t-1
        let positions: &[usize] = &record.positions;
        let found = (0..positions.len()+1-t).any(|i| {
            positions[i+t-1] + k - positions[i] <= window
        });
        if found {
            clumps.insert(string_util::normalize_bytes(pattern));
        }
    }
    Ok(clumps)
}

/// Clump finding that re-counts the k-mers of every length `L` window from scratch.
/// Easier on memory than the naive approach, but still redoes most of the work for overlapping windows.
/// # Arguments
/// * `sequence` - the genome to scan
/// * `params` - the clump parameters (k, L, t)
pub fn chunked_clump_finder(sequence: &str, params: &ClumpParameters) -> Result<HashSet<String>> {
    params.validate()?;
    string_util::validate_dna(sequence)?;

    let seq: &[u8] = sequence.as_bytes();
    let k: usize = params.kmer_size;
    let mut clumps: HashSet<String> = HashSet::<String>::new();
    if seq.len() < k {
        return Ok(clumps);
    }
    let window: usize = params.effective_window(seq.len());

    for start in 0..seq.len()-window+1 {
        let chunk: &[u8] = &seq[start..start+window];
        let mut frequencies: HashMap<&[u8], u64> = HashMap::<&[u8], u64>::new();
        for j in 0..chunk.len()-k+1 {
            *frequencies.entry(&chunk[j..j+k]).or_insert(0) += 1;
        }
        for (pattern, &count) in frequencies.iter() {
            if count >= params.min_count {
                clumps.insert(string_util::normalize_bytes(pattern));
            }
        }
    }
    Ok(clumps)
}

/// Clump finding with a single frequency array that is updated as the window slides: the k-mer leaving the window
/// is decremented and the one entering is incremented. Linear in the sequence length after the 4^k allocation.
/// # Arguments
/// * `sequence` - the genome to scan
/// * `params` - the clump parameters (k, L, t); `k` is limited to `MAX_ARRAY_K`
pub fn optimal_clump_finder(sequence: &str, params: &ClumpParameters) -> Result<HashSet<String>> {
    params.validate()?;
    let k: usize = params.kmer_size;
    if k > pattern_codec::MAX_ARRAY_K {
        return Err(KmerError::KmerTooLarge { k, max: pattern_codec::MAX_ARRAY_K });
    }
    string_util::validate_dna(sequence)?;

    let seq: &[u8] = sequence.as_bytes();
    let mut clumps: HashSet<String> = HashSet::<String>::new();
    if seq.len() < k {
        return Ok(clumps);
    }
    let window: usize = params.effective_window(seq.len());
    let kmers_per_window: usize = window - k + 1;
    let codes: Vec<u64> = pattern_codec::rolling_codes(seq, k);

    let mut counts: Vec<u64> = vec![0; pattern_codec::array_len(k)];
    let mut is_clump: Vec<bool> = vec![false; counts.len()];

    //fill the first window
    for &code in codes[..kmers_per_window].iter() {
        counts[code as usize] += 1;
    }
    for &code in codes[..kmers_per_window].iter() {
        if counts[code as usize] >= params.min_count {
            is_clump[code as usize] = true;
        }
    }

    //now slide, only the entering k-mer can newly reach t
    for start in 1..codes.len()-kmers_per_window+1 {
        let leaving: usize = codes[start-1] as usize;
        let entering: usize = codes[start+kmers_per_window-1] as usize;
        counts[leaving] -= 1;
        counts[entering] += 1;
        if counts[entering] >= params.min_count {
            is_clump[entering] = true;
        }
    }

    for (code, _) in is_clump.iter().enumerate().filter(|&(_, &c)| c) {
        clumps.insert(string_util::normalize_bytes(&pattern_codec::decode_bytes(code as u64, k)));
    }
    Ok(clumps)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ALGORITHMS: [ClumpAlgorithm; 3] = [ClumpAlgorithm::Naive, ClumpAlgorithm::Chunked, ClumpAlgorithm::Optimal];

    fn to_set(values: &[&str]) -> HashSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    //seeded linear congruential DNA generator
    fn pseudo_random_dna(len: usize, mut state: u64) -> String {
        let mut ret = String::with_capacity(len);
        for _ in 0..len {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ret.push(string_util::NUCLEOTIDES[(state >> 62) as usize] as char);
        }
        ret
    }

    #[test]
    fn test_textbook_clumps() {
        let genome = "CGGACTCGACAGATGTGAAGAACGACAATGTGAAGACTCGACACGACATTGTGAAGAGGACGACAAT";
        let params = ClumpParameters { kmer_size: 5, window_len: 50, min_count: 4 };
        for &algorithm in ALL_ALGORITHMS.iter() {
            assert_eq!(find_clumps(genome, &params, algorithm).unwrap(), to_set(&["CGACA"]));
        }

        let genome = "CGGACTCGACAGATGTGAAGAACGACAATGTGAAGACTCGACACGACAGAGTGAAGAGAAGAGGAAACATTGTAA";
        for &algorithm in ALL_ALGORITHMS.iter() {
            assert_eq!(find_clumps(genome, &params, algorithm).unwrap(), to_set(&["CGACA", "GAAGA"]));
        }
    }

    #[test]
    fn test_window_boundary() {
        //"CG" occurs twice but the pair spans 6 bases, which doesn't fit in 4
        let params = ClumpParameters { kmer_size: 2, window_len: 4, min_count: 2 };
        for &algorithm in ALL_ALGORITHMS.iter() {
            assert_eq!(find_clumps("AAAACGTCGAAAAA", &params, algorithm).unwrap(), to_set(&["AA"]));
        }

        //exactly fits
        let params = ClumpParameters { kmer_size: 2, window_len: 6, min_count: 2 };
        for &algorithm in ALL_ALGORITHMS.iter() {
            let clumps = find_clumps("TTCGTCGTT", &params, algorithm).unwrap();
            assert!(clumps.contains("CG"));
            assert!(clumps.contains("TC"));
            assert!(!clumps.contains("TT"));
        }
    }

    #[test]
    fn test_min_count_one() {
        //every k-mer is trivially a clump
        let params = ClumpParameters { kmer_size: 4, window_len: 20, min_count: 1 };
        for &algorithm in ALL_ALGORITHMS.iter() {
            assert_eq!(
                find_clumps("ACGTACGT", &params, algorithm).unwrap(),
                to_set(&["ACGT", "CGTA", "GTAC", "TACG"])
            );
        }
    }

    #[test]
    fn test_short_sequences() {
        //shorter than L is one window
        let params = ClumpParameters { kmer_size: 4, window_len: 20, min_count: 2 };
        for &algorithm in ALL_ALGORITHMS.iter() {
            assert_eq!(find_clumps("ACGTACGT", &params, algorithm).unwrap(), to_set(&["ACGT"]));
        }

        //shorter than k has nothing
        for &algorithm in ALL_ALGORITHMS.iter() {
            assert!(find_clumps("ACG", &params, algorithm).unwrap().is_empty());
            assert!(find_clumps("", &params, algorithm).unwrap().is_empty());
        }
    }

    #[test]
    fn test_algorithms_agree() {
        for seed in 0..6 {
            let genome = pseudo_random_dna(400, seed);
            for &(k, l, t) in [(3, 25, 3), (4, 60, 2), (2, 10, 4), (5, 400, 2), (1, 8, 5)].iter() {
                let params = ClumpParameters { kmer_size: k, window_len: l, min_count: t };
                let naive = naive_clump_finder(&genome, &params).unwrap();
                let chunked = chunked_clump_finder(&genome, &params).unwrap();
                let optimal = optimal_clump_finder(&genome, &params).unwrap();
                assert_eq!(naive, chunked);
                assert_eq!(naive, optimal);
            }
        }
    }

    #[test]
    fn test_parameter_errors() {
        let genome = "ACGTACGT";
        let bad_params = [
            ClumpParameters { kmer_size: 0, window_len: 5, min_count: 2 },
            ClumpParameters { kmer_size: 5, window_len: 4, min_count: 2 },
            ClumpParameters { kmer_size: 2, window_len: 4, min_count: 0 }
        ];
        for params in bad_params.iter() {
            for &algorithm in ALL_ALGORITHMS.iter() {
                match find_clumps(genome, params, algorithm) {
                    Err(KmerError::DegenerateParameters(_)) => {},
                    other => panic!("unexpected result: {:?}", other)
                };
            }
        }

        let params = ClumpParameters { kmer_size: 13, window_len: 50, min_count: 2 };
        assert!(optimal_clump_finder(genome, &params).is_err());
        assert!(chunked_clump_finder(genome, &params).is_ok());

        let params = ClumpParameters { kmer_size: 2, window_len: 5, min_count: 2 };
        for &algorithm in ALL_ALGORITHMS.iter() {
            assert!(find_clumps("ACGTNACGT", &params, algorithm).is_err());
        }
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!("naive".parse::<ClumpAlgorithm>().unwrap(), ClumpAlgorithm::Naive);
        assert_eq!("chunked".parse::<ClumpAlgorithm>().unwrap(), ClumpAlgorithm::Chunked);
        assert_eq!("optimal".parse::<ClumpAlgorithm>().unwrap(), ClumpAlgorithm::Optimal);
        assert!("fast".parse::<ClumpAlgorithm>().is_err());
    }
}
