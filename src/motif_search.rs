
extern crate log;

use log::debug;
use std::collections::{HashMap, HashSet};

use crate::distance;
use crate::errors::{check_kmer_size, KmerError, Result};
use crate::string_util;

/// Per-position nucleotide probabilities for a motif of length `k`.
/// Conceptually a 4 x k matrix with rows A, C, G, T (in that order) and one column per motif position.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileMatrix {
    /// one entry per motif position, each holding the A, C, G, T values
    columns: Vec<[f64; 4]>
}

impl ProfileMatrix {
    /// Builds a profile from caller supplied rows, one row per nucleotide in A, C, G, T order, each `k` long.
    /// Values are taken as-is, no normalization is applied, but every entry must be finite and non-negative.
    /// # Arguments
    /// * `rows` - the four rows of the matrix
    /// # Examples
    /// ```rust
    /// use kmotif::motif_search::ProfileMatrix;
    /// let profile = ProfileMatrix::from_rows(&[
    ///     vec![0.2, 0.2, 0.3],
    ///     vec![0.4, 0.3, 0.1],
    ///     vec![0.3, 0.3, 0.5],
    ///     vec![0.1, 0.2, 0.1]
    /// ]).unwrap();
    /// assert_eq!(profile.kmer_size(), 3);
    /// assert_eq!(profile.get(1, 0), 0.4);
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<ProfileMatrix> {
        if rows.len() != string_util::NUCLEOTIDES.len() {
            return Err(KmerError::LengthMismatch { expected: string_util::NUCLEOTIDES.len(), actual: rows.len() });
        }
        let k: usize = rows[0].len();
        check_kmer_size(k)?;
        for (nucleotide, row) in rows.iter().enumerate() {
            if row.len() != k {
                return Err(KmerError::LengthMismatch { expected: k, actual: row.len() });
            }
            for (position, &value) in row.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(KmerError::InvalidProfileValue { value, nucleotide, position });
                }
            }
        }
        let columns: Vec<[f64; 4]> = (0..k)
            .map(|j| [rows[0][j], rows[1][j], rows[2][j], rows[3][j]])
            .collect();
        Ok(ProfileMatrix { columns })
    }

    /// Returns the motif length `k` (number of columns)
    #[inline]
    pub fn kmer_size(&self) -> usize {
        self.columns.len()
    }

    /// Returns the value for a nucleotide (0=A, 1=C, 2=G, 3=T) at a motif position
    /// # Arguments
    /// * `nucleotide` - the row index
    /// * `position` - the column index
    #[inline]
    pub fn get(&self, nucleotide: usize, position: usize) -> f64 {
        self.columns[position][nucleotide]
    }

    /// Returns the matrix as four rows in A, C, G, T order
    pub fn rows(&self) -> Vec<Vec<f64>> {
        (0..string_util::NUCLEOTIDES.len())
            .map(|n| self.columns.iter().map(|col| col[n]).collect())
            .collect()
    }

    /// Probability of a validated k-mer under this profile, the product of the per-position values
    #[inline]
    fn probability(&self, kmer: &[u8]) -> f64 {
        kmer.iter()
            .zip(self.columns.iter())
            .map(|(&c, col)| col[string_util::nucleotide_to_int(c) as usize])
            .product()
    }
}

/// Checks the common preconditions of a motif set and hands back its members as byte slices
fn check_motifs<S: AsRef<str>>(motifs: &[S]) -> Result<Vec<&[u8]>> {
    if motifs.is_empty() {
        return Err(KmerError::EmptyInput("no motifs were provided".to_string()));
    }
    let k: usize = motifs[0].as_ref().len();
    check_kmer_size(k)?;
    for motif in motifs.iter() {
        if motif.as_ref().len() != k {
            return Err(KmerError::LengthMismatch { expected: k, actual: motif.as_ref().len() });
        }
    }
    string_util::validate_all(motifs)?;
    Ok(motifs.iter().map(|m| m.as_ref().as_bytes()).collect())
}

/// Checks the common preconditions of a DNA collection where every sequence must hold at least one `k`-mer
fn check_collection<S: AsRef<str>>(dna: &[S], k: usize) -> Result<Vec<&[u8]>> {
    if dna.is_empty() {
        return Err(KmerError::EmptyInput("no sequences were provided".to_string()));
    }
    check_kmer_size(k)?;
    string_util::validate_all(dna)?;
    for (i, seq) in dna.iter().enumerate() {
        if seq.as_ref().len() < k {
            return Err(KmerError::DegenerateParameters(format!(
                "sequence {} has length {}, shorter than k={}", i, seq.as_ref().len(), k
            )));
        }
    }
    Ok(dna.iter().map(|s| s.as_ref().as_bytes()).collect())
}

/// Counts A, C, G, T for every column of an equal length motif set
fn column_counts(motifs: &[&[u8]], k: usize) -> Vec<[usize; 4]> {
    let mut counts: Vec<[usize; 4]> = vec![[0; 4]; k];
    for motif in motifs.iter() {
        for (j, &c) in motif.iter().enumerate() {
            counts[j][string_util::nucleotide_to_int(c) as usize] += 1;
        }
    }
    counts
}

/// Profile construction over validated motifs
fn build_profile(motifs: &[&[u8]], k: usize, use_pseudo_counts: bool) -> ProfileMatrix {
    let height: f64 = motifs.len() as f64;
    let columns: Vec<[f64; 4]> = column_counts(motifs, k)
        .iter()
        .map(|counts| {
            let mut col: [f64; 4] = [0.0; 4];
            for (n, &c) in counts.iter().enumerate() {
                //this is 1 + frequency, not the textbook (count+1)/(height+4)
                col[n] = if use_pseudo_counts {
                    1.0 + c as f64 / height
                } else {
                    c as f64 / height
                };
            }
            col
        })
        .collect();
    ProfileMatrix { columns }
}

/// Score over validated motifs
fn score_bytes(motifs: &[&[u8]], k: usize) -> usize {
    column_counts(motifs, k)
        .iter()
        .map(|counts| motifs.len() - counts.iter().max().copied().unwrap_or(0))
        .sum()
}

/// Most probable window of a validated sequence, first one wins on ties
fn most_probable_bytes<'a>(seq: &'a [u8], k: usize, profile: &ProfileMatrix) -> Option<&'a [u8]> {
    let mut best_prob: f64 = -1.0;
    let mut best: Option<&[u8]> = None;
    for window in seq.windows(k) {
        let prob: f64 = profile.probability(window);
        if prob > best_prob {
            best_prob = prob;
            best = Some(window);
        }
    }
    best
}

/// Sum over sequences of the minimum window distance, every sequence is at least `pattern.len()` long
fn dna_distance_bytes(pattern: &[u8], dna: &[&[u8]]) -> usize {
    dna.iter()
        .map(|seq| {
            seq.windows(pattern.len())
                .map(|window| distance::hamming_bytes(pattern, window))
                .min()
                .unwrap_or(0)
        })
        .sum()
}

/// Builds the profile matrix of a motif set.
/// Without pseudo-counts each entry is `count / height`; with them each entry is `1.0 + count / height`.
/// # Arguments
/// * `motifs` - the equal length motifs, at least one
/// * `use_pseudo_counts` - whether to apply the smoothing
/// # Examples
/// ```rust
/// use kmotif::motif_search::profile;
/// let p = profile(&["ACG", "AAT"], false).unwrap();
/// assert_eq!(p.rows(), vec![
///     vec![1.0, 0.5, 0.0],
///     vec![0.0, 0.5, 0.0],
///     vec![0.0, 0.0, 0.5],
///     vec![0.0, 0.0, 0.5]
/// ]);
/// let p = profile(&["ACG", "AAT"], true).unwrap();
/// assert_eq!(p.get(0, 0), 2.0);
/// ```
pub fn profile<S: AsRef<str>>(motifs: &[S], use_pseudo_counts: bool) -> Result<ProfileMatrix> {
    let motif_bytes: Vec<&[u8]> = check_motifs(motifs)?;
    let k: usize = motif_bytes[0].len();
    Ok(build_profile(&motif_bytes, k, use_pseudo_counts))
}

/// Scores a motif set: for each column, the number of motifs not matching that column's most common nucleotide.
/// Lower is more conserved and row order does not matter.
/// # Arguments
/// * `motifs` - the equal length motifs, at least one
/// # Examples
/// ```rust
/// use kmotif::motif_search::score;
/// assert_eq!(score(&["AACG", "AACT", "ATCG"]).unwrap(), 2);
/// assert_eq!(score(&["GATTA", "GATTA"]).unwrap(), 0);
/// ```
pub fn score<S: AsRef<str>>(motifs: &[S]) -> Result<usize> {
    let motif_bytes: Vec<&[u8]> = check_motifs(motifs)?;
    let k: usize = motif_bytes[0].len();
    Ok(score_bytes(&motif_bytes, k))
}

/// Returns the `k`-mer of `sequence` with the highest probability under `profile`; ties keep the earliest window.
/// Returns `None` when the sequence is shorter than `k`.
/// # Arguments
/// * `sequence` - the sequence to scan
/// * `k` - the k-mer size, must match the profile
/// * `profile` - the profile to score windows with
/// # Examples
/// ```rust
/// use kmotif::motif_search::{profile_most_probable, ProfileMatrix};
/// let profile = ProfileMatrix::from_rows(&[
///     vec![0.2, 0.2, 0.3, 0.2, 0.3],
///     vec![0.4, 0.3, 0.1, 0.5, 0.1],
///     vec![0.3, 0.3, 0.5, 0.2, 0.4],
///     vec![0.1, 0.2, 0.1, 0.1, 0.2]
/// ]).unwrap();
/// let genome = "ACCTGTTTATTGCCTAAGTTCCGAACAAACCCAATATAGCCCGAGGGCCT";
/// assert_eq!(profile_most_probable(genome, 5, &profile).unwrap(), Some("CCGAG".to_string()));
/// assert_eq!(profile_most_probable("ACG", 5, &profile).unwrap(), None);
/// ```
pub fn profile_most_probable(sequence: &str, k: usize, profile: &ProfileMatrix) -> Result<Option<String>> {
    check_kmer_size(k)?;
    if profile.kmer_size() != k {
        return Err(KmerError::LengthMismatch { expected: profile.kmer_size(), actual: k });
    }
    string_util::validate_dna(sequence)?;
    Ok(most_probable_bytes(sequence.as_bytes(), k, profile).map(string_util::normalize_bytes))
}

/// Greedy motif search with the default smoothing (pseudo-counts enabled), see `greedy_motif_search_with(...)`.
/// # Arguments
/// * `dna` - the sequences to search, at least `t`
/// * `k` - the motif length
/// * `t` - how many of the leading sequences to use
/// # Examples
/// ```rust
/// use kmotif::motif_search::greedy_motif_search;
/// let dna = ["GGCGTTCAGGCA", "AAGAATCAGTCA", "CAAGGAGTTCGC", "CACGTCAATCAC", "CAATAATATTCG"];
/// assert_eq!(greedy_motif_search(&dna, 3, 5).unwrap(), vec!["TTC", "ATC", "TTC", "ATC", "TTC"]);
/// ```
pub fn greedy_motif_search<S: AsRef<str>>(dna: &[S], k: usize, t: usize) -> Result<Vec<String>> {
    greedy_motif_search_with(dna, k, t, true)
}

/// Greedy motif search. Every `k`-mer of the first sequence seeds a motif set, which is grown one sequence at a time
/// with the most probable `k`-mer under the profile of the motifs chosen so far. The lowest scoring set is returned,
/// with ties going to the earliest seed. This is a heuristic, it trades optimality for avoiding an exhaustive search.
/// # Arguments
/// * `dna` - the sequences to search, at least `t`, and each of the first `t` at least `k` long
/// * `k` - the motif length
/// * `t` - how many of the leading sequences to use
/// * `use_pseudo_counts` - smoothing for the intermediate profiles
pub fn greedy_motif_search_with<S: AsRef<str>>(dna: &[S], k: usize, t: usize, use_pseudo_counts: bool) -> Result<Vec<String>> {
    if dna.is_empty() {
        return Err(KmerError::EmptyInput("no sequences were provided".to_string()));
    }
    if t == 0 || t > dna.len() {
        return Err(KmerError::DegenerateParameters(format!(
            "t={} must be between 1 and the number of sequences ({})", t, dna.len()
        )));
    }
    let seqs: Vec<&[u8]> = check_collection(&dna[..t], k)?;

    let mut best_motifs: Vec<&[u8]> = vec![];
    let mut best_score: usize = usize::MAX;
    for seed in seqs[0].windows(k) {
        let mut motifs: Vec<&[u8]> = Vec::<&[u8]>::with_capacity(t);
        motifs.push(seed);
        for &seq in seqs[1..].iter() {
            let current_profile = build_profile(&motifs, k, use_pseudo_counts);
            //lengths were checked against k, so there is always a window here
            if let Some(m) = most_probable_bytes(seq, k, &current_profile) {
                motifs.push(m);
            }
        }

        let current_score: usize = score_bytes(&motifs, k);
        if current_score < best_score {
            best_score = current_score;
            best_motifs = motifs;
        }
    }
    debug!("Greedy motif search best score: {}", best_score);

    Ok(best_motifs.iter().map(|m| string_util::normalize_bytes(m)).collect())
}

/// Total distance between a pattern and a DNA collection: the sum over sequences of the smallest
/// Hamming distance between `pattern` and any window of that sequence.
/// # Arguments
/// * `pattern` - the k-mer
/// * `dna` - the sequences, each at least as long as the pattern
/// # Examples
/// ```rust
/// use kmotif::motif_search::pattern_to_dna_distance;
/// let dna = ["TTACCTTAAC", "GATATCTGTC", "ACGGCGTTCG", "CCCTAAAGAG", "CGTCAGAGGT"];
/// assert_eq!(pattern_to_dna_distance("AAA", &dna).unwrap(), 5);
/// ```
pub fn pattern_to_dna_distance<S: AsRef<str>>(pattern: &str, dna: &[S]) -> Result<usize> {
    string_util::validate_dna(pattern)?;
    let seqs: Vec<&[u8]> = check_collection(dna, pattern.len())?;
    Ok(dna_distance_bytes(pattern.as_bytes(), &seqs))
}

/// Finds a median string: the `k`-mer with the smallest total distance to the collection (see `pattern_to_dna_distance(...)`).
/// Every one of the 4^k candidates is enumerated through the neighbors of the all-A k-mer, the first minimum found wins.
/// # Arguments
/// * `dna` - the sequences, at least one and each at least `k` long
/// * `k` - the k-mer size, limited so that 4^k stays enumerable
/// # Examples
/// ```rust
/// use kmotif::motif_search::median_string;
/// let dna = ["AAATTGACGCAT", "GACGACCACGTT", "CGTCAGCGCCTG", "GCTGAGCACCGG", "AGTACGGGACAG"];
/// assert_eq!(median_string(&dna, 3).unwrap(), "GAC");
/// ```
pub fn median_string<S: AsRef<str>>(dna: &[S], k: usize) -> Result<String> {
    let seqs: Vec<&[u8]> = check_collection(dna, k)?;
    distance::check_neighborhood(k, k)?;

    let seed: Vec<u8> = vec![b'A'; k];
    let mut best_distance: usize = usize::MAX;
    let mut median: Vec<u8> = vec![];
    for candidate in distance::neighbors_bytes(&seed, k) {
        let total: usize = dna_distance_bytes(&candidate, &seqs);
        if total < best_distance {
            best_distance = total;
            median = candidate;
        }
    }
    debug!("Median string total distance: {}", best_distance);

    Ok(string_util::normalize_bytes(&median))
}

/// Enumerates candidate motifs: every `d`-neighbor of every `k`-mer in the collection whose own `d`-neighborhood
/// has at least one member occurring exactly in every sequence.
/// Each kept candidate is therefore within `d` mismatches of some `k`-mer in every sequence.
/// Fails with `SearchSpaceTooLarge` when the candidates and their neighborhoods would exceed `MAX_SEARCH_WORK` strings.
/// # Arguments
/// * `dna` - the sequences, at least one
/// * `k` - the motif length
/// * `d` - the mismatch budget for each expansion
/// # Examples
/// ```rust
/// use kmotif::motif_search::motifs_enumeration;
/// let found = motifs_enumeration(&["ATTTGGC", "TGCCTTA", "CGGTATC", "GAAAATT"], 3, 1).unwrap();
/// let mut found: Vec<String> = found.into_iter().collect();
/// found.sort();
/// assert_eq!(found, vec!["ATA", "ATT", "GTT", "TTT"]);
/// ```
pub fn motifs_enumeration<S: AsRef<str>>(dna: &[S], k: usize, d: usize) -> Result<HashSet<String>> {
    if dna.is_empty() {
        return Err(KmerError::EmptyInput("no sequences were provided".to_string()));
    }
    check_kmer_size(k)?;
    string_util::validate_all(dna)?;
    distance::check_neighborhood(k, d)?;

    let seqs: Vec<&[u8]> = dna.iter().map(|s| s.as_ref().as_bytes()).collect();

    //distinct candidates are capped by 4^k, and each one expands a second neighborhood
    let total_windows: u128 = seqs.iter()
        .map(|seq| (seq.len() + 1).saturating_sub(k) as u128)
        .sum();
    let candidates: u128 = (total_windows.saturating_mul(distance::neighborhood_size(k, d)))
        .min(1u128 << (2 * k.min(63)));
    distance::check_search_work(k, d, candidates)?;

    let kmer_sets: Vec<HashSet<&[u8]>> = seqs.iter()
        .map(|seq| seq.windows(k).collect())
        .collect();

    //the same candidate shows up from many windows, only expand it once
    let mut checked: HashMap<Vec<u8>, bool> = HashMap::<Vec<u8>, bool>::new();
    let mut motifs: HashSet<String> = HashSet::<String>::new();
    for seq in seqs.iter() {
        for window in seq.windows(k) {
            for candidate in distance::neighbors_bytes(window, d) {
                if checked.contains_key(&candidate) {
                    continue;
                }
                let second_ring: Vec<Vec<u8>> = distance::neighbors_bytes(&candidate, d);
                let in_all: bool = kmer_sets.iter().all(|set| {
                    second_ring.iter().any(|n| set.contains(n.as_slice()))
                });
                if in_all {
                    motifs.insert(string_util::normalize_bytes(&candidate));
                }
                checked.insert(candidate, in_all);
            }
        }
    }
    debug!("Motif enumeration checked {} candidates, kept {}", checked.len(), motifs.len());

    Ok(motifs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern_codec;

    #[test]
    fn test_profile_columns() {
        let p = profile(&["ACG", "AAT"], true).unwrap();
        assert_eq!(p.kmer_size(), 3);
        assert_eq!(p.rows(), vec![
            vec![2.0, 1.5, 1.0],
            vec![1.0, 1.5, 1.0],
            vec![1.0, 1.0, 1.5],
            vec![1.0, 1.0, 1.5]
        ]);

        //unsmoothed columns sum to one
        let motifs = ["TCGGGGGTTTTT", "CCGGTGACTTAC", "ACGGGGATTTTC", "TTGGGGACTTTT"];
        let p = profile(&motifs, false).unwrap();
        for j in 0..p.kmer_size() {
            let total: f64 = (0..4).map(|n| p.get(n, j)).sum();
            assert!((total - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_profile_errors() {
        let empty: [&str; 0] = [];
        match profile(&empty, true) {
            Err(KmerError::EmptyInput(_)) => {},
            other => panic!("unexpected result: {:?}", other)
        };
        match profile(&["ACG", "AC"], true) {
            Err(KmerError::LengthMismatch { expected, actual }) => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            },
            other => panic!("unexpected result: {:?}", other)
        };
        assert!(profile(&["ACG", "ANG"], true).is_err());
        assert!(ProfileMatrix::from_rows(&[vec![1.0], vec![0.0], vec![0.0]]).is_err());
        assert!(ProfileMatrix::from_rows(&[vec![1.0], vec![0.0], vec![0.0], vec![0.0, 1.0]]).is_err());
    }

    #[test]
    fn test_profile_values() {
        match ProfileMatrix::from_rows(&[vec![0.5, 0.5], vec![0.5, -0.1], vec![0.0, 0.3], vec![0.0, 0.3]]) {
            Err(KmerError::InvalidProfileValue { value, nucleotide, position }) => {
                assert_eq!(value, -0.1);
                assert_eq!(nucleotide, 1);
                assert_eq!(position, 1);
            },
            other => panic!("unexpected result: {:?}", other)
        };
        assert!(ProfileMatrix::from_rows(&vec![vec![-2.0]; 4]).is_err());
        assert!(ProfileMatrix::from_rows(&vec![vec![std::f64::NAN]; 4]).is_err());
        assert!(ProfileMatrix::from_rows(&[vec![std::f64::INFINITY], vec![0.0], vec![0.0], vec![0.0]]).is_err());

        //any accepted profile yields a window once the sequence is long enough
        let zero = ProfileMatrix::from_rows(&vec![vec![0.0]; 4]).unwrap();
        assert_eq!(profile_most_probable("ACGT", 1, &zero).unwrap(), Some("A".to_string()));
    }

    #[test]
    fn test_score() {
        let motifs = vec![
            "TCGGGGGTTTTT", "CCGGTGACTTAC", "ACGGGGATTTTC", "TTGGGGACTTTT", "AAGGGGACTTCC",
            "TTGGGGACTTCC", "TCGGGGATTCAT", "TCGGGGATTCCT", "TAGGGGAACTAC", "TCGGGTATAACC"
        ];
        assert_eq!(score(&motifs).unwrap(), 30);

        //row order does not matter
        let mut reversed = motifs.clone();
        reversed.reverse();
        assert_eq!(score(&reversed).unwrap(), 30);
        let mut rotated = motifs.clone();
        rotated.rotate_left(3);
        assert_eq!(score(&rotated).unwrap(), 30);

        assert_eq!(score(&["ACGT"]).unwrap(), 0);
    }

    #[test]
    fn test_most_probable_ties() {
        //flat profile, first window wins
        let flat = ProfileMatrix::from_rows(&[vec![0.25; 2], vec![0.25; 2], vec![0.25; 2], vec![0.25; 2]]).unwrap();
        assert_eq!(profile_most_probable("ACGT", 2, &flat).unwrap(), Some("AC".to_string()));

        //all zero probabilities still return the first window
        let zero = profile(&["AA"], false).unwrap();
        assert_eq!(profile_most_probable("CGTC", 2, &zero).unwrap(), Some("CG".to_string()));

        match profile_most_probable("ACGT", 3, &flat) {
            Err(KmerError::LengthMismatch { expected, actual }) => {
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            },
            other => panic!("unexpected result: {:?}", other)
        };
    }

    #[test]
    fn test_greedy() {
        let dna = ["GGCGTTCAGGCA", "AAGAATCAGTCA", "CAAGGAGTTCGC", "CACGTCAATCAC", "CAATAATATTCG"];
        assert_eq!(greedy_motif_search_with(&dna, 3, 5, false).unwrap(), vec!["CAG", "CAG", "CAA", "CAA", "CAA"]);
        assert_eq!(greedy_motif_search_with(&dna, 3, 5, true).unwrap(), vec!["TTC", "ATC", "TTC", "ATC", "TTC"]);

        //only the first t sequences are used
        assert_eq!(greedy_motif_search(&dna, 3, 3).unwrap(), vec!["CGT", "AGT", "AGT"]);
    }

    #[test]
    fn test_greedy_conserved() {
        let dna = vec!["TTGATTACCC".to_string(), "CAGCGATTAC".to_string(), "GATTACTGCA".to_string(), "ACTTGGATTA".to_string()];
        for &pseudo in [true, false].iter() {
            let motifs = greedy_motif_search_with(&dna, 5, 4, pseudo).unwrap();
            assert_eq!(motifs, vec!["GATTA"; 4]);
            assert_eq!(score(&motifs).unwrap(), 0);
        }
    }

    #[test]
    fn test_greedy_errors() {
        let empty: Vec<String> = vec![];
        assert!(greedy_motif_search(&empty, 3, 1).is_err());
        assert!(greedy_motif_search(&["ACGT", "ACGT"], 3, 0).is_err());
        assert!(greedy_motif_search(&["ACGT", "ACGT"], 3, 3).is_err());
        match greedy_motif_search(&["ACGT", "AC"], 3, 2) {
            Err(KmerError::DegenerateParameters(_)) => {},
            other => panic!("unexpected result: {:?}", other)
        };
        //the short sequence is past t so it's ignored
        assert!(greedy_motif_search(&["ACGT", "ACGT", "AC"], 3, 2).is_ok());
    }

    #[test]
    fn test_median_string() {
        let dna = ["AAATTGACGCAT", "GACGACCACGTT", "CGTCAGCGCCTG", "GCTGAGCACCGG", "AGTACGGGACAG"];
        let median = median_string(&dna, 3).unwrap();
        assert_eq!(median, "GAC");

        //the result reaches the true minimum over every candidate
        let best = (0..pattern_codec::array_len(3) as u64)
            .map(|code| pattern_to_dna_distance(&pattern_codec::decode(code, 3).unwrap(), &dna).unwrap())
            .min()
            .unwrap();
        assert_eq!(pattern_to_dna_distance(&median, &dna).unwrap(), best);
        assert_eq!(best, 2);
    }

    #[test]
    fn test_median_errors() {
        let empty: [&str; 0] = [];
        match median_string(&empty, 3) {
            Err(KmerError::EmptyInput(_)) => {},
            other => panic!("unexpected result: {:?}", other)
        };
        assert!(median_string(&["ACGT"], 0).is_err());
        assert!(median_string(&["ACGT", "AC"], 3).is_err());
        assert!(median_string(&["A".repeat(20)], 13).is_err());
        assert!(pattern_to_dna_distance("AAA", &empty).is_err());
    }

    #[test]
    fn test_motifs_enumeration() {
        let dna = ["ATTTGGC", "TGCCTTA", "CGGTATC", "GAAAATT"];
        let found = motifs_enumeration(&dna, 3, 1).unwrap();
        let expected: HashSet<String> = ["ATA", "ATT", "GTT", "TTT"].iter().map(|s| s.to_string()).collect();
        assert_eq!(found, expected);

        //with no mismatches only shared k-mers survive
        let found = motifs_enumeration(&["ACGTT", "TTACG"], 3, 0).unwrap();
        let expected: HashSet<String> = ["ACG"].iter().map(|s| s.to_string()).collect();
        assert_eq!(found, expected);

        //a sequence without any windows can't contain anything
        assert!(motifs_enumeration(&["ACGTT", "AC"], 3, 1).unwrap().is_empty());

        let empty: [&str; 0] = [];
        assert!(motifs_enumeration(&empty, 3, 1).is_err());
    }

    #[test]
    fn test_motifs_enumeration_limits() {
        //a single 12-mer already reaches every candidate, each with a 2^24 second neighborhood
        let dna = ["A".repeat(12)];
        assert!(distance::check_neighborhood(12, 12).is_ok());
        match motifs_enumeration(&dna, 12, 12) {
            Err(KmerError::SearchSpaceTooLarge { k, d }) => {
                assert_eq!(k, 12);
                assert_eq!(d, 12);
            },
            other => panic!("unexpected result: {:?}", other)
        };

        //small searches are untouched
        assert!(motifs_enumeration(&["ACGTACGTACGT", "TTACGTACGTAA"], 6, 1).is_ok());
    }
}
