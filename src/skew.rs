/// Returns the running G-C skew of a genome, starting with 0 before the first base, so the result is one longer than the input.
/// Lower-case bases are counted and anything other than C/G leaves the skew unchanged.
/// # Arguments
/// * `genome` - the sequence to scan
/// # Examples
/// ```rust
/// use kmotif::skew::skew_cg;
/// assert_eq!(skew_cg("CATGGGCATCGG"), vec![0, -1, -1, -1, 0, 1, 2, 1, 1, 1, 0, 1, 2]);
/// ```
pub fn skew_cg(genome: &str) -> Vec<i64> {
    let mut skew: i64 = 0;
    let mut ret: Vec<i64> = Vec::<i64>::with_capacity(genome.len() + 1);
    ret.push(skew);
    for c in genome.bytes() {
        match c.to_ascii_uppercase() {
            b'C' => skew -= 1,
            b'G' => skew += 1,
            _ => {}
        };
        ret.push(skew);
    }
    ret
}

/// Returns every position where the G-C skew reaches its minimum, a likely location of the replication origin.
/// # Arguments
/// * `genome` - the sequence to scan
/// # Examples
/// ```rust
/// use kmotif::skew::min_skew_positions;
/// let genome = "TAAAGACTGCCGAGAGGCCAACACGAGTGCTAGAACGAGGGGCGTAAACGCGGGTCCGAT";
/// assert_eq!(min_skew_positions(genome), vec![11, 24]);
/// ```
pub fn min_skew_positions(genome: &str) -> Vec<usize> {
    let skew: Vec<i64> = skew_cg(genome);
    let minimum: i64 = skew.iter().copied().min().unwrap_or(0);
    skew.iter()
        .enumerate()
        .filter(|&(_, &s)| s == minimum)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skew() {
        assert_eq!(
            skew_cg("CATGGGCATCGGCCATACGCC"),
            vec![0, -1, -1, -1, 0, 1, 2, 1, 1, 1, 0, 1, 2, 1, 0, 0, 0, 0, -1, 0, -1, -2]
        );
        assert_eq!(skew_cg("ggNc"), vec![0, 1, 2, 2, 1]);
        assert_eq!(skew_cg(""), vec![0]);
    }

    #[test]
    fn test_min_skew() {
        assert_eq!(min_skew_positions(""), vec![0]);
        assert_eq!(min_skew_positions("GGG"), vec![0]);
        assert_eq!(min_skew_positions("CCGC"), vec![2, 4]);
    }
}
