
extern crate log;
extern crate needletail;

use log::info;
use needletail::parse_fastx_file;
use std::fs;
use std::path::Path;

use crate::errors::{KmerError, Result};
use crate::motif_search::ProfileMatrix;
use crate::string_util;

/// Splits plain text into sequences, one per whitespace separated token, upper-cased.
/// # Arguments
/// * `text` - the raw dataset text
/// # Examples
/// ```rust
/// use kmotif::dataset::parse_plain_sequences;
/// assert_eq!(parse_plain_sequences("acgt\nGGCA TTA\n\n"), vec!["ACGT", "GGCA", "TTA"]);
/// ```
pub fn parse_plain_sequences(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.to_ascii_uppercase())
        .collect()
}

/// Loads every sequence from a file. FASTA/FASTQ files (first symbol `>` or `@`) are parsed with needletail,
/// anything else is treated as whitespace separated plain sequences.
/// Sequences are upper-cased but otherwise returned as found, alphabet checks happen in the algorithms.
/// # Arguments
/// * `filename` - the file to load
pub fn read_sequences<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
    let contents: String = fs::read_to_string(filename.as_ref())?;
    let is_fastx: bool = match contents.trim_start().chars().next() {
        Some('>') | Some('@') => true,
        _ => false
    };

    let sequences: Vec<String> = if is_fastx {
        let mut ret: Vec<String> = vec![];
        let mut fastx_reader = parse_fastx_file(filename.as_ref())
            .map_err(|e| KmerError::Dataset(format!("{}", e)))?;
        while let Some(raw_record) = fastx_reader.next() {
            let record = raw_record.map_err(|e| KmerError::Dataset(format!("{}", e)))?;
            ret.push(string_util::normalize_bytes(&record.seq()));
        }
        ret
    } else {
        parse_plain_sequences(&contents)
    };
    info!("Loaded {} sequences from {:?}", sequences.len(), filename.as_ref());
    Ok(sequences)
}

/// Parses a profile matrix written as four whitespace separated rows of numbers (A, C, G, T)
/// # Arguments
/// * `text` - the raw matrix text, blank lines are ignored
/// # Examples
/// ```rust
/// use kmotif::dataset::parse_profile;
/// let profile = parse_profile("0.2 0.4\n0.3 0.1\n0.4 0.5\n0.1 0.0\n").unwrap();
/// assert_eq!(profile.kmer_size(), 2);
/// assert_eq!(profile.get(2, 1), 0.5);
/// ```
pub fn parse_profile(text: &str) -> Result<ProfileMatrix> {
    let mut rows: Vec<Vec<f64>> = vec![];
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let row: Vec<f64> = line.split_whitespace()
            .map(|v| v.parse::<f64>().map_err(|e| KmerError::Dataset(format!("bad profile value \"{}\": {}", v, e))))
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    ProfileMatrix::from_rows(&rows)
}

/// Loads a profile matrix from a file, see `parse_profile(...)`
/// # Arguments
/// * `filename` - the file to load
pub fn read_profile<P: AsRef<Path>>(filename: P) -> Result<ProfileMatrix> {
    let contents: String = fs::read_to_string(filename.as_ref())?;
    parse_profile(&contents)
}
