
extern crate clap;
extern crate env_logger;
extern crate exitcode;
extern crate log;

use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{error, info, warn};
use serde_json::{json, Value};
use std::collections::HashSet;

use kmotif::approx_match::{approximate_frequent_patterns, approximate_match_positions, frequent_patterns};
use kmotif::clump_finder::{find_clumps, ClumpAlgorithm, ClumpParameters};
use kmotif::dataset::{read_profile, read_sequences};
use kmotif::errors::{KmerError, Result};
use kmotif::motif_search::{greedy_motif_search_with, median_string, motifs_enumeration, pattern_to_dna_distance, profile_most_probable, score};
use kmotif::profiling::profiled;
use kmotif::skew::min_skew_positions;
use kmotif::string_util::reverse_complement;

const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

/// the required `-k` argument shared by most subcommands
fn kmer_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("kmer_size")
        .short("k")
        .long("kmer_size")
        .takes_value(true)
        .required(true)
        .help("the k-mer length")
}

/// the `-d` argument shared by the mismatch-tolerant subcommands
fn mismatch_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("mismatches")
        .short("d")
        .long("mismatches")
        .takes_value(true)
        .help("maximum number of mismatches (default: 0)")
}

/// the positional sequence file
fn input_arg<'a, 'b>(index: u64) -> Arg<'a, 'b> {
    Arg::with_name("INPUT")
        .help("FASTA/FASTQ file or whitespace separated sequences")
        .required(true)
        .index(index)
}

/// pulls a required numeric value or exits with the usage error
fn required_usize(sub: &ArgMatches, name: &str) -> usize {
    value_t!(sub, name, usize).unwrap_or_else(|e| e.exit())
}

/// pulls an optional numeric value, `default` only when the flag is absent; a malformed value is an error
fn optional_usize(sub: &ArgMatches, name: &str, default: usize) -> std::result::Result<usize, clap::Error> {
    if sub.is_present(name) {
        value_t!(sub, name, usize)
    } else {
        Ok(default)
    }
}

/// sets in JSON output are sorted so runs are reproducible
fn sorted(set: HashSet<String>) -> Vec<String> {
    let mut ret: Vec<String> = set.into_iter().collect();
    ret.sort();
    ret
}

fn run_clumps(sub: &ArgMatches, dna: &[String]) -> Result<Value> {
    let params = ClumpParameters {
        kmer_size: required_usize(sub, "kmer_size"),
        window_len: required_usize(sub, "window_len"),
        min_count: value_t!(sub, "min_count", u64).unwrap_or_else(|e| e.exit())
    };
    let algorithm: ClumpAlgorithm = sub.value_of("algorithm").unwrap_or("optimal").parse()?;
    info!("\tk-mer size: {}", params.kmer_size);
    info!("\twindow length: {}", params.window_len);
    info!("\tminimum count: {}", params.min_count);
    info!("\talgorithm: {:?}", algorithm);

    let mut results: Vec<Value> = vec![];
    for seq in dna.iter() {
        results.push(json!(sorted(find_clumps(seq, &params, algorithm)?)));
    }
    Ok(json!(results))
}

fn run_approx_match(sub: &ArgMatches, dna: &[String]) -> Result<Value> {
    let pattern: String = sub.value_of("PATTERN").unwrap_or("").to_ascii_uppercase();
    let d: usize = optional_usize(sub, "mismatches", 0).unwrap_or_else(|e| e.exit());
    info!("\tpattern: {}", pattern);
    info!("\tmismatches: {}", d);

    let mut results: Vec<Value> = vec![];
    for seq in dna.iter() {
        results.push(json!(approximate_match_positions(&pattern, seq, d)?));
    }
    Ok(json!(results))
}

fn run_frequent(sub: &ArgMatches, dna: &[String]) -> Result<Value> {
    let k: usize = required_usize(sub, "kmer_size");
    let d: usize = optional_usize(sub, "mismatches", 0).unwrap_or_else(|e| e.exit());
    info!("\tk-mer size: {}", k);
    info!("\tmismatches: {}", d);

    let mut results: Vec<Value> = vec![];
    for seq in dna.iter() {
        let found = if d == 0 {
            frequent_patterns(seq, k)?
        } else {
            approximate_frequent_patterns(seq, k, d)?
        };
        results.push(json!(sorted(found)));
    }
    Ok(json!(results))
}

fn run_median(sub: &ArgMatches, dna: &[String]) -> Result<Value> {
    let k: usize = required_usize(sub, "kmer_size");
    info!("\tk-mer size: {}", k);

    let median: String = median_string(dna, k)?;
    let total: usize = pattern_to_dna_distance(&median, dna)?;
    Ok(json!({ "median": median, "distance": total }))
}

fn run_greedy(sub: &ArgMatches, dna: &[String]) -> Result<Value> {
    let k: usize = required_usize(sub, "kmer_size");
    let t: usize = optional_usize(sub, "num_sequences", dna.len()).unwrap_or_else(|e| e.exit());
    let use_pseudo_counts: bool = !sub.is_present("no_pseudo_counts");
    info!("\tk-mer size: {}", k);
    info!("\tsequences used: {}", t);
    info!("\tpseudo-counts: {}", use_pseudo_counts);

    let motifs: Vec<String> = greedy_motif_search_with(dna, k, t, use_pseudo_counts)?;
    let motif_score: usize = score(&motifs)?;
    Ok(json!({ "motifs": motifs, "score": motif_score }))
}

fn run_most_probable(sub: &ArgMatches, dna: &[String]) -> Result<Value> {
    let k: usize = required_usize(sub, "kmer_size");
    let profile_fn: &str = sub.value_of("PROFILE").unwrap_or("");
    info!("\tk-mer size: {}", k);
    info!("\tprofile: \"{}\"", profile_fn);

    let profile = read_profile(profile_fn)?;
    let mut results: Vec<Value> = vec![];
    for seq in dna.iter() {
        results.push(json!(profile_most_probable(seq, k, &profile)?));
    }
    Ok(json!(results))
}

fn run_enumerate(sub: &ArgMatches, dna: &[String]) -> Result<Value> {
    let k: usize = required_usize(sub, "kmer_size");
    let d: usize = optional_usize(sub, "mismatches", 0).unwrap_or_else(|e| e.exit());
    info!("\tk-mer size: {}", k);
    info!("\tmismatches: {}", d);

    Ok(json!(sorted(motifs_enumeration(dna, k, d)?)))
}

fn run_skew(dna: &[String]) -> Result<Value> {
    Ok(json!(dna.iter().map(|seq| min_skew_positions(seq)).collect::<Vec<Vec<usize>>>()))
}

fn run_revcomp(dna: &[String]) -> Result<Value> {
    let mut results: Vec<String> = vec![];
    for seq in dna.iter() {
        results.push(reverse_complement(seq)?);
    }
    Ok(json!(results))
}

/// dispatches a subcommand over the loaded sequences
fn run_subcommand(name: &str, sub: &ArgMatches, dna: &[String]) -> Result<Value> {
    match name {
        "clumps" => run_clumps(sub, dna),
        "approx-match" => run_approx_match(sub, dna),
        "frequent" => run_frequent(sub, dna),
        "median" => run_median(sub, dna),
        "greedy" => run_greedy(sub, dna),
        "most-probable" => run_most_probable(sub, dna),
        "enumerate" => run_enumerate(sub, dna),
        "skew" => run_skew(dna),
        "revcomp" => run_revcomp(dna),
        other => Err(KmerError::DegenerateParameters(format!("unknown subcommand \"{}\"", other)))
    }
}

/// maps library failures onto process exit codes
fn exit_code(err: &KmerError) -> i32 {
    match err {
        KmerError::Io(_) => exitcode::IOERR,
        _ => exitcode::DATAERR
    }
}

fn main() {
    //initialize logging for our benefit later
    env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("kmotif")
        .version(VERSION.unwrap_or("?"))
        .about("k-mer clump finding, approximate matching, and motif search")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("profile_mode")
            .short("p")
            .long("profile")
            .help("log the run time of the analysis"))
        .subcommand(SubCommand::with_name("clumps")
            .about("find k-mers occurring at least t times inside a window of length L")
            .arg(kmer_arg())
            .arg(Arg::with_name("window_len")
                .short("L")
                .long("window_len")
                .takes_value(true)
                .required(true)
                .help("the window length"))
            .arg(Arg::with_name("min_count")
                .short("t")
                .long("min_count")
                .takes_value(true)
                .required(true)
                .help("minimum occurrences inside one window"))
            .arg(Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .takes_value(true)
                .possible_values(&["naive", "chunked", "optimal"])
                .help("clump finding implementation (default: optimal)"))
            .arg(input_arg(1)))
        .subcommand(SubCommand::with_name("approx-match")
            .about("list the positions where a pattern matches with at most d mismatches")
            .arg(mismatch_arg())
            .arg(Arg::with_name("PATTERN")
                .help("the pattern to search for")
                .required(true)
                .index(1))
            .arg(input_arg(2)))
        .subcommand(SubCommand::with_name("frequent")
            .about("most frequent k-mers, optionally allowing d mismatches")
            .arg(kmer_arg())
            .arg(mismatch_arg())
            .arg(input_arg(1)))
        .subcommand(SubCommand::with_name("median")
            .about("the k-mer with the smallest total distance to every sequence")
            .arg(kmer_arg())
            .arg(input_arg(1)))
        .subcommand(SubCommand::with_name("greedy")
            .about("greedy motif search over the first t sequences")
            .arg(kmer_arg())
            .arg(Arg::with_name("num_sequences")
                .short("t")
                .long("num_sequences")
                .takes_value(true)
                .help("number of sequences to use (default: all)"))
            .arg(Arg::with_name("no_pseudo_counts")
                .short("n")
                .long("no_pseudo_counts")
                .help("disable profile smoothing"))
            .arg(input_arg(1)))
        .subcommand(SubCommand::with_name("most-probable")
            .about("the most probable k-mer of each sequence under a profile matrix")
            .arg(kmer_arg())
            .arg(input_arg(1))
            .arg(Arg::with_name("PROFILE")
                .help("four rows (A, C, G, T) of k whitespace separated probabilities")
                .required(true)
                .index(2)))
        .subcommand(SubCommand::with_name("enumerate")
            .about("k-mers with a d-neighbor present in every sequence")
            .arg(kmer_arg())
            .arg(mismatch_arg())
            .arg(input_arg(1)))
        .subcommand(SubCommand::with_name("skew")
            .about("positions of minimum G-C skew")
            .arg(input_arg(1)))
        .subcommand(SubCommand::with_name("revcomp")
            .about("reverse complement every sequence")
            .arg(input_arg(1)))
        .get_matches();

    let profile_mode: bool = matches.is_present("profile_mode");
    let (name, sub) = match matches.subcommand() {
        (name, Some(sub)) => (name, sub),
        (_, None) => {
            error!("No subcommand provided");
            std::process::exit(exitcode::USAGE);
        }
    };

    let input_fn: &str = sub.value_of("INPUT").unwrap_or("");
    info!("Input parameters ({}):", name);
    info!("\tinput: \"{}\"", input_fn);
    let dna: Vec<String> = match read_sequences(input_fn) {
        Ok(dna) => dna,
        Err(e) => {
            error!("Failed to load input sequences: {}", e);
            std::process::exit(exitcode::NOINPUT);
        }
    };
    if dna.is_empty() {
        warn!("No sequences found in \"{}\"", input_fn);
    }

    let result: Result<Value> = if profile_mode {
        profiled(name, || run_subcommand(name, sub, &dna))
    } else {
        run_subcommand(name, sub, &dna)
    };

    match result {
        Ok(value) => {
            match serde_json::to_string_pretty(&value) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    error!("Failed to serialize results: {}", e);
                    std::process::exit(exitcode::SOFTWARE);
                }
            };
        },
        Err(e) => {
            error!("Analysis failed: {}", e);
            std::process::exit(exit_code(&e));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mismatch_matches(args: &[&str]) -> ArgMatches<'static> {
        let mut argv: Vec<&str> = vec!["kmotif"];
        argv.extend_from_slice(args);
        App::new("kmotif")
            .arg(mismatch_arg())
            .get_matches_from(argv)
    }

    #[test]
    fn test_optional_usize() {
        let matches = mismatch_matches(&[]);
        assert_eq!(optional_usize(&matches, "mismatches", 0).unwrap(), 0);
        assert_eq!(optional_usize(&matches, "mismatches", 7).unwrap(), 7);

        let matches = mismatch_matches(&["-d", "2"]);
        assert_eq!(optional_usize(&matches, "mismatches", 0).unwrap(), 2);

        //a malformed value must not fall back to the default
        let matches = mismatch_matches(&["-d", "abc"]);
        assert!(optional_usize(&matches, "mismatches", 0).is_err());
        let matches = mismatch_matches(&["--mismatches", "1.5"]);
        assert!(optional_usize(&matches, "mismatches", 0).is_err());
    }
}
