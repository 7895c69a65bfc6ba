
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kmotif::clump_finder::*;
use kmotif::distance::*;
use kmotif::motif_search::*;
use kmotif::pattern_codec::*;
use kmotif::string_util::*;

/// builds a repeatable pseudo-random genome so every run sees the same data
fn get_constant_genome(length: usize) -> String {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut bytes: Vec<u8> = Vec::<u8>::with_capacity(length);
    for _i in 0..length {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        bytes.push(NUCLEOTIDES[(state >> 62) as usize]);
    }
    //plant a repeat so the clump finders have something to report
    let motif: &[u8] = b"CGACATTGA";
    let mut pos: usize = 0;
    while pos + motif.len() < length {
        bytes[pos..pos+motif.len()].copy_from_slice(motif);
        pos += 97;
    }
    normalize_bytes(&bytes)
}

pub fn bench_pattern_codec(c: &mut Criterion) {
    let genome: String = get_constant_genome(10000);
    let query: String = genome[..12].to_string();
    let code: u64 = encode(&query).unwrap();

    c.bench_function("encode", |b| b.iter(|| {
        black_box(encode(&query).unwrap());
    }));

    c.bench_function("decode", |b| b.iter(|| {
        black_box(decode(code, 12).unwrap());
    }));

    c.bench_function("frequency_array_k8", |b| b.iter(|| {
        black_box(frequency_array(&genome, 8).unwrap());
    }));
}

pub fn bench_clump_finder(c: &mut Criterion) {
    let genome: String = get_constant_genome(5000);
    let params = ClumpParameters {
        kmer_size: 9,
        window_len: 500,
        min_count: 3
    };

    //the naive version gets a shorter genome, it is quadratic in the window count
    let short_genome: &str = &genome[..1000];
    c.bench_function("naive_clump_finder", |b| b.iter(|| {
        black_box(naive_clump_finder(short_genome, &params).unwrap());
    }));

    c.bench_function("chunked_clump_finder", |b| b.iter(|| {
        black_box(chunked_clump_finder(&genome, &params).unwrap());
    }));

    c.bench_function("optimal_clump_finder", |b| b.iter(|| {
        black_box(optimal_clump_finder(&genome, &params).unwrap());
    }));
}

pub fn bench_motif_search(c: &mut Criterion) {
    let genome: String = get_constant_genome(1000);
    let dna: Vec<&str> = genome.as_bytes()
        .chunks(100)
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect();

    c.bench_function("neighbors_k10_d2", |b| b.iter(|| {
        black_box(neighbors("CGACATTGAC", 2).unwrap());
    }));

    c.bench_function("greedy_motif_search", |b| b.iter(|| {
        black_box(greedy_motif_search(&dna, 9, dna.len()).unwrap());
    }));

    c.bench_function("median_string_k6", |b| b.iter(|| {
        black_box(median_string(&dna, 6).unwrap());
    }));
}

criterion_group!(benches, bench_pattern_codec, bench_clump_finder, bench_motif_search);
criterion_main!(benches);
