
pub mod approx_match;
pub mod clump_finder;
pub mod dataset;
pub mod distance;
pub mod errors;
pub mod motif_search;
pub mod pattern_codec;
pub mod profiling;
pub mod skew;
pub mod string_util;
