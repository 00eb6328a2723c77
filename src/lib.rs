//! # SFX - Suffix Arrays with LCP and Rank Queries
//!
//! SFX builds an immutable, sorted index of every suffix of a text and
//! answers questions about it: the suffix at a sorted position, its offset
//! and length, the longest common prefix with its sorted neighbour, and the
//! rank of an arbitrary key.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Suffix array construction, queries and persistence
//! - [`output`] - Terminal formatting for the `sfx` binary
//! - [`utils`] - Utility functions (config discovery, byte encoding)
//!
//! ## Quick Start
//!
//! ```
//! use sfx::{StringComparison, SuffixArray};
//!
//! let sa = SuffixArray::new("banana").unwrap();
//! assert_eq!(sa.suffix(0).unwrap(), "a");
//! assert_eq!(sa.index_of(3).unwrap(), 0);
//! assert_eq!(sa.rank("ban"), 3);
//!
//! let sa = SuffixArray::with_comparison("BaNaNa", StringComparison::OrdinalIgnoreCase).unwrap();
//! assert_eq!(sa.count_matches("na"), 2);
//! ```
//!
//! Comparison is pluggable: any `Fn(&[char], &[char]) -> Ordering` that is
//! `Send + Sync` can order the suffixes.

pub mod index;
pub mod output;
pub mod utils;

pub use index::suffix_array::{
    SaResult, StringComparison, SuffixArray, SuffixArrayBuilder, SuffixArrayConfig,
    SuffixArrayError, SuffixArrayReader, SuffixArrayWriter, SuffixComparator,
};
