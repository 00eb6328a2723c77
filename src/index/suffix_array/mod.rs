//! Suffix array indexing module
//!
//! This module provides a sorted index of every suffix of a text, with
//! longest-common-prefix queries, O(log n) rank and O(m log n) substring
//! search.
//!
//! ## Architecture
//!
//! - `compare`: Comparison policies shared by every query
//! - `builder`: Sorts suffix offsets into a suffix array
//! - `array`: The immutable suffix array and its queries
//! - `writer`: Persists suffix arrays to disk
//! - `reader`: Memory-mapped loading of persisted suffix arrays
//! - `types`: Configuration, metadata and header definitions
//! - `error`: Argument and range errors
//!
//! ## File Format
//!
//! Per index directory, three files are created:
//! - `text.bin`: The UTF-8 source text
//! - `sa.bin`: Header followed by the sorted suffix offsets (u32, little-endian)
//! - `meta.json`: Counts, comparison policy and build time

pub mod array;
pub mod builder;
pub mod compare;
pub mod error;
pub mod reader;
pub mod types;
pub mod writer;

// Re-exports for convenience
pub use array::{SuffixArray, Suffixes};
pub use builder::SuffixArrayBuilder;
pub use compare::{compare_bounded, common_prefix_len, StringComparison, SuffixComparator};
pub use error::{SaResult, SuffixArrayError};
pub use reader::SuffixArrayReader;
pub use types::{SuffixArrayConfig, SuffixArrayMeta, SuffixArrayStats, SuffixEntry};
pub use writer::SuffixArrayWriter;
