//! Suffix array builder
//!
//! Builds a suffix array from a text by:
//! 1. Creating the identity permutation of suffix start offsets
//! 2. Sorting the offsets by the suffixes they point to, in parallel for
//!    large texts
//!
//! The resulting suffix array supports O(m log n) rank and substring search.

use super::array::{SourceText, SuffixArray};
use super::compare::{compare_bounded, StringComparison, SuffixComparator};
use super::error::SaResult;
use super::types::{SuffixArrayConfig, SuffixEntry};
use rayon::prelude::*;
use tracing::debug;

/// Builder for constructing suffix arrays
#[derive(Debug, Clone, Default)]
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: SuffixArrayConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(SuffixArrayConfig::default())
    }

    pub fn config(&self) -> &SuffixArrayConfig {
        &self.config
    }

    /// Build using the configured comparison policy
    pub fn build(&self, text: impl Into<String>) -> SaResult<SuffixArray<StringComparison>> {
        self.build_with(text, self.config.comparison)
    }

    /// Build using an injected comparator; the configured policy is ignored
    pub fn build_with<C: SuffixComparator>(
        &self,
        text: impl Into<String>,
        comparator: C,
    ) -> SaResult<SuffixArray<C>> {
        let source = SourceText::new(text.into())?;
        let offsets = sort_suffixes(source.chars(), &comparator, self.config.parallel_threshold);

        debug!(
            suffixes = offsets.len(),
            parallel = offsets.len() > self.config.parallel_threshold,
            "built suffix array"
        );

        Ok(SuffixArray::assemble(
            source,
            offsets,
            comparator,
            self.config.parallel_threshold,
        ))
    }
}

/// Sort all suffix offsets of `chars`
///
/// Suffixes of one text never compare equal (their lengths differ), so an
/// unstable sort yields the unique order.
///
/// Time: O(n log n) comparisons, each O(n) worst case
/// Space: O(n) for the suffix array
pub(crate) fn sort_suffixes<C: SuffixComparator>(
    chars: &[char],
    comparator: &C,
    parallel_threshold: usize,
) -> Vec<SuffixEntry> {
    let n = chars.len();

    // Create initial array of positions
    let mut sa: Vec<SuffixEntry> = (0..n as SuffixEntry).collect();

    let by_suffix = |a: &SuffixEntry, b: &SuffixEntry| {
        compare_bounded(comparator, &chars[*a as usize..], &chars[*b as usize..])
    };

    if n > parallel_threshold {
        sa.par_sort_unstable_by(by_suffix);
    } else {
        sa.sort_unstable_by(by_suffix);
    }

    sa
}
