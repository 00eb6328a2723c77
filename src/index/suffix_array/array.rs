//! The immutable suffix array and its queries

use super::builder::SuffixArrayBuilder;
use super::compare::{common_prefix_len, compare_bounded, StringComparison, SuffixComparator};
use super::error::{SaResult, SuffixArrayError};
use super::types::{SuffixArrayConfig, SuffixArrayStats, SuffixEntry};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Index, Range};

/// Source text split into characters, with the byte offset of each one
#[derive(Clone)]
pub(crate) struct SourceText {
    text: String,
    chars: Vec<char>,
    /// `chars.len() + 1` entries; the last one is `text.len()`
    byte_offsets: Vec<usize>,
}

impl SourceText {
    pub(crate) fn new(text: String) -> SaResult<Self> {
        if text.is_empty() {
            return Err(SuffixArrayError::invalid("text must not be empty"));
        }

        let mut chars = Vec::with_capacity(text.len());
        let mut byte_offsets = Vec::with_capacity(text.len() + 1);
        for (pos, c) in text.char_indices() {
            chars.push(c);
            byte_offsets.push(pos);
        }
        byte_offsets.push(text.len());

        if chars.len() > SuffixEntry::MAX as usize {
            return Err(SuffixArrayError::invalid(format!(
                "text has {} characters, at most {} are supported",
                chars.len(),
                SuffixEntry::MAX
            )));
        }

        Ok(Self {
            text,
            chars,
            byte_offsets,
        })
    }

    #[inline]
    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }
}

/// Sorted index of every suffix of a non-empty text
///
/// Offsets, lengths and counts are in characters. The structure is immutable
/// once built and can be shared across threads when the comparator can.
///
/// ```
/// use sfx::SuffixArray;
///
/// let sa = SuffixArray::new("banana").unwrap();
/// let sorted: Vec<&str> = sa.iter().collect();
/// assert_eq!(sorted, ["a", "ana", "anana", "banana", "na", "nana"]);
/// assert_eq!(sa.longest_common_prefix(2).unwrap(), 3);
/// assert_eq!(sa.rank("ban"), 3);
/// ```
#[derive(Clone)]
pub struct SuffixArray<C = StringComparison> {
    source: SourceText,
    offsets: Vec<SuffixEntry>,
    comparator: C,
    parallel_threshold: usize,
}

impl SuffixArray<StringComparison> {
    /// Build with the default (ordinal) policy
    pub fn new(text: impl Into<String>) -> SaResult<Self> {
        SuffixArrayBuilder::with_defaults().build(text)
    }

    pub fn with_comparison(text: impl Into<String>, comparison: StringComparison) -> SaResult<Self> {
        SuffixArrayBuilder::new(SuffixArrayConfig {
            comparison,
            ..Default::default()
        })
        .build(text)
    }
}

impl<C: SuffixComparator> SuffixArray<C> {
    /// Build with an injected comparator
    pub fn with_comparator(text: impl Into<String>, comparator: C) -> SaResult<Self> {
        SuffixArrayBuilder::with_defaults().build_with(text, comparator)
    }

    pub(crate) fn assemble(
        source: SourceText,
        offsets: Vec<SuffixEntry>,
        comparator: C,
        parallel_threshold: usize,
    ) -> Self {
        Self {
            source,
            offsets,
            comparator,
            parallel_threshold,
        }
    }

    /// Rebuild from already-sorted offsets, validating them
    ///
    /// Rejects offsets that are not a permutation of `0..n` or that are not
    /// in strictly increasing suffix order under `comparator`.
    pub fn from_sorted_offsets(
        text: impl Into<String>,
        offsets: Vec<SuffixEntry>,
        comparator: C,
    ) -> SaResult<Self> {
        let source = SourceText::new(text.into())?;
        let n = source.chars.len();

        if offsets.len() != n {
            return Err(SuffixArrayError::invalid(format!(
                "expected {} offsets, got {}",
                n,
                offsets.len()
            )));
        }

        let mut seen = vec![false; n];
        for &offset in &offsets {
            let offset = offset as usize;
            if offset >= n || seen[offset] {
                return Err(SuffixArrayError::invalid(format!(
                    "offset {} is out of bounds or repeated",
                    offset
                )));
            }
            seen[offset] = true;
        }

        let chars = &source.chars;
        let unsorted = offsets.windows(2).position(|w| {
            compare_bounded(&comparator, &chars[w[0] as usize..], &chars[w[1] as usize..])
                != Ordering::Less
        });
        if let Some(i) = unsorted {
            return Err(SuffixArrayError::invalid(format!(
                "offsets are not sorted at position {}",
                i + 1
            )));
        }

        Ok(Self::assemble(
            source,
            offsets,
            comparator,
            SuffixArrayConfig::default().parallel_threshold,
        ))
    }

    /// Number of suffixes (the character count of the text)
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always false: construction rejects empty text
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.source.text
    }

    /// Sorted suffix start offsets
    pub fn offsets(&self) -> &[SuffixEntry] {
        &self.offsets
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Offset for a sorted index, or `OutOfRange`
    #[inline]
    fn offset_at(&self, sorted_index: usize) -> SaResult<usize> {
        self.offsets
            .get(sorted_index)
            .map(|&offset| offset as usize)
            .ok_or(SuffixArrayError::OutOfRange {
                index: sorted_index,
                len: self.len(),
            })
    }

    #[inline]
    fn chars_from(&self, offset: usize) -> &[char] {
        &self.source.chars[offset..]
    }

    #[inline]
    fn str_from(&self, offset: usize) -> &str {
        &self.source.text[self.source.byte_offsets[offset]..]
    }

    /// Starting offset in the text of the suffix at `sorted_index`
    pub fn index_of(&self, sorted_index: usize) -> SaResult<usize> {
        self.offset_at(sorted_index)
    }

    /// Character length of the suffix at `sorted_index`
    pub fn length_of(&self, sorted_index: usize) -> SaResult<usize> {
        Ok(self.len() - self.offset_at(sorted_index)?)
    }

    /// The suffix at `sorted_index`, borrowed from the text
    pub fn suffix(&self, sorted_index: usize) -> SaResult<&str> {
        Ok(self.str_from(self.offset_at(sorted_index)?))
    }

    /// Like [`suffix`](Self::suffix) but `None` when out of range
    pub fn get(&self, sorted_index: usize) -> Option<&str> {
        self.suffix(sorted_index).ok()
    }

    /// Shared prefix length of the suffix at `sorted_index` and its sorted
    /// predecessor; 0 for index 0
    pub fn longest_common_prefix(&self, sorted_index: usize) -> SaResult<usize> {
        let current = self.offset_at(sorted_index)?;
        if sorted_index == 0 {
            return Ok(0);
        }
        let previous = self.offsets[sorted_index - 1] as usize;
        Ok(common_prefix_len(
            &self.comparator,
            self.chars_from(previous),
            self.chars_from(current),
        ))
    }

    /// Every adjacent LCP, with entry 0 set to 0
    pub fn lcp_array(&self) -> Vec<usize> {
        let lcp_at = |i: usize| {
            if i == 0 {
                return 0;
            }
            common_prefix_len(
                &self.comparator,
                self.chars_from(self.offsets[i - 1] as usize),
                self.chars_from(self.offsets[i] as usize),
            )
        };

        if self.len() > self.parallel_threshold {
            (0..self.len()).into_par_iter().map(lcp_at).collect()
        } else {
            (0..self.len()).map(lcp_at).collect()
        }
    }

    /// Number of suffixes that compare strictly less than `key`
    pub fn rank(&self, key: &str) -> usize {
        let key: Vec<char> = key.chars().collect();
        self.lower_bound(&key)
    }

    /// First sorted index whose suffix is not less than `key`
    fn lower_bound(&self, key: &[char]) -> usize {
        self.offsets.partition_point(|&offset| {
            compare_bounded(&self.comparator, self.chars_from(offset as usize), key)
                == Ordering::Less
        })
    }

    /// Range of sorted indices whose suffixes start with `pattern`
    ///
    /// An empty pattern matches nothing.
    pub fn search(&self, pattern: &str) -> Range<usize> {
        if pattern.is_empty() {
            return 0..0;
        }

        let pattern: Vec<char> = pattern.chars().collect();
        let lo = self.lower_bound(&pattern);

        // Suffixes starting with the pattern compare Equal once truncated to
        // the pattern length; everything after them compares Greater.
        let hi = lo
            + self.offsets[lo..].partition_point(|&offset| {
                let suffix = self.chars_from(offset as usize);
                let head = &suffix[..suffix.len().min(pattern.len())];
                compare_bounded(&self.comparator, head, &pattern) == Ordering::Equal
            });

        lo..hi
    }

    /// Text offsets where `pattern` occurs, in sorted suffix order
    pub fn positions(&self, pattern: &str) -> Vec<usize> {
        self.offsets[self.search(pattern)]
            .iter()
            .map(|&offset| offset as usize)
            .collect()
    }

    pub fn count_matches(&self, pattern: &str) -> usize {
        self.search(pattern).len()
    }

    pub fn contains(&self, pattern: &str) -> bool {
        !self.search(pattern).is_empty()
    }

    /// Suffixes in sorted order
    pub fn iter(&self) -> Suffixes<'_, C> {
        Suffixes {
            sa: self,
            range: 0..self.len(),
        }
    }

    /// Get statistics about this suffix array
    pub fn stats(&self) -> SuffixArrayStats {
        let distinct: HashSet<char> = self.source.chars.iter().copied().collect();
        SuffixArrayStats {
            char_count: self.len(),
            byte_count: self.source.text.len(),
            distinct_chars: distinct.len(),
        }
    }
}

impl<C> fmt::Debug for SuffixArray<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuffixArray")
            .field("text", &self.source.text)
            .field("offsets", &self.offsets)
            .finish_non_exhaustive()
    }
}

impl<C: SuffixComparator> Index<usize> for SuffixArray<C> {
    type Output = str;

    /// Panics when `sorted_index` is out of range, like slice indexing
    fn index(&self, sorted_index: usize) -> &str {
        match self.suffix(sorted_index) {
            Ok(suffix) => suffix,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, C: SuffixComparator> IntoIterator for &'a SuffixArray<C> {
    type Item = &'a str;
    type IntoIter = Suffixes<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over suffixes in sorted order
#[derive(Clone)]
pub struct Suffixes<'a, C> {
    sa: &'a SuffixArray<C>,
    range: Range<usize>,
}

impl<'a, C: SuffixComparator> Iterator for Suffixes<'a, C> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let i = self.range.next()?;
        Some(self.sa.str_from(self.sa.offsets[i] as usize))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<C: SuffixComparator> DoubleEndedIterator for Suffixes<'_, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let i = self.range.next_back()?;
        Some(self.sa.str_from(self.sa.offsets[i] as usize))
    }
}

impl<C: SuffixComparator> ExactSizeIterator for Suffixes<'_, C> {}

impl<C: SuffixComparator> FusedIterator for Suffixes<'_, C> {}
