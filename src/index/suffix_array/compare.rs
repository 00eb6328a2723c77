//! Comparison policies for ordering suffixes
//!
//! Every comparison the suffix array performs (construction sort, rank,
//! pattern search, LCP mismatch scan) goes through a [`SuffixComparator`]
//! fixed at construction time.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Orders two equal-length runs of characters.
///
/// Implementations must be a total order and must compare character by
/// character (lexicographically), so that truncating both runs to a common
/// prefix never reverses their order.
pub trait SuffixComparator: Send + Sync {
    /// Compare two runs of the same length
    fn compare(&self, a: &[char], b: &[char]) -> Ordering;

    /// Whether two single characters are equivalent under this policy
    #[inline]
    fn chars_equal(&self, a: char, b: char) -> bool {
        self.compare(&[a], &[b]) == Ordering::Equal
    }
}

impl<F> SuffixComparator for F
where
    F: Fn(&[char], &[char]) -> Ordering + Send + Sync,
{
    #[inline]
    fn compare(&self, a: &[char], b: &[char]) -> Ordering {
        self(a, b)
    }
}

/// Built-in comparison policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringComparison {
    /// Compare Unicode scalar values
    #[default]
    Ordinal,
    /// Compare simple lowercase mappings of each character
    OrdinalIgnoreCase,
}

impl StringComparison {
    /// Stable numeric id, stored in the `sa.bin` header flags
    pub fn id(self) -> u32 {
        match self {
            StringComparison::Ordinal => 0,
            StringComparison::OrdinalIgnoreCase => 1,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(StringComparison::Ordinal),
            1 => Some(StringComparison::OrdinalIgnoreCase),
            _ => None,
        }
    }

    pub fn is_case_insensitive(self) -> bool {
        self == StringComparison::OrdinalIgnoreCase
    }
}

impl std::fmt::Display for StringComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StringComparison::Ordinal => write!(f, "ordinal"),
            StringComparison::OrdinalIgnoreCase => write!(f, "ordinal-ignore-case"),
        }
    }
}

impl SuffixComparator for StringComparison {
    #[inline]
    fn compare(&self, a: &[char], b: &[char]) -> Ordering {
        match self {
            StringComparison::Ordinal => a.cmp(b),
            StringComparison::OrdinalIgnoreCase => {
                a.iter().map(|&c| fold_case(c)).cmp(b.iter().map(|&c| fold_case(c)))
            }
        }
    }

    #[inline]
    fn chars_equal(&self, a: char, b: char) -> bool {
        match self {
            StringComparison::Ordinal => a == b,
            StringComparison::OrdinalIgnoreCase => a == b || fold_case(a) == fold_case(b),
        }
    }
}

/// Simple (one-to-one) lowercase mapping
///
/// Characters whose lowercase form expands to several characters are left
/// as-is so that folding never changes run lengths.
#[inline]
fn fold_case(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Compare two runs of possibly different lengths
///
/// The common `min(len)` prefix is compared with `cmp`; on a tie the shorter
/// run sorts first.
#[inline]
pub fn compare_bounded<C: SuffixComparator + ?Sized>(cmp: &C, a: &[char], b: &[char]) -> Ordering {
    let common = a.len().min(b.len());
    cmp.compare(&a[..common], &b[..common])
        .then_with(|| a.len().cmp(&b.len()))
}

/// Number of leading characters `a` and `b` share under `cmp`
#[inline]
pub fn common_prefix_len<C: SuffixComparator + ?Sized>(cmp: &C, a: &[char], b: &[char]) -> usize {
    a.iter()
        .zip(b)
        .take_while(|&(&x, &y)| cmp.chars_equal(x, y))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_ordinal_is_case_sensitive() {
        let cmp = StringComparison::Ordinal;
        // 'B' (0x42) < 'a' (0x61)
        assert_eq!(compare_bounded(&cmp, &chars("B"), &chars("a")), Ordering::Less);
        assert!(!cmp.chars_equal('a', 'A'));
    }

    #[test]
    fn test_ignore_case() {
        let cmp = StringComparison::OrdinalIgnoreCase;
        assert_eq!(compare_bounded(&cmp, &chars("ABC"), &chars("abc")), Ordering::Equal);
        assert_eq!(compare_bounded(&cmp, &chars("B"), &chars("a")), Ordering::Greater);
        assert!(cmp.chars_equal('Ä', 'ä'));
    }

    #[test]
    fn test_prefix_sorts_first() {
        let cmp = StringComparison::Ordinal;
        assert_eq!(compare_bounded(&cmp, &chars("an"), &chars("ana")), Ordering::Less);
        assert_eq!(compare_bounded(&cmp, &chars("ana"), &chars("an")), Ordering::Greater);
        assert_eq!(compare_bounded(&cmp, &chars(""), &chars("a")), Ordering::Less);
    }

    #[test]
    fn test_closure_comparator() {
        // Reverse ordinal
        let reverse = |a: &[char], b: &[char]| b.cmp(a);
        assert_eq!(compare_bounded(&reverse, &chars("a"), &chars("b")), Ordering::Greater);
        assert!(reverse.chars_equal('x', 'x'));
    }

    #[test]
    fn test_common_prefix_len() {
        let cmp = StringComparison::Ordinal;
        assert_eq!(common_prefix_len(&cmp, &chars("anana"), &chars("ana")), 3);
        assert_eq!(common_prefix_len(&cmp, &chars("nab"), &chars("nan")), 2);
        assert_eq!(common_prefix_len(&cmp, &chars("x"), &chars("y")), 0);

        let icase = StringComparison::OrdinalIgnoreCase;
        assert_eq!(common_prefix_len(&icase, &chars("HeLLo"), &chars("help")), 3);
    }

    #[test]
    fn test_id_round_trip() {
        for policy in [StringComparison::Ordinal, StringComparison::OrdinalIgnoreCase] {
            assert_eq!(StringComparison::from_id(policy.id()), Some(policy));
        }
        assert_eq!(StringComparison::from_id(7), None);
    }
}
