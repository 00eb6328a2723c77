//! Types for suffix array indexing
//!
//! Configuration, persisted metadata and on-disk header layout.

use super::compare::StringComparison;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Suffix array entry - character offset into the source text
pub type SuffixEntry = u32;

/// Magic number for suffix array files
pub const SA_MAGIC: u32 = 0x41584653; // "SFXA" when written little-endian

/// Current version of the suffix array format
pub const SA_VERSION: u32 = 1;

/// Source text, UTF-8
pub const TEXT_FILE: &str = "text.bin";

/// Header plus sorted offsets
pub const SA_FILE: &str = "sa.bin";

/// Human-readable metadata
pub const META_FILE: &str = "meta.json";

/// Configuration for suffix array building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixArrayConfig {
    /// Comparison policy used for every ordering decision
    #[serde(default)]
    pub comparison: StringComparison,
    /// Texts with more characters than this are sorted on the rayon pool
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    100_000
}

impl Default for SuffixArrayConfig {
    fn default() -> Self {
        Self {
            comparison: StringComparison::default(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl SuffixArrayConfig {
    /// Load config from a JSON file, or return default if not found
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SuffixArrayConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}

/// Suffix array metadata stored in meta.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuffixArrayMeta {
    /// Number of suffixes (equals the character count of the text)
    pub suffix_count: u64,
    /// Size of text.bin
    pub byte_count: u64,
    /// Policy the offsets were sorted with
    pub comparison: StringComparison,
    pub built_at: DateTime<Utc>,
}

/// Statistics about a suffix array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArrayStats {
    pub char_count: usize,
    pub byte_count: usize,
    pub distinct_chars: usize,
}

/// Header for sa.bin file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixArrayHeader {
    /// Magic number (SA_MAGIC)
    pub magic: u32,
    /// Version number
    pub version: u32,
    /// Number of suffix entries
    pub suffix_count: u64,
    /// Comparison policy id
    pub flags: u32,
}

impl SuffixArrayHeader {
    /// Size of header in bytes
    pub const SIZE: usize = 4 + 4 + 8 + 4; // 20 bytes

    pub fn new(suffix_count: u64, comparison: StringComparison) -> Self {
        Self {
            magic: SA_MAGIC,
            version: SA_VERSION,
            suffix_count,
            flags: comparison.id(),
        }
    }
}
