//! Suffix array writer
//!
//! Writes a built suffix array to disk in a format optimized for
//! memory-mapped reading.

use super::array::SuffixArray;
use super::compare::StringComparison;
use super::types::*;
use crate::utils::{write_u32_le, write_u64_le};
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Writes suffix array files to an index directory
pub struct SuffixArrayWriter;

impl SuffixArrayWriter {
    /// Write all suffix array files to `dir`, creating it if needed
    ///
    /// Creates:
    /// - text.bin: The source text
    /// - sa.bin: Header plus the sorted offsets
    /// - meta.json: Human-readable metadata
    #[instrument(skip(sa), fields(suffixes = sa.len()))]
    pub fn write(dir: &Path, sa: &SuffixArray<StringComparison>) -> Result<SuffixArrayMeta> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        Self::write_text(dir, sa.text())?;
        Self::write_suffix_array(dir, sa.offsets(), *sa.comparator())?;

        let meta = SuffixArrayMeta {
            suffix_count: sa.len() as u64,
            byte_count: sa.text().len() as u64,
            comparison: *sa.comparator(),
            built_at: Utc::now(),
        };
        Self::write_meta(dir, &meta)?;

        debug!(dir = %dir.display(), "wrote suffix array");
        Ok(meta)
    }

    /// Write source text to text.bin
    fn write_text(dir: &Path, text: &str) -> Result<()> {
        let path = dir.join(TEXT_FILE);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut file = BufWriter::with_capacity(65536, file);
        file.write_all(text.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Write suffix array to sa.bin
    fn write_suffix_array(
        dir: &Path,
        sa: &[SuffixEntry],
        comparison: StringComparison,
    ) -> Result<()> {
        let path = dir.join(SA_FILE);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut file = BufWriter::with_capacity(65536, file);

        // Write header
        let header = SuffixArrayHeader::new(sa.len() as u64, comparison);
        write_u32_le(&mut file, header.magic)?;
        write_u32_le(&mut file, header.version)?;
        write_u64_le(&mut file, header.suffix_count)?;
        write_u32_le(&mut file, header.flags)?;

        // Write entries in chunks to reduce call overhead
        let mut buffer = Vec::with_capacity(4 * 2048);
        for &entry in sa {
            buffer.extend_from_slice(&entry.to_le_bytes());
            if buffer.len() >= 4 * 2048 {
                file.write_all(&buffer)?;
                buffer.clear();
            }
        }
        if !buffer.is_empty() {
            file.write_all(&buffer)?;
        }

        file.flush()?;
        Ok(())
    }

    fn write_meta(dir: &Path, meta: &SuffixArrayMeta) -> Result<()> {
        let path = dir.join(META_FILE);
        let content = serde_json::to_string_pretty(meta)
            .context("Failed to serialize suffix array metadata")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
