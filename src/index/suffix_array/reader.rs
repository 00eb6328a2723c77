//! Suffix array reader
//!
//! Memory-maps a persisted suffix array and rebuilds an in-memory
//! [`SuffixArray`] without re-sorting.

use super::array::SuffixArray;
use super::compare::StringComparison;
use super::types::*;
use crate::utils::{decode_u32_le_slice, read_u32_le, read_u64_le};
use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::{self, File};
use std::path::Path;
use tracing::{debug, instrument};

/// Reader for a persisted suffix array directory
pub struct SuffixArrayReader;

impl SuffixArrayReader {
    /// Open a suffix array from `dir`
    ///
    /// Returns `Ok(None)` if the index files do not exist. Corrupt files are
    /// an error.
    #[instrument]
    pub fn open(dir: &Path) -> Result<Option<SuffixArray<StringComparison>>> {
        let text_path = dir.join(TEXT_FILE);
        let sa_path = dir.join(SA_FILE);

        if !text_path.exists() || !sa_path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&text_path)
            .with_context(|| format!("Failed to read {}", text_path.display()))?;

        let sa_file = File::open(&sa_path)
            .with_context(|| format!("Failed to open {}", sa_path.display()))?;
        let file_len = sa_file.metadata()?.len();
        if file_len < SuffixArrayHeader::SIZE as u64 {
            anyhow::bail!("Invalid sa.bin: file too small");
        }

        // Memory-map the suffix array
        let sa_mmap = unsafe { Mmap::map(&sa_file)? };

        let header = Self::read_header(&sa_mmap)?;
        let comparison = StringComparison::from_id(header.flags)
            .with_context(|| format!("Invalid sa.bin: unknown comparison id {}", header.flags))?;

        let body = &sa_mmap[SuffixArrayHeader::SIZE..];
        let expected = header.suffix_count.checked_mul(4);
        if expected != Some(body.len() as u64) {
            anyhow::bail!(
                "Invalid sa.bin: header declares {} suffixes but body holds {} bytes",
                header.suffix_count,
                body.len()
            );
        }

        let offsets = decode_u32_le_slice(body).context("Invalid sa.bin: truncated entry")?;
        let sa = SuffixArray::from_sorted_offsets(text, offsets, comparison)
            .context("Invalid suffix array")?;

        debug!(suffixes = sa.len(), %comparison, "opened suffix array");
        Ok(Some(sa))
    }

    /// Validate and read the sa.bin header
    fn read_header(data: &[u8]) -> Result<SuffixArrayHeader> {
        let mut cursor = data;
        let header = SuffixArrayHeader {
            magic: read_u32_le(&mut cursor)?,
            version: read_u32_le(&mut cursor)?,
            suffix_count: read_u64_le(&mut cursor)?,
            flags: read_u32_le(&mut cursor)?,
        };

        if header.magic != SA_MAGIC {
            anyhow::bail!("Invalid sa.bin: bad magic number");
        }
        if header.version != SA_VERSION {
            anyhow::bail!("Unsupported sa.bin version: {}", header.version);
        }

        Ok(header)
    }

    /// Read meta.json, if present
    pub fn read_meta(dir: &Path) -> Result<Option<SuffixArrayMeta>> {
        let path = dir.join(META_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let meta = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::suffix_array::writer::SuffixArrayWriter;
    use tempfile::tempdir;

    fn setup_test_sa(text: &str, comparison: StringComparison) -> tempfile::TempDir {
        let temp_dir = tempdir().unwrap();
        let sa = SuffixArray::with_comparison(text, comparison).unwrap();
        SuffixArrayWriter::write(temp_dir.path(), &sa).unwrap();
        temp_dir
    }

    #[test]
    fn test_open_reader() {
        let temp_dir = setup_test_sa("mississippi", StringComparison::Ordinal);
        let sa = SuffixArrayReader::open(temp_dir.path()).unwrap().unwrap();
        let fresh = SuffixArray::new("mississippi").unwrap();

        assert_eq!(sa.offsets(), fresh.offsets());
        assert_eq!(sa.text(), "mississippi");
        assert_eq!(sa.lcp_array(), fresh.lcp_array());
        assert_eq!(sa.rank("ssi"), fresh.rank("ssi"));
    }

    #[test]
    fn test_open_keeps_policy() {
        let temp_dir = setup_test_sa("HeLLo hello", StringComparison::OrdinalIgnoreCase);
        let sa = SuffixArrayReader::open(temp_dir.path()).unwrap().unwrap();
        assert_eq!(*sa.comparator(), StringComparison::OrdinalIgnoreCase);
        assert_eq!(sa.count_matches("HELLO"), 2);
    }

    #[test]
    fn test_missing_files() {
        let temp_dir = tempdir().unwrap();

        // No files - should return None (not error)
        assert!(SuffixArrayReader::open(temp_dir.path()).unwrap().is_none());
        assert!(SuffixArrayReader::read_meta(temp_dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_read_meta() {
        let temp_dir = setup_test_sa("banana", StringComparison::Ordinal);
        let meta = SuffixArrayReader::read_meta(temp_dir.path()).unwrap().unwrap();
        assert_eq!(meta.suffix_count, 6);
        assert_eq!(meta.comparison, StringComparison::Ordinal);
    }

    #[test]
    fn test_bad_magic() {
        let temp_dir = setup_test_sa("banana", StringComparison::Ordinal);
        let path = temp_dir.path().join(SA_FILE);
        let mut data = fs::read(&path).unwrap();
        data[0] = b'X';
        fs::write(&path, data).unwrap();

        let err = SuffixArrayReader::open(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("bad magic"));
    }

    #[test]
    fn test_count_mismatch() {
        let temp_dir = setup_test_sa("banana", StringComparison::Ordinal);
        let path = temp_dir.path().join(SA_FILE);
        let mut data = fs::read(&path).unwrap();
        data[8..16].copy_from_slice(&7u64.to_le_bytes());
        fs::write(&path, data).unwrap();

        assert!(SuffixArrayReader::open(temp_dir.path()).is_err());
    }

    #[test]
    fn test_not_a_permutation() {
        let temp_dir = setup_test_sa("banana", StringComparison::Ordinal);
        let path = temp_dir.path().join(SA_FILE);
        let mut data = fs::read(&path).unwrap();
        // Duplicate the first entry into the second slot
        let first: [u8; 4] = data[20..24].try_into().unwrap();
        data[24..28].copy_from_slice(&first);
        fs::write(&path, data).unwrap();

        assert!(SuffixArrayReader::open(temp_dir.path()).is_err());
    }

    #[test]
    fn test_truncated_file() {
        let temp_dir = setup_test_sa("banana", StringComparison::Ordinal);
        fs::write(temp_dir.path().join(SA_FILE), b"SFXA").unwrap();

        let err = SuffixArrayReader::open(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("too small"));
    }
}
