//! Output formatting for suffix tables and search results

use crate::index::suffix_array::{SuffixArray, SuffixArrayMeta, SuffixComparator};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Suffixes longer than this are cut off in tables
pub const DEFAULT_MAX_WIDTH: usize = 60;

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print the sorted suffix table with the LCP prefix highlighted
pub fn print_suffix_table<C: SuffixComparator>(sa: &SuffixArray<C>, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    write_suffix_table(&mut out, sa, DEFAULT_MAX_WIDTH)
}

/// Write one row per suffix: rank, offset, LCP, suffix
pub fn write_suffix_table<W: WriteColor, C: SuffixComparator>(
    out: &mut W,
    sa: &SuffixArray<C>,
    max_width: usize,
) -> io::Result<()> {
    let lcps = sa.lcp_array();
    let num_width = sa.len().to_string().len().max(4);

    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(
        out,
        "{:>w$} {:>w$} {:>w$}  suffix",
        "rank",
        "off",
        "lcp",
        w = num_width
    )?;
    out.reset()?;

    for (rank, (suffix, &lcp)) in sa.iter().zip(&lcps).enumerate() {
        let offset = sa.offsets()[rank];
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{:>w$}", rank, w = num_width)?;
        out.reset()?;
        write!(out, " {:>w$} {:>w$}  ", offset, lcp, w = num_width)?;

        let shown: String = suffix.chars().take(max_width).collect();
        let split = shown
            .char_indices()
            .nth(lcp)
            .map(|(pos, _)| pos)
            .unwrap_or(shown.len());

        // Shared prefix with the previous suffix
        if split > 0 {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
            write!(out, "{}", shown[..split].escape_debug())?;
            out.reset()?;
        }
        write!(out, "{}", shown[split..].escape_debug())?;

        if suffix.chars().count() > max_width {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
            write!(out, "...")?;
            out.reset()?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Print matching offsets for a pattern, one per line, in text order
pub fn print_positions(positions: &[usize], color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    write_positions(&mut out, positions)
}

pub fn write_positions<W: WriteColor>(out: &mut W, positions: &[usize]) -> io::Result<()> {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();

    for pos in sorted {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "{}", pos)?;
        out.reset()?;
    }

    Ok(())
}

/// Print persisted index metadata
pub fn print_meta(meta: &SuffixArrayMeta, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    write_meta(&mut out, meta)
}

pub fn write_meta<W: WriteColor>(out: &mut W, meta: &SuffixArrayMeta) -> io::Result<()> {
    let rows = [
        ("Suffixes", meta.suffix_count.to_string()),
        ("Bytes", meta.byte_count.to_string()),
        ("Comparison", meta.comparison.to_string()),
        ("Built", meta.built_at.to_rfc3339()),
    ];

    for (label, value) in rows {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, "{:<11}", format!("{}:", label))?;
        out.reset()?;
        writeln!(out, " {}", value)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut NoColor<Vec<u8>>) -> io::Result<()>,
    {
        let mut out = NoColor::new(Vec::new());
        f(&mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_suffix_table() {
        let sa = SuffixArray::new("banana").unwrap();
        let text = render(|out| write_suffix_table(out, &sa, DEFAULT_MAX_WIDTH));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].contains("rank"));
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["0", "5", "0", "a"]);
        assert_eq!(lines[3].split_whitespace().collect::<Vec<_>>(), ["2", "1", "3", "anana"]);
    }

    #[test]
    fn test_suffix_table_truncates() {
        let sa = SuffixArray::new("abcdef").unwrap();
        let text = render(|out| write_suffix_table(out, &sa, 3));
        // "abcdef" is rank 0 and shown cut off
        assert!(text.lines().nth(1).unwrap().ends_with("abc..."));
    }

    #[test]
    fn test_suffix_table_escapes_newlines() {
        let sa = SuffixArray::new("a\nb").unwrap();
        let text = render(|out| write_suffix_table(out, &sa, DEFAULT_MAX_WIDTH));
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("\\nb"));
    }

    #[test]
    fn test_positions_sorted() {
        let text = render(|out| write_positions(out, &[3, 1]));
        assert_eq!(text, "1\n3\n");
    }
}
