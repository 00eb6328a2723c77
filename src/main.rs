use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sfx::index::suffix_array::{
    StringComparison, SuffixArray, SuffixArrayBuilder, SuffixArrayConfig, SuffixArrayReader,
    SuffixArrayWriter,
};
use sfx::{output, utils};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sfx")]
#[command(about = "Build and query suffix arrays")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,

    /// Config file (defaults to the app data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every suffix in sorted order with its offset and LCP
    Show {
        text: String,

        /// Compare characters case-insensitively
        #[arg(short, long)]
        ignore_case: bool,
    },
    /// Count suffixes that sort strictly before KEY
    Rank {
        text: String,
        key: String,

        /// Compare characters case-insensitively
        #[arg(short, long)]
        ignore_case: bool,
    },
    /// Print the offsets where PATTERN occurs
    Search {
        text: String,
        pattern: String,

        /// Compare characters case-insensitively
        #[arg(short, long)]
        ignore_case: bool,
    },
    /// Build a suffix array from a file and save it
    Build {
        /// UTF-8 input file
        file: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Compare characters case-insensitively
        #[arg(short, long)]
        ignore_case: bool,
    },
    /// Show statistics for a saved suffix array
    Stats {
        /// Directory written by `sfx build`
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let color = match cli.color {
        ColorMode::Auto => std::io::stdout().is_terminal(),
        ColorMode::Always => true,
        ColorMode::Never => false,
    };
    let config = utils::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Show { text, ignore_case } => {
            let sa = build(&config, text, ignore_case)?;
            output::print_suffix_table(&sa, color)?;
        }
        Commands::Rank {
            text,
            key,
            ignore_case,
        } => {
            let sa = build(&config, text, ignore_case)?;
            println!("{}", sa.rank(&key));
        }
        Commands::Search {
            text,
            pattern,
            ignore_case,
        } => {
            let sa = build(&config, text, ignore_case)?;
            output::print_positions(&sa.positions(&pattern), color)?;
        }
        Commands::Build {
            file,
            output: dir,
            ignore_case,
        } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let sa = build(&config, text, ignore_case)?;
            let meta = SuffixArrayWriter::write(&dir, &sa)?;
            println!(
                "Indexed {} suffixes into {}",
                meta.suffix_count,
                dir.display()
            );
        }
        Commands::Stats { dir } => {
            let sa = SuffixArrayReader::open(&dir)?
                .with_context(|| format!("No suffix array found in {}", dir.display()))?;
            match SuffixArrayReader::read_meta(&dir)? {
                Some(meta) => output::print_meta(&meta, color)?,
                None => println!("{:<11} {}", "Suffixes:", sa.len()),
            }
            let stats = sa.stats();
            println!("{:<11} {}", "Distinct:", stats.distinct_chars);
        }
    }

    Ok(())
}

fn build(
    config: &SuffixArrayConfig,
    text: String,
    ignore_case: bool,
) -> Result<SuffixArray<StringComparison>> {
    let mut config = config.clone();
    if ignore_case {
        config.comparison = StringComparison::OrdinalIgnoreCase;
    }
    Ok(SuffixArrayBuilder::new(config).build(text)?)
}

/// Diagnostics go to stderr, filtered by `SFX_LOG` (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SFX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
