use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use vigenere_analysis::{
    AnalysisConfig, Analyzer, ConfigFile, KeyLengthCandidate, Language, SearchStrategy, normalize,
};

/// Below this many letters the statistics are rarely reliable.
const SHORT_TEXT_WARNING: usize = 50;

/// Command-line arguments for the Vigenère key breaker.
#[derive(Parser, Debug)]
#[command(version, about = "Recovers the key of a Vigenère ciphertext from letter statistics alone")]
struct Cli {
    /// Path to the input file containing encrypted text (stdin when omitted)
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: Option<PathBuf>,

    /// TOML file with analysis settings; flags below take precedence
    #[arg(short, long, help = "Path to a TOML configuration file")]
    config: Option<PathBuf>,

    /// Upper bound (exclusive) of the key-length search
    #[arg(short, long, help = "Upper bound (exclusive) of the key-length search")]
    max_key_length: Option<usize>,

    /// Minimum average IOC that accepts a key length
    #[arg(short, long, help = "Minimum average IOC that accepts a key length")]
    threshold: Option<f64>,

    /// Plaintext language whose letter frequencies are expected
    #[arg(short, long, value_enum, help = "Expected plaintext language")]
    language: Option<LanguageArg>,

    /// Key-length search strategy
    #[arg(short, long, value_enum, help = "Key-length search strategy")]
    strategy: Option<StrategyArg>,

    /// Print the average IOC of every candidate key length
    #[arg(short, long, help = "Print the average IOC of every candidate key length")]
    profile: bool,

    /// Log analysis progress to stderr
    #[arg(short, long, help = "Log analysis progress to stderr")]
    verbose: bool,
}

/// Built-in letter frequency tables.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LanguageArg {
    English,
    German,
}

impl From<LanguageArg> for Language {
    fn from(language: LanguageArg) -> Self {
        match language {
            LanguageArg::English => Language::English,
            LanguageArg::German => Language::German,
        }
    }
}

/// Key-length search strategies.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    /// Stop at the first length above the threshold
    First,
    /// Take the highest average IOC in range, if above the threshold
    Best,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::First => SearchStrategy::FirstAboveThreshold,
            StrategyArg::Best => SearchStrategy::BestInRange,
        }
    }
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli)?;
    let ciphertext = read_input(cli.file.as_deref())?;

    let letters = normalize(&ciphertext).len();
    if letters < SHORT_TEXT_WARNING {
        warn!(letters, "Text may be too short for reliable analysis");
    }

    let analyzer = Analyzer::new(config);

    if cli.profile {
        print_profile(&analyzer.profile(&ciphertext));
    }

    let analysis = analyzer
        .analyze(&ciphertext)
        .context("Failed to recover the key")?;

    // Output key to stdout
    println!("{}", analysis.key);

    Ok(())
}

/// Installs a stderr subscriber; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Layers defaults, the optional config file, and command-line flags.
fn build_config(cli: &Cli) -> Result<AnalysisConfig> {
    let mut builder = AnalysisConfig::builder();

    if let Some(path) = &cli.config {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        builder = ConfigFile::from_toml_str(&source)
            .and_then(|file| file.apply(builder))
            .with_context(|| format!("Invalid config file {}", path.display()))?;
    }

    if let Some(max_key_length) = cli.max_key_length {
        builder = builder.max_key_length(max_key_length);
    }
    if let Some(threshold) = cli.threshold {
        builder = builder.ioc_threshold(threshold);
    }
    if let Some(language) = cli.language {
        builder = builder.language(language.into());
    }
    if let Some(strategy) = cli.strategy {
        builder = builder.strategy(strategy.into());
    }

    builder.build().context("Invalid analysis settings")
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read ciphertext from stdin")?;
            Ok(input)
        }
    }
}

fn print_profile(profile: &[KeyLengthCandidate]) {
    println!("length  avg_ioc");
    for candidate in profile {
        println!("{:>6}  {:.5}", candidate.length, candidate.average_ioc);
    }
}
