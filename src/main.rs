use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

mod cli_output;

use cli_output::{ComparisonRow, OutputMode, OutputWriter};
use vigcrack::alphabet::Alphabet;
use vigcrack::cipher::vigenere;
use vigcrack::normalize::normalize;
use vigcrack::{AnalysisConfig, Cryptanalyzer, Strategy};

#[derive(Parser)]
#[command(name = "vigcrack")]
#[command(about = "Recover Vigenère plaintexts without knowing the key", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Configuration file (default: <config dir>/vigcrack/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (default: auto-detect)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,
}

#[derive(Subcommand)]
enum Commands {
    /// Break the ciphertext on the first line of a file
    Crack {
        /// Attack version: 1 (frequency peak), 2 (mutual coincidence), 3 (correlation)
        #[arg(short = 'v', long = "strategy", value_parser = clap::value_parser!(u8).range(1..=3))]
        strategy: u8,

        /// File holding the ciphertext
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Run all three attacks and compare their results
    Compare {
        /// File holding the ciphertext
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Encrypt the first line of a file
    Encrypt {
        /// Key as letters (DBEBF) or comma-separated shifts (3,1,4,1,5)
        #[arg(short, long)]
        key: String,

        /// File holding the plaintext
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Decrypt the first line of a file with a known key
    Decrypt {
        /// Key as letters (DBEBF) or comma-separated shifts (3,1,4,1,5)
        #[arg(short, long)]
        key: String,

        /// File holding the ciphertext
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Turn raw prose into uppercase A-Z text (accents folded, the rest dropped)
    Prepare {
        /// File holding the raw text
        #[arg(short, long)]
        file: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Action: show, path, init
        #[arg(default_value = "show")]
        action: String,

        /// Overwrite an existing file on init
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let out = OutputWriter::resolve(cli.format);

    match cli.command {
        Commands::Crack { strategy, file } => {
            let analyzer = load_analyzer(cli.config.as_deref())?;
            let strategy = Strategy::from_version(strategy)?;
            let ciphertext = read_first_line(&file)?;

            let started = Instant::now();
            let analysis = analyzer.analyze(&ciphertext, strategy).with_context(|| {
                format!(
                    "Cryptanalysis v{} of {} failed",
                    strategy.version(),
                    file.display()
                )
            })?;
            out.analysis(&analysis, &file, started.elapsed());
            Ok(())
        }

        Commands::Compare { file } => {
            let analyzer = load_analyzer(cli.config.as_deref())?;
            let ciphertext = read_first_line(&file)?;

            let started = Instant::now();
            let rows: Vec<ComparisonRow> = Strategy::ALL
                .iter()
                .map(|&strategy| ComparisonRow {
                    strategy,
                    outcome: analyzer
                        .analyze(&ciphertext, strategy)
                        .map_err(|e| e.to_string()),
                })
                .collect();
            out.comparison(&rows, &file, started.elapsed());
            Ok(())
        }

        Commands::Encrypt { key, file } => {
            let alphabet = Alphabet::LATIN;
            let key = vigenere::parse_key(&alphabet, &key)?;
            let plaintext = read_first_line(&file)?;

            let started = Instant::now();
            let ciphertext = vigenere::encrypt(&alphabet, &plaintext, &key)
                .with_context(|| format!("Could not encrypt {}", file.display()))?;
            out.text("encrypt", &ciphertext, started.elapsed());
            Ok(())
        }

        Commands::Decrypt { key, file } => {
            let alphabet = Alphabet::LATIN;
            let key = vigenere::parse_key(&alphabet, &key)?;
            let ciphertext = read_first_line(&file)?;

            let started = Instant::now();
            let plaintext = vigenere::decrypt(&alphabet, &ciphertext, &key)
                .with_context(|| format!("Could not decrypt {}", file.display()))?;
            out.text("decrypt", &plaintext, started.elapsed());
            Ok(())
        }

        Commands::Prepare { file, output } => {
            let raw = fs::read_to_string(&file)
                .with_context(|| format!("Could not read {}", file.display()))?;

            let started = Instant::now();
            let prepared = normalize(&raw);
            debug!(
                "Kept {} of {} characters",
                prepared.len(),
                raw.chars().count()
            );

            match output {
                Some(path) => {
                    fs::write(&path, format!("{}\n", prepared))
                        .with_context(|| format!("Could not write {}", path.display()))?;
                    out.success(&format!(
                        "Wrote {} letters to {}",
                        prepared.len(),
                        path.display()
                    ));
                }
                None => out.text("prepare", &prepared, started.elapsed()),
            }
            Ok(())
        }

        Commands::Config { action, force } => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => AnalysisConfig::config_file_path()?,
            };

            match action.as_str() {
                "show" => {
                    let config = AnalysisConfig::load(cli.config.as_deref())?;
                    println!("{}", serde_json::to_string_pretty(&config)?);
                }
                "path" => {
                    println!("{}", path.display());
                }
                "init" => {
                    if path.exists() && !force {
                        bail!(
                            "Config file {} already exists (use --force to overwrite)",
                            path.display()
                        );
                    }
                    AnalysisConfig::default().save(&path)?;
                    info!("Wrote default configuration to {}", path.display());
                    out.success(&format!("Created {}", path.display()));
                }
                other => bail!("Unknown config action '{}', expected show, path or init", other),
            }
            Ok(())
        }
    }
}

fn load_analyzer(config_path: Option<&Path>) -> Result<Cryptanalyzer> {
    let config = AnalysisConfig::load(config_path)?;
    debug!(
        "Max key length {}, IC threshold {}, language {}",
        config.max_key_length,
        config.ic_threshold,
        config.language.name()
    );
    Ok(Cryptanalyzer::new(&config)?)
}

/// First line of `path` without its line terminator.
fn read_first_line(path: &Path) -> Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))?;
    Ok(content.lines().next().unwrap_or_default().to_string())
}
