//! Kenning CLI - stylometric signature extraction and authorship attribution.
//!
//! Thin wrapper over the library: loads corpora, drives signature
//! extraction and comparison, and prints results. All non-trivial semantics
//! live in `kenning_rs`.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use kenning_rs::core::scoring::compare_signatures;
use kenning_rs::io::corpus;
use kenning_rs::{KenningConfig, KenningEngine};

#[derive(Parser)]
#[command(name = "kenning", version, about = "Stylometric authorship attribution")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the signature of a text corpus
    Sign {
        /// Text file to analyze
        corpus: PathBuf,

        /// Author label (defaults to the corpus file stem)
        #[arg(short, long)]
        author: Option<String>,

        /// Write the signature JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare two signature files
    Compare {
        /// First signature JSON file
        first: PathBuf,

        /// Second signature JSON file
        second: PathBuf,
    },

    /// Attribute an unknown text against a directory of known signatures
    Attribute {
        /// Unknown text file
        unknown: PathBuf,

        /// Directory containing known signature JSON files
        signatures: PathBuf,
    },

    /// Print the default configuration as YAML
    PrintDefaultConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => KenningConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => KenningConfig::default(),
    };
    let engine = KenningEngine::new(config)?;

    match cli.command {
        Commands::Sign {
            corpus: corpus_path,
            author,
            output,
        } => {
            let signature = match author {
                Some(author) => {
                    let lines = corpus::read_corpus(&corpus_path)?;
                    engine.signature_from_lines(&lines, &author)?
                }
                None => engine.signature_from_file(&corpus_path)?,
            };

            match output {
                Some(path) => {
                    corpus::save_signature(&path, &signature)?;
                    println!("wrote signature for '{}' to {}", signature.author, path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&signature)?),
            }
        }

        Commands::Compare { first, second } => {
            let sig1 = corpus::load_signature(&first)?;
            let sig2 = corpus::load_signature(&second)?;
            let weights = engine.config().weights.to_weight_vector();

            let score = compare_signatures(&sig1, &sig2, &weights)?;
            println!("{} vs {}: {score}", sig1.author, sig2.author);
        }

        Commands::Attribute {
            unknown,
            signatures,
        } => {
            let results = engine.attribute_file(&unknown, &signatures)?;

            println!("candidates for {} (best match first):", unknown.display());
            for candidate in &results.matches {
                println!("  {:<30} {:.6}", candidate.author, candidate.score);
            }
            if let Some(best) = results.best_match() {
                println!("best match: {}", best.author);
            }
        }

        Commands::PrintDefaultConfig => {
            print!("{}", KenningConfig::default().to_yaml_string()?);
        }
    }

    Ok(())
}
