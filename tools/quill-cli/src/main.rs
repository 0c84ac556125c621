mod config;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use quill_classifier::{load_catalog, store_catalog, AuthorClassifier};
use quill_parser::{load_profiles, read_source, render_profile_record, tokenize, Document};
use quill_protocol::{AuthorProfile, ProfileCatalog, StyleMetrics};
use quill_stats::DocumentStatistics;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::QuillConfig;

#[derive(Parser)]
#[command(name = "quill", author, version, about = "Stylometric authorship attribution")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG overrides it
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML file with default profiles, catalog and weights
    #[arg(long, env = "QUILL_CONFIG", global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every token of a text
    Tokens {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print every sentence of a text, one per line
    Sentences {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the stylometric fingerprint of a text
    Stats {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write an author profile record for a text
    Profile {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Author label stored on the first line of the record
        #[arg(short, long)]
        label: String,

        /// Destination file; defaults to stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Compile profile records into a binary catalog
    Compile {
        #[arg(value_name = "PROFILE", required = true)]
        profiles: Vec<PathBuf>,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Name the closest known author of a text
    Identify {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Profile record to compare against; repeatable
        #[arg(short, long = "profile", value_name = "FILE")]
        profiles: Vec<PathBuf>,

        /// Compiled catalog to compare against
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Print the N closest authors with their distances
        #[arg(long, value_name = "N", default_value_t = 1)]
        top: usize,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let config = QuillConfig::load(cli.config.as_deref())?;
    debug!(?config, "configuration");

    match cli.command {
        Command::Tokens { file } => {
            for token in tokenize(&read_source(&file)?) {
                writeln!(out, "{}", token)?;
            }
        }
        Command::Sentences { file } => {
            let document = parse_file(&file)?;
            for sentence in document.sentences() {
                writeln!(out, "{}", sentence)?;
            }
        }
        Command::Stats { file, json } => {
            let document = parse_file(&file)?;
            write_stats(out, &file, &document, json)?;
        }
        Command::Profile { file, label, output } => {
            let document = parse_file(&file)?;
            let profile = AuthorProfile::new(label, quill_stats::compute(&document));
            let record = render_profile_record(&profile)
                .with_context(|| format!("cannot write a profile for {}", file.display()))?;
            match output {
                Some(path) => fs::write(&path, record)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => out.write_all(record.as_bytes())?,
            }
        }
        Command::Compile { profiles, output } => {
            let catalog = ProfileCatalog::new(load_profiles(&profiles)?);
            store_catalog(&output, &catalog)?;
            writeln!(out, "✅ Compiled {} profiles into {}", catalog.len(), output.display())?;
        }
        Command::Identify { file, profiles, catalog, top } => {
            ensure!(top > 0, "--top must be at least 1");

            // Flags replace the configured sources as a whole
            let (catalog, profiles) = if catalog.is_some() || !profiles.is_empty() {
                (catalog, profiles)
            } else {
                (config.catalog, config.profiles)
            };
            let known = gather_profiles(catalog.as_deref(), &profiles)?;
            ensure!(
                !known.is_empty(),
                "no author profiles; pass --profile or --catalog, or list them in the config file"
            );

            let classifier = AuthorClassifier::new(known, config.weights)?;
            let metrics = quill_stats::compute(&parse_file(&file)?);
            identify(out, &classifier, &metrics, top)?;
        }
    }

    Ok(())
}

fn parse_file(path: &Path) -> Result<Document> {
    let text = read_source(path)?;
    Document::from_text(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Catalog entries first, then the loose profile records in the given order.
fn gather_profiles(catalog: Option<&Path>, paths: &[PathBuf]) -> Result<Vec<AuthorProfile>> {
    let mut profiles = match catalog {
        Some(path) => load_catalog(path)?.profiles,
        None => Vec::new(),
    };
    profiles.extend(load_profiles(paths)?);
    info!(count = profiles.len(), "author profiles loaded");
    Ok(profiles)
}

#[derive(Serialize)]
struct StatsReport<'a> {
    file: &'a Path,
    sentences: usize,
    phrases: usize,
    words: usize,
    metrics: StyleMetrics,
}

fn write_stats(out: &mut dyn Write, file: &Path, document: &Document, json: bool) -> Result<()> {
    let stats = DocumentStatistics::new(document);
    let tally = stats.tally();

    if json {
        let report = StatsReport {
            file,
            sentences: tally.sentences,
            phrases: tally.phrases,
            words: tally.words,
            metrics: stats.metrics(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "{:<28}{}", "Sentences", tally.sentences)?;
    writeln!(out, "{:<28}{}", "Phrases", tally.phrases)?;
    writeln!(out, "{:<28}{}", "Words", tally.words)?;
    for (metric, value) in stats.metrics().iter() {
        writeln!(out, "{:<28}{:.4}", metric.label(), value)?;
    }
    Ok(())
}

fn identify(
    out: &mut dyn Write,
    classifier: &AuthorClassifier,
    metrics: &StyleMetrics,
    top: usize,
) -> Result<()> {
    if top == 1 {
        writeln!(out, "{}", classifier.classify(metrics).label())?;
        return Ok(());
    }

    for (rank, candidate) in classifier.rank(metrics).iter().take(top).enumerate() {
        writeln!(out, "{:>2}. {:<32}{:.4}", rank + 1, candidate.label(), candidate.distance)?;
    }
    Ok(())
}
