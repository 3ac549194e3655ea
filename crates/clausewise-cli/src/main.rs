mod batch;
mod display;
mod report;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use clausewise_core::AnalyzerConfig;
use clausewise_nlp::Analyzer;

use report::{AnalyzeBody, ClassifyBody, ClausesBody, EntitiesBody, Report, SimplifyBody};

#[derive(Debug, Parser)]
#[command(name = "clausewise", version, about = "Rule-based analysis of legal documents")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Print a JSON report instead of a card
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Analyzer thresholds. Flags override the config file; unset values keep their defaults.
#[derive(Debug, Default, Args)]
struct ConfigArgs {
    /// JSON file with `minClauseChars`, `longSentenceChars`, `otherThreshold`
    #[arg(long, global = true, env = "CLAUSEWISE_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Paragraphs at or below this many characters are not clauses
    #[arg(long, global = true, env = "CLAUSEWISE_MIN_CLAUSE_CHARS")]
    min_clause_chars: Option<usize>,

    /// Sentences longer than this are split at conjunctions
    #[arg(long, global = true, env = "CLAUSEWISE_LONG_SENTENCE_CHARS")]
    long_sentence_chars: Option<usize>,

    /// Best classification score below which a document is `other`
    #[arg(long, global = true, env = "CLAUSEWISE_OTHER_THRESHOLD")]
    other_threshold: Option<f64>,
}

impl ConfigArgs {
    fn resolve(&self) -> anyhow::Result<AnalyzerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                AnalyzerConfig::from_json(&json)
                    .with_context(|| format!("loading config {}", path.display()))?
            }
            None => AnalyzerConfig::default(),
        };

        if let Some(n) = self.min_clause_chars {
            config.min_clause_chars = n;
        }
        if let Some(n) = self.long_sentence_chars {
            config.long_sentence_chars = n;
        }
        if let Some(t) = self.other_threshold {
            config.other_threshold = t;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify, segment, and extract entities from one or more documents
    Analyze {
        /// UTF-8 text files
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
    /// Document type and confidence
    Classify {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Dates, amounts, obligations, legal terms, organizations
    Entities {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Clauses grouped by category
    Clauses {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Rewrite legal text in plain language
    Simplify {
        /// Text to simplify, or `-` to read standard input
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.resolve()?;
    debug!(?config, "resolved analyzer config");
    let analyzer = Arc::new(Analyzer::new(config)?);

    match cli.command {
        Command::Analyze { files } => {
            let (results, stats) = batch::analyze_files(analyzer, &files).await?;
            info!(
                files = stats.total_files,
                clauses = stats.total_clauses,
                elapsed_secs = stats.elapsed_secs,
                "analysis complete"
            );
            if cli.json {
                let body = AnalyzeBody {
                    total_files: stats.total_files,
                    total_clauses: stats.total_clauses,
                    documents: results,
                };
                println!("{}", Report::new(body).to_json()?);
            } else {
                for result in &results {
                    print!("{}", display::analysis_card(result));
                }
                eprintln!(
                    "  {} files, {} clauses in {:.2}s",
                    stats.total_files, stats.total_clauses, stats.elapsed_secs
                );
            }
        }
        Command::Classify { file } => {
            let text = batch::read_text(&file).await?;
            let classification = analyzer.classify(&text);
            if cli.json {
                let body = ClassifyBody::new(batch::display_name(&file), classification);
                println!("{}", Report::new(body).to_json()?);
            } else {
                print!("{}", display::classification_card(&classification));
            }
        }
        Command::Entities { file } => {
            let text = batch::read_text(&file).await?;
            let entities = analyzer.extract(&text);
            if cli.json {
                let body = EntitiesBody {
                    filename: batch::display_name(&file),
                    entities,
                };
                println!("{}", Report::new(body).to_json()?);
            } else {
                print!("{}", display::entity_card(&entities));
            }
        }
        Command::Clauses { file } => {
            let text = batch::read_text(&file).await?;
            let breakdown = analyzer.breakdown(&text);
            if cli.json {
                let body = ClausesBody {
                    filename: batch::display_name(&file),
                    breakdown,
                };
                println!("{}", Report::new(body).to_json()?);
            } else {
                print!("{}", display::breakdown_card(&breakdown));
            }
        }
        Command::Simplify { text } => {
            let original = if text == "-" {
                let mut buf = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut buf)
                    .await
                    .context("reading standard input")?;
                buf
            } else {
                text
            };
            let simplified = analyzer.simplify(&original);
            if cli.json {
                println!(
                    "{}",
                    Report::new(SimplifyBody {
                        original,
                        simplified
                    })
                    .to_json()?
                );
            } else {
                println!("{simplified}");
            }
        }
    }

    Ok(())
}
