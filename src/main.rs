//! Command-line entry point.
//!
//! ```text
//! ahp-engine calculate <analysis.json|analysis.yaml>   calculate, store, print results
//! ahp-engine recalculate <analysis-id>                 recalculate a stored analysis
//! ahp-engine show <analysis-id>                        print a stored analysis
//! ahp-engine list                                      list stored analyses
//! ```
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ahp_engine::adapters::FileAnalysisStorage;
use ahp_engine::application::{
    AnalysisSource, CalculateResultsCommand, CalculateResultsHandler, CalculateResultsResult,
    GetAnalysisHandler, GetAnalysisQuery, ListAnalysesHandler, ListAnalysesQuery,
};
use ahp_engine::config::{AppConfig, ConfigError, LogFormat, LoggingConfig};
use ahp_engine::domain::ahp::{
    format_decimal, format_percentage, AnalysisDocument, InconsistentMatrix,
    DEFAULT_DECIMAL_PLACES, DEFAULT_PERCENTAGE_PLACES,
};
use ahp_engine::domain::foundation::{AnalysisId, DomainError};
use ahp_engine::ports::AnalysisRepository;

#[derive(Parser, Debug)]
#[command(
    name = "ahp-engine",
    version,
    about = "Analytic Hierarchy Process calculator: weights, consistency ratios and rankings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Calculate an analysis document, store it and print the results
    Calculate {
        /// Analysis document (.json, .yaml or .yml)
        path: PathBuf,
    },
    /// Recalculate a stored analysis
    Recalculate {
        /// Analysis ID (UUID)
        id: AnalysisId,
    },
    /// Print a stored analysis
    Show {
        /// Analysis ID (UUID)
        id: AnalysisId,
    },
    /// List stored analyses, newest results first
    List {
        /// Only list analyses that have results
        #[arg(long)]
        calculated: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed analysis document {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct MatrixConsistency {
    matrix: String,
    consistency_ratio: f64,
    lambda_max: f64,
    consistency_index: f64,
    acceptable: bool,
}

#[derive(Serialize)]
struct RankingRow {
    rank: usize,
    alternative: String,
    score: f64,
    score_display: String,
}

#[derive(Serialize)]
struct CalculationReport {
    analysis_id: AnalysisId,
    name: String,
    criteria_weights: Vec<(String, String)>,
    ranking: Vec<RankingRow>,
    consistency: Vec<MatrixConsistency>,
    inconsistent_matrices: Vec<InconsistentMatrix>,
    consistent: bool,
}

impl CalculationReport {
    fn build(result: &CalculateResultsResult, threshold: f64) -> Self {
        let results = &result.results;
        let consistency = results
            .consistency_by_matrix()
            .into_iter()
            .map(|(key, metrics)| MatrixConsistency {
                matrix: key.to_string(),
                consistency_ratio: metrics.consistency_ratio,
                lambda_max: metrics.lambda_max,
                consistency_index: metrics.consistency_index,
                acceptable: metrics.is_acceptable(threshold),
            })
            .collect();

        Self {
            analysis_id: *result.analysis.id(),
            name: result.analysis.name().to_string(),
            criteria_weights: results
                .criteria
                .iter()
                .cloned()
                .zip(
                    results
                        .criteria_weights
                        .iter()
                        .map(|w| format_decimal(*w, DEFAULT_DECIMAL_PLACES)),
                )
                .collect(),
            ranking: result
                .ranking
                .iter()
                .map(|r| RankingRow {
                    rank: r.rank,
                    alternative: r.alternative.clone(),
                    score: r.score,
                    score_display: format_percentage(r.score, DEFAULT_PERCENTAGE_PLACES),
                })
                .collect(),
            consistency,
            inconsistent_matrices: result.inconsistent_matrices.clone(),
            consistent: result.is_consistent(),
        }
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), CliError> {
    let filter: EnvFilter = logging
        .env_filter()
        .map_err(|e| CliError::Config(e.into()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
    Ok(())
}

fn read_document(path: &Path, contents: &str) -> Result<AnalysisDocument, CliError> {
    let parse_error = |reason: String| CliError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(contents).map_err(|e| parse_error(e.to_string())),
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string()))
        }
        _ => Err(parse_error(
            "expected a .json, .yaml or .yml file".to_string(),
        )),
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    init_tracing(&config.logging)?;

    let storage: Arc<dyn AnalysisRepository> =
        Arc::new(FileAnalysisStorage::new(&config.storage.data_dir));
    let threshold = config.engine.consistency_threshold;

    let output = match cli.command {
        Commands::Calculate { path } => {
            let contents = tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| CliError::Read {
                    path: path.clone(),
                    source,
                })?;
            let document = read_document(&path, &contents)?;
            info!(path = %path.display(), "Calculating analysis document");

            let handler = CalculateResultsHandler::new(storage, config.engine.clone());
            let result = handler
                .handle(CalculateResultsCommand {
                    source: AnalysisSource::Document(document),
                })
                .await?;
            serde_json::to_string_pretty(&CalculationReport::build(&result, threshold))?
        }
        Commands::Recalculate { id } => {
            let handler = CalculateResultsHandler::new(storage, config.engine.clone());
            let result = handler
                .handle(CalculateResultsCommand {
                    source: AnalysisSource::Stored(id),
                })
                .await?;
            serde_json::to_string_pretty(&CalculationReport::build(&result, threshold))?
        }
        Commands::Show { id } => {
            let handler = GetAnalysisHandler::new(storage);
            let analysis = handler.handle(GetAnalysisQuery { analysis_id: id }).await?;
            serde_json::to_string_pretty(&analysis)?
        }
        Commands::List { calculated } => {
            let handler = ListAnalysesHandler::new(storage);
            let summaries = handler
                .handle(ListAnalysesQuery {
                    calculated_only: calculated,
                })
                .await?;
            serde_json::to_string_pretty(&summaries)?
        }
    };

    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "ahp-engine failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
