//! Command implementations for the Plume CLI.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::{ContentEngine, EngineConfig, FixedCtaSelector};
use crate::error::{PlumeError, Result};
use crate::history::HistoryStore;

/// Path argument meaning standard input.
const STDIN_PATH: &str = "-";

/// Execute a CLI command.
pub fn execute_command(args: PlumeArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_texts(analyze_args.clone(), &args),
        Command::History(history_command) => run_history(history_command.clone(), &args),
    }
}

/// Build the engine from the config file, if any, and command overrides.
fn build_engine(
    cli_args: &PlumeArgs,
    hashtags: Option<usize>,
    seed_cta: Option<usize>,
) -> Result<ContentEngine> {
    let mut config = match &cli_args.config {
        Some(path) => {
            info!(path = %path.display(), "loading engine config");
            EngineConfig::from_json_file(path)?
        }
        None => EngineConfig::default(),
    };

    if let Some(count) = hashtags {
        config = config.with_hashtag_count(count);
    }

    let engine = ContentEngine::new(config)?;
    Ok(match seed_cta {
        Some(index) => engine.with_cta_selector(Arc::new(FixedCtaSelector(index))),
        None => engine,
    })
}

/// Read one input, where `-` is standard input.
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(io::read_to_string(io::stdin()).context("failed to read standard input")?);
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(text)
}

/// Analyze every input and print one report per input.
fn analyze_texts(args: AnalyzeArgs, cli_args: &PlumeArgs) -> Result<()> {
    let engine = build_engine(cli_args, args.hashtags, args.seed_cta)?;

    let sources: Vec<PathBuf> = if args.files.is_empty() {
        vec![PathBuf::from(STDIN_PATH)]
    } else {
        args.files.clone()
    };

    let start = Instant::now();
    let inputs = sources
        .iter()
        .map(|path| Ok((path.display().to_string(), read_input(path)?)))
        .collect::<Result<Vec<(String, String)>>>()?;

    let analyses: Vec<_> = inputs
        .par_iter()
        .map(|(_, text)| engine.analyze(text))
        .collect();

    debug!(
        inputs = inputs.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "analysis complete"
    );

    let history = if args.save {
        Some(HistoryStore::open(&args.history)?)
    } else {
        None
    };

    let mut reports = Vec::with_capacity(inputs.len());
    for ((source, text), analysis) in inputs.into_iter().zip(analyses) {
        let saved_id = match (&history, &analysis) {
            (Some(store), Some(result)) => Some(store.save(&text, result)?.id),
            _ => None,
        };
        reports.push(AnalysisReport {
            source,
            analysis,
            saved_id,
        });
    }

    if reports.len() == 1 {
        output_result("Analysis", &reports[0], cli_args)
    } else {
        output_result("Analysis", &reports, cli_args)
    }
}

/// Run a history subcommand.
fn run_history(command: HistoryCommand, cli_args: &PlumeArgs) -> Result<()> {
    match command {
        HistoryCommand::List(args) => {
            let store = HistoryStore::open(&args.history)?;
            let listing = HistoryListing {
                entries: store.list(),
            };
            output_result("Saved analyses", &listing, cli_args)
        }
        HistoryCommand::Show(args) => {
            let store = HistoryStore::open(&args.history)?;
            let entry = store
                .get(&args.id)
                .ok_or_else(|| PlumeError::not_found(format!("history entry {}", args.id)))?;
            let engine = build_engine(cli_args, None, None)?;
            let analysis = engine.analyze(&entry.text);
            output_result(
                "Saved analysis",
                &HistoryEntryReport { entry, analysis },
                cli_args,
            )
        }
        HistoryCommand::Delete(args) => {
            let store = HistoryStore::open(&args.history)?;
            if !store.delete(&args.id)? {
                return Err(PlumeError::not_found(format!("history entry {}", args.id)));
            }
            output_result(
                "Deleted",
                &HistoryChange {
                    removed: 1,
                    remaining: store.len(),
                },
                cli_args,
            )
        }
        HistoryCommand::Clear(args) => {
            let store = HistoryStore::open(&args.history)?;
            let removed = store.len();
            store.clear()?;
            output_result(
                "Cleared",
                &HistoryChange {
                    removed,
                    remaining: 0,
                },
                cli_args,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> PlumeArgs {
        PlumeArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_build_engine_overrides() {
        let args = parse(&["plume", "analyze"]);
        let engine = build_engine(&args, Some(2), Some(1)).unwrap();
        assert_eq!(engine.config().hashtag_count, 2);
    }

    #[test]
    fn test_build_engine_rejects_bad_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"moderate_cutoff": 30.0, "hard_cutoff": 10.0}"#).unwrap();

        let config = path.to_string_lossy().to_string();
        let args = parse(&["plume", "--config", &config, "analyze"]);
        assert!(build_engine(&args, None, None).is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_input(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_analyze_and_save() {
        let dir = TempDir::new().unwrap();
        let post = dir.path().join("post.txt");
        let blank = dir.path().join("blank.txt");
        let history = dir.path().join("history.json");
        fs::write(&post, "Shipping a great release today!").unwrap();
        fs::write(&blank, "   ").unwrap();

        let args = parse(&[
            "plume",
            "-q",
            "-f",
            "json",
            "analyze",
            post.to_str().unwrap(),
            blank.to_str().unwrap(),
            "--save",
            "--history",
            history.to_str().unwrap(),
        ]);
        execute_command(args).unwrap();

        // Blank input is reported but never saved.
        let store = HistoryStore::open(&history).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].text, "Shipping a great release today!");
    }

    #[test]
    fn test_history_delete_unknown_id() {
        let dir = TempDir::new().unwrap();
        let history = dir.path().join("history.json");
        let args = parse(&[
            "plume",
            "-q",
            "history",
            "delete",
            "nope",
            "--history",
            history.to_str().unwrap(),
        ]);

        assert!(matches!(execute_command(args), Err(PlumeError::Other(_))));
    }
}
