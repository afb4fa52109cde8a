//! rqc_cli - Apply repeatable quest settings to a host quest configuration

use clap::Parser;
use rqc_core::{default_settings, load_settings, ConfigError, QuestConfig, RepeatableQuestCustomizer};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "rqc-apply", version, about = "Apply repeatable quest settings to a quest config")]
pub struct Args {
    /// Settings file (.json, .jsonc or .toml). Built-in defaults when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host quest configuration document
    #[arg(long)]
    pub quest_config: PathBuf,

    /// Where to write the patched document. Stdout when omitted.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log every change made
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to access {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("Invalid quest config document: {0}")]
    Document(#[from] serde_json::Error),
}

/// Load settings, patch the quest config document and write it out
pub fn run(args: Args) -> Result<(), CliError> {
    let mut settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => {
            info!("No settings file given, using built-in defaults");
            default_settings()
        }
    };
    settings.debug_logging |= args.verbose;

    let mut quest_config: QuestConfig = serde_json::from_str(&read(&args.quest_config)?)?;

    let customizer = RepeatableQuestCustomizer::new(settings);
    let report = customizer.post_db_load(&mut quest_config);

    info!(
        "Applied {} field groups, {} unchanged, quest types set for {:?}",
        report.applied.len(),
        report.unchanged.len(),
        report.quest_types
    );
    if !report.is_clean() {
        warn!("{} settings were rejected and left at host defaults", report.errors.len());
    }

    let patched = serde_json::to_string_pretty(&quest_config)?;
    match &args.output {
        Some(path) => fs::write(path, patched).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })?,
        None => println!("{}", patched),
    }

    Ok(())
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
