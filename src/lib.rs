pub mod analysis;
pub mod cli;
pub mod config;
pub mod display;
pub mod domain;
pub mod errors;
pub mod metrics;
pub mod scoring;
pub mod services;
pub mod text;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::{info, warn};
use std::io::{self, Write};
use std::path::Path;

use crate::cli::{AnalysisKind, Command, OutputFormat};
use crate::config::profiles::find_profile;
use crate::config::settings::AppConfig;
use crate::config::{active_profile_name, apply_profile, list_profiles};
use crate::errors::write_context;
use crate::services::{AnalysisService, ScoringService};

const ENV_FILE: &str = ".env";

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_score(
    input: &Path,
    profile: Option<&str>,
    now: Option<DateTime<Utc>>,
    format: OutputFormat,
) -> Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(name) = profile {
        select_profile(&mut config, name);
    }

    let service = ScoringService::new(config, now.unwrap_or_else(Utc::now));
    emit(&service.run(input, format)?)
}

pub fn handle_analyze(
    input: &Path,
    kind: AnalysisKind,
    now: Option<DateTime<Utc>>,
    format: OutputFormat,
) -> Result<()> {
    let config = AppConfig::from_env();
    let service = AnalysisService::new(config, now.unwrap_or_else(Utc::now));
    emit(&service.run(input, kind, format)?)
}

pub fn handle_profiles(apply: Option<&str>, save: bool) -> Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(name) = apply {
        select_profile(&mut config, name);
    }

    emit(&display::render_profiles(
        list_profiles(),
        active_profile_name(&config.scoring),
    ))?;

    if save {
        config.save_env(Path::new(ENV_FILE))?;
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

fn select_profile(config: &mut AppConfig, name: &str) {
    if find_profile(name).is_none() {
        warn!("Unknown profile {:?}, using balanced", name);
    }
    apply_profile(&mut config.scoring, name);
    info!("Using profile {}", active_profile_name(&config.scoring));
}

fn emit(output: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .with_context(|| write_context("stdout"))?;
    stdout.flush().with_context(|| write_context("stdout"))
}
