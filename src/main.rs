use anyhow::Result;

use ytminer::cli::Command;
use ytminer::{handle_analyze, handle_completions, handle_profiles, handle_score, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Score {
            input,
            profile,
            now,
            format,
        } => handle_score(input, profile.as_deref(), *now, *format),
        Command::Analyze {
            input,
            kind,
            now,
            format,
        } => handle_analyze(input, *kind, *now, *format),
        Command::Profiles { apply, save } => handle_profiles(apply.as_deref(), *save),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
