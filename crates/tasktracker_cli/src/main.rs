//! Terminal front end for the task tracker.
//!
//! # Responsibility
//! - Resolve logging configuration from flags and environment.
//! - Run one interactive task list session over stdin/stdout.

mod command;
mod render;
mod session;

use clap::Parser;
use log::info;
use session::Session;
use std::process::ExitCode;
use tasktracker_core::{default_log_level, init_logging};

const LOG_LEVEL_ENV: &str = "TASKTRACKER_LOG_LEVEL";
const LOG_DIR_ENV: &str = "TASKTRACKER_LOG_DIR";

#[derive(Parser, Debug)]
#[command(name = "tasktracker", version, about = "Single-screen task list")]
struct Args {
    /// trace|debug|info|warn|error; falls back to TASKTRACKER_LOG_LEVEL.
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; falls back to
    /// TASKTRACKER_LOG_DIR. Logging stays off when neither is set.
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = resolve_setting(args.log_dir, LOG_DIR_ENV) {
        let level = resolve_setting(args.log_level, LOG_LEVEL_ENV)
            .unwrap_or_else(|| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("tasktracker: {err}");
            return ExitCode::FAILURE;
        }
    }

    info!(
        "event=cli_start module=cli status=ok version={}",
        tasktracker_core::core_version()
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    match Session::new().run(stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tasktracker: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Flag value wins; otherwise a non-blank environment variable.
fn resolve_setting(flag: Option<String>, env_key: &str) -> Option<String> {
    flag.or_else(|| std::env::var(env_key).ok())
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
