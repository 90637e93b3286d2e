use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use skyscraper_validator::config::{Config, OutputFormat};
use skyscraper_validator::{load_board, validate};

/// Verdict line for `--format json`
#[derive(Debug, Serialize)]
struct Verdict<'a> {
    path: &'a str,
    valid: bool,
}

/// Format the verdict line for one board
fn report(format: OutputFormat, path: &Path, valid: bool) -> Result<String> {
    let shown = path.to_string_lossy();
    let line = match format {
        OutputFormat::Text => {
            let verdict = if valid { "valid" } else { "invalid" };
            format!("{}: {}", shown, verdict)
        }
        OutputFormat::Json => serde_json::to_string(&Verdict {
            path: &shown,
            valid,
        })?,
    };
    Ok(line)
}

fn main() -> Result<ExitCode> {
    // Parse configuration from command line and config file
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let mut all_valid = true;
    for path in &config.boards {
        let board = load_board(path)
            .with_context(|| format!("loading board {}", path.display()))?;
        let valid = validate(&board);
        info!("{}: {}", path.display(), if valid { "valid" } else { "invalid" });
        all_valid &= valid;
        println!("{}", report(config.format, path, valid)?);
    }

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
