//! GL Pong headless runner
//!
//! Simulates a match with idle input for the configured number of frames,
//! draws every frame into a recording renderer and prints a JSON summary.
//!
//! Usage: `gl-pong [settings.json]`

use std::path::PathBuf;

use anyhow::{Context, Result};

use gl_pong::Settings;
use gl_pong::headless;

fn main() -> Result<()> {
    env_logger::init();

    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref()).validated();

    let report = headless::run(&settings);
    log::info!(
        "Finished after {} frames: {} - {}",
        report.frames,
        report.score.left,
        report.score.right
    );

    let json = serde_json::to_string_pretty(&report).context("failed to encode run report")?;
    println!("{json}");
    Ok(())
}
