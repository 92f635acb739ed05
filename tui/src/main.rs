use std::{env, fs::OpenOptions};

use anyhow::{Context, Result};
use classifier::{load, AppConfig, Notification, Registry, Session};
use env_logger::Target;

mod app;
mod ui;

const LOG_FILE_VAR: &str = "CKD_LOG_FILE";
const DEFAULT_LOG_FILE: &str = "ckd.log";

/// Sends logs to `CKD_LOG_FILE` (default `ckd.log`), keeping stderr off the alternate screen.
fn init_logger() -> Result<()> {
    let path = log_path(env::var(LOG_FILE_VAR).ok());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("cannot open log file {path}"))?;

    env_logger::Builder::from_default_env()
        .target(Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

fn log_path(var: Option<String>) -> String {
    var.filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

fn main() -> Result<()> {
    init_logger()?;

    let config = AppConfig::from_env().context("invalid configuration")?;
    log::info!("loading models from {}", config.models_dir.display());

    let (registry, notice) = match load(&config.models_dir, config.load_policy) {
        Ok(report) if report.skipped.is_empty() => (report.registry, None),
        Ok(report) => (
            report.registry,
            Some(Notification::ModelsSkipped(report.skipped)),
        ),
        Err(e) => {
            log::error!("model load failed: {e}");
            (Registry::new(), Some(Notification::LoadFailed(e.to_string())))
        }
    };

    let session = Session::new(&registry, config.validation);
    app::run::run(&session, notice)
}
