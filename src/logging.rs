//! Logger setup.
//!
//! The game owns the terminal in raw mode, so log lines on stderr would tear
//! the frame. With a log path everything goes to that file at `info`;
//! otherwise only errors reach stderr. `RUST_LOG` overrides either default.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

pub fn init(log_path: Option<&str>) -> Result<()> {
    let default_filter = if log_path.is_some() { "info" } else { "error" };
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {path}"))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}
