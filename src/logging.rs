//! Logger setup.
//!
//! The game owns the terminal, so records go to a file when `--log-file` is given. Without one
//! the default filter is `off`; `RUST_LOG` still overrides it.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};

pub fn init(log_file: Option<&Path>) -> Result<()> {
    let default_filter = if log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("logger already initialized")?;
    Ok(())
}
