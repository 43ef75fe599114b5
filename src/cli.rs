//! Command-line flags.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::types::TARGET_FPS;

#[derive(Parser, Debug, Clone)]
#[command(name = "tty-arcade")]
#[command(about = "Character-grid arcade host with a snake mode", long_about = None)]
pub struct Args {
    /// Frame rate cap; the frame budget is 1000/N ms.
    #[arg(
        long,
        default_value_t = TARGET_FPS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub fps: u32,

    /// Seed for apple placement (clock-derived when omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Start with the debug overlay visible
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}
