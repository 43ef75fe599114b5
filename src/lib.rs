//! tty-arcade (workspace facade crate).
//!
//! Re-exports the member crates under `tty_arcade::{core,engine,input,term,types}` and holds
//! the binary's command-line and logging setup so both can be exercised from tests.

pub mod cli;
pub mod logging;

pub use tty_arcade_core as core;
pub use tty_arcade_engine as engine;
pub use tty_arcade_input as input;
pub use tty_arcade_term as term;
pub use tty_arcade_types as types;
