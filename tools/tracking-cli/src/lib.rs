//! Tracking CLI - convert, print and process tracking records
//!
//! # Commands
//!
//! - `tracking --convert <ascii_file> <binary_file>` - Encode a text record
//! - `tracking --print <binary_file>` - Decode and print a record
//! - `tracking <binary_file>` - Decode and run the process hook
//!
//! Any other argument shape prints the usage line and exits successfully.
//!
//! # Configuration (config.toml)
//!
//! ```toml
//! [fp]
//! trap_exceptions = true
//!
//! [log]
//! filter = "warn"
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod inspect;
pub mod logging;

use std::io::Write;

use anyhow::Result;
use tracking_record::Discard;

pub use cli::{Cli, Invocation, Mode, resolve, usage};

/// Execute one CLI mode, writing printed records to `out`
pub fn run(mode: Mode, out: impl Write) -> Result<()> {
    match mode {
        Mode::Convert { text, binary } => convert::execute(&text, &binary),
        Mode::Print(binary) => inspect::print(&binary, out),
        Mode::Process(binary) => inspect::process(&binary, &mut Discard),
    }
}
