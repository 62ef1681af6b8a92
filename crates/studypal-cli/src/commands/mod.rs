pub mod config;
pub mod stats;
pub mod subject;
pub mod task;
pub mod timer;

use std::io::Write;

use serde::Serialize;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Pretty-print a value as JSON on its own lines.
pub fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(out, "{json}")
}
