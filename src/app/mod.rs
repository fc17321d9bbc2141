//! Binary-local orchestration: command handlers and output assembly.

pub(crate) mod commands;
pub(crate) mod output;
