// Application layer: CLI command handlers wired on top of core.

pub mod commands;
