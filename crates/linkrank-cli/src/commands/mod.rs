//! CLI command handlers

pub mod rank;
