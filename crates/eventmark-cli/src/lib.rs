//! CLI surface: argument parsing, persisted settings, errors.

pub mod cli;
pub mod config;
pub mod error;
