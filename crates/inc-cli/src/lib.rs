//! `inc-insights` command-line components.

pub mod cli;
pub mod commands;
pub mod logging;
