//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the core query surface.

pub mod budget;
pub mod expense;
pub mod export;
pub mod report;

pub use budget::handle_budget;
pub use expense::{handle_add, handle_delete, handle_list};
pub use export::handle_export;
pub use report::{handle_period_command, handle_summary, handle_total, PeriodCommands};
