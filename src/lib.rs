//! spendlog - Flat-file personal expense ledger for the terminal
//!
//! This library provides the core functionality for the spendlog expense
//! tracker: a single-owner in-memory record store with write-through
//! flat-file persistence, plus read-only analytics over it (aggregation,
//! time-windowed period queries, budget alerts and a quick-entry
//! calculator).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (the expense record, category/budget tables)
//! - `dates`: Date parsing, formatting and the two matching paths
//! - `storage`: Flat-file record store
//! - `services`: Read-only analytics (aggregation, periods, budgets, calculator)
//! - `export`: CSV export
//! - `display`: Terminal formatting of query results
//! - `cli`: Command handlers bridging clap and the core

pub mod cli;
pub mod config;
pub mod dates;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
