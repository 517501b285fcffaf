//! finlog - Command-line personal finance tracker
//!
//! finlog records income and expense transactions to a single append-only
//! CSV ledger, queries them by inclusive date range, summarizes totals, and
//! can plot a daily income/expense chart in the terminal.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The transaction record and the fixed date format
//! - `input`: Interactive, retry-until-valid input collection
//! - `storage`: The append-only CSV ledger
//! - `report`: Range summary computation and rendering
//! - `chart`: Terminal line chart of daily income vs. expense
//! - `shell`: The interactive menu loop
//!
//! # Example
//!
//! ```rust,no_run
//! use finlog::config::{FinlogPaths, Settings};
//! use finlog::shell::Shell;
//! use finlog::storage::{Ledger, LedgerConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let paths = FinlogPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let ledger = Ledger::new(LedgerConfig {
//!     csv_path: paths.ledger_file(),
//! });
//!
//! let stdin = std::io::stdin();
//! let mut shell = Shell::new(ledger, settings, stdin.lock(), std::io::stdout());
//! shell.run()?;
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod shell;
pub mod storage;

pub use error::{FinlogError, FinlogResult};
