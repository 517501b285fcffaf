//! CSV-backed transaction ledger
//!
//! The ledger is a single append-only CSV file with a
//! `date,amount,category,description` header. Entries are written once and
//! never rewritten; queries read the whole file back. Because the ledger's
//! own writer is the only writer, rows are trusted: a malformed row (from an
//! external edit) propagates as a fatal error instead of being skipped.

use std::fs::OpenOptions;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{FinlogError, FinlogResult};
use crate::models::Transaction;

/// Column headers of the ledger file, in storage order
pub const LEDGER_HEADERS: [&str; 4] = ["date", "amount", "category", "description"];

/// Configuration for a [`Ledger`]
///
/// Passed in at construction so tests can point each ledger at its own file.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Path to the backing CSV file
    pub csv_path: PathBuf,
}

/// The append-only transaction store
#[derive(Debug)]
pub struct Ledger {
    config: LedgerConfig,
}

impl Ledger {
    /// Create a ledger over the configured CSV file
    ///
    /// Does not touch the filesystem; call [`Ledger::initialize`] before the
    /// first write.
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    /// Path to the backing CSV file
    pub fn csv_path(&self) -> &PathBuf {
        &self.config.csv_path
    }

    /// Ensure the backing file exists with the header row
    ///
    /// Creates parent directories and a header-only file when absent.
    /// Idempotent: an existing file is left untouched, so it is safe to call
    /// on every add.
    pub fn initialize(&self) -> FinlogResult<()> {
        if self.config.csv_path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.config.csv_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                FinlogError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut writer = csv::Writer::from_path(&self.config.csv_path)?;
        writer.write_record(LEDGER_HEADERS)?;
        writer.flush()?;

        Ok(())
    }

    /// Append one transaction to the ledger
    ///
    /// Opens the file in append mode and writes a single row; prior rows are
    /// never rewritten or re-validated.
    pub fn append(&self, txn: &Transaction) -> FinlogResult<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.config.csv_path)
            .map_err(|e| {
                FinlogError::Storage(format!(
                    "Failed to open ledger {}: {}",
                    self.config.csv_path.display(),
                    e
                ))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(txn)?;
        writer.flush()?;

        Ok(())
    }

    /// Load every transaction in the ledger, in file order
    ///
    /// A missing file or a malformed row is fatal.
    pub fn load(&self) -> FinlogResult<Vec<Transaction>> {
        if !self.config.csv_path.exists() {
            return Err(FinlogError::Storage(format!(
                "Ledger file not found: {}",
                self.config.csv_path.display()
            )));
        }

        let mut reader = csv::Reader::from_path(&self.config.csv_path)?;
        let mut transactions = Vec::new();
        for record in reader.deserialize() {
            let txn: Transaction = record?;
            transactions.push(txn);
        }

        Ok(transactions)
    }

    /// Load the transactions whose date falls in `start..=end`
    ///
    /// Inclusive at both ends; an empty result is not an error.
    pub fn transactions_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> FinlogResult<Vec<Transaction>> {
        let transactions = self.load()?;
        Ok(transactions
            .into_iter()
            .filter(|txn| txn.date >= start && txn.date <= end)
            .collect())
    }
}
