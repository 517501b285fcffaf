//! Transaction model
//!
//! A transaction is a single income or expense entry in the ledger. Entries
//! are immutable once written: the tracker only ever appends them and reads
//! them back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed textual date format used for both storage and display
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Parse a date in the fixed `MM-DD-YYYY` format
pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
}

/// Render a date in the fixed `MM-DD-YYYY` format
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Category of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl Category {
    /// Map a single-letter code (case-insensitive) to a category
    ///
    /// `I` maps to Income and `E` to Expense; anything else is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "I" => Some(Self::Income),
            "E" => Some(Self::Expense),
            _ => None,
        }
    }

    /// The literal string stored in the ledger
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ledger entry
///
/// Field order matters: it defines the CSV column order
/// (`date,amount,category,description`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date, stored in the fixed `MM-DD-YYYY` format
    #[serde(with = "mdy_date")]
    pub date: NaiveDate,

    /// Amount in dollars (always positive; the category carries the sign)
    pub amount: f64,

    /// Income or Expense
    pub category: Category,

    /// Free-text description, may be empty
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.2} {} {}",
            format_date(self.date),
            self.amount,
            self.category,
            self.description
        )
    }
}

/// Serde glue for the fixed `MM-DD-YYYY` date representation
mod mdy_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
