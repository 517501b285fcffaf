//! Core data models

pub mod transaction;

pub use transaction::{format_date, parse_date, Category, Transaction, DATE_FORMAT};
