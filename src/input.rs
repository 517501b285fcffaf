//! Interactive input collection
//!
//! Prompt helpers for the data-entry flow. Every reader blocks on one line
//! of input and keeps re-prompting until it gets a valid value; a validation
//! failure is never surfaced as an error. This retry-until-valid contract is
//! deliberate for a single-user interactive tool.
//!
//! The helpers are generic over `BufRead`/`Write` so tests can drive them
//! with scripted input instead of a terminal.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{FinlogError, FinlogResult};
use crate::models::{parse_date, Category};

/// Print a prompt and read one trimmed line of input
///
/// The only hard failure is end of input on the reader: an interactive
/// session never hits it, but a scripted one can, and looping on a closed
/// stream would spin forever.
pub fn read_line<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    prompt: &str,
) -> FinlogResult<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    let bytes = reader.read_line(&mut line)?;
    if bytes == 0 {
        return Err(FinlogError::Input("unexpected end of input".into()));
    }

    Ok(line.trim().to_string())
}

/// Read a date in `MM-DD-YYYY` format, re-prompting until valid
///
/// With `allow_default`, an empty line yields today's date.
pub fn read_date<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    prompt: &str,
    allow_default: bool,
) -> FinlogResult<NaiveDate> {
    loop {
        let line = read_line(reader, out, prompt)?;

        if allow_default && line.is_empty() {
            return Ok(chrono::Local::now().naive_local().date());
        }

        match parse_date(&line) {
            Ok(date) => return Ok(date),
            Err(_) => {
                writeln!(out, "Invalid date format. Please use MM-DD-YYYY.")?;
            }
        }
    }
}

/// Read a positive decimal amount, re-prompting until valid
pub fn read_amount<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> FinlogResult<f64> {
    loop {
        let line = read_line(reader, out, "Enter amount: ")?;

        match line.parse::<f64>() {
            Ok(amount) if amount > 0.0 && amount.is_finite() => return Ok(amount),
            Ok(_) => {
                writeln!(out, "Invalid amount: amount must be positive and non-zero.")?;
            }
            Err(_) => {
                writeln!(out, "Invalid amount: please enter a number.")?;
            }
        }
    }
}

/// Read a category code (`I`/`E`, case-insensitive), re-prompting until valid
pub fn read_category<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> FinlogResult<Category> {
    loop {
        let line = read_line(
            reader,
            out,
            "Enter the category ('I' for Income or 'E' for Expense): ",
        )?;

        match Category::from_code(&line) {
            Some(category) => return Ok(category),
            None => {
                writeln!(
                    out,
                    "Invalid category. Please enter 'I' for Income or 'E' for Expense."
                )?;
            }
        }
    }
}

/// Read a free-text description; empty is allowed
pub fn read_description<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> FinlogResult<String> {
    read_line(reader, out, "Enter description (optional): ")
}

/// Ask a yes/no question; `y` (case-insensitive) is yes, anything else is no
pub fn read_yes_no<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    prompt: &str,
) -> FinlogResult<bool> {
    let line = read_line(reader, out, prompt)?;
    Ok(line.eq_ignore_ascii_case("y"))
}
