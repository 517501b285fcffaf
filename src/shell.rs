//! Interactive menu shell
//!
//! The top-level loop of the tracker: print the 3-option menu, dispatch to
//! the add or query flow, and return to the menu until the user exits. The
//! shell owns the ledger and the input/output handles; everything it prints
//! goes through the generic writer so tests can capture a full session.

use std::io::{BufRead, Write};

use crate::chart;
use crate::config::Settings;
use crate::error::FinlogResult;
use crate::input;
use crate::models::Transaction;
use crate::report;
use crate::storage::Ledger;

/// The interactive shell
pub struct Shell<R, W> {
    ledger: Ledger,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over a ledger and an input/output pair
    pub fn new(ledger: Ledger, settings: Settings, input: R, output: W) -> Self {
        Self {
            ledger,
            settings,
            input,
            output,
        }
    }

    /// Run the menu loop until the user chooses to exit
    pub fn run(&mut self) -> FinlogResult<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "1. Add new transaction")?;
            writeln!(
                self.output,
                "2. View transactions and summary within a date range"
            )?;
            writeln!(self.output, "3. Exit")?;

            let choice =
                input::read_line(&mut self.input, &mut self.output, "Choose an option (1-3): ")?;

            match choice.as_str() {
                "1" => self.add()?,
                "2" => self.query()?,
                "3" => {
                    writeln!(self.output, "Exiting the program...")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please enter 1, 2, or 3.")?;
                }
            }
        }
    }

    /// The add flow: collect one validated entry and append it
    fn add(&mut self) -> FinlogResult<()> {
        self.ledger.initialize()?;

        let date = input::read_date(
            &mut self.input,
            &mut self.output,
            "Enter the date of the transaction (MM-DD-YYYY) or press Enter for today's date: ",
            true,
        )?;
        let amount = input::read_amount(&mut self.input, &mut self.output)?;
        let category = input::read_category(&mut self.input, &mut self.output)?;
        let description = input::read_description(&mut self.input, &mut self.output)?;

        self.ledger
            .append(&Transaction::new(date, amount, category, description))?;
        writeln!(self.output, "Entry added successfully.")?;

        Ok(())
    }

    /// The query flow: filter by date range, report, optionally plot
    fn query(&mut self) -> FinlogResult<()> {
        let start = input::read_date(
            &mut self.input,
            &mut self.output,
            "Enter start date (MM-DD-YYYY): ",
            false,
        )?;
        let end = input::read_date(
            &mut self.input,
            &mut self.output,
            "Enter end date (MM-DD-YYYY): ",
            false,
        )?;

        let transactions = self.ledger.transactions_in_range(start, end)?;
        report::render(
            &mut self.output,
            &transactions,
            start,
            end,
            &self.settings.currency_symbol,
        )?;

        let plot = input::read_yes_no(
            &mut self.input,
            &mut self.output,
            "Do you want to plot the transactions? (y/n): ",
        )?;
        if plot {
            chart::show(&transactions)?;
        }

        Ok(())
    }
}
