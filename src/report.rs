//! Range summary reporting
//!
//! Computes income/expense/net totals over a filtered transaction set and
//! renders the set plus the summary block. Totals are computed fresh on
//! every query and never cached.

use std::io::Write;

use chrono::NaiveDate;
use tabled::{settings::Style, Table, Tabled};

use crate::error::FinlogResult;
use crate::models::{format_date, Category, Transaction};

/// Income/expense/net totals over a transaction set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSummary {
    /// Sum of all Income amounts
    pub total_income: f64,
    /// Sum of all Expense amounts
    pub total_expense: f64,
}

impl RangeSummary {
    /// Compute the summary of a transaction set
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;

        for txn in transactions {
            match txn.category {
                Category::Income => total_income += txn.amount,
                Category::Expense => total_expense += txn.amount,
            }
        }

        Self {
            total_income,
            total_expense,
        }
    }

    /// Net savings: income minus expenses
    pub fn net_savings(&self) -> f64 {
        self.total_income - self.total_expense
    }
}

/// One row of the rendered transaction listing
#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: format_date(txn.date),
            amount: format!("{:.2}", txn.amount),
            category: txn.category.to_string(),
            description: txn.description.clone(),
        }
    }
}

/// Render the filtered transactions and their summary
///
/// An empty set gets an informational message instead of a table; it is not
/// an error.
pub fn render<W: Write>(
    out: &mut W,
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
    currency_symbol: &str,
) -> FinlogResult<()> {
    if transactions.is_empty() {
        writeln!(out, "No transactions found in the specified date range.")?;
        return Ok(());
    }

    writeln!(
        out,
        "Transactions from {} to {}:",
        format_date(start),
        format_date(end)
    )?;

    let mut table = Table::new(transactions.iter().map(TransactionRow::from));
    table.with(Style::psql());
    writeln!(out, "{}", table)?;

    let summary = RangeSummary::from_transactions(transactions);
    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(
        out,
        "Total Income: {}{:.2}",
        currency_symbol, summary.total_income
    )?;
    writeln!(
        out,
        "Total Expense: {}{:.2}",
        currency_symbol, summary.total_expense
    )?;
    writeln!(
        out,
        "Net Savings: {}{:.2}",
        currency_symbol,
        summary.net_savings()
    )?;

    Ok(())
}
