//! Terminal chart rendering
//!
//! Turns a filtered transaction set into two daily series (income and
//! expense, zero-filled for days without entries) and renders them as a
//! full-screen line chart. The chart takes over the terminal until a key is
//! pressed; rendering requires a real TTY and a failure to set one up
//! propagates to the caller.

use std::io;

use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame, Terminal,
};

use crate::error::FinlogResult;
use crate::models::{format_date, Category, Transaction};

/// The first and last dates appearing in a transaction set
pub fn date_span(transactions: &[Transaction]) -> Option<(NaiveDate, NaiveDate)> {
    let first = transactions.iter().map(|t| t.date).min()?;
    let last = transactions.iter().map(|t| t.date).max()?;
    Some((first, last))
}

/// Resample one category into a daily series over the set's date span
///
/// Returns one point per calendar day: x is days since the span start, y is
/// the sum of that category's amounts on the day, zero when none.
pub fn daily_series(transactions: &[Transaction], category: Category) -> Vec<(f64, f64)> {
    let Some((start, end)) = date_span(transactions) else {
        return Vec::new();
    };

    let days = (end - start).num_days() as usize;
    let mut points: Vec<(f64, f64)> = (0..=days).map(|day| (day as f64, 0.0)).collect();

    for txn in transactions.iter().filter(|t| t.category == category) {
        let offset = (txn.date - start).num_days() as usize;
        points[offset].1 += txn.amount;
    }

    points
}

/// Render the income/expense chart for a transaction set
///
/// No-op for an empty set. Blocks until a key is pressed, then restores the
/// terminal.
pub fn show(transactions: &[Transaction]) -> FinlogResult<()> {
    let Some((start, end)) = date_span(transactions) else {
        return Ok(());
    };

    let income = daily_series(transactions, Category::Income);
    let expense = daily_series(transactions, Category::Expense);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_chart(&mut terminal, &income, &expense, start, end);

    // Restore the terminal even when drawing failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

/// Draw the chart and wait for a key press
fn run_chart(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    income: &[(f64, f64)],
    expense: &[(f64, f64)],
    start: NaiveDate,
    end: NaiveDate,
) -> FinlogResult<()> {
    loop {
        terminal.draw(|frame| draw_chart(frame, income, expense, start, end))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Render the two-series line chart into the full frame
fn draw_chart(
    frame: &mut Frame,
    income: &[(f64, f64)],
    expense: &[(f64, f64)],
    start: NaiveDate,
    end: NaiveDate,
) {
    let x_max = ((end - start).num_days() as f64).max(1.0);
    let y_max = income
        .iter()
        .chain(expense.iter())
        .map(|&(_, y)| y)
        .fold(1.0_f64, f64::max)
        * 1.1;

    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(income),
        Dataset::default()
            .name("Expense")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(expense),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Income and Expense Over Time (press any key to close)"),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::raw(format_date(start)),
                    Span::raw(format_date(end)),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Amount ($)")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(vec![Span::raw("0"), Span::raw(format!("{:.0}", y_max))]),
        );

    frame.render_widget(chart, frame.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;

    fn txn(day: &str, amount: f64, category: Category) -> Transaction {
        Transaction::new(parse_date(day).unwrap(), amount, category, "")
    }

    #[test]
    fn test_date_span() {
        let transactions = vec![
            txn("01-05-2023", 1.0, Category::Income),
            txn("01-01-2023", 1.0, Category::Expense),
            txn("01-03-2023", 1.0, Category::Income),
        ];

        let (start, end) = date_span(&transactions).unwrap();
        assert_eq!(start, parse_date("01-01-2023").unwrap());
        assert_eq!(end, parse_date("01-05-2023").unwrap());
    }

    #[test]
    fn test_date_span_empty() {
        assert!(date_span(&[]).is_none());
    }

    #[test]
    fn test_daily_series_fills_missing_days_with_zero() {
        let transactions = vec![
            txn("01-01-2023", 100.0, Category::Income),
            txn("01-03-2023", 50.0, Category::Income),
        ];

        let series = daily_series(&transactions, Category::Income);
        assert_eq!(series, vec![(0.0, 100.0), (1.0, 0.0), (2.0, 50.0)]);
    }

    #[test]
    fn test_daily_series_sums_same_day_amounts() {
        let transactions = vec![
            txn("01-01-2023", 20.0, Category::Expense),
            txn("01-01-2023", 22.5, Category::Expense),
            txn("01-02-2023", 5.0, Category::Income),
        ];

        let series = daily_series(&transactions, Category::Expense);
        assert_eq!(series, vec![(0.0, 42.5), (1.0, 0.0)]);
    }

    #[test]
    fn test_daily_series_spans_other_category_days() {
        // The expense series still covers the full span set by income entries
        let transactions = vec![
            txn("01-01-2023", 100.0, Category::Income),
            txn("01-02-2023", 40.0, Category::Expense),
        ];

        let income = daily_series(&transactions, Category::Income);
        let expense = daily_series(&transactions, Category::Expense);
        assert_eq!(income, vec![(0.0, 100.0), (1.0, 0.0)]);
        assert_eq!(expense, vec![(0.0, 0.0), (1.0, 40.0)]);
    }

    #[test]
    fn test_daily_series_empty_set() {
        assert!(daily_series(&[], Category::Income).is_empty());
    }
}
