//! Transaction display formatting
//!
//! Every list row has the shape `date | payee | amount | category`, with the
//! payee padded or truncated to a fixed width and the amount right-aligned.
//! The TUI and the plain `--list` output both render through here.

use crate::models::{Amount, Transaction};

/// Shown in place of the list when nothing is awaiting review
pub const NO_TRANSACTIONS: &str = "No transactions found";

/// Column widths for list rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// Payee column width; longer names are truncated
    pub payee_width: usize,
    /// Minimum amount column width
    pub amount_width: usize,
}

impl Default for RowLayout {
    fn default() -> Self {
        Self {
            payee_width: 20,
            amount_width: 8,
        }
    }
}

/// Format a single transaction as a list row
pub fn format_transaction_row(txn: &Transaction, layout: RowLayout) -> String {
    format!(
        "{} | {:<payee_width$} | {:>amount_width$} | {}",
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.payee_name, layout.payee_width),
        txn.amount.format(),
        txn.category_name,
        payee_width = layout.payee_width,
        amount_width = layout.amount_width,
    )
}

/// Footer describing the cursor position, e.g. `Selected: 2 of 3`
pub fn format_selection(cursor: Option<usize>, len: usize) -> Option<String> {
    cursor.map(|cursor| format!("Selected: {} of {}", cursor + 1, len))
}

/// Summary line with the count and sum of the listed transactions
pub fn format_summary(count: usize, total: Amount) -> String {
    let noun = if count == 1 { "transaction" } else { "transactions" };
    format!("{} uncleared {}, total {}", count, noun, total)
}

/// Format the whole list for non-interactive output
pub fn format_transaction_list(transactions: &[Transaction], layout: RowLayout) -> String {
    if transactions.is_empty() {
        return format!("{}\n", NO_TRANSACTIONS);
    }

    let mut output = String::new();
    for txn in transactions {
        output.push_str(&format_transaction_row(txn, layout));
        output.push('\n');
    }

    let total: Amount = transactions.iter().map(|t| t.amount).sum();
    output.push('\n');
    output.push_str(&format_summary(transactions.len(), total));
    output.push('\n');
    output
}

/// Truncate a string to at most `max_len` characters, marking the cut
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }
    let kept: String = s.chars().take(max_len - 1).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClearedStatus;
    use chrono::NaiveDate;

    fn txn(id: &str, payee: Option<&str>, milliunits: i64, category: Option<&str>) -> Transaction {
        Transaction::new(
            id,
            NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
            payee.map(String::from),
            Amount::from_milliunits(milliunits),
            ClearedStatus::Uncleared,
            category.map(String::from),
        )
    }

    #[test]
    fn test_row_layout() {
        let row = format_transaction_row(
            &txn("1", Some("Coffee Shop"), -4500, Some("Dining Out")),
            RowLayout::default(),
        );
        assert_eq!(row, "2025-08-20 | Coffee Shop          |    -4.50 | Dining Out");
    }

    #[test]
    fn test_row_with_sentinels() {
        let row = format_transaction_row(&txn("1", None, 12345, None), RowLayout::default());
        assert_eq!(row, "2025-08-20 | Unknown Payee        |    12.35 | Uncategorized");
    }

    #[test]
    fn test_long_payee_is_truncated() {
        let row = format_transaction_row(
            &txn("1", Some("The Extremely Long Payee Name Inc"), -100, Some("Misc")),
            RowLayout::default(),
        );
        assert!(row.contains("| The Extremely Long … |"));
    }

    #[test]
    fn test_wide_amount_overflows_column() {
        let row = format_transaction_row(
            &txn("1", Some("Landlord"), -123_456_780, Some("Rent")),
            RowLayout::default(),
        );
        assert!(row.contains("| -123456.78 |"));
    }

    #[test]
    fn test_custom_layout() {
        let layout = RowLayout {
            payee_width: 5,
            amount_width: 6,
        };
        let row = format_transaction_row(&txn("1", Some("Bakery"), -1200, Some("Food")), layout);
        assert_eq!(row, "2025-08-20 | Bake… |  -1.20 | Food");
    }

    #[test]
    fn test_selection_footer() {
        assert_eq!(format_selection(Some(1), 2).as_deref(), Some("Selected: 2 of 2"));
        assert_eq!(format_selection(Some(0), 7).as_deref(), Some("Selected: 1 of 7"));
        assert_eq!(format_selection(None, 0), None);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_transaction_list(&[], RowLayout::default()),
            "No transactions found\n"
        );
    }

    #[test]
    fn test_list_with_summary() {
        let output = format_transaction_list(
            &[
                txn("1", Some("Coffee Shop"), -4500, Some("Dining Out")),
                txn("2", Some("Gas Station"), -6500, Some("Transportation")),
            ],
            RowLayout::default(),
        );
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Coffee Shop"));
        assert!(lines[1].contains("Gas Station"));
        assert_eq!(lines[3], "2 uncleared transactions, total -11.00");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Café au lait", 5), "Café…");
        assert_eq!(truncate("abc", 0), "");
    }
}
