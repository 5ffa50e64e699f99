//! Transaction model
//!
//! The canonical in-memory record for a budget transaction under review. It
//! is deliberately smaller than the server's representation; the `api::wire`
//! module maps the remote shape onto it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::TransactionId;

/// Payee shown when the server sends no payee name
pub const UNKNOWN_PAYEE: &str = "Unknown Payee";

/// Category shown when the server sends no category name
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Clearance status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClearedStatus {
    /// Not yet confirmed against a bank statement
    #[default]
    Uncleared,
    /// Confirmed by the bank
    Cleared,
    /// Cleared and locked by a reconciliation
    Reconciled,
}

impl ClearedStatus {
    /// Check if this transaction still needs review
    pub fn is_uncleared(&self) -> bool {
        matches!(self, Self::Uncleared)
    }
}

impl fmt::Display for ClearedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncleared => write!(f, "uncleared"),
            Self::Cleared => write!(f, "cleared"),
            Self::Reconciled => write!(f, "reconciled"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Server-assigned identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Payee name for display (never empty)
    pub payee_name: String,

    /// Amount (positive for inflow, negative for outflow)
    pub amount: Amount,

    /// Clearance status
    pub cleared: ClearedStatus,

    /// Category name for display (never empty)
    pub category_name: String,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// Missing or blank names are replaced with [`UNKNOWN_PAYEE`] and
    /// [`UNCATEGORIZED`].
    pub fn new(
        id: impl Into<TransactionId>,
        date: NaiveDate,
        payee_name: Option<String>,
        amount: Amount,
        cleared: ClearedStatus,
        category_name: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            payee_name: display_name(payee_name, UNKNOWN_PAYEE),
            amount,
            cleared,
            category_name: display_name(category_name, UNCATEGORIZED),
        }
    }

    /// Two records are the same logical item when their ids match, even if a
    /// server-side update changed other fields
    pub fn same_item(&self, other: &Transaction) -> bool {
        self.id == other.id
    }
}

fn display_name(name: Option<String>, fallback: &str) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => fallback.to_string(),
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.payee_name,
            self.amount,
            self.category_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 20).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            "txn-1",
            date(),
            Some("Coffee Shop".into()),
            Amount::from_milliunits(-4500),
            ClearedStatus::Uncleared,
            Some("Dining Out".into()),
        );

        assert_eq!(txn.id.as_str(), "txn-1");
        assert_eq!(txn.payee_name, "Coffee Shop");
        assert_eq!(txn.category_name, "Dining Out");
        assert!(txn.cleared.is_uncleared());
    }

    #[test]
    fn test_missing_names_use_sentinels() {
        let txn = Transaction::new(
            "txn-1",
            date(),
            None,
            Amount::zero(),
            ClearedStatus::Uncleared,
            Some("   ".into()),
        );

        assert_eq!(txn.payee_name, UNKNOWN_PAYEE);
        assert_eq!(txn.category_name, UNCATEGORIZED);
    }

    #[test]
    fn test_same_item_by_id() {
        let a = Transaction::new("txn-1", date(), None, Amount::zero(), ClearedStatus::Uncleared, None);
        let mut b = a.clone();
        b.cleared = ClearedStatus::Cleared;
        b.amount = Amount::from_milliunits(100);

        assert!(a.same_item(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&ClearedStatus::Reconciled).unwrap(), "\"reconciled\"");
        let status: ClearedStatus = serde_json::from_str("\"uncleared\"").unwrap();
        assert_eq!(status, ClearedStatus::Uncleared);
        assert_eq!(ClearedStatus::Cleared.to_string(), "cleared");
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(
            "txn-1",
            date(),
            Some("Coffee Shop".into()),
            Amount::from_milliunits(-4500),
            ClearedStatus::Uncleared,
            None,
        );
        assert_eq!(txn.to_string(), "2025-08-20 Coffee Shop -4.50 (Uncategorized)");
    }
}
