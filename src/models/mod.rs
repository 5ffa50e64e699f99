//! Core data models for uncleared-cli
//!
//! This module contains the data structures for the review domain: the
//! milliunit amount type, remote identifiers and the transaction record.

pub mod amount;
pub mod ids;
pub mod transaction;

pub use amount::Amount;
pub use ids::{BudgetId, TransactionId};
pub use transaction::{ClearedStatus, Transaction, UNCATEGORIZED, UNKNOWN_PAYEE};
