//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions as fixed-width rows shared
//! by the interactive list and the plain listing.

pub mod transaction;

pub use transaction::{
    format_selection, format_summary, format_transaction_list, format_transaction_row, RowLayout,
    NO_TRANSACTIONS,
};
