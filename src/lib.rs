//! uncleared-cli - review and clear YNAB transactions from the terminal
//!
//! Fetches a budget's uncleared transactions, shows them in a navigable list
//! and marks the selected one cleared on the server.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Amount, identifiers and the transaction record
//! - `api`: The remote client and its wire format
//! - `config`: Configuration and path management
//! - `display`: Row formatting shared by the TUI and plain output
//! - `tui`: The interactive review screen
//! - `logging`: Tracing setup
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use uncleared::api::{BudgetApi, YnabClient};
//! use uncleared::models::BudgetId;
//!
//! let client = YnabClient::new(token)?;
//! let transactions = client.fetch_uncleared_transactions(&BudgetId::new("last-used"))?;
//! ```

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod tui;

pub use error::{ReviewError, ReviewResult};
