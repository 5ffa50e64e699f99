//! Remote budget API
//!
//! `client` talks HTTP; `wire` holds the server's JSON shapes and the mapping
//! onto [`crate::models::Transaction`].

pub mod client;
pub mod wire;

pub use client::{BudgetApi, YnabClient, DEFAULT_BASE_URL};
