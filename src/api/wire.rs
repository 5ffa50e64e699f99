//! Wire format of the YNAB v1 API
//!
//! Only the fields the review workflow needs are declared; everything else in
//! a response (memo, flags, subtransactions, ...) is ignored. Optional fields
//! tolerate being absent as well as `null`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Amount, ClearedStatus, Transaction};

/// Envelope of `GET /budgets/{id}/transactions`
#[derive(Debug, Deserialize)]
pub struct TransactionsResponse {
    pub data: TransactionsData,
}

#[derive(Debug, Deserialize)]
pub struct TransactionsData {
    pub transactions: Vec<WireTransaction>,
}

/// A transaction as the server sends it
#[derive(Debug, Clone, Deserialize)]
pub struct WireTransaction {
    pub id: String,
    pub date: NaiveDate,
    /// Milliunits; kept as a raw JSON number so fractional values round
    /// instead of failing the whole response
    pub amount: serde_json::Number,
    pub cleared: ClearedStatus,
    #[serde(default)]
    pub payee_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    /// Only some API variants expose a deletion marker
    #[serde(default)]
    pub deleted: Option<bool>,
}

impl WireTransaction {
    /// Uncleared and not deleted on the server
    pub fn needs_review(&self) -> bool {
        self.cleared.is_uncleared() && !self.deleted.unwrap_or(false)
    }

    pub fn amount(&self) -> Amount {
        match self.amount.as_i64() {
            Some(milliunits) => Amount::from_milliunits(milliunits),
            None => Amount::from_raw_milliunits(self.amount.as_f64().unwrap_or_default()),
        }
    }

    /// Map onto the canonical record, substituting display sentinels for
    /// missing names
    pub fn into_transaction(self) -> Transaction {
        let amount = self.amount();
        Transaction::new(
            self.id,
            self.date,
            self.payee_name,
            amount,
            self.cleared,
            self.category_name,
        )
    }
}

impl TransactionsResponse {
    /// Transactions still awaiting review, in server order
    pub fn into_uncleared(self) -> Vec<Transaction> {
        self.data
            .transactions
            .into_iter()
            .filter(WireTransaction::needs_review)
            .map(WireTransaction::into_transaction)
            .collect()
    }
}

/// Error body returned with non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Body of `PATCH /budgets/{id}/transactions/{id}`
#[derive(Debug, Serialize)]
pub struct UpdateTransactionRequest {
    pub transaction: TransactionPatch,
}

#[derive(Debug, Serialize)]
pub struct TransactionPatch {
    pub cleared: ClearedStatus,
}

impl UpdateTransactionRequest {
    /// Request that flips a transaction to cleared
    pub fn mark_cleared() -> Self {
        Self {
            transaction: TransactionPatch {
                cleared: ClearedStatus::Cleared,
            },
        }
    }
}
