//! Blocking HTTP client for the YNAB v1 API
//!
//! Every call is single-shot: failures are mapped to a [`ReviewError`] with a
//! stable prefix naming the operation and returned to the caller. Nothing is
//! retried.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

use super::wire::{ErrorResponse, TransactionsResponse, UpdateTransactionRequest};
use crate::error::{RemoteOperation, ReviewError, ReviewResult};
use crate::models::{BudgetId, Transaction, TransactionId};

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.ynab.com/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Detail used when a 401 carries no usable error body
const AUTH_FALLBACK_DETAIL: &str = "Authentication failed";

/// Remote operations the review loop depends on
pub trait BudgetApi {
    /// Fetch the budget's transactions that are uncleared and not deleted,
    /// in server order
    fn fetch_uncleared_transactions(&self, budget_id: &BudgetId) -> ReviewResult<Vec<Transaction>>;

    /// Mark a single transaction as cleared on the server
    fn mark_cleared(&self, budget_id: &BudgetId, transaction_id: &TransactionId) -> ReviewResult<()>;
}

/// YNAB API client authenticated with a personal access token
pub struct YnabClient {
    http: Client,
    base_url: String,
    token: String,
}

impl YnabClient {
    /// Create a client against the production API
    pub fn new(token: impl Into<String>) -> ReviewResult<Self> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API root (self-hosted proxy, tests)
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> ReviewResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ReviewError::Validation("Token is required".into()));
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("uncleared-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReviewError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// The API root requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transactions_url(&self, budget_id: &BudgetId) -> String {
        format!("{}/budgets/{}/transactions", self.base_url, budget_id)
    }

    fn transaction_url(&self, budget_id: &BudgetId, transaction_id: &TransactionId) -> String {
        format!("{}/{}", self.transactions_url(budget_id), transaction_id)
    }
}

impl BudgetApi for YnabClient {
    fn fetch_uncleared_transactions(&self, budget_id: &BudgetId) -> ReviewResult<Vec<Transaction>> {
        require_budget_id(budget_id)?;
        let operation = RemoteOperation::FetchTransactions;

        tracing::debug!(budget_id = %budget_id, "Fetching transactions");
        let response = self
            .http
            .get(self.transactions_url(budget_id))
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| remote_error(operation, e.to_string()))?;

        let body = check_status(response, operation)?
            .text()
            .map_err(|e| remote_error(operation, e.to_string()))?;
        let parsed: TransactionsResponse = serde_json::from_str(&body)
            .map_err(|e| remote_error(operation, format!("invalid response body: {}", e)))?;

        let total = parsed.data.transactions.len();
        let uncleared = parsed.into_uncleared();
        tracing::info!(total, uncleared = uncleared.len(), "Fetched transactions");

        Ok(uncleared)
    }

    fn mark_cleared(&self, budget_id: &BudgetId, transaction_id: &TransactionId) -> ReviewResult<()> {
        require_budget_id(budget_id)?;
        if transaction_id.is_blank() {
            return Err(ReviewError::Validation("Transaction ID is required".into()));
        }
        let operation = RemoteOperation::ClearTransaction;

        tracing::debug!(transaction_id = %transaction_id, "Marking transaction cleared");
        let response = self
            .http
            .patch(self.transaction_url(budget_id, transaction_id))
            .bearer_auth(&self.token)
            .json(&UpdateTransactionRequest::mark_cleared())
            .send()
            .map_err(|e| remote_error(operation, e.to_string()))?;

        check_status(response, operation)?;
        tracing::info!(transaction_id = %transaction_id, "Transaction cleared");

        Ok(())
    }
}

fn require_budget_id(budget_id: &BudgetId) -> ReviewResult<()> {
    if budget_id.is_blank() {
        return Err(ReviewError::Validation("Budget ID is required".into()));
    }
    Ok(())
}

fn remote_error(operation: RemoteOperation, detail: impl Into<String>) -> ReviewError {
    let err = ReviewError::RemoteRequest {
        operation,
        detail: detail.into(),
    };
    tracing::warn!(error = %err, "Remote request failed");
    err
}

/// Pass 2xx responses through; turn anything else into the matching error
fn check_status(response: Response, operation: RemoteOperation) -> ReviewResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response
        .json::<ErrorResponse>()
        .ok()
        .and_then(|body| body.error.detail)
        .filter(|detail| !detail.trim().is_empty());

    if status == StatusCode::UNAUTHORIZED {
        tracing::warn!("Server rejected the access token");
        return Err(ReviewError::AuthenticationFailed(
            detail.unwrap_or_else(|| AUTH_FALLBACK_DETAIL.to_string()),
        ));
    }

    Err(remote_error(
        operation,
        detail.unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16())),
    ))
}
