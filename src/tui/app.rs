//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! What the main area shows is decided entirely by [`ViewState`]; remote
//! calls go through [`App::execute`] so the event loop stays free of API
//! details.

use tracing::{info, warn};

use crate::api::BudgetApi;
use crate::display::RowLayout;
use crate::error::ReviewResult;
use crate::models::{BudgetId, Transaction, TransactionId};

use super::navigation::{NavEvent, NavigationState};
use super::widgets::{ErrorInfo, Notification, NotificationQueue};

/// Message drawn while the first fetch is in flight
pub const LOADING_MESSAGE: &str = "Loading transactions...";

/// What the main area is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Waiting on the first fetch (or a retry after a failure)
    Loading,
    /// The last fetch failed; no data is shown
    Failed(ErrorInfo),
    /// Transactions are on screen
    Ready(NavigationState),
}

/// Work that needs the remote API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the uncleared list and replace what is shown
    Refresh,
    /// Mark a transaction cleared on the server
    Clear(TransactionId),
}

impl Command {
    /// Indicator text shown while the command runs
    pub fn busy_message(&self) -> &'static str {
        match self {
            Self::Refresh => "Refreshing transactions...",
            Self::Clear(_) => "Clearing transaction...",
        }
    }
}

/// Main application state
pub struct App {
    /// Budget under review
    pub budget_id: BudgetId,

    /// What the main area shows
    pub view: ViewState,

    /// Set while a command is running on top of a ready list
    pub busy: Option<&'static str>,

    /// Column widths for list rows
    pub layout: RowLayout,

    /// Toasts about clear and refresh outcomes
    pub notifications: NotificationQueue,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create the app in the loading state
    pub fn new(budget_id: BudgetId, layout: RowLayout) -> Self {
        Self {
            budget_id,
            view: ViewState::Loading,
            busy: None,
            layout,
            notifications: NotificationQueue::new(),
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The navigation state, if transactions are on screen
    pub fn navigation(&self) -> Option<&NavigationState> {
        match &self.view {
            ViewState::Ready(nav) => Some(nav),
            _ => None,
        }
    }

    /// The highlighted transaction, if any
    pub fn selected(&self) -> Option<&Transaction> {
        self.navigation().and_then(NavigationState::selected)
    }

    /// Feed a navigation event to the list; ignored unless it is on screen
    pub fn navigate(&mut self, event: NavEvent) {
        if let ViewState::Ready(nav) = &mut self.view {
            nav.apply(event);
        }
    }

    /// Mark a command as in flight so the next frame shows an indicator
    ///
    /// A refresh from the error view goes back to the full loading view.
    pub fn begin(&mut self, command: &Command) {
        match self.view {
            ViewState::Ready(_) => self.busy = Some(command.busy_message()),
            _ => self.view = ViewState::Loading,
        }
    }

    /// Run a command against the API and fold the outcome back in
    pub fn execute(&mut self, api: &dyn BudgetApi, command: Command) {
        match command {
            Command::Refresh => {
                let result = api.fetch_uncleared_transactions(&self.budget_id);
                self.finish_load(result);
            }
            Command::Clear(id) => {
                let result = api.mark_cleared(&self.budget_id, &id);
                self.finish_clear(&id, result);
            }
        }
    }

    /// Apply the result of a fetch
    ///
    /// Success replaces the list with the cursor back at the top. A failure
    /// shows the error view, except that a refresh failing for a reason
    /// other than authentication keeps the current list and raises a toast.
    pub fn finish_load(&mut self, result: ReviewResult<Vec<Transaction>>) {
        let refreshing = matches!(self.view, ViewState::Ready(_));
        self.busy = None;

        match result {
            Ok(transactions) => {
                info!(count = transactions.len(), "Loaded uncleared transactions");
                let count = transactions.len();
                match &mut self.view {
                    ViewState::Ready(nav) => nav.apply(NavEvent::Replace(transactions)),
                    view => *view = ViewState::Ready(NavigationState::new(transactions)),
                }
                if refreshing {
                    self.notifications
                        .push(Notification::info(format!("Loaded {} transactions", count)));
                }
            }
            Err(e) if refreshing && !e.is_auth_failure() => {
                warn!(error = %e, "Refresh failed");
                self.notifications.push(Notification::error(e.to_string()));
            }
            Err(e) => {
                warn!(error = %e, "Fetch failed");
                self.view = ViewState::Failed(ErrorInfo::from_error(&e));
            }
        }
    }

    /// Apply the result of clearing `id`
    ///
    /// Success drops the transaction from the list. A rejected token replaces
    /// the list with the error view; other failures leave the list as is.
    pub fn finish_clear(&mut self, id: &TransactionId, result: ReviewResult<()>) {
        self.busy = None;

        match result {
            Ok(()) => {
                let payee = self
                    .navigation()
                    .and_then(|nav| nav.transactions().iter().find(|t| &t.id == id))
                    .map(|t| t.payee_name.clone());
                info!(transaction = %id, "Marked transaction cleared");
                self.navigate(NavEvent::Remove(id.clone()));
                let message = match payee {
                    Some(payee) => format!("Cleared {}", payee),
                    None => "Transaction cleared".to_string(),
                };
                self.notifications.push(Notification::success(message));
            }
            Err(e) if e.is_auth_failure() => {
                warn!(transaction = %id, error = %e, "Clear rejected");
                self.view = ViewState::Failed(ErrorInfo::from_error(&e));
            }
            Err(e) => {
                warn!(transaction = %id, error = %e, "Clear failed");
                self.notifications.push(Notification::error(e.to_string()));
            }
        }
    }

    /// Periodic housekeeping between input events
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }
}
