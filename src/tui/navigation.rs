//! Cursor navigation over the review list
//!
//! [`NavigationState`] owns the transactions in server order and a cursor.
//! Whenever the list is non-empty the cursor satisfies `0 <= cursor < len`;
//! an empty list has no selection. Every [`NavEvent`] is total: movement at a
//! boundary is a no-op rather than an error, and nothing wraps around.

use crate::models::{Amount, Transaction, TransactionId};

/// Input to the navigation state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Move the cursor one row up, stopping at the first row
    MoveUp,
    /// Move the cursor one row down, stopping at the last row
    MoveDown,
    /// Jump to the first row
    MoveFirst,
    /// Jump to the last row
    MoveLast,
    /// Swap in a new list and reset the cursor to the top
    Replace(Vec<Transaction>),
    /// Drop the transaction with this id, keeping the cursor in bounds
    Remove(TransactionId),
}

/// The list under review and the highlighted row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    transactions: Vec<Transaction>,
    cursor: usize,
}

impl NavigationState {
    /// Start a fresh list with the first row selected
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            cursor: 0,
        }
    }

    /// Apply one event
    pub fn apply(&mut self, event: NavEvent) {
        let last = self.transactions.len().saturating_sub(1);

        match event {
            NavEvent::Replace(transactions) => {
                self.transactions = transactions;
                self.cursor = 0;
            }
            _ if self.transactions.is_empty() => {}
            NavEvent::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            NavEvent::MoveDown => self.cursor = (self.cursor + 1).min(last),
            NavEvent::MoveFirst => self.cursor = 0,
            NavEvent::MoveLast => self.cursor = last,
            NavEvent::Remove(id) => self.remove(&id),
        }
    }

    /// Consume the state, apply an event and return the result
    pub fn reduce(mut self, event: NavEvent) -> Self {
        self.apply(event);
        self
    }

    fn remove(&mut self, id: &TransactionId) {
        let Some(index) = self.transactions.iter().position(|t| &t.id == id) else {
            return;
        };
        self.transactions.remove(index);

        if index < self.cursor {
            self.cursor -= 1;
        }
        self.cursor = self.cursor.min(self.transactions.len().saturating_sub(1));
    }

    /// The highlighted transaction, if the list is non-empty
    pub fn selected(&self) -> Option<&Transaction> {
        self.transactions.get(self.cursor)
    }

    /// The cursor position, if the list is non-empty
    pub fn cursor(&self) -> Option<usize> {
        (!self.transactions.is_empty()).then_some(self.cursor)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all amounts in the list
    pub fn total(&self) -> Amount {
        self.transactions.iter().map(|t| t.amount).sum()
    }
}
