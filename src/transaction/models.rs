//! The domain types for ledger transactions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::SessionId;

/// One signed monetary ledger entry belonging to one session.
///
/// Transactions are append-only: once stored they are never updated or
/// deleted, and the sign of `amount` is never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The unique identifier, generated at creation.
    pub id: Uuid,
    /// A free-text label for the transaction.
    pub title: String,
    /// The signed value of the transaction. Negative for debits, positive
    /// for credits.
    pub amount: f64,
    /// The opaque token of the owning session.
    pub session_id: SessionId,
    /// When the row was inserted. Assigned by the database, not the
    /// application, and treated as opaque text.
    pub created_at: String,
}

/// Whether a transaction adds to or subtracts from the ledger total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in. The amount is stored as submitted.
    Credit,
    /// Money going out. The amount is stored negated.
    Debit,
}

impl TransactionKind {
    /// Normalize a submitted amount to its stored, signed form.
    ///
    /// The sign fully encodes the kind; no separate column is persisted.
    pub fn signed_amount(self, amount: f64) -> f64 {
        match self {
            TransactionKind::Credit => amount,
            TransactionKind::Debit => -amount,
        }
    }
}

/// The data needed to insert a transaction, before an ID and timestamp have
/// been assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// A free-text label. Must not be empty.
    pub title: String,
    /// The signed value to store.
    pub amount: f64,
    /// The owning session.
    pub session_id: SessionId,
}
