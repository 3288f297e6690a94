//! Defines the transaction store trait.

use uuid::Uuid;

use crate::{
    Error,
    session::SessionId,
    transaction::{NewTransaction, Transaction},
};

/// Handles the creation and retrieval of transactions.
///
/// Every retrieval operation is scoped to a single session identifier; an
/// implementation must never return rows belonging to another session.
pub trait TransactionStore {
    /// Insert a new transaction into the store, assigning it a fresh unique
    /// ID.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve the transaction matching both `id` and `session_id`.
    ///
    /// Returns `Ok(None)` when no such row exists, including when the row
    /// belongs to a different session.
    fn get(&self, id: Uuid, session_id: &SessionId) -> Result<Option<Transaction>, Error>;

    /// Retrieve all of the session's transactions in storage order.
    fn get_by_session(&self, session_id: &SessionId) -> Result<Vec<Transaction>, Error>;

    /// The signed sum of the session's transaction amounts.
    ///
    /// Returns `Ok(None)` when the session has no transactions, matching
    /// the SQL aggregate of an empty set.
    fn sum_by_session(&self, session_id: &SessionId) -> Result<Option<f64>, Error>;
}
