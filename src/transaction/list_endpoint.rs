//! Defines the endpoint for listing the session's transactions.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error, SessionId, stores::TransactionStore, transaction::Transaction,
};

/// The response body for the transaction listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// The session's transactions in storage order.
    pub transactions: Vec<Transaction>,
}

/// A route handler for listing all of the session's transactions.
///
/// A session with no transactions gets an empty list, not an error.
/// Requests without a session cookie are rejected before this handler runs.
pub async fn list_transactions_endpoint<T>(
    State(state): State<AppState<T>>,
    session_id: SessionId,
) -> Result<Json<TransactionsResponse>, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let transactions = state.transaction_store.get_by_session(&session_id)?;

    Ok(Json(TransactionsResponse { transactions }))
}
