//! Defines the endpoint for fetching a single transaction by its ID.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    AppState, Error, SessionId, stores::TransactionStore, transaction::Transaction,
};

/// The response body for a single transaction lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    /// The matching transaction, or `null` when there is none.
    pub transaction: Option<Transaction>,
}

/// A route handler for fetching the transaction matching both `id` and the
/// caller's session.
///
/// Absence is reported as a `null` body with status 200, never as an error,
/// and a transaction owned by another session is indistinguishable from one
/// that does not exist. An `id` that is not a valid UUID is rejected by the
/// path extractor before this handler runs.
pub async fn get_transaction_endpoint<T>(
    State(state): State<AppState<T>>,
    session_id: SessionId,
    Path(id): Path<Uuid>,
) -> Result<Json<TransactionResponse>, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let transaction = state.transaction_store.get(id, &session_id)?;

    Ok(Json(TransactionResponse { transaction }))
}
