//! Defines the endpoint for the session's ledger summary.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, SessionId, stores::TransactionStore};

/// The running signed total of a session's transactions.
#[derive(Debug, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of all amounts, or `null` for a session with no
    /// transactions.
    pub amount: Option<f64>,
}

/// The response body for the summary endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The ledger summary.
    pub summary: Summary,
}

/// A route handler for the signed total of the session's transactions.
///
/// The total is `null` for a session with no transactions, matching the SQL
/// aggregate of an empty set. Requests without a session cookie are
/// rejected before this handler runs.
pub async fn summary_endpoint<T>(
    State(state): State<AppState<T>>,
    session_id: SessionId,
) -> Result<Json<SummaryResponse>, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    let amount = state.transaction_store.sum_by_session(&session_id)?;

    Ok(Json(SummaryResponse {
        summary: Summary { amount },
    }))
}
