//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    session::resolve_session,
    stores::TransactionStore,
    transaction::{NewTransaction, TransactionKind},
};

/// The request body for creating a transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTransactionBody {
    /// A free-text label for the transaction.
    pub title: String,
    /// The value of the transaction, sign-agnostic as submitted.
    pub amount: f64,
    /// Whether the amount is a credit or a debit.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// A route handler for creating a new transaction.
///
/// The amount is stored negated for debits, so the sign encodes the kind.
/// If the request carries no session cookie, a new session identifier is
/// minted and set on the response. Responds with `201` and an empty body;
/// the stored row is not returned.
pub async fn create_transaction_endpoint<T>(
    State(mut state): State<AppState<T>>,
    jar: CookieJar,
    Json(body): Json<CreateTransactionBody>,
) -> Result<impl IntoResponse, Error>
where
    T: TransactionStore + Clone + Send + Sync,
{
    if body.title.is_empty() {
        return Err(Error::EmptyTitle);
    }

    let (session_id, jar) = resolve_session(jar);

    state.transaction_store.create(NewTransaction {
        title: body.title,
        amount: body.kind.signed_amount(body.amount),
        session_id,
    })?;

    Ok((StatusCode::CREATED, jar))
}
