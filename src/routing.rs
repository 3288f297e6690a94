//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    stores::TransactionStore,
    transaction::{
        create_transaction_endpoint, get_transaction_endpoint, list_transactions_endpoint,
        summary_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::SUMMARY, get(summary_endpoint))
        .route(
            endpoints::TRANSACTIONS,
            post(create_transaction_endpoint).get(list_transactions_endpoint),
        )
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint))
        .with_state(state)
}
