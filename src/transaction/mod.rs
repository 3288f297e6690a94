//! The session-scoped transaction ledger: domain models and one module per
//! endpoint.

mod create_endpoint;
mod get_endpoint;
mod list_endpoint;
mod models;
mod summary_endpoint;

pub use create_endpoint::create_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use models::{NewTransaction, Transaction, TransactionKind};
pub use summary_endpoint::summary_endpoint;
