//! Contains the trait and implementation for objects that store ledger
//! [transactions](crate::transaction::Transaction).

mod sqlite;
mod transaction;

pub use sqlite::SqliteTransactionStore;
pub use transaction::TransactionStore;
