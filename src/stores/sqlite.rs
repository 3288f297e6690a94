//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row};
use uuid::Uuid;

use crate::{
    Error,
    db::{CreateTable, MapRow},
    session::SessionId,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction},
};

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SqliteTransactionStore {
    /// Insert a new transaction into the database.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error, or an [Error::DatabaseLockError] if the database lock is
    /// poisoned.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?;

        let transaction = connection
            .prepare(
                "INSERT INTO transactions (id, title, amount, session_id)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, title, amount, session_id, created_at",
            )?
            .query_row(
                (
                    Uuid::new_v4().to_string(),
                    new_transaction.title,
                    new_transaction.amount,
                    new_transaction.session_id.as_str(),
                ),
                Self::map_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve the transaction matching both `id` and `session_id`.
    ///
    /// Rows belonging to other sessions are reported as absent, not as an
    /// error, so a caller cannot probe for the existence of another
    /// session's transactions.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error, or an [Error::DatabaseLockError] if the database lock is
    /// poisoned.
    fn get(&self, id: Uuid, session_id: &SessionId) -> Result<Option<Transaction>, Error> {
        let transaction = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .prepare(
                "SELECT id, title, amount, session_id, created_at FROM transactions
                 WHERE id = :id AND session_id = :session_id",
            )?
            .query_row(
                &[(":id", &id.to_string()), (":session_id", &session_id.as_str().to_owned())],
                Self::map_row,
            )
            .optional()?;

        Ok(transaction)
    }

    /// Retrieve all of the session's transactions in storage order.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error, or an [Error::DatabaseLockError] if the database lock is
    /// poisoned.
    fn get_by_session(&self, session_id: &SessionId) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .prepare(
                "SELECT id, title, amount, session_id, created_at FROM transactions
                 WHERE session_id = :session_id",
            )?
            .query_map(&[(":session_id", session_id.as_str())], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// The signed sum of the session's transaction amounts, or `None` for a
    /// session with no transactions.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL
    /// error, or an [Error::DatabaseLockError] if the database lock is
    /// poisoned.
    fn sum_by_session(&self, session_id: &SessionId) -> Result<Option<f64>, Error> {
        let sum = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .query_row(
                "SELECT SUM(amount) FROM transactions WHERE session_id = :session_id",
                &[(":session_id", session_id.as_str())],
                |row| row.get(0),
            )?;

        Ok(sum)
    }
}

impl CreateTable for SqliteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS transactions (
                    id TEXT PRIMARY KEY,
                    title TEXT NOT NULL,
                    amount REAL NOT NULL,
                    session_id TEXT NOT NULL,
                    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SqliteTransactionStore {
    type ReturnType = Transaction;

    fn map_row(row: &Row) -> Result<Self::ReturnType, rusqlite::Error> {
        let id: String = row.get(0)?;
        let id = Uuid::parse_str(&id).map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(error),
            )
        })?;

        let session_id: String = row.get(3)?;

        Ok(Transaction {
            id,
            title: row.get(1)?,
            amount: row.get(2)?,
            session_id: SessionId::new(session_id),
            created_at: row.get(4)?,
        })
    }
}

#[cfg(test)]
mod sqlite_transaction_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use uuid::Uuid;

    use crate::{
        db::initialize,
        session::SessionId,
        stores::TransactionStore,
        transaction::NewTransaction,
    };

    use super::SqliteTransactionStore;

    fn get_test_store() -> SqliteTransactionStore {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        SqliteTransactionStore::new(Arc::new(Mutex::new(conn)))
    }

    fn new_transaction(title: &str, amount: f64, session_id: &SessionId) -> NewTransaction {
        NewTransaction {
            title: title.to_owned(),
            amount,
            session_id: session_id.clone(),
        }
    }

    #[test]
    fn create_transaction_stores_all_fields() {
        let mut store = get_test_store();
        let session_id = SessionId::random();

        let transaction = store
            .create(new_transaction("Salary", 5000.0, &session_id))
            .unwrap();

        assert_eq!(transaction.title, "Salary");
        assert_eq!(transaction.amount, 5000.0);
        assert_eq!(transaction.session_id, session_id);
        assert!(!transaction.created_at.is_empty());
    }

    #[test]
    fn create_transaction_assigns_unique_ids() {
        let mut store = get_test_store();
        let session_id = SessionId::random();

        let first = store
            .create(new_transaction("Salary", 5000.0, &session_id))
            .unwrap();
        let second = store
            .create(new_transaction("Rent", -1200.0, &session_id))
            .unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn get_transaction_by_id_succeeds() {
        let mut store = get_test_store();
        let session_id = SessionId::random();
        let inserted = store
            .create(new_transaction("Salary", 5000.0, &session_id))
            .unwrap();

        let selected = store.get(inserted.id, &session_id).unwrap();

        assert_eq!(selected, Some(inserted));
    }

    #[test]
    fn get_transaction_returns_none_for_unknown_id() {
        let store = get_test_store();
        let session_id = SessionId::random();

        let selected = store.get(Uuid::new_v4(), &session_id).unwrap();

        assert_eq!(selected, None);
    }

    #[test]
    fn get_transaction_returns_none_for_other_sessions_row() {
        let mut store = get_test_store();
        let owner = SessionId::random();
        let inserted = store
            .create(new_transaction("Salary", 5000.0, &owner))
            .unwrap();

        let selected = store.get(inserted.id, &SessionId::random()).unwrap();

        assert_eq!(selected, None);
    }

    #[test]
    fn get_by_session_returns_empty_vec_for_new_session() {
        let store = get_test_store();

        let transactions = store.get_by_session(&SessionId::random()).unwrap();

        assert_eq!(transactions, vec![]);
    }

    #[test]
    fn get_by_session_only_returns_own_rows() {
        let mut store = get_test_store();
        let session_id = SessionId::random();
        let other_session = SessionId::random();

        let expected = vec![
            store
                .create(new_transaction("Salary", 5000.0, &session_id))
                .unwrap(),
            store
                .create(new_transaction("Rent", -1200.0, &session_id))
                .unwrap(),
        ];
        store
            .create(new_transaction("Groceries", -80.0, &other_session))
            .unwrap();

        let transactions = store.get_by_session(&session_id).unwrap();

        assert_eq!(transactions, expected);
    }

    #[test]
    fn sum_by_session_returns_none_for_empty_session() {
        let store = get_test_store();

        let sum = store.sum_by_session(&SessionId::random()).unwrap();

        assert_eq!(sum, None);
    }

    #[test]
    fn sum_by_session_totals_signed_amounts() {
        let mut store = get_test_store();
        let session_id = SessionId::random();

        store
            .create(new_transaction("Salary", 5000.0, &session_id))
            .unwrap();
        store
            .create(new_transaction("Rent", -1200.0, &session_id))
            .unwrap();

        let sum = store.sum_by_session(&session_id).unwrap();

        assert_eq!(sum, Some(3800.0));
    }
}
