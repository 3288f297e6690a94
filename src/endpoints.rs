//! The API endpoint URIs.

/// The route to create (POST) and list (GET) the session's transactions.
pub const TRANSACTIONS: &str = "/";
/// The route to fetch a single transaction by its ID.
pub const TRANSACTION: &str = "/{id}";
/// The route for the signed total of the session's transactions.
pub const SUMMARY: &str = "/summary";
