//! Session identity carried in an opaque cookie.
//!
//! The session identifier is the sole scoping key for ledger visibility. It
//! is not a verified identity: any string presented in the cookie is
//! accepted as-is, and nothing checks that an identifier was ever issued by
//! this server. Forgery is possible by design, which is why a plain
//! [CookieJar] is used rather than a signed or private jar.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use serde::{Deserialize, Serialize};
use time::Duration;
use uuid::Uuid;

use crate::Error;

/// The name of the cookie holding the session identifier.
pub(crate) const COOKIE_SESSION: &str = "sessionId";

/// How long a freshly minted session cookie is valid for.
pub(crate) const SESSION_COOKIE_DURATION: Duration = Duration::days(7);

/// An opaque token identifying the pseudo-user that owns a set of
/// transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an existing session identifier string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Mint a new, globally unique session identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The session identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decide whether a request may read the ledger.
///
/// Returns the session identifier from the cookie jar, or
/// [Error::SessionCookieMissing] when the request carries no session cookie.
pub(crate) fn check_session(jar: &CookieJar) -> Result<SessionId, Error> {
    jar.get(COOKIE_SESSION)
        .map(|cookie| SessionId::new(cookie.value()))
        .ok_or(Error::SessionCookieMissing)
}

/// Determine the session identifier to scope a write operation.
///
/// Reuses the identifier from an existing session cookie unchanged.
/// Otherwise mints a new identifier and adds a cookie for it to the jar,
/// scoped to path `/` with a 7-day expiry.
///
/// Returns the resolved identifier and the jar to include in the response.
pub(crate) fn resolve_session(jar: CookieJar) -> (SessionId, CookieJar) {
    match jar.get(COOKIE_SESSION) {
        Some(cookie) => (SessionId::new(cookie.value()), jar),
        None => {
            let session_id = SessionId::random();
            let cookie = Cookie::build((COOKIE_SESSION, session_id.to_string()))
                .path("/")
                .max_age(SESSION_COOKIE_DURATION)
                .build();

            (session_id.clone(), jar.add(cookie))
        }
    }
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        check_session(&jar)
    }
}

#[cfg(test)]
mod session_tests {
    use axum_extra::extract::{CookieJar, cookie::Cookie};
    use time::Duration;

    use crate::Error;

    use super::{COOKIE_SESSION, check_session, resolve_session};

    #[test]
    fn check_session_rejects_empty_jar() {
        let jar = CookieJar::new();

        assert_eq!(check_session(&jar), Err(Error::SessionCookieMissing));
    }

    #[test]
    fn check_session_accepts_any_cookie_value() {
        let jar = CookieJar::new().add(Cookie::new(COOKIE_SESSION, "not-a-uuid"));

        let session_id = check_session(&jar).unwrap();

        assert_eq!(session_id.as_str(), "not-a-uuid");
    }

    #[test]
    fn resolve_session_reuses_existing_cookie_unchanged() {
        let jar = CookieJar::new().add(Cookie::new(COOKIE_SESSION, "alpha"));

        let (session_id, jar) = resolve_session(jar);

        assert_eq!(session_id.as_str(), "alpha");
        assert_eq!(jar.get(COOKIE_SESSION).unwrap().value(), "alpha");
    }

    #[test]
    fn resolve_session_mints_cookie_on_first_contact() {
        let (session_id, jar) = resolve_session(CookieJar::new());

        let cookie = jar
            .get(COOKIE_SESSION)
            .expect("expected a session cookie to be set");

        assert_eq!(cookie.value(), session_id.as_str());
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }

    #[test]
    fn resolve_session_mints_unique_identifiers() {
        let (first, _) = resolve_session(CookieJar::new());
        let (second, _) = resolve_session(CookieJar::new());

        assert_ne!(first, second);
    }
}
