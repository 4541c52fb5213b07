//! Anonymous user identity carried in the `user_id` cookie.
//!
//! A request without a usable cookie gets a freshly minted id. Responses
//! from identity-bearing endpoints always (re)issue the cookie so its
//! one-year lifetime keeps sliding forward.
//!
//! Cookie values may carry any UTF-8 text. A `Cookie` header that is not
//! valid UTF-8 is skipped (logged at `debug`), so a caller presenting only
//! such a header is treated as new.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use terrapet_types::UserId;

use crate::error::ApiError;

/// Name of the identity cookie.
pub const COOKIE_NAME: &str = "user_id";

/// Cookie lifetime: one year, in seconds.
pub const COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Who a request belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The resolved user id.
    pub user_id: UserId,
    /// Whether the id was minted for this request.
    pub minted: bool,
}

impl Identity {
    /// Resolve the caller from request headers, minting an id if none is
    /// presented.
    pub fn resolve(headers: &HeaderMap) -> Self {
        cookie_user_id(headers).map_or_else(
            || Self {
                user_id: UserId::new(),
                minted: true,
            },
            |user_id| Self {
                user_id,
                minted: false,
            },
        )
    }

    /// The `Set-Cookie` header that persists this identity.
    pub fn set_cookie(&self) -> Result<(HeaderName, HeaderValue), ApiError> {
        let cookie = format!(
            "{COOKIE_NAME}={}; Max-Age={COOKIE_MAX_AGE_SECS}; Path=/",
            self.user_id
        );
        let value = HeaderValue::from_bytes(cookie.as_bytes())
            .map_err(|e| ApiError::Internal(format!("invalid cookie value: {e}")))?;
        Ok((SET_COOKIE, value))
    }
}

/// Find the `user_id` cookie across all `Cookie` headers.
fn cookie_user_id(headers: &HeaderMap) -> Option<UserId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| match core::str::from_utf8(value.as_bytes()) {
            Ok(header) => Some(header),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring non-UTF-8 Cookie header");
                None
            }
        })
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .and_then(|(_, value)| UserId::from_token(value.trim().trim_matches('"')))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn headers_with(cookies: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for cookie in cookies {
            if let Ok(value) = HeaderValue::from_str(cookie) {
                headers.append(COOKIE, value);
            }
        }
        headers
    }

    #[test]
    fn missing_cookie_mints_an_id() {
        let identity = Identity::resolve(&HeaderMap::new());
        assert!(identity.minted);
        assert!(!identity.user_id.as_str().is_empty());
    }

    #[test]
    fn existing_cookie_is_reused() {
        let headers = headers_with(&["theme=dark; user_id=abc-123; lang=en"]);
        let identity = Identity::resolve(&headers);
        assert!(!identity.minted);
        assert_eq!(identity.user_id.as_str(), "abc-123");
    }

    #[test]
    fn cookie_found_in_any_header() {
        let headers = headers_with(&["theme=dark", "user_id=\"quoted\""]);
        assert_eq!(Identity::resolve(&headers).user_id.as_str(), "quoted");
    }

    #[test]
    fn empty_cookie_is_treated_as_absent() {
        let identity = Identity::resolve(&headers_with(&["user_id="]));
        assert!(identity.minted);
    }

    #[test]
    fn similar_cookie_names_do_not_match() {
        let identity = Identity::resolve(&headers_with(&["old_user_id=nope"]));
        assert!(identity.minted);
    }

    #[test]
    fn non_ascii_cookie_keeps_its_identity() {
        let mut headers = HeaderMap::new();
        headers.append(
            COOKIE,
            HeaderValue::from_bytes("user_id=ñandú-verde".as_bytes()).unwrap(),
        );

        let identity = Identity::resolve(&headers);
        assert!(!identity.minted);
        assert_eq!(identity.user_id.as_str(), "ñandú-verde");

        let (_, value) = identity.set_cookie().unwrap();
        assert_eq!(
            value.as_bytes(),
            "user_id=ñandú-verde; Max-Age=31536000; Path=/".as_bytes()
        );
    }

    #[test]
    fn non_utf8_cookie_is_treated_as_absent() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_bytes(b"user_id=\xff\xfe").unwrap());
        assert!(Identity::resolve(&headers).minted);
    }

    #[test]
    fn set_cookie_has_one_year_lifetime() {
        let identity = Identity {
            user_id: UserId::from(String::from("abc")),
            minted: false,
        };
        let (name, value) = identity.set_cookie().unwrap();
        assert_eq!(name, SET_COOKIE);
        assert_eq!(value, "user_id=abc; Max-Age=31536000; Path=/");
    }
}
