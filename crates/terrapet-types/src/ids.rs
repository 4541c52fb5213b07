//! Opaque user identifier.
//!
//! Users are anonymous. The identifier is a bearer token carried in a
//! long-lived cookie, so any non-empty string a client presents is
//! accepted as-is. Freshly minted identifiers are UUID v4 strings.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Prefix for the generated display name of a new user.
const USERNAME_PREFIX: &str = "EcoWarrior_";

/// Number of identifier characters appended to [`USERNAME_PREFIX`].
const USERNAME_ID_CHARS: usize = 6;

/// Opaque identifier for a TerraPet user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UserId(String);

impl UserId {
    /// Mint a fresh identifier (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap a token presented by a client.
    ///
    /// Returns `None` for empty or whitespace-only tokens, which callers
    /// treat the same as an absent cookie.
    pub fn from_token(token: &str) -> Option<Self> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Borrow the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display name assigned to a user on first sight.
    ///
    /// `EcoWarrior_` followed by the first six characters of the id.
    pub fn default_username(&self) -> String {
        let mut name = String::from(USERNAME_PREFIX);
        name.extend(self.0.chars().take(USERNAME_ID_CHARS));
        name
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for UserId {
    /// Wrap an identifier read back from storage.
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_ids_are_uuids() {
        let id = UserId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, UserId::new());
    }

    #[test]
    fn blank_tokens_are_rejected() {
        assert!(UserId::from_token("").is_none());
        assert!(UserId::from_token("   ").is_none());
        assert_eq!(
            UserId::from_token(" abc ").map(|id| id.to_string()),
            Some(String::from("abc"))
        );
    }

    #[test]
    fn default_username_uses_six_chars() {
        let id = UserId::from_token("0123456789abcdef");
        assert_eq!(
            id.map(|id| id.default_username()),
            Some(String::from("EcoWarrior_012345"))
        );
    }

    #[test]
    fn default_username_handles_short_and_multibyte_ids() {
        let short = UserId::from_token("ab").map(|id| id.default_username());
        assert_eq!(short, Some(String::from("EcoWarrior_ab")));

        let wide = UserId::from_token("ñandú-verde").map(|id| id.default_username());
        assert_eq!(wide, Some(String::from("EcoWarrior_ñandú-")));
    }
}
