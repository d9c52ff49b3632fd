//! # Requester identity
//!
//! Identity is resolved outside the search engine and passed into every
//! query explicitly. The only resolver shipped here is a fixed stand-in; a
//! token or session based resolver plugs in behind the same trait.

use axum::http::HeaderMap;

/// Identity used when none is configured
pub const DEFAULT_IDENTITY: &str = "alice";

/// Resolves the identity making a request
pub trait IdentityResolver: Send + Sync {
    /// Returns `None` when no identity can be established
    fn resolve(&self, headers: &HeaderMap) -> Option<String>;
}

/// Every request is made by the same configured identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedIdentity {
    identity: String,
}

impl FixedIdentity {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl Default for FixedIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTITY)
    }
}

impl IdentityResolver for FixedIdentity {
    fn resolve(&self, _headers: &HeaderMap) -> Option<String> {
        if self.identity.trim().is_empty() {
            None
        } else {
            Some(self.identity.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identity() {
        let resolver = FixedIdentity::default();
        assert_eq!(
            resolver.resolve(&HeaderMap::new()).as_deref(),
            Some(DEFAULT_IDENTITY)
        );
    }

    #[test]
    fn test_headers_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer someone-else".parse().unwrap());
        let resolver = FixedIdentity::new("bob");
        assert_eq!(resolver.resolve(&headers).as_deref(), Some("bob"));
    }

    #[test]
    fn test_blank_identity_unresolved() {
        assert!(FixedIdentity::new("").resolve(&HeaderMap::new()).is_none());
        assert!(FixedIdentity::new("  ").resolve(&HeaderMap::new()).is_none());
    }
}
