//! Authentication primitives: bearer tokens and resolved identities.
//!
//! Keep header parsing outside the listing service by exposing constructors
//! that validate raw `Authorization` values before a handler talks to a port.

use std::fmt;

use zeroize::Zeroizing;

/// Message returned to callers whenever the authentication gate rejects a
/// request, whatever the underlying reason.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized - Please sign in";

/// Reasons an `Authorization` header does not yield a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BearerTokenError {
    /// The header was absent.
    Missing,
    /// The header used a scheme other than `Bearer`.
    UnsupportedScheme,
    /// The token part was blank.
    EmptyToken,
}

impl fmt::Display for BearerTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "authorization header is missing"),
            Self::UnsupportedScheme => write!(f, "authorization scheme must be Bearer"),
            Self::EmptyToken => write!(f, "bearer token must not be empty"),
        }
    }
}

impl std::error::Error for BearerTokenError {}

/// Caller credential extracted from an `Authorization: Bearer` header.
///
/// ## Invariants
/// - The token is non-empty and has no surrounding whitespace.
/// - The secret is zeroed on drop and never printed by `Debug`.
///
/// # Examples
/// ```
/// use experiences_backend::domain::BearerToken;
///
/// let token = BearerToken::from_authorization_header(Some("Bearer abc.def")).unwrap();
/// assert_eq!(token.as_str(), "abc.def");
/// assert_eq!(token.authorization_value(), "Bearer abc.def");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    const SCHEME: &'static str = "bearer";

    /// Parse the raw value of an `Authorization` header.
    ///
    /// The scheme is matched case-insensitively.
    pub fn from_authorization_header(header: Option<&str>) -> Result<Self, BearerTokenError> {
        let raw = header.map(str::trim).ok_or(BearerTokenError::Missing)?;
        if raw.is_empty() {
            return Err(BearerTokenError::Missing);
        }

        let (scheme, token) = match raw.split_once(char::is_whitespace) {
            Some((scheme, token)) => (scheme, token.trim()),
            None => (raw, ""),
        };
        if !scheme.eq_ignore_ascii_case(Self::SCHEME) {
            return Err(BearerTokenError::UnsupportedScheme);
        }
        Self::new(token)
    }

    /// Wrap an already extracted token.
    pub fn new(token: &str) -> Result<Self, BearerTokenError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(BearerTokenError::EmptyToken);
        }
        Ok(Self(Zeroizing::new(token.to_owned())))
    }

    /// Raw token text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Header value suitable for forwarding the credential verbatim.
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.as_str())
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Principal resolved from a bearer token.
///
/// Only its existence gates the listing; the fields are kept for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    id: String,
    email: Option<String>,
}

impl UserIdentity {
    /// Construct an identity from provider data.
    pub fn new(id: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: id.into(),
            email,
        }
    }

    /// Provider-issued user identifier.
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// E-mail address reported by the provider, if any.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, BearerTokenError::Missing)]
    #[case(Some(""), BearerTokenError::Missing)]
    #[case(Some("   "), BearerTokenError::Missing)]
    #[case(Some("Basic dXNlcjpwdw=="), BearerTokenError::UnsupportedScheme)]
    #[case(Some("Bearer"), BearerTokenError::EmptyToken)]
    #[case(Some("Bearer    "), BearerTokenError::EmptyToken)]
    #[case(Some("abc.def"), BearerTokenError::UnsupportedScheme)]
    fn invalid_headers(#[case] header: Option<&str>, #[case] expected: BearerTokenError) {
        let err = BearerToken::from_authorization_header(header)
            .expect_err("invalid headers must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("Bearer abc.def", "abc.def")]
    #[case("bearer abc.def", "abc.def")]
    #[case("BEARER   abc.def  ", "abc.def")]
    #[case("  Bearer abc.def", "abc.def")]
    fn valid_headers(#[case] header: &str, #[case] expected: &str) {
        let token = BearerToken::from_authorization_header(Some(header))
            .expect("valid headers should parse");
        assert_eq!(token.as_str(), expected);
        assert_eq!(token.authorization_value(), format!("Bearer {expected}"));
    }

    #[rstest]
    fn debug_output_is_redacted() {
        let token = BearerToken::new("super-secret").expect("token");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("super-secret"));
    }

    #[rstest]
    fn identity_exposes_provider_fields() {
        let identity = UserIdentity::new("user-1", Some("ada@example.com".to_owned()));
        assert_eq!(identity.id(), "user-1");
        assert_eq!(identity.email(), Some("ada@example.com"));
    }
}
