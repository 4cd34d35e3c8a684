//! Closed error taxonomy for token verification.

use jsonwebtoken::errors::ErrorKind;

/// Why a presented token was rejected.
///
/// Every variant maps to an authentication failure; callers translate the
/// whole enum to a 401 and never branch on the text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The token string is not a well-formed JWT.
    #[error("malformed token")]
    Malformed,

    /// The signature does not match the configured secret.
    #[error("invalid token signature")]
    InvalidSignature,

    /// The token's `exp` is in the past (beyond leeway).
    #[error("token has expired")]
    Expired,

    /// The token's `nbf` is in the future (beyond leeway).
    #[error("token not yet valid")]
    NotYetValid,

    /// Any other verification failure (issuer, audience, claim shape).
    #[error("token verification failed: {0}")]
    Verification(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::ImmatureSignature => TokenError::NotYetValid,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidToken => TokenError::Malformed,
            _ => TokenError::Verification(err.to_string()),
        }
    }
}
