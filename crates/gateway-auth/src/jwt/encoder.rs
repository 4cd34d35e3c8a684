//! Session token creation with configurable signing and lifespan.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use gateway_core::config::AuthConfig;
use gateway_core::{AppError, AppResult};
use gateway_entity::{Account, RoleId};

use super::claims::Claims;

/// Creates signed session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    issuer: String,
    subject: String,
    audience: Vec<String>,
    /// Token lifespan in seconds.
    lifespan_seconds: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("issuer", &self.issuer)
            .field("lifespan_seconds", &self.lifespan_seconds)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.jwt_issuer.clone(),
            subject: config.jwt_subject.clone(),
            audience: config.jwt_audience.clone(),
            lifespan_seconds: config.token_lifespan_seconds as i64,
        }
    }

    /// Generates a signed token carrying the role and a permission snapshot.
    ///
    /// With `account = None` the token is anonymous (`user_id` 0); otherwise
    /// it is bound to the account's id.
    pub fn encode(
        &self,
        role: RoleId,
        permissions: &[String],
        account: Option<&Account>,
    ) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + chrono::Duration::seconds(self.lifespan_seconds);

        let claims = Claims {
            user_id: account.map_or(0, |a| a.id),
            role,
            permissions: permissions.iter().cloned().collect(),
            iss: self.issuer.clone(),
            sub: self.subject.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }
}
