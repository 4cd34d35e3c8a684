//! Session token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use gateway_core::config::AuthConfig;

use super::claims::Claims;
use super::error::TokenError;

/// Verifies session tokens and answers permission queries.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration. Algorithm pinned to HS256.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&config.jwt_audience);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Checks signature, expiration, not-before, issuer, and audience.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }

    /// Whether the token is valid and its snapshot carries the permission.
    ///
    /// Any verification failure answers `false`; this never errors.
    pub fn has_permission(&self, token: &str, permission: &str) -> bool {
        match self.decode(token) {
            Ok(claims) => claims.has_permission(permission),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use gateway_entity::RoleId;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-key-for-token-tests".to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let token = encoder
            .encode(
                RoleId::SessionUser,
                &["role_read".to_string(), "user_read".to_string()],
                None,
            )
            .unwrap();

        let claims = decoder.decode(&token).unwrap();
        assert_eq!(claims.user_id, 0);
        assert_eq!(claims.role, RoleId::SessionUser);
        assert!(claims.has_permission("role_read"));
        assert!(claims.has_permission("user_read"));
        assert!(!claims.has_permission("role_write"));
    }

    fn token_with_lifetime(
        config: &AuthConfig,
        permissions: &[&str],
        nbf_offset: i64,
        exp_offset: i64,
    ) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            user_id: 0,
            role: RoleId::SessionUser,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            iss: config.jwt_issuer.clone(),
            sub: config.jwt_subject.clone(),
            aud: config.jwt_audience.clone(),
            iat: now + nbf_offset,
            nbf: now + nbf_offset,
            exp: now + exp_offset,
            jti: uuid::Uuid::new_v4(),
        };
        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap()
    }

    fn expired_token(config: &AuthConfig, permissions: &[&str]) -> String {
        token_with_lifetime(config, permissions, -7200, -3600)
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let token = expired_token(&config, &[]);
        assert_eq!(decoder.decode(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_not_yet_valid_token_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        // Valid signature, but nbf well past the 5-second leeway.
        let token = token_with_lifetime(&config, &[], 3600, 7200);
        assert_eq!(decoder.decode(&token), Err(TokenError::NotYetValid));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);

        let mut other = test_config();
        other.jwt_secret = "a-completely-different-secret".to_string();
        let decoder = JwtDecoder::new(&other);

        let token = encoder.encode(RoleId::SessionUser, &[], None).unwrap();
        assert_eq!(decoder.decode(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let decoder = JwtDecoder::new(&test_config());
        assert_eq!(
            decoder.decode("not-a-token"),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_has_permission_fails_closed() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        // Expired token carries the permission but must not grant it.
        let token = expired_token(&config, &["role_read"]);
        assert!(!decoder.has_permission(&token, "role_read"));
        assert!(!decoder.has_permission("garbage", "role_read"));
    }
}
