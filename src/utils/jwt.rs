use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    config::JwtConfig,
    error::{AppError, Result},
};

/// Tokens expire a fixed 30 minutes after issuance.
pub const TOKEN_TTL_MINUTES: i64 = 30;

/// Every issued token carries this role.
pub const ADMIN_ROLE: &str = "Admin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub iss: String,
    pub aud: String,
    pub exp: usize,
}

pub fn generate_token(config: &JwtConfig, username: &str) -> Result<String> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::minutes(TOKEN_TTL_MINUTES))
        .ok_or_else(|| AppError::Internal("Failed to calculate expiration".to_string()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: username.to_string(),
        role: ADMIN_ROLE.to_string(),
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

pub fn verify_token(config: &JwtConfig, token: &str) -> Result<Claims> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "unit-test-secret".to_string(),
            issuer: "product-service".to_string(),
            audience: "product-service-api".to_string(),
        }
    }

    #[test]
    fn issued_token_round_trips_with_expected_claims() {
        let config = test_config();
        let token = generate_token(&config, "Paras").expect("token");

        let claims = verify_token(&config, &token).expect("claims");
        assert_eq!(claims.sub, "Paras");
        assert_eq!(claims.role, ADMIN_ROLE);
        assert_eq!(claims.iss, config.issuer);
        assert_eq!(claims.aud, config.audience);
    }

    #[test]
    fn expiry_is_thirty_minutes_from_issuance() {
        let config = test_config();
        let before = chrono::Utc::now().timestamp() as usize;
        let token = generate_token(&config, "Paras").expect("token");
        let after = chrono::Utc::now().timestamp() as usize;

        let claims = verify_token(&config, &token).expect("claims");
        let ttl = (TOKEN_TTL_MINUTES * 60) as usize;
        assert!(claims.exp >= before + ttl);
        assert!(claims.exp <= after + ttl);
    }

    #[test]
    fn token_signed_with_another_key_is_rejected() {
        let config = test_config();
        let other = JwtConfig {
            secret: "a-different-secret".to_string(),
            ..config.clone()
        };
        let token = generate_token(&other, "Paras").expect("token");

        assert!(verify_token(&config, &token).is_err());
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let config = test_config();
        let other = JwtConfig {
            issuer: "someone-else".to_string(),
            ..config.clone()
        };
        let token = generate_token(&other, "Paras").expect("token");

        assert!(verify_token(&config, &token).is_err());
    }

    #[test]
    fn wrong_audience_is_rejected() {
        let config = test_config();
        let other = JwtConfig {
            audience: "another-api".to_string(),
            ..config.clone()
        };
        let token = generate_token(&other, "Paras").expect("token");

        assert!(verify_token(&config, &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = test_config();
        // Two hours in the past, well beyond the default validation leeway.
        let claims = Claims {
            sub: "Paras".to_string(),
            role: ADMIN_ROLE.to_string(),
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
            exp: (chrono::Utc::now().timestamp() - 7200) as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("token");

        assert!(verify_token(&config, &token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(verify_token(&test_config(), "not-a-jwt").is_err());
    }
}
