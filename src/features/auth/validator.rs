use super::jwks::JwksClient;
use super::model::{roles_from_claims, AuthenticatedUser};
use crate::core::error::AppError;
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

pub struct JwtValidator {
    jwks_client: Arc<JwksClient>,
    issuer: String,
    audience: String,
    leeway: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct Claims {
    sub: String,
    // iss/aud/exp are checked by jsonwebtoken
    #[serde(rename = "aud")]
    _aud: AudienceClaim,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    roles: Vec<String>,
}

/// Audience can be either a single string or an array of strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum AudienceClaim {
    Single(String),
    Multiple(Vec<String>),
}

impl JwtValidator {
    pub fn new(
        jwks_client: Arc<JwksClient>,
        issuer: String,
        audience: String,
        leeway: Duration,
    ) -> Self {
        Self {
            jwks_client,
            issuer,
            audience,
            leeway: leeway.as_secs(),
        }
    }

    pub async fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(|e| AppError::Auth(e.to_string()))?;

        if header.alg != Algorithm::RS256 {
            return Err(AppError::Auth(format!(
                "Unsupported algorithm: {:?}. Only RS256 is allowed",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| AppError::Auth("Missing kid in token header".to_string()))?;

        let decoding_key = self.jwks_client.get_key(&kid).await.map_err(|e| {
            tracing::warn!("JWKS lookup failed for kid {}: {}", kid, e);
            AppError::Auth(e.to_string())
        })?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;
        validation.validate_nbf = true;

        let claims = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?
            .claims;

        Ok(AuthenticatedUser {
            uid: claims.sub,
            email: claims.email,
            phone_number: claims.phone_number,
            roles: roles_from_claims(&claims.roles),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> JwtValidator {
        JwtValidator::new(
            Arc::new(JwksClient::new(
                "http://127.0.0.1:1/jwks",
                Duration::from_secs(60),
            )),
            "https://id.example.com".to_string(),
            "nagrik-seva".to_string(),
            Duration::from_secs(30),
        )
    }

    #[tokio::test]
    async fn test_malformed_token_is_rejected() {
        let result = validator().validate_token("not-a-jwt").await;
        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_hs256_token_is_rejected_before_key_lookup() {
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::new(Algorithm::HS256),
            &serde_json::json!({ "sub": "u1", "aud": "nagrik-seva" }),
            &jsonwebtoken::EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        match validator().validate_token(&token).await {
            Err(AppError::Auth(msg)) => assert!(msg.contains("Only RS256")),
            other => panic!("unexpected result: {:?}", other.map(|u| u.uid)),
        }
    }
}
