use accounts_core::{AccountId, BearerToken, TokenError, TokenService};
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::config::{JwtSetting, TOKEN_TIME_TO_LIVE_SECONDS};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 tokens signed with the process-wide secret, valid for one hour.
#[derive(Clone)]
pub struct JwtTokenService {
    secret: Secret<String>,
}

impl JwtTokenService {
    pub fn new(setting: &JwtSetting) -> Self {
        Self {
            secret: setting.secret.clone(),
        }
    }

    fn secret(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }

    /// Issue a token as if it were `issued_at`.
    pub fn issue_at(
        &self,
        account_id: &AccountId,
        issued_at: DateTime<Utc>,
    ) -> Result<BearerToken, TokenError> {
        let claims = build_claims(account_id, issued_at, TOKEN_TIME_TO_LIVE_SECONDS)?;
        create_token(&claims, self.secret()).map(BearerToken::new)
    }

    /// Check a token against the clock reading `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<AccountId, TokenError> {
        let claims = decode_claims(token, self.secret())?;

        // valid strictly before exp
        if now.timestamp() >= claims.exp {
            return Err(TokenError::InvalidToken);
        }

        AccountId::parse(&claims.sub).map_err(|_| TokenError::InvalidToken)
    }
}

impl TokenService for JwtTokenService {
    #[tracing::instrument(name = "Issuing bearer token", skip_all)]
    fn issue(&self, account_id: &AccountId) -> Result<BearerToken, TokenError> {
        self.issue_at(account_id, Utc::now())
    }

    #[tracing::instrument(name = "Verifying bearer token", skip_all)]
    fn verify(&self, token: &str) -> Result<AccountId, TokenError> {
        self.verify_at(token, Utc::now())
    }
}

fn build_claims(
    account_id: &AccountId,
    issued_at: DateTime<Utc>,
    token_ttl_seconds: i64,
) -> Result<Claims, TokenError> {
    let delta = chrono::Duration::try_seconds(token_ttl_seconds).ok_or(
        TokenError::UnexpectedError("Failed to create auth token duration".to_string()),
    )?;

    let exp = issued_at
        .checked_add_signed(delta)
        .ok_or(TokenError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    Ok(Claims {
        sub: account_id.to_string(),
        iat: issued_at.timestamp(),
        exp,
    })
}

// Create JWT by encoding claims using the signing secret
fn create_token(claims: &Claims, secret: &[u8]) -> Result<String, TokenError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenError::UnexpectedError(e.to_string()))
}

// Signature and shape only; expiry is compared by the caller without leeway
fn decode_claims(token: &str, secret: &[u8]) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["sub", "iat", "exp"]);

    decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "rejected bearer token");
            TokenError::InvalidToken
        })
}
