use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{self, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::types::user::Claim;

#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct TokenClaims {
    pub(crate) user: Claim,
    pub(crate) iat: i64,
    pub(crate) exp: i64,
}

/// Rejection from [`TokenCodec::verify`]. Expired, forged and malformed
/// tokens are deliberately indistinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid token")]
pub(crate) struct AuthFailure;

#[derive(Clone)]
pub(crate) struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &Algorithm::HS256)
            .finish()
    }
}

impl TokenCodec {
    pub(crate) fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is checked against the caller's clock in `verify_at`
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub(crate) fn issue(&self, claim: &Claim, ttl: Duration) -> Result<String, Error> {
        self.issue_at(claim, ttl, Utc::now())
    }

    pub(crate) fn issue_at(
        &self,
        claim: &Claim,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, Error> {
        let expires = now.checked_add_signed(ttl).ok_or(Error::Internal)?;

        let claims = TokenClaims {
            user: claim.clone(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    pub(crate) fn verify(&self, token: &str) -> Result<Claim, AuthFailure> {
        self.verify_at(token, Utc::now())
    }

    pub(crate) fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claim, AuthFailure> {
        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AuthFailure)?;

        if now.timestamp() >= data.claims.exp {
            return Err(AuthFailure);
        }

        Ok(data.claims.user)
    }
}
