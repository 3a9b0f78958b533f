use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, warn};

use crate::claims::{Claims, Principal};
use crate::error::AuthError;

/// Minimum HMAC key length in bytes (256 bits).
pub const MIN_SECRET_LEN: usize = 32;

const BEARER_PREFIX: &str = "Bearer ";

fn check_secret(secret: &[u8]) -> Result<(), AuthError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(AuthError::WeakKey(secret.len()));
    }
    Ok(())
}

/// HMAC algorithms the key is long enough to verify (digest size or more).
fn algorithms_for(secret: &[u8]) -> Vec<Algorithm> {
    [
        (Algorithm::HS256, 32),
        (Algorithm::HS384, 48),
        (Algorithm::HS512, 64),
    ]
    .into_iter()
    .filter(|&(_, min_len)| secret.len() >= min_len)
    .map(|(alg, _)| alg)
    .collect()
}

/// Verifies HMAC-signed bearer tokens.
pub struct JwtValidator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(secret: &[u8]) -> Result<Self, AuthError> {
        check_secret(secret)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = algorithms_for(secret);
        // `exp` and `nbf` are enforced when present but not required
        validation.required_spec_claims.clear();
        validation.validate_nbf = true;
        // No expected audience is configured, so `aud` is not checked
        validation.validate_aud = false;

        Ok(Self {
            key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Validate a full `Authorization` header value.
    pub fn validate_header(&self, header: &str) -> Result<Principal, AuthError> {
        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(AuthError::MalformedHeader)?;
        self.validate_token(token)
    }

    /// Validate a bare token and build the caller's principal.
    pub fn validate_token(&self, token: &str) -> Result<Principal, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            warn!(error = %e, "Rejected bearer token");
            AuthError::InvalidToken(e)
        })?;

        let principal = Principal::from_claims(data.claims);
        debug!(
            username = %principal.username,
            authorities = ?principal.authorities,
            "Authenticated request"
        );
        Ok(principal)
    }
}

/// Mints tokens accepted by [`JwtValidator`].
pub struct JwtIssuer {
    key: EncodingKey,
    ttl: Duration,
}

impl JwtIssuer {
    pub fn new(secret: &[u8], ttl_secs: u64) -> Result<Self, AuthError> {
        check_secret(secret)?;
        let ttl = i64::try_from(ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| AuthError::Signing(format!("ttl out of range: {ttl_secs}s")))?;

        Ok(Self {
            key: EncodingKey::from_secret(secret),
            ttl,
        })
    }

    pub fn issue(&self, email: &str, authorities: &[&str]) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            email: email.to_string(),
            authorities: Some(authorities.join(",")),
            iat: Some(now.timestamp()),
            exp: Some((now + self.ttl).timestamp()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }
}
