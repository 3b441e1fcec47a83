/**
 * Session Tokens
 *
 * This module issues and verifies the HS256 JSON Web Tokens that authenticate
 * API requests. Tokens are stateless: anyone holding the signing secret can
 * verify one without a database lookup, which also means there is no way to
 * revoke a token before it expires.
 */

use std::time::Duration;

use jsonwebtoken::{
    decode, encode, get_current_timestamp, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use serde::{Deserialize, Serialize};

use crate::backend::server::config::JwtSecret;

/// Lifetime of every access token
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID
    pub sub: String,
    /// Email at the time of issuance
    pub email: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// Account id carried in `sub`
    pub fn account_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// Signs and verifies access tokens with a shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer using the configured secret and the fixed 15 minute TTL
    pub fn new(secret: &JwtSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: ACCESS_TOKEN_TTL,
        }
    }

    /// Token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a token for an account, issued now
    ///
    /// # Arguments
    /// * `account_id` - Account ID, stored as the `sub` claim
    /// * `email` - Account email
    pub fn issue(
        &self,
        account_id: i64,
        email: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(account_id, email, get_current_timestamp())
    }

    /// Create a token as if it had been issued at `issued_at` (Unix seconds)
    pub fn issue_at(
        &self,
        account_id: i64,
        email: &str,
        issued_at: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: account_id.to_string(),
            email: email.to_string(),
            iat: issued_at,
            exp: issued_at + self.ttl.as_secs(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Verify signature and expiry, returning the decoded claims
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &"HS256")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
