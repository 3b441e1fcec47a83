/**
 * Authentication Service
 *
 * Sign-up and sign-in, independent of HTTP. The service is built once at
 * startup from its three collaborators and shared by all requests; it holds
 * no mutable state of its own.
 *
 * # Error Classification
 *
 * Only three outcomes are recognised and turned into credential errors:
 * a unique-index rejection on sign-up, a missing account on sign-in, and a
 * password that does not verify. Everything else (store failures, malformed
 * stored hashes, signing failures) is passed up unchanged.
 */

use std::sync::Arc;

use thiserror::Error;

use crate::backend::auth::hasher::{HashError, HashFormatError, PasswordHasher};
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::AccountStore;
use crate::backend::error::StoreError;
use crate::shared::{AuthResponse, UserResponse};

/// Authentication failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// Sign-up with an email that is already registered
    #[error("Credentials taken")]
    CredentialsTaken,

    /// Sign-in with an unknown email or a wrong password
    #[error("Credentials incorrect")]
    CredentialsIncorrect,

    #[error(transparent)]
    HashFormat(#[from] HashFormatError),

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error("account store failure: {0}")]
    Store(StoreError),

    #[error("failed to sign access token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Sign-up / sign-in orchestration
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn AccountStore>,
    hasher: PasswordHasher,
    tokens: Arc<TokenIssuer>,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn AccountStore>,
        hasher: PasswordHasher,
        tokens: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Register a new account and return an access token for it
    ///
    /// Performs exactly one account write. Uniqueness is left to the store:
    /// two concurrent sign-ups for the same email race on the unique index and
    /// the loser gets `CredentialsTaken`.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let hash = self.hash_password(password).await?;

        let account = match self.store.create_account(email, &hash).await {
            Ok(account) => account,
            Err(StoreError::UniqueViolation) => {
                tracing::warn!(email, "Sign-up rejected: email already registered");
                return Err(AuthError::CredentialsTaken);
            }
            Err(e) => return Err(AuthError::Store(e)),
        };

        tracing::info!(account_id = account.id, email = %account.email, "Account created");

        self.sign_token(&UserResponse::from(account))
    }

    /// Check credentials and return an access token
    ///
    /// Read-only. An unknown email and a wrong password produce the same
    /// `CredentialsIncorrect` error.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        let account = self
            .store
            .find_by_email(email)
            .await
            .map_err(AuthError::Store)?
            .ok_or_else(|| {
                tracing::warn!(email, "Sign-in rejected: no such account");
                AuthError::CredentialsIncorrect
            })?;

        let hash = account.hash.clone();
        if !self.verify_password(hash, password).await? {
            tracing::warn!(email, "Sign-in rejected: password mismatch");
            return Err(AuthError::CredentialsIncorrect);
        }

        let user = UserResponse::from(account);
        tracing::info!(account_id = user.id, email = %user.email, "Signed in");

        self.sign_token(&user)
    }

    fn sign_token(&self, user: &UserResponse) -> Result<AuthResponse, AuthError> {
        let access_token = self.tokens.issue(user.id, &user.email)?;
        Ok(AuthResponse { access_token })
    }

    async fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let hasher = self.hasher.clone();
        let password = password.to_owned();

        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;
        Ok(hash)
    }

    async fn verify_password(&self, hash: String, password: &str) -> Result<bool, AuthError> {
        let hasher = self.hasher.clone();
        let password = password.to_owned();

        let matches = tokio::task::spawn_blocking(move || hasher.verify(&hash, &password)).await??;
        Ok(matches)
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("hasher", &self.hasher)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::Account;
    use crate::backend::server::config::JwtSecret;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory store that can be told to fail
    #[derive(Default)]
    struct ScriptedStore {
        accounts: Mutex<Vec<Account>>,
        writes: AtomicUsize,
        fail_writes: bool,
    }

    #[async_trait]
    impl AccountStore for ScriptedStore {
        async fn create_account(&self, email: &str, hash: &str) -> Result<Account, StoreError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes {
                return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
            }

            let mut accounts = self.accounts.lock().unwrap();
            if accounts.iter().any(|a| a.email == email) {
                return Err(StoreError::UniqueViolation);
            }

            let now = Utc::now();
            let account = Account {
                id: accounts.len() as i64 + 1,
                email: email.to_string(),
                hash: hash.to_string(),
                first_name: None,
                last_name: None,
                created_at: now,
                updated_at: now,
            };
            accounts.push(account.clone());
            Ok(account)
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
            let accounts = self.accounts.lock().unwrap();
            Ok(accounts.iter().find(|a| a.email == email).cloned())
        }
    }

    fn tokens() -> Arc<TokenIssuer> {
        Arc::new(TokenIssuer::new(
            &JwtSecret::new("service-test-secret-0123456789abcdef").unwrap(),
        ))
    }

    fn service_with(store: Arc<ScriptedStore>) -> AuthService {
        AuthService::new(store, PasswordHasher::new(), tokens())
    }

    #[tokio::test]
    async fn test_sign_up_then_sign_in() {
        let store = Arc::new(ScriptedStore::default());
        let service = service_with(store.clone());

        let signed_up = service.sign_up("asd@dada.com", "asd123").await.unwrap();
        let signed_in = service.sign_in("asd@dada.com", "asd123").await.unwrap();

        let account_id = store.accounts.lock().unwrap()[0].id;
        for response in [signed_up, signed_in] {
            let claims = tokens().verify(&response.access_token).unwrap();
            assert_eq!(claims.account_id(), Some(account_id));
            assert_eq!(claims.email, "asd@dada.com");
        }
    }

    #[tokio::test]
    async fn test_sign_up_stores_hash_not_password() {
        let store = Arc::new(ScriptedStore::default());
        let service = service_with(store.clone());

        service.sign_up("asd@dada.com", "asd123").await.unwrap();

        let stored = store.accounts.lock().unwrap()[0].hash.clone();
        assert_ne!(stored, "asd123");
        assert!(stored.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_duplicate_sign_up_is_taken_regardless_of_password() {
        let service = service_with(Arc::new(ScriptedStore::default()));

        service.sign_up("asd@dada.com", "asd123").await.unwrap();
        let same = service.sign_up("asd@dada.com", "asd123").await.unwrap_err();
        let other = service.sign_up("asd@dada.com", "different").await.unwrap_err();

        assert!(matches!(same, AuthError::CredentialsTaken));
        assert!(matches!(other, AuthError::CredentialsTaken));
        assert_eq!(same.to_string(), "Credentials taken");
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let service = service_with(Arc::new(ScriptedStore::default()));
        service.sign_up("asd@dada.com", "asd123").await.unwrap();

        let unknown = service.sign_in("nobody@dada.com", "asd123").await.unwrap_err();
        let wrong = service.sign_in("asd@dada.com", "wrong").await.unwrap_err();

        assert!(matches!(unknown, AuthError::CredentialsIncorrect));
        assert!(matches!(wrong, AuthError::CredentialsIncorrect));
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert_eq!(wrong.to_string(), "Credentials incorrect");
    }

    #[tokio::test]
    async fn test_write_counts() {
        let store = Arc::new(ScriptedStore::default());
        let service = service_with(store.clone());

        service.sign_up("asd@dada.com", "asd123").await.unwrap();
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);

        service.sign_in("asd@dada.com", "asd123").await.unwrap();
        let _ = service.sign_in("asd@dada.com", "wrong").await;
        assert_eq!(store.writes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_store_failure_is_not_a_credentials_error() {
        let store = Arc::new(ScriptedStore {
            fail_writes: true,
            ..Default::default()
        });
        let service = service_with(store);

        let err = service.sign_up("asd@dada.com", "asd123").await.unwrap_err();
        assert!(matches!(err, AuthError::Store(StoreError::Database(_))));
    }

    #[tokio::test]
    async fn test_corrupted_hash_is_hash_format_error() {
        let store = Arc::new(ScriptedStore::default());
        store.create_account("asd@dada.com", "corrupted").await.unwrap();
        let service = service_with(store);

        let err = service.sign_in("asd@dada.com", "asd123").await.unwrap_err();
        assert!(matches!(err, AuthError::HashFormat(_)));
    }
}
