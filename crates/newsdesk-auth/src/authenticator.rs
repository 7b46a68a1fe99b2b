//! Username/password login.

use std::sync::Arc;

use tracing::{info, warn};

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_database::store::PrincipalStore;

use crate::jwt::{AccessToken, JwtEncoder};
use crate::password::PasswordHasher;

const LOGIN_FAILED: &str = "Incorrect username or password";

/// Exchanges a username and password for an access token.
#[derive(Debug, Clone)]
pub struct Authenticator {
    principals: Arc<dyn PrincipalStore>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
}

impl Authenticator {
    /// Create an authenticator.
    pub fn new(
        principals: Arc<dyn PrincipalStore>,
        hasher: PasswordHasher,
        encoder: JwtEncoder,
    ) -> Self {
        Self {
            principals,
            hasher,
            encoder,
        }
    }

    /// Verify the password and issue a token. Unknown usernames and wrong
    /// passwords fail with the same message.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AccessToken> {
        let Some(principal) = self.principals.find_by_username(username).await? else {
            warn!(username, "Login failed: unknown username");
            return Err(AppError::unauthenticated(LOGIN_FAILED));
        };

        let hasher = self.hasher.clone();
        let candidate = password.to_string();
        let stored = principal.password_hash.clone();
        let matches =
            tokio::task::spawn_blocking(move || hasher.verify_password(&candidate, &stored))
                .await
                .map_err(|e| AppError::internal(format!("Password check task failed: {e}")))??;

        if !matches {
            warn!(username, "Login failed: wrong password");
            return Err(AppError::unauthenticated(LOGIN_FAILED));
        }

        let token = self.encoder.issue(&principal)?;
        info!(username, principal_id = %principal.id, "Login succeeded");
        Ok(token)
    }
}
