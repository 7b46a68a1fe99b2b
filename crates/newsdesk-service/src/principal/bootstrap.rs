//! Seeding the default principal at startup.

use tracing::{debug, info};

use newsdesk_auth::PasswordHasher;
use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_database::store::PrincipalStore;
use newsdesk_entity::principal::CreatePrincipal;

/// Create the principal `username` with `password` unless one with that
/// username already exists. An existing principal's password is left
/// untouched. Returns whether a principal was created.
pub async fn ensure_default_principal(
    principals: &dyn PrincipalStore,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> AppResult<bool> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::configuration(
            "admin.username and admin.password must not be empty",
        ));
    }

    if principals.find_by_username(username).await?.is_some() {
        debug!(username, "Default principal already exists");
        return Ok(false);
    }

    let created = principals
        .insert_if_absent(&CreatePrincipal {
            username: username.to_string(),
            password_hash: hasher.hash_password(password)?,
        })
        .await?;

    match created {
        Some(principal) => {
            info!(username, principal_id = %principal.id, "Default principal created");
            Ok(true)
        }
        None => Ok(false),
    }
}
