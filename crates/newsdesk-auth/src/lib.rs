//! # newsdesk-auth
//!
//! Identity for NewsDesk. Turns a username and password into a signed
//! access token, and a bearer token back into a stored [`Principal`].
//!
//! ## Modules
//!
//! - `password`: Argon2id hashing and verification
//! - `jwt`: access token claims, signing, and validation
//! - `credentials`: what a caller presented
//! - `resolver`: credentials to principal
//! - `authenticator`: username/password login
//!
//! [`Principal`]: newsdesk_entity::principal::Principal

pub mod authenticator;
pub mod credentials;
pub mod jwt;
pub mod password;
pub mod resolver;

pub use authenticator::Authenticator;
pub use credentials::Credentials;
pub use jwt::{AccessToken, Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use resolver::{JwtPrincipalResolver, PrincipalResolver};
