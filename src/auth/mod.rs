//! Authentication module
//!
//! Librato authenticates every request with HTTP Basic auth, using the
//! account email as the username and an API token as the password.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
