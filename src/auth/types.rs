//! Auth configuration types

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// HTTP Basic authentication (Librato: account email + API token)
    Basic {
        /// Username
        username: String,
        /// Password
        password: String,
    },
}

impl AuthConfig {
    /// Basic auth from a Librato account email and API token
    pub fn librato(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Basic {
            username: email.into(),
            password: token.into(),
        }
    }

    /// Whether any credentials are configured
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod type_tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert!(config.is_none());
    }

    #[test]
    fn test_librato_credentials_map_to_basic() {
        let config = AuthConfig::librato("ops@example.com", "secret");
        match config {
            AuthConfig::Basic { username, password } => {
                assert_eq!(username, "ops@example.com");
                assert_eq!(password, "secret");
            }
            other => panic!("Expected Basic, got {other:?}"),
        }
    }
}
