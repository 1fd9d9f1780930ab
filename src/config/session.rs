use secrecy::SecretString;
use serde::Deserialize;

/// Verification settings for session tokens issued by the external session provider.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub jwt_secret: SecretString,
    pub audience: String,
}

impl SessionSettings {
    pub fn new(jwt_secret: String, audience: String) -> Self {
        Self {
            jwt_secret: SecretString::new(jwt_secret.into_boxed_str()),
            audience,
        }
    }
}
