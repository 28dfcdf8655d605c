//! API key handling
//!
//! The stored key is kept in a [`SecretString`] so it never appears in
//! `Debug` output or logs.

use rand::distributions::Alphanumeric;
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;

/// Length of keys produced by [`generate_api_key`].
pub const GENERATED_KEY_LENGTH: usize = 32;

/// The shared API key. An empty key means the API is public.
pub struct ApiKey(SecretString);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::from(key.into()))
    }

    /// No key configured: every caller is authorized.
    pub fn is_public(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    /// Exact, case-sensitive comparison with a caller-supplied key.
    ///
    /// Whitespace is significant; nothing is trimmed.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.expose_secret() == candidate
    }

    /// Raw key value, for the operator tooling that displays it.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Default for ApiKey {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl PartialEq for ApiKey {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for ApiKey {}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_public() {
            f.write_str("ApiKey(<none>)")
        } else {
            f.write_str("ApiKey([REDACTED])")
        }
    }
}

/// Generate a new random key of 32 ASCII letters and digits.
pub fn generate_api_key() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_KEY_LENGTH)
        .map(char::from)
        .collect()
}
