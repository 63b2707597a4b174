use std::fmt;

const MASK: &str = "********";

/// A registry login resolved from a credential source.
///
/// `username` and `password` are never empty. The password may itself
/// contain colons.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub registry: String,
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(
        registry: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            registry: registry.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Splits a decoded `username:password` payload on its first colon.
    ///
    /// Returns `None` when there is no colon or either half is empty.
    pub fn from_payload(registry: impl Into<String>, payload: &str) -> Option<Self> {
        let (username, password) = payload.split_once(':')?;
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self::new(registry, username, password))
    }

    pub fn masked_password(&self) -> &'static str {
        MASK
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("registry", &self.registry)
            .field("username", &self.username)
            .field("password", &MASK)
            .finish()
    }
}
