use std::fmt;

/// Process-wide credentials, loaded once at startup and never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_token: String,
    account_id: Option<String>,
}

impl Credentials {
    pub fn new(access_token: impl Into<String>, account_id: Option<String>) -> Self {
        Self {
            access_token: access_token.into(),
            account_id: account_id.filter(|id| !id.trim().is_empty()),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}
