//! Explicit session state for the logistics API client.
//!
//! Built once at start-up from settings and handed to whatever talks to the
//! API; nothing reads credentials from ambient global storage.

use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

pub const DEFAULT_API_BASE_URL: &str = "https://logistics-management-1-0eul.onrender.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub api_base_url: String,
    pub token: Option<String>,
    pub role: Option<UserRole>,
    pub email: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token: None,
            role: None,
            email: None,
        }
    }
}

impl Session {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// A blank token counts as logged out.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.trim().is_empty())
    }

    /// `Bearer <token>` when logged in.
    pub fn authorization_header(&self) -> Option<String> {
        if !self.is_authenticated() {
            return None;
        }
        self.token.as_deref().map(|token| format!("Bearer {}", token.trim()))
    }

    /// Joins an API path onto the base URL with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Drops credentials, keeping the API location.
    pub fn logout(&mut self) {
        self.token = None;
        self.role = None;
        self.email = None;
    }
}
