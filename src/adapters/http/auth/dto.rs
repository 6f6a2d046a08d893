//! Query parameters of the auth callback.

use serde::Deserialize;

/// `GET /auth/callback?code=&next=` (older links use `redirect=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackQuery {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

impl CallbackQuery {
    /// `next` wins over `redirect`.
    pub fn target(&self) -> Option<String> {
        self.next.clone().or_else(|| self.redirect.clone())
    }
}
