//! CompleteSignInHandler - finishes the OAuth / magic-link round trip.
//!
//! The browser lands on the callback with an authorization `code` and an
//! optional `next` path. A successful exchange yields a session and the
//! (sanitized) `next` path; anything else sends the user to the error page.

use std::sync::Arc;

use crate::domain::constants::DEFAULT_REDIRECT_PATH;
use crate::domain::foundation::AuthSession;
use crate::ports::AuthCodeExchanger;

#[derive(Debug, Clone, Default)]
pub struct CompleteSignInCommand {
    pub code: Option<String>,
    /// Path to land on after sign-in.
    pub next: Option<String>,
}

/// Where to send the browser, and the session to set when sign-in worked.
#[derive(Debug)]
pub enum SignInOutcome {
    SignedIn { session: AuthSession, redirect_path: String },
    Failed { redirect_path: String },
}

impl SignInOutcome {
    pub fn redirect_path(&self) -> &str {
        match self {
            SignInOutcome::SignedIn { redirect_path, .. } => redirect_path,
            SignInOutcome::Failed { redirect_path } => redirect_path,
        }
    }
}

/// Returns `next` if it is a same-origin absolute path, otherwise `/`.
///
/// `//host` and `/\host` are protocol-relative in browsers and rejected.
pub fn safe_redirect_path(next: Option<&str>) -> String {
    match next {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && !path.chars().any(char::is_control) =>
        {
            path.to_string()
        }
        _ => DEFAULT_REDIRECT_PATH.to_string(),
    }
}

pub struct CompleteSignInHandler {
    exchanger: Arc<dyn AuthCodeExchanger>,
    error_path: String,
}

impl CompleteSignInHandler {
    pub fn new(exchanger: Arc<dyn AuthCodeExchanger>, error_path: impl Into<String>) -> Self {
        Self {
            exchanger,
            error_path: error_path.into(),
        }
    }

    /// Never fails: every problem becomes a redirect to the error page.
    pub async fn handle(&self, cmd: CompleteSignInCommand) -> SignInOutcome {
        let Some(code) = cmd.code.filter(|c| !c.is_empty()) else {
            tracing::warn!("Auth callback without code");
            return self.failed();
        };

        match self.exchanger.exchange_code(&code).await {
            Ok(session) => {
                tracing::info!(user_id = %session.user.id, "User signed in");
                SignInOutcome::SignedIn {
                    session,
                    redirect_path: safe_redirect_path(cmd.next.as_deref()),
                }
            }
            Err(e) => {
                tracing::warn!("Auth code exchange failed: {}", e);
                self.failed()
            }
        }
    }

    fn failed(&self) -> SignInOutcome {
        SignInOutcome::Failed {
            redirect_path: self.error_path.clone(),
        }
    }
}
