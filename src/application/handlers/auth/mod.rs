//! Sign-in handlers.

mod complete_sign_in;

pub use complete_sign_in::{
    safe_redirect_path, CompleteSignInCommand, CompleteSignInHandler, SignInOutcome,
};
