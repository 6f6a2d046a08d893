//! HTTP adapter for the OAuth / magic-link callback.

mod dto;
mod handlers;
mod routes;

pub use dto::CallbackQuery;
pub use handlers::AuthCallbackHandlers;
pub use routes::auth_routes;
