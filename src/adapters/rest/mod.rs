//! Adapters for the hosted backend: the Postgres-over-REST table API and the
//! auth API. All of them share one pooled [`RestClient`].

mod auth;
mod catalog;
mod client;
mod profiles;
mod trial_requests;

pub use auth::RestAuthClient;
pub use catalog::RestCatalogRepository;
pub use client::{Order, RestClient, TableQuery};
pub use profiles::RestProfileReader;
pub use trial_requests::RestTrialRequestRepository;
