#![expect(clippy::missing_docs_in_private_items)]

use crate::state::Accounts;
use axum::{
    routing::{get, post},
    Router,
};
use signup_core::api::{create as create_api, exists as exists_api};

pub mod create;
pub mod exists;
pub mod health;

/// All the routes this server answers.
pub fn router(accounts: Accounts) -> Router {
    Router::new()
        .route("/health", get(health::handler))
        .route(exists_api::PATH, get(exists::handler))
        .route(create_api::PATH, post(create::handler))
        .with_state(accounts)
}
