use crate::state::Accounts;
use axum::{
    extract::{Query, State},
    Json,
};
use signup_core::api::exists::{Req, Resp};

#[tracing::instrument(skip(accounts))]
pub async fn handler(State(accounts): State<Accounts>, Query(req): Query<Req>) -> Json<Resp> {
    Json(Resp {
        exists: accounts.exists(&req.email).await,
    })
}
