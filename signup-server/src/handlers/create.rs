use crate::bail;
use crate::error::Error;
use crate::state::Accounts;
use axum::{extract::State, Json};
use signup_core::api::create::{Req, Resp};

/// Shown when someone tries to sign up with an email that's already in use.
pub static ALREADY_REGISTERED: &str = "An account with this email already exists";

#[tracing::instrument(skip(accounts))]
pub async fn handler(
    State(accounts): State<Accounts>,
    Json(req): Json<Req>,
) -> Result<Json<Resp>, Error> {
    if !accounts.register(req.email.clone()).await {
        bail!(ALREADY_REGISTERED);
    }

    tracing::info!(email = %req.email, "registered account");

    Ok(Json(Resp { email: req.email }))
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::http::StatusCode;

    fn req(email: &str) -> Req {
        Req {
            email: email.to_string(),
            password: "secret".to_string(),
            password_again: "secret".to_string(),
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_success() {
        let accounts = Accounts::new();

        let resp = handler(State(accounts.clone()), Json(req("new@example.com")))
            .await
            .unwrap();

        assert_eq!(resp.0.email, "new@example.com");
        assert!(accounts.exists("new@example.com").await);
    }

    #[test_log::test(tokio::test)]
    async fn test_duplicate_email() {
        let accounts = Accounts::new();
        accounts.register("x@y.com".to_string()).await;

        let err = handler(State(accounts), Json(req("x@y.com")))
            .await
            .unwrap_err();

        assert_eq!(
            err.into_parts(),
            (StatusCode::BAD_REQUEST, ALREADY_REGISTERED.to_string())
        );
    }
}
