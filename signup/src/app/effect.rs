use super::Action;
use crate::config::Config;
use signup_core::{
    api::{self, create},
    Command, RequestId,
};

/// Connections to external services that effects use. We keep these around to
/// have some level of connection sharing for the app as a whole.
pub struct EffectContext {
    /// an HTTP client with reqwest
    http: reqwest::Client,

    /// Where the account service lives
    api: api::Client,
}

impl EffectContext {
    /// Get a new `EffectContext` pointed at the configured server
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api: api::Client::new(config.server.clone()),
        }
    }
}

/// Things that can happen as a result of user input. Side effects!
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    /// Ask the account service whether an email is taken
    CheckEmail {
        /// Which check this is
        request: RequestId,

        /// The email to look up
        email: String,
    },

    /// Ask the account service to create an account
    CreateAccount(create::Req),
}

impl From<Command> for Effect {
    fn from(command: Command) -> Self {
        match command {
            Command::CheckEmail { request, email } => Self::CheckEmail { request, email },
            Command::CreateAccount(req) => Self::CreateAccount(req),
        }
    }
}

impl Effect {
    /// Perform the side-effectful portions of this effect, returning the next
    /// `Action` the application needs to handle. Failures are reported in the
    /// action rather than dropped, since the form reacts to them.
    pub async fn run(self, conn: &EffectContext) -> Action {
        match self {
            Self::CheckEmail { request, email } => {
                tracing::debug!(%request, "checking whether email is taken");

                let result = match conn.api.exists(&conn.http, &email).await {
                    Ok(resp) => Ok(resp.exists),
                    Err(problem) => {
                        tracing::warn!(?problem, %request, "problem checking email");
                        Err(problem.to_string())
                    }
                };

                Action::EmailChecked {
                    request,
                    email,
                    result,
                }
            }

            Self::CreateAccount(req) => {
                tracing::info!(email = %req.email, "creating account");

                match conn.api.create(&conn.http, &req).await {
                    Ok(resp) => Action::AccountCreated(Ok(resp.email)),
                    Err(problem) => {
                        tracing::error!(?problem, "problem creating account");
                        Action::AccountCreated(Err(problem.to_string()))
                    }
                }
            }
        }
    }
}
