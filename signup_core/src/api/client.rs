use super::error::{self, Error};
use super::{create, exists};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// Client for the account service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Client {
    /// The server to connect to. Should only be the protocol and domain, e.g.
    /// `https://accounts.your-domain.com`.
    pub server: String,
}

impl Client {
    /// Construct a new client
    pub fn new(server: String) -> Self {
        Self { server }
    }

    /// Ask whether an account already uses this email.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn exists(&self, client: &reqwest::Client, email: &str) -> error::Result<exists::Resp> {
        let url = self.exists_url(email)?;

        Self::handle_response(client.get(url)).await
    }

    /// Create a new account.
    ///
    /// ## Errors
    ///
    /// Errors are the same as `handle_response`.
    pub async fn create(
        &self,
        client: &reqwest::Client,
        req: &create::Req,
    ) -> error::Result<create::Resp> {
        let url = self.url(create::PATH)?;

        Self::handle_response(client.post(url).json(req)).await
    }

    /// Join a path onto the configured server.
    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        Url::parse(&self.server)?.join(path)
    }

    /// The full URL for an existence check, with the email in the query.
    fn exists_url(&self, email: &str) -> Result<Url, url::ParseError> {
        let mut url = self.url(exists::PATH)?;
        url.query_pairs_mut().append_pair("email", email);

        Ok(url)
    }

    /// Convert an HTTP response into a result, interpreting errors in a
    /// standard way.
    ///
    /// ## Errors
    ///
    /// - `Ok(..)` if the server returned a success (2xx)
    /// - `Error::Client` if the server returned a client error (4xx)
    /// - `Error::Server` if the server returned a server error (5xx)
    /// - `Error::Unexpected` if the server returned something else
    async fn handle_response<T>(resp: reqwest::RequestBuilder) -> error::Result<T>
    where
        T: DeserializeOwned,
    {
        let resp = resp.send().await?;

        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else if status.is_client_error() {
            let err: error::ErrorResp = resp.json().await?;
            Err(Error::Client(err.error))
        } else if status.is_server_error() {
            Err(Error::Server)
        } else {
            Err(Error::Unexpected(status))
        }
    }
}
