use serde::{Deserialize, Serialize};

/// Query parameters for the existence check.
#[derive(Debug, Serialize, Deserialize)]
pub struct Req {
    /// The address to look up
    pub email: String,
}

/// Whether an account with the email already exists.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resp {
    /// `true` if the email is already registered
    pub exists: bool,
}

/// Where the existence check lives.
pub const PATH: &str = "/api/v1/accounts/exists";
