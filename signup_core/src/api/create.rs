use core::fmt;
use serde::{Deserialize, Serialize};

/// The request to create a new account. The confirmation is sent along as
/// the form collected it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Req {
    /// Email to register.
    pub email: String,

    /// Plaintext password.
    pub password: String,

    /// The password typed a second time.
    pub password_again: String,
}

impl fmt::Debug for Req {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Req")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Result of creating an account.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resp {
    /// Email that was successfully registered.
    pub email: String,
}

/// Where the account creation endpoint lives.
pub const PATH: &str = "/api/v1/accounts";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn confirmation_is_camel_cased_on_the_wire() {
        let req = Req {
            email: "a@b.co".to_string(),
            password: "secret".to_string(),
            password_again: "secret".to_string(),
        };

        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "email": "a@b.co",
                "password": "secret",
                "passwordAgain": "secret",
            })
        );
    }

    #[test]
    fn debug_leaves_out_passwords() {
        let req = Req {
            email: "a@b.co".to_string(),
            password: "hunter22".to_string(),
            password_again: "hunter22".to_string(),
        };

        assert!(!format!("{req:?}").contains("hunter22"));
    }
}
