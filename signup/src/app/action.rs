use crossterm::event::KeyEvent;
use signup_core::RequestId;

/// Things that can happen to this app
#[derive(Debug)]
pub enum Action {
    /// The user did something on the keyboard
    Key(KeyEvent),

    /// Something bad happened; display it to the user
    Problem(String),

    /// The account service told us whether an email is taken
    EmailChecked {
        /// Which check this answers
        request: RequestId,

        /// The email we asked about
        email: String,

        /// `Ok(true)` if the email is taken
        result: Result<bool, String>,
    },

    /// The account service answered our signup request. On success, this is
    /// the email it registered.
    AccountCreated(Result<String, String>),
}
