/// Where the signup request is. Only one outcome dialog can be open at a time
/// because only one variant can be current.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Submission {
    /// Nothing in flight; the user is filling in the form
    #[default]
    Idle,

    /// We've asked the account service to create the account
    Submitting,

    /// The account was created; waiting for the user to acknowledge
    Succeeded,

    /// The account could not be created, for the given reason
    Failed(String),
}

impl Submission {
    /// Is a request currently outstanding?
    pub fn is_submitting(&self) -> bool {
        matches!(self, Submission::Submitting)
    }

    /// Should the error dialog be shown?
    pub fn error_shown(&self) -> bool {
        matches!(self, Submission::Failed(_))
    }

    /// Should the success dialog be shown?
    pub fn success_shown(&self) -> bool {
        matches!(self, Submission::Succeeded)
    }
}
