use crate::{
    border::Border,
    form::{Field, Fields},
    submission::Submission,
    taken::KnownTakenEmails,
    validation,
};
use core::fmt;

/// Identifies one availability check. Later checks get larger IDs, so we can
/// tell whether a response is for the newest question we asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

impl RequestId {
    /// The ID after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the signup form knows. Validity, availability, and borders are
/// not stored; they're recomputed from these fields every time they're asked
/// for.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupState {
    /// What's currently typed in each field
    pub(crate) values: Fields<String>,

    /// Which fields the user has left at least once
    pub(crate) touched: Fields<bool>,

    /// Emails the account service told us are in use
    pub(crate) taken: KnownTakenEmails,

    /// Outcome of the latest signup attempt
    pub(crate) submission: Submission,

    /// The most recent availability check we started
    pub(crate) latest_check: RequestId,
}

impl SignupState {
    /// A blank form.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current value of a field.
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// All field values.
    pub fn values(&self) -> &Fields<String> {
        &self.values
    }

    /// Has the user left this field at least once?
    pub fn touched(&self, field: Field) -> bool {
        *self.touched.get(field)
    }

    /// All touched flags.
    pub fn touched_fields(&self) -> &Fields<bool> {
        &self.touched
    }

    /// Emails known to be registered already.
    pub fn taken(&self) -> &KnownTakenEmails {
        &self.taken
    }

    /// Where the signup request is.
    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    /// The ID of the newest availability check.
    pub fn latest_check(&self) -> RequestId {
        self.latest_check
    }

    /// Does the current email parse?
    pub fn email_is_valid(&self) -> bool {
        validation::email_is_valid(&self.values.email)
    }

    /// Is the current password long enough?
    pub fn password_is_valid(&self) -> bool {
        validation::password_is_valid(&self.values.password)
    }

    /// Do the two password fields match?
    pub fn confirmation_is_valid(&self) -> bool {
        validation::confirmation_is_valid(&self.values.password, &self.values.password_again)
    }

    /// Is the current email absent from the known-taken list? This only knows
    /// what the availability check has told us so far.
    pub fn email_is_available(&self) -> bool {
        !self.taken.contains(&self.values.email)
    }

    /// Should the submit button be disabled? Availability is not considered
    /// here; the account service has the final say on duplicates.
    pub fn is_disabled(&self) -> bool {
        !self.email_is_valid() || !self.password_is_valid() || !self.confirmation_is_valid()
    }

    /// The border to show around a field.
    pub fn border(&self, field: Field) -> Border {
        match field {
            Field::Email => Border::for_email(
                self.email_is_valid(),
                self.email_is_available(),
                self.touched.email,
            ),
            Field::Password => Border::for_password(self.password_is_valid(), self.touched.password),
            Field::PasswordAgain => Border::for_confirmation(
                self.confirmation_is_valid(),
                self.password_is_valid(),
                self.touched.password_again,
            ),
        }
    }

    /// Compute every derived value at once, for renderers.
    pub fn view(&self) -> View {
        View {
            email_valid: self.email_is_valid(),
            email_available: self.email_is_available(),
            password_valid: self.password_is_valid(),
            confirmation_valid: self.confirmation_is_valid(),
            disabled: self.is_disabled(),
            borders: Fields {
                email: self.border(Field::Email),
                password: self.border(Field::Password),
                password_again: self.border(Field::PasswordAgain),
            },
            submitting: self.submission.is_submitting(),
            error_shown: self.submission.error_shown(),
            success_shown: self.submission.success_shown(),
        }
    }

    /// Put the fields and touched flags back to how they started. Known-taken
    /// emails and the check counter survive so that late answers are still
    /// recognized as stale.
    pub(crate) fn reset_form(&mut self) {
        self.values = Fields::default();
        self.touched = Fields::default();
    }
}

impl fmt::Debug for SignupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // passwords stay out of logs
        f.debug_struct("SignupState")
            .field("email", &self.values.email)
            .field("password_len", &self.values.password.len())
            .field("password_again_len", &self.values.password_again.len())
            .field("touched", &self.touched)
            .field("taken", &self.taken)
            .field("submission", &self.submission)
            .field("latest_check", &self.latest_check)
            .finish()
    }
}

/// A snapshot of everything derived from a `SignupState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    /// Does the email parse?
    pub email_valid: bool,

    /// Is the email free, as far as we know?
    pub email_available: bool,

    /// Is the password long enough?
    pub password_valid: bool,

    /// Do the passwords match?
    pub confirmation_valid: bool,

    /// Is the submit button disabled?
    pub disabled: bool,

    /// Border for each field
    pub borders: Fields<Border>,

    /// Is a signup request in flight?
    pub submitting: bool,

    /// Is the error dialog open?
    pub error_shown: bool,

    /// Is the success dialog open?
    pub success_shown: bool,
}
