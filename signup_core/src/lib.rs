//! The functional core of the signup form, shared by every front end.

/// Rules for whether each field's value is acceptable.
pub mod validation;

/// Field values and touched flags.
pub mod form;
pub use form::{Field, Fields};

/// Emails the availability check has reported as taken.
pub mod taken;
pub use taken::KnownTakenEmails;

/// Presentational state for each field's border.
pub mod border;
pub use border::Border;

/// Where a signup request is in its lifecycle.
pub mod submission;
pub use submission::Submission;

/// The complete form state and everything derived from it.
pub mod state;
pub use state::{RequestId, SignupState, View};

/// Events in, commands out, listeners notified.
pub mod store;
pub use store::{Command, Event, Store, Subscription};

/// Talk to the account service.
pub mod api;
