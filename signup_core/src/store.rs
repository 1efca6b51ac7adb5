use crate::{
    api::create,
    form::Field,
    state::{RequestId, SignupState},
    submission::Submission,
};
use core::fmt;

/// Things that can happen to the form, either from the user or as the
/// outcome of a `Command`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user edited a field; this is the new value
    Changed(Field, String),

    /// The user left a field
    Blurred(Field),

    /// An availability check finished. `Ok(true)` means the email is taken;
    /// `Err` carries whatever went wrong talking to the service.
    EmailChecked {
        /// Which check this answers
        request: RequestId,

        /// The email the check was about
        email: String,

        /// What the service said
        result: Result<bool, String>,
    },

    /// The user pressed the submit button
    Submit,

    /// The account service answered the signup request
    SubmitFinished(Result<(), String>),

    /// The user closed the error dialog
    DismissError,

    /// The user closed the success dialog
    AcknowledgeSuccess,
}

/// Side effects the form needs someone else to perform. The outcome of each
/// comes back as an `Event`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask whether an account uses this email, answering with
    /// `Event::EmailChecked` carrying the same request ID
    CheckEmail {
        /// Echo this back in the answer
        request: RequestId,

        /// The email to look up
        email: String,
    },

    /// Create the account, answering with `Event::SubmitFinished`
    CreateAccount(create::Req),
}

/// A handle to a listener registered with `Store::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Something that wants to hear about state changes.
type Listener = Box<dyn FnMut(&SignupState) + Send>;

/// Owns a `SignupState`, applies events to it, and tells listeners when it
/// changes.
#[derive(Default)]
pub struct Store {
    /// The current state
    state: SignupState,

    /// Listeners in the order they subscribed
    listeners: Vec<(Subscription, Listener)>,

    /// The ID to give the next subscription
    next_subscription: u64,
}

impl Store {
    /// A store holding a blank form.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> &SignupState {
        &self.state
    }

    /// Call `listener` with the new state after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&SignupState) + Send + 'static) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;

        self.listeners.push((subscription, Box::new(listener)));

        subscription
    }

    /// Stop calling a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);

        self.listeners.len() != before
    }

    /// Apply an event and return the side effects it asks for. Listeners are
    /// notified if the state changed.
    pub fn dispatch(&mut self, event: Event) -> Vec<Command> {
        let before = self.state.clone();
        let commands = apply(&mut self.state, event);

        if self.state != before {
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }

        commands
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// The transition function: update `state` for `event`.
fn apply(state: &mut SignupState, event: Event) -> Vec<Command> {
    match event {
        Event::Changed(field, value) => {
            state.values.set(field, value);

            if field == Field::Email {
                let request = state.latest_check.next();
                state.latest_check = request;

                vec![Command::CheckEmail {
                    request,
                    email: state.values.email.clone(),
                }]
            } else {
                vec![]
            }
        }

        Event::Blurred(field) => {
            state.touched.set(field, true);

            vec![]
        }

        Event::EmailChecked {
            request,
            email,
            result,
        } => {
            if request != state.latest_check {
                tracing::debug!(%request, latest = %state.latest_check, "discarding stale availability check");
                return vec![];
            }

            match result {
                Ok(true) => state.taken.record(email),
                Ok(false) => {}
                Err(problem) => {
                    tracing::debug!(%request, %problem, "availability check failed");
                }
            }

            vec![]
        }

        Event::Submit => {
            if state.is_disabled() {
                tracing::debug!("ignoring submit on an incomplete form");
                return vec![];
            }

            match state.submission {
                Submission::Idle | Submission::Failed(_) => {
                    state.submission = Submission::Submitting;

                    vec![Command::CreateAccount(create::Req {
                        email: state.values.email.clone(),
                        password: state.values.password.clone(),
                        password_again: state.values.password_again.clone(),
                    })]
                }
                Submission::Submitting | Submission::Succeeded => {
                    tracing::debug!(submission = ?state.submission, "ignoring submit");
                    vec![]
                }
            }
        }

        Event::SubmitFinished(result) => {
            if state.submission.is_submitting() {
                state.submission = match result {
                    Ok(()) => Submission::Succeeded,
                    Err(problem) => Submission::Failed(problem),
                };
            } else {
                tracing::debug!(submission = ?state.submission, "ignoring submit outcome");
            }

            vec![]
        }

        Event::DismissError => {
            if state.submission.error_shown() {
                state.submission = Submission::Idle;
            }

            vec![]
        }

        Event::AcknowledgeSuccess => {
            if state.submission.success_shown() {
                state.submission = Submission::Idle;
                state.reset_form();
            }

            vec![]
        }
    }
}
