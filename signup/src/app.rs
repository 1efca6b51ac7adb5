/// Things that can happen to this app
mod action;
pub use action::Action;

/// Dialogs shown after a signup attempt
mod dialog;
use dialog::Dialog;

/// Side effects this app performs
mod effect;
pub use effect::{Effect, EffectContext};

/// The signup card
mod signup_form;
use signup_form::SignupForm;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    widgets::Paragraph,
    Frame,
};
use signup_core::{Event, Store};
use std::process::ExitCode;

/// The "functional core" of the app.
pub struct App {
    /// The signup form's state
    store: Store,

    /// Focus and cursors for the inputs
    form: SignupForm,

    /// Status to display (visible at the bottom of the screen)
    status_line: Option<String>,

    /// Set when the user wants out
    exit: Option<ExitCode>,
}

impl App {
    /// Create a new instance of the app
    pub fn new() -> Self {
        let mut store = Store::new();
        store.subscribe(|state| tracing::trace!(?state, "form state changed"));

        Self {
            store,
            form: SignupForm::default(),
            status_line: None,
            exit: None,
        }
    }

    /// Render the app's UI to the screen
    pub fn render(&mut self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]);
        let [body_area, status_area] = vertical.areas(frame.area());

        let state = self.store.state();
        self.form.render(body_area, frame, state);

        if let Some(dialog) = Dialog::for_submission(state.submission()) {
            dialog.render(frame, body_area);
        }

        let status = match &self.status_line {
            Some(line) => Paragraph::new(line.as_str()),
            None => Paragraph::new("tab: next field · enter: submit · esc: quit").fg(Color::DarkGray),
        };

        frame.render_widget(status, status_area);
    }

    /// Handle an `Action`, updating the app's state and producing some side effect(s)
    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Key(key) => self.handle_key(key),

            Action::Problem(problem) => {
                self.status_line = Some(problem);

                vec![]
            }

            Action::EmailChecked {
                request,
                email,
                result,
            } => {
                // answers to older checks get dropped by the store, so they
                // shouldn't touch the status line either
                if request == self.store.state().latest_check() {
                    self.status_line = match &result {
                        Ok(_) => None,
                        Err(problem) => Some(format!("Couldn't check email: {problem}")),
                    };
                }

                self.dispatch(Event::EmailChecked {
                    request,
                    email,
                    result,
                })
            }

            Action::AccountCreated(result) => {
                self.status_line = match &result {
                    Ok(email) => Some(format!("Created an account for {email}")),
                    Err(problem) => Some(format!("Signup failed: {problem}")),
                };

                self.dispatch(Event::SubmitFinished(result.map(|_| ())))
            }
        }
    }

    /// Let the TUI manager know whether we're all wrapped up and can exit.
    pub fn should_exit(&self) -> Option<ExitCode> {
        self.exit
    }

    /// Route a key press to whatever is on top.
    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return vec![];
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.exit = Some(ExitCode::SUCCESS);
            return vec![];
        }

        let submission = self.store.state().submission();
        let (success_shown, error_shown) = (submission.success_shown(), submission.error_shown());

        if success_shown {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => self.dispatch(Event::AcknowledgeSuccess),
                _ => vec![],
            };
        }

        if error_shown {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc => self.dispatch(Event::DismissError),
                _ => vec![],
            };
        }

        if key.code == KeyCode::Esc {
            self.exit = Some(ExitCode::SUCCESS);
            return vec![];
        }

        let events = self.form.handle_key(key);

        events
            .into_iter()
            .flat_map(|event| self.dispatch(event))
            .collect()
    }

    /// Send an event to the store, keep the inputs in step, and turn the
    /// store's commands into effects.
    fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        if event == Event::Submit && self.store.state().is_disabled() {
            self.status_line = Some("Fill in a valid email and matching passwords first".to_string());
        }

        let commands = self.store.dispatch(event);
        self.form.sync(self.store.state());

        commands.into_iter().map(Effect::from).collect()
    }
}
