use crate::form_fields;
use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use signup_core::{Border, Event, Field, Fields, SignupState};
use std::mem;
use tui_input::{backend::crossterm::EventHandler, Input};

form_fields!(
    /// Where keyboard focus is on the form
    Focus,
    /// The email input
    Email,
    /// The password input
    Password,
    /// The confirmation input
    PasswordAgain,
    /// The submit button
    Button
);

impl Focus {
    /// The form field with focus, if focus is on a field at all.
    fn field(self) -> Option<Field> {
        match self {
            Focus::Email => Some(Field::Email),
            Focus::Password => Some(Field::Password),
            Focus::PasswordAgain => Some(Field::PasswordAgain),
            Focus::Button => None,
        }
    }
}

/// The signup card: three inputs and a button.
#[derive(Debug)]
pub struct SignupForm {
    /// What has keyboard focus
    focus: Focus,

    /// Cursor and editing state for each input. The store owns the values;
    /// these mirror them.
    inputs: Fields<Input>,
}

impl SignupForm {
    /// Render the card centered in `body_area`.
    #[expect(clippy::cast_possible_truncation)]
    pub fn render(&mut self, body_area: Rect, frame: &mut Frame<'_>, state: &SignupState) {
        let card_vert = Layout::vertical([Constraint::Length(15)]).flex(Flex::Center);
        let card_horiz = Layout::horizontal([Constraint::Length(44)]).flex(Flex::Center);

        let [card_area] = card_vert.areas(body_area);
        let [card_area] = card_horiz.areas(card_area);
        frame.render_widget(Clear, card_area);

        let card = Block::default()
            .borders(Borders::ALL)
            .title(" Signup ")
            .title_style(Style::default().add_modifier(Modifier::BOLD));
        let inner = card.inner(card_area);
        frame.render_widget(card, card_area);

        let rows = Layout::vertical(Constraint::from_lengths([3, 3, 3, 1, 3]));
        let [email_area, password_area, again_area, _, button_area] = rows.areas(inner);

        let width = inner.width.saturating_sub(2 + 1); // -2 for the border, -1 for the cursor

        for (field, area) in [
            (Field::Email, email_area),
            (Field::Password, password_area),
            (Field::PasswordAgain, again_area),
        ] {
            let input = self.inputs.get(field);
            let scroll = input.visual_scroll(width as usize);
            let focused = self.focus.field() == Some(field);

            let shown = if field.is_secret() {
                "*".repeat(input.value().chars().count())
            } else {
                input.value().to_string()
            };

            let mut title_style = Style::default();
            if focused {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }

            let widget = Paragraph::new(shown).scroll((0, scroll as u16)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(field.label())
                    .title_style(title_style)
                    .border_style(border_style(state.border(field))),
            );

            frame.render_widget(widget, area);

            if focused {
                frame.set_cursor_position((
                    area.x
                        + (input.visual_cursor().max(scroll) - scroll) as u16 // current end of text
                        + 1, // just past the end of the text
                    area.y + 1, // +1 row for the border/title
                ));
            }
        }

        let label = if state.submission().is_submitting() {
            "Signing up…"
        } else {
            "Signup"
        };

        let mut button_style = if state.is_disabled() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };
        if self.focus == Focus::Button {
            button_style = button_style.add_modifier(Modifier::REVERSED);
        }

        let button = Paragraph::new(label)
            .centered()
            .style(button_style)
            .block(Block::default().borders(Borders::ALL).border_style(button_style));

        frame.render_widget(button, button_area);
    }

    /// Handle a key press, returning whatever the store needs to hear about.
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Event> {
        match key.code {
            KeyCode::Tab => self.move_focus(self.focus.next()),
            KeyCode::BackTab => self.move_focus(self.focus.prev()),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                vec![Event::Submit]
            }
            KeyCode::Enter => match self.focus {
                Focus::Button => vec![Event::Submit],
                _ => self.move_focus(self.focus.next()),
            },
            _ => match self.focus.field() {
                Some(field) => {
                    let input = self.inputs.get_mut(field);

                    match input.handle_event(&TermEvent::Key(key)) {
                        Some(changed) if changed.value => {
                            vec![Event::Changed(field, input.value().to_string())]
                        }
                        _ => vec![],
                    }
                }
                None => vec![],
            },
        }
    }

    /// Make the inputs agree with the store, e.g. after the form is reset.
    pub fn sync(&mut self, state: &SignupState) {
        for field in Field::ALL {
            let input = self.inputs.get_mut(field);

            if input.value() != state.value(field) {
                *input = Input::new(state.value(field).to_string());
            }
        }
    }

    /// Focus something else, blurring the field we're leaving.
    fn move_focus(&mut self, to: Focus) -> Vec<Event> {
        let from = mem::replace(&mut self.focus, to);

        from.field().map(Event::Blurred).into_iter().collect()
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            focus: Focus::Email,
            inputs: Fields::default(),
        }
    }
}

/// Colors for each border state.
fn border_style(border: Border) -> Style {
    match border {
        Border::Neutral => Style::default().fg(Color::Gray),
        Border::Success => Style::default().fg(Color::Green),
        Border::Error => Style::default().fg(Color::Red),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_reports_the_new_value() {
        let mut form = SignupForm::default();

        assert_eq!(
            form.handle_key(key(KeyCode::Char('a'))),
            vec![Event::Changed(Field::Email, "a".to_string())]
        );
        assert_eq!(
            form.handle_key(key(KeyCode::Char('b'))),
            vec![Event::Changed(Field::Email, "ab".to_string())]
        );
    }

    #[test]
    fn moving_the_cursor_changes_nothing() {
        let mut form = SignupForm::default();
        form.handle_key(key(KeyCode::Char('a')));

        assert!(form.handle_key(key(KeyCode::Left)).is_empty());
    }

    #[test]
    fn tab_blurs_the_field_being_left() {
        let mut form = SignupForm::default();

        assert_eq!(
            form.handle_key(key(KeyCode::Tab)),
            vec![Event::Blurred(Field::Email)]
        );
        assert_eq!(form.focus, Focus::Password);

        assert_eq!(
            form.handle_key(key(KeyCode::BackTab)),
            vec![Event::Blurred(Field::Password)]
        );
        assert_eq!(form.focus, Focus::Email);
    }

    #[test]
    fn leaving_the_button_blurs_nothing() {
        let mut form = SignupForm::default();
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus, Focus::Button);

        assert!(form.handle_key(key(KeyCode::Tab)).is_empty());
        assert_eq!(form.focus, Focus::Email);
    }

    #[test]
    fn enter_submits_from_the_button_and_advances_elsewhere() {
        let mut form = SignupForm::default();

        assert_eq!(
            form.handle_key(key(KeyCode::Enter)),
            vec![Event::Blurred(Field::Email)]
        );

        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus, Focus::Button);
        assert_eq!(form.handle_key(key(KeyCode::Enter)), vec![Event::Submit]);
    }

    #[test]
    fn ctrl_s_submits_from_anywhere() {
        let mut form = SignupForm::default();

        assert_eq!(
            form.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            vec![Event::Submit]
        );
    }

    #[test]
    fn sync_follows_the_store() {
        let mut form = SignupForm::default();
        form.handle_key(key(KeyCode::Char('a')));

        form.sync(&SignupState::new());

        assert_eq!(form.inputs.email.value(), "");
    }
}
