use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};
use signup_core::Submission;

/// Dialogs shown on top of the form once a signup attempt finishes.
#[derive(Debug, PartialEq, Eq)]
pub enum Dialog<'a> {
    /// The account could not be created
    Error(&'a str),

    /// The account was created
    Success,
}

impl<'a> Dialog<'a> {
    /// The dialog (if any) for where the submission is.
    pub fn for_submission(submission: &'a Submission) -> Option<Self> {
        match submission {
            Submission::Failed(problem) => Some(Dialog::Error(problem)),
            Submission::Succeeded => Some(Dialog::Success),
            Submission::Idle | Submission::Submitting => None,
        }
    }

    /// Draw the dialog over `body_area`.
    pub fn render(&self, frame: &mut Frame<'_>, body_area: Rect) {
        match self {
            Dialog::Error(problem) => {
                let popup_vert = Layout::vertical([Constraint::Length(7)]).flex(Flex::Center);
                let popup_horiz = Layout::horizontal([Constraint::Length(44)]).flex(Flex::Center);

                let [popup_area] = popup_vert.areas(body_area);
                let [popup_area] = popup_horiz.areas(popup_area);

                let text = Text::from(vec![
                    Line::from(*problem).italic(),
                    Line::default(),
                    Line::from("[Enter] Try again").add_modifier(Modifier::BOLD),
                ]);

                let popup = Paragraph::new(text).wrap(Wrap { trim: true }).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Could not create user! ")
                        .padding(Padding::horizontal(1))
                        .border_style(Style::new().fg(Color::Red)),
                );

                frame.render_widget(Clear, popup_area);
                frame.render_widget(popup, popup_area);
            }
            Dialog::Success => {
                // covers the whole form, like an overlay
                frame.render_widget(Clear, body_area);

                let popup_vert = Layout::vertical([Constraint::Length(5)]).flex(Flex::Center);
                let popup_horiz = Layout::horizontal([Constraint::Length(44)]).flex(Flex::Center);

                let [popup_area] = popup_vert.areas(body_area);
                let [popup_area] = popup_horiz.areas(popup_area);

                let popup = Paragraph::new("[Enter] Ok")
                    .centered()
                    .add_modifier(Modifier::BOLD)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(" User created! ")
                            .padding(Padding::vertical(1))
                            .border_style(Style::new().fg(Color::Green)),
                    );

                frame.render_widget(popup, popup_area);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dialogs_follow_submission() {
        assert_eq!(Dialog::for_submission(&Submission::Idle), None);
        assert_eq!(Dialog::for_submission(&Submission::Submitting), None);
        assert_eq!(
            Dialog::for_submission(&Submission::Succeeded),
            Some(Dialog::Success)
        );

        let failed = Submission::Failed("Server error".to_string());
        assert_eq!(
            Dialog::for_submission(&failed),
            Some(Dialog::Error("Server error"))
        );
    }
}
