/// How a field's border should look. This only drives presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    /// Nothing to say yet
    #[default]
    Neutral,

    /// The value is acceptable
    Success,

    /// The value has a problem and the user has already visited the field
    Error,
}

impl Border {
    /// The CSS class a web view would attach to the input.
    pub fn class(self) -> &'static str {
        match self {
            Border::Neutral => "",
            Border::Success => "input-success",
            Border::Error => "input-error",
        }
    }

    /// Email is green when it parses and nobody has it yet, red once touched
    /// otherwise.
    pub fn for_email(valid: bool, available: bool, touched: bool) -> Self {
        if valid && available {
            Border::Success
        } else if touched {
            Border::Error
        } else {
            Border::Neutral
        }
    }

    /// Password is green when long enough, red once touched otherwise.
    pub fn for_password(valid: bool, touched: bool) -> Self {
        if valid {
            Border::Success
        } else if touched {
            Border::Error
        } else {
            Border::Neutral
        }
    }

    /// The confirmation stays neutral until visited, even if it already
    /// matches.
    pub fn for_confirmation(matches: bool, password_valid: bool, touched: bool) -> Self {
        if !touched {
            Border::Neutral
        } else if matches && password_valid {
            Border::Success
        } else {
            Border::Error
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn email_needs_validity_and_availability() {
        assert_eq!(Border::for_email(true, true, false), Border::Success);
        assert_eq!(Border::for_email(true, false, false), Border::Neutral);
        assert_eq!(Border::for_email(true, false, true), Border::Error);
        assert_eq!(Border::for_email(false, true, true), Border::Error);
        assert_eq!(Border::for_email(false, true, false), Border::Neutral);
    }

    #[test]
    fn password_is_success_even_before_touching() {
        assert_eq!(Border::for_password(true, false), Border::Success);
        assert_eq!(Border::for_password(false, false), Border::Neutral);
        assert_eq!(Border::for_password(false, true), Border::Error);
    }

    #[test]
    fn confirmation_waits_for_touch() {
        assert_eq!(Border::for_confirmation(true, true, false), Border::Neutral);
        assert_eq!(Border::for_confirmation(true, true, true), Border::Success);
        assert_eq!(Border::for_confirmation(true, false, true), Border::Error);
        assert_eq!(Border::for_confirmation(false, true, true), Border::Error);
    }

    #[test]
    fn classes() {
        assert_eq!(Border::Neutral.class(), "");
        assert_eq!(Border::Success.class(), "input-success");
        assert_eq!(Border::Error.class(), "input-error");
    }
}
