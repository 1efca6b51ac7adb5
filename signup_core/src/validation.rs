use email_address::{EmailAddress, Options};

/// Passwords shorter than this (in characters) are rejected.
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Is this a syntactically valid email address? The domain must have a TLD,
/// so `a@b` is rejected while `a@b.co` is fine.
pub fn email_is_valid(email: &str) -> bool {
    EmailAddress::parse_with_options(email, Options::default().with_required_tld()).is_ok()
}

/// Is this password long enough? There is no upper bound and no requirement
/// on which characters appear.
pub fn password_is_valid(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Does the confirmation match the password exactly?
pub fn confirmation_is_valid(password: &str, password_again: &str) -> bool {
    password == password_again
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn email_accepts_simple_address() {
        assert!(email_is_valid("a@b.co"));
        assert!(email_is_valid("x@y.com"));
    }

    #[test]
    fn email_rejects_garbage() {
        assert!(!email_is_valid("not-an-email"));
        assert!(!email_is_valid(""));
        assert!(!email_is_valid("a@b"));
        assert!(!email_is_valid("a b@c.com"));
        assert!(!email_is_valid("@b.co"));
    }

    #[test]
    fn password_length_boundary() {
        assert!(!password_is_valid("1234"));
        assert!(password_is_valid("12345"));
        assert!(!password_is_valid(""));
    }

    #[test]
    fn password_counts_characters_not_bytes() {
        assert!(!password_is_valid("ééé"));
        assert!(password_is_valid("ééééé"));
    }

    #[test]
    fn confirmation_is_exact_equality() {
        assert!(confirmation_is_valid("abc", "abc"));
        assert!(!confirmation_is_valid("abc", "abd"));
        assert!(!confirmation_is_valid("abc", "abc "));
        assert!(confirmation_is_valid("", ""));
    }

    proptest! {
        #[test]
        fn password_validity_is_length(password in ".{0,12}") {
            prop_assert_eq!(
                password_is_valid(&password),
                password.chars().count() >= MIN_PASSWORD_LENGTH
            );
        }

        #[test]
        fn strings_without_at_are_never_emails(email in "[^@]{0,20}") {
            prop_assert!(!email_is_valid(&email));
        }

        #[test]
        fn confirmation_matches_itself(password: String) {
            prop_assert!(confirmation_is_valid(&password, &password));
        }
    }
}
