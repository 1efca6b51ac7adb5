/// One of the inputs on the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Field {
    /// The address to sign up with
    Email,

    /// The chosen password
    Password,

    /// The password again, to catch typos
    PasswordAgain,
}

impl Field {
    /// Every field, in the order they appear on the form.
    pub const ALL: [Field; 3] = [Field::Email, Field::Password, Field::PasswordAgain];

    /// A label suitable for display next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
            Field::PasswordAgain => "Password again",
        }
    }

    /// Should the value be masked when shown?
    pub fn is_secret(self) -> bool {
        !matches!(self, Field::Email)
    }
}

/// One value per field. Field values are `Fields<String>` and touched flags
/// are `Fields<bool>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fields<T> {
    /// Value for the email field
    pub email: T,

    /// Value for the password field
    pub password: T,

    /// Value for the confirmation field
    pub password_again: T,
}

impl<T> Fields<T> {
    /// Borrow the value for a field.
    pub fn get(&self, field: Field) -> &T {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PasswordAgain => &self.password_again,
        }
    }

    /// Mutably borrow the value for a field.
    pub fn get_mut(&mut self, field: Field) -> &mut T {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PasswordAgain => &mut self.password_again,
        }
    }

    /// Replace the value for a field, returning the old one.
    pub fn set(&mut self, field: Field, value: T) -> T {
        core::mem::replace(self.get_mut(field), value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn get_and_set_address_the_same_slot() {
        let mut values: Fields<String> = Fields::default();

        for field in Field::ALL {
            values.set(field, field.label().to_string());
        }

        assert_eq!(values.email, "Email");
        assert_eq!(values.password, "Password");
        assert_eq!(values.password_again, "Password again");
        assert_eq!(values.get(Field::PasswordAgain), "Password again");
    }

    #[test]
    fn set_returns_previous_value() {
        let mut touched: Fields<bool> = Fields::default();

        assert!(!touched.set(Field::Password, true));
        assert!(touched.set(Field::Password, true));
        assert!(!touched.email);
    }

    #[test]
    fn only_email_is_shown_in_the_clear() {
        assert!(!Field::Email.is_secret());
        assert!(Field::Password.is_secret());
        assert!(Field::PasswordAgain.is_secret());
    }
}
