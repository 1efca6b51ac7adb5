use core::fmt;

/// An append-only record of emails that the availability check said already
/// belong to an account. Unlike a set, the same email can be recorded more
/// than once; we never remove anything while the form is alive.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct KnownTakenEmails {
    /// Emails in the order they were reported.
    emails: Vec<String>,
}

impl KnownTakenEmails {
    /// Creates an empty record
    pub fn new() -> Self {
        Self { emails: Vec::new() }
    }

    /// Remember that this email is taken.
    pub fn record(&mut self, email: String) {
        self.emails.push(email);
    }

    /// Returns true if this exact string has been reported as taken.
    pub fn contains(&self, email: &str) -> bool {
        self.emails.iter().any(|taken| taken == email)
    }

    /// An iterator over every recorded email, duplicates included.
    pub fn iter(&self) -> core::slice::Iter<'_, String> {
        self.emails.iter()
    }

    /// Returns the number of recorded entries.
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}

impl fmt::Debug for KnownTakenEmails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.emails).finish()
    }
}
