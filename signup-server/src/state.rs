use std::{collections::HashSet, sync::Arc};
use tokio::sync::RwLock;

/// The accounts this server knows about. Only emails are kept; this is a
/// development stand-in for a real account service and never stores
/// passwords.
#[derive(Debug, Clone, Default)]
pub struct Accounts {
    /// Registered emails
    emails: Arc<RwLock<HashSet<String>>>,
}

impl Accounts {
    /// No accounts yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Is this email registered?
    pub async fn exists(&self, email: &str) -> bool {
        self.emails.read().await.contains(email)
    }

    /// Register an email. Returns `false` if it was already taken.
    pub async fn register(&self, email: String) -> bool {
        self.emails.write().await.insert(email)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn register_then_exists() {
        let accounts = Accounts::new();

        assert!(!accounts.exists("a@b.co").await);
        assert!(accounts.register("a@b.co".to_string()).await);
        assert!(accounts.exists("a@b.co").await);
        assert!(!accounts.register("a@b.co".to_string()).await);
    }

    #[tokio::test]
    async fn clones_share_accounts() {
        let accounts = Accounts::new();
        let other = accounts.clone();

        accounts.register("a@b.co".to_string()).await;

        assert!(other.exists("a@b.co").await);
    }
}
