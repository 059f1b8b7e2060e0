//! Mock login and the session's current-user slot.
//!
//! There is no credential verification and no error path: any email
//! containing the case-sensitive substring "admin" resolves to the fixed
//! administrator record, everything else to the fixed requester record.

use tracing::info;

use crate::models::User;

/// Pure function of the typed email. Cannot fail.
pub fn login(email: &str) -> User {
    if email.contains("admin") {
        User::demo_admin()
    } else {
        User::demo_requester()
    }
}

/// Session-scoped current user. All mutations are synchronous and
/// immediately visible to the next render; no I/O occurs.
#[derive(Debug, Default)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, email: &str) -> User {
        let user = login(email);
        info!(role = %user.role, "user signed in");
        self.current_user = Some(user.clone());
        user
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!(role = %user.role, "user signed out");
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}
