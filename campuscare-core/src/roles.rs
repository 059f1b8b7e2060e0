//! Capability set per role.
//!
//! Role-conditional behavior is dispatched off this table instead of
//! branching on the role field at every call site: requesters book and
//! chat, the administrator triages.

use crate::models::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// May book new appointments for themselves.
    pub can_create: bool,
    /// May move any appointment along the status path and delete terminal
    /// records.
    pub can_triage: bool,
    /// May use the wellness chat.
    pub can_chat: bool,
}

impl Capabilities {
    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self {
                can_create: false,
                can_triage: true,
                can_chat: false,
            },
            UserRole::Student | UserRole::Faculty | UserRole::Staff => Self {
                can_create: true,
                can_triage: false,
                can_chat: true,
            },
        }
    }

    /// No user signed in: nothing is allowed.
    pub fn none() -> Self {
        Self {
            can_create: false,
            can_triage: false,
            can_chat: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_triages_only() {
        let caps = Capabilities::for_role(UserRole::Admin);
        assert!(caps.can_triage);
        assert!(!caps.can_create);
        assert!(!caps.can_chat);
    }

    #[test]
    fn test_requesters_book_and_chat() {
        for role in [UserRole::Student, UserRole::Faculty, UserRole::Staff] {
            let caps = Capabilities::for_role(role);
            assert!(caps.can_create);
            assert!(caps.can_chat);
            assert!(!caps.can_triage);
        }
    }

    #[test]
    fn test_signed_out_has_nothing() {
        let caps = Capabilities::none();
        assert!(!caps.can_create && !caps.can_triage && !caps.can_chat);
    }
}
