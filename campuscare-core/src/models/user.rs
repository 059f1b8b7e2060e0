use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Faculty,
    Staff,
    Admin,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "student"),
            UserRole::Faculty => write!(f, "faculty"),
            UserRole::Staff => write!(f, "staff"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// A portal identity. Immutable once created; exactly one is current per
/// session and both demo records below are the only way one comes into being.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// School ID
    pub id_number: Option<String>,
}

impl User {
    pub fn new(id: Uuid, name: &str, email: &str, role: UserRole, id_number: Option<&str>) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            id_number: id_number.map(str::to_string),
        }
    }

    /// The fixed requester identity handed out by the mock login.
    pub fn demo_requester() -> Self {
        Self::new(
            demo_requester_id(),
            "Juan Dela Cruz",
            "juan@sfcg.edu.ph",
            UserRole::Student,
            Some("2023-1024"),
        )
    }

    /// The fixed administrator identity handed out by the mock login.
    pub fn demo_admin() -> Self {
        Self::new(
            demo_admin_id(),
            "Nurse Maria",
            "admin@sfcg.edu.ph",
            UserRole::Admin,
            Some("EMP-001"),
        )
    }
}

/// Stable id for the demo requester so seeded appointments can reference it.
pub fn demo_requester_id() -> Uuid {
    Uuid::from_u128(0x6f2a_1b44_9c10_4e7d_8a33_5d21_70aa_0001)
}

/// Stable id for the demo administrator.
pub fn demo_admin_id() -> Uuid {
    Uuid::from_u128(0x6f2a_1b44_9c10_4e7d_8a33_5d21_70aa_0002)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        assert_eq!(UserRole::Student.to_string(), "student");
        assert_eq!(UserRole::Admin.to_string(), "admin");
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Faculty.is_admin());
    }

    #[test]
    fn test_demo_identities_are_stable() {
        assert_eq!(User::demo_requester().id, User::demo_requester().id);
        assert_eq!(User::demo_admin().id, User::demo_admin().id);
        assert_ne!(User::demo_requester().id, User::demo_admin().id);
    }

    #[test]
    fn test_user_serialization_roundtrip() {
        let user = User::demo_requester();
        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, deserialized);
        assert!(json.contains("\"student\""));
    }
}
