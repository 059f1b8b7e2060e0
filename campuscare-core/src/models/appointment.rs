use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Medical,
    Dental,
    Counseling,
    Nutrition,
}

impl ServiceType {
    pub fn all() -> &'static [ServiceType] {
        &[
            ServiceType::Medical,
            ServiceType::Dental,
            ServiceType::Counseling,
            ServiceType::Nutrition,
        ]
    }

    /// Display name used throughout the booking and triage tables.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Medical => "Medical Checkup",
            ServiceType::Dental => "Dental Services",
            ServiceType::Counseling => "Mental Health Counseling",
            ServiceType::Nutrition => "Nutrition Consultation",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Catalog entry shown on the landing page.
#[derive(Debug, Clone, Copy)]
pub struct ServiceInfo {
    pub service: ServiceType,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// The clinic's service catalog.
pub fn service_catalog() -> &'static [ServiceInfo] {
    &[
        ServiceInfo {
            service: ServiceType::Medical,
            title: "Medical Services",
            blurb: "General checkups, first aid, and consultations with our campus physician.",
        },
        ServiceInfo {
            service: ServiceType::Dental,
            title: "Dental Care",
            blurb: "Routine dental exams, cleaning, and emergency dental care for students and staff.",
        },
        ServiceInfo {
            service: ServiceType::Counseling,
            title: "Guidance & Counseling",
            blurb: "Confidential mental health support, stress management, and academic counseling.",
        },
        ServiceInfo {
            service: ServiceType::Nutrition,
            title: "Nutrition & Wellness",
            blurb: "Dietary planning and wellness workshops to maintain a healthy lifestyle.",
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Terminal statuses admit no further transition and are the only
    /// statuses from which a record may be deleted.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled
        )
    }

    /// The fixed transition path: pending goes to confirmed or cancelled,
    /// confirmed goes to completed. Nothing skips and nothing reverses.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (AppointmentStatus::Pending, AppointmentStatus::Confirmed)
                | (AppointmentStatus::Pending, AppointmentStatus::Cancelled)
                | (AppointmentStatus::Confirmed, AppointmentStatus::Completed)
        )
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A requester's booking input. The store fills in everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub service_type: ServiceType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Snapshot of the owner's name at creation time; never re-synced.
    pub user_name: String,
    pub service_type: ServiceType,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: String,
    pub status: AppointmentStatus,
    /// Admin notes
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn new(user: &User, draft: AppointmentDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user.id,
            user_name: user.name.clone(),
            service_type: draft.service_type,
            date: draft.date,
            time: draft.time,
            reason: draft.reason,
            status: AppointmentStatus::Pending,
            notes: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
