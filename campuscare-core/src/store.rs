//! In-memory appointment store.
//!
//! Session-scoped and never persisted: the ordered sequence lives for as
//! long as the process and insertion order is the only ordering. Requesters
//! append pending records for themselves; administrators move records along
//! the status path and remove terminal ones. Unknown ids and illegal
//! transitions are reported as errors rather than silently ignored.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{PortalError, PortalResult};
use crate::models::{
    demo_requester_id, Appointment, AppointmentDraft, AppointmentStatus, ServiceType, User,
};

#[derive(Debug, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the demo records the portal ships with.
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();
        let requester = User::demo_requester();

        store.appointments.push(seed_appointment(
            &requester,
            ServiceType::Dental,
            "2023-11-15",
            "10:00",
            "Toothache",
            AppointmentStatus::Completed,
        ));
        store.appointments.push(seed_appointment(
            &requester,
            ServiceType::Medical,
            "2023-12-20",
            "14:00",
            "Annual Physical Exam",
            AppointmentStatus::Pending,
        ));

        let walk_in = User::new(
            Uuid::from_u128(0x6f2a_1b44_9c10_4e7d_8a33_5d21_70aa_0063),
            "Maria Clara",
            "maria@sfcg.edu.ph",
            crate::models::UserRole::Student,
            None,
        );
        store.appointments.push(seed_appointment(
            &walk_in,
            ServiceType::Counseling,
            "2023-12-21",
            "09:00",
            "Stress management",
            AppointmentStatus::Confirmed,
        ));

        store
    }

    /// Book a new appointment for `user`. The record always starts pending,
    /// owned by the acting user, and lands at the end of the sequence.
    pub fn create(&mut self, user: &User, draft: AppointmentDraft) -> PortalResult<Appointment> {
        self.validate_draft(&draft, Local::now().date_naive())?;

        let appointment = Appointment::new(user, draft);
        info!(
            id = %appointment.id,
            service = %appointment.service_type,
            "appointment booked"
        );
        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    fn validate_draft(&self, draft: &AppointmentDraft, today: NaiveDate) -> PortalResult<()> {
        if draft.reason.trim().is_empty() {
            return Err(PortalError::ValidationError(
                "a reason for the visit is required".to_string(),
            ));
        }
        if draft.date < today {
            return Err(PortalError::ValidationError(format!(
                "appointment date {} is in the past",
                draft.date
            )));
        }
        Ok(())
    }

    /// Move an appointment along the status path. Administrator-only at the
    /// view layer; the store enforces the path itself.
    pub fn set_status(&mut self, id: Uuid, new_status: AppointmentStatus) -> PortalResult<()> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(PortalError::AppointmentNotFound(id))?;

        if !appointment.status.can_transition_to(new_status) {
            return Err(PortalError::InvalidStatusTransition {
                from: appointment.status,
                to: new_status,
            });
        }

        debug!(%id, from = %appointment.status, to = %new_status, "status updated");
        appointment.status = new_status;
        Ok(())
    }

    /// Attach or replace the admin note on a record.
    pub fn set_notes(&mut self, id: Uuid, notes: impl Into<String>) -> PortalResult<()> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(PortalError::AppointmentNotFound(id))?;
        appointment.notes = Some(notes.into());
        Ok(())
    }

    /// Remove a record. Only terminal records (cancelled or completed) may
    /// be deleted; anything else is blocked here, not just hidden in the UI.
    pub fn remove(&mut self, id: Uuid) -> PortalResult<Appointment> {
        let index = self
            .appointments
            .iter()
            .position(|a| a.id == id)
            .ok_or(PortalError::AppointmentNotFound(id))?;

        if !self.appointments[index].is_terminal() {
            return Err(PortalError::DeleteBlocked {
                status: self.appointments[index].status,
            });
        }

        info!(%id, "appointment record removed");
        Ok(self.appointments.remove(index))
    }

    pub fn get(&self, id: Uuid) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Every appointment, in insertion order.
    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    /// The given user's appointments, in insertion order.
    pub fn for_user(&self, user_id: Uuid) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.user_id == user_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

fn seed_appointment(
    user: &User,
    service_type: ServiceType,
    date: &str,
    time: &str,
    reason: &str,
    status: AppointmentStatus,
) -> Appointment {
    let mut appointment = Appointment::new(
        user,
        AppointmentDraft {
            service_type,
            date: date.parse().unwrap_or_default(),
            time: time
                .parse::<chrono::NaiveTime>()
                .unwrap_or_else(|_| chrono::NaiveTime::default()),
            reason: reason.to_string(),
        },
    );
    appointment.status = status;
    appointment
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveTime};

    fn future_draft() -> AppointmentDraft {
        AppointmentDraft {
            service_type: ServiceType::Medical,
            date: Local::now().date_naive() + Duration::days(7),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            reason: "checkup".to_string(),
        }
    }

    #[test]
    fn test_create_appends_pending_record() {
        let mut store = AppointmentStore::new();
        let user = User::demo_requester();

        let first = store.create(&user, future_draft()).unwrap();
        let second = store.create(&user, future_draft()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(first.status, AppointmentStatus::Pending);
        assert_eq!(first.user_id, user.id);
        // Insertion order preserved: first in, first out.
        assert_eq!(store.all()[0].id, first.id);
        assert_eq!(store.all()[1].id, second.id);
    }

    #[test]
    fn test_create_rejects_empty_reason() {
        let mut store = AppointmentStore::new();
        let user = User::demo_requester();
        let mut draft = future_draft();
        draft.reason = "   ".to_string();

        let err = store.create(&user, draft).unwrap_err();
        assert!(matches!(err, PortalError::ValidationError(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_rejects_past_date() {
        let mut store = AppointmentStore::new();
        let user = User::demo_requester();
        let mut draft = future_draft();
        draft.date = Local::now().date_naive() - Duration::days(1);

        let err = store.create(&user, draft).unwrap_err();
        assert!(matches!(err, PortalError::ValidationError(_)));
    }

    #[test]
    fn test_create_accepts_today() {
        let mut store = AppointmentStore::new();
        let user = User::demo_requester();
        let mut draft = future_draft();
        draft.date = Local::now().date_naive();

        assert!(store.create(&user, draft).is_ok());
    }

    #[test]
    fn test_set_status_unknown_id_is_reported() {
        let mut store = AppointmentStore::new();
        let err = store
            .set_status(Uuid::new_v4(), AppointmentStatus::Confirmed)
            .unwrap_err();
        assert!(matches!(err, PortalError::AppointmentNotFound(_)));
    }

    #[test]
    fn test_set_status_rejects_illegal_transition() {
        let mut store = AppointmentStore::new();
        let user = User::demo_requester();
        let appointment = store.create(&user, future_draft()).unwrap();

        let err = store
            .set_status(appointment.id, AppointmentStatus::Completed)
            .unwrap_err();
        assert!(matches!(err, PortalError::InvalidStatusTransition { .. }));
        assert_eq!(
            store.get(appointment.id).unwrap().status,
            AppointmentStatus::Pending
        );
    }

    #[test]
    fn test_full_lifecycle_confirm_complete_delete() {
        let mut store = AppointmentStore::new();
        let user = User::demo_requester();
        let appointment = store.create(&user, future_draft()).unwrap();

        // Deletion is blocked until the record reaches a terminal status.
        assert!(matches!(
            store.remove(appointment.id).unwrap_err(),
            PortalError::DeleteBlocked { .. }
        ));

        store
            .set_status(appointment.id, AppointmentStatus::Confirmed)
            .unwrap();
        assert!(matches!(
            store.remove(appointment.id).unwrap_err(),
            PortalError::DeleteBlocked { .. }
        ));

        store
            .set_status(appointment.id, AppointmentStatus::Completed)
            .unwrap();
        let removed = store.remove(appointment.id).unwrap();
        assert_eq!(removed.id, appointment.id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_cancelled_records_can_be_removed() {
        let mut store = AppointmentStore::new();
        let user = User::demo_requester();
        let appointment = store.create(&user, future_draft()).unwrap();

        store
            .set_status(appointment.id, AppointmentStatus::Cancelled)
            .unwrap();
        assert!(store.remove(appointment.id).is_ok());
    }

    #[test]
    fn test_for_user_filters_by_owner() {
        let store = AppointmentStore::with_demo_data();
        let mine = store.for_user(demo_requester_id());
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|a| a.user_id == demo_requester_id()));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_set_notes() {
        let mut store = AppointmentStore::with_demo_data();
        let id = store.all()[0].id;
        store.set_notes(id, "bring previous x-rays").unwrap();
        assert_eq!(
            store.get(id).unwrap().notes.as_deref(),
            Some("bring previous x-rays")
        );
    }
}
