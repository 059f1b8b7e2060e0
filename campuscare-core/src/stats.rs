//! Read-only aggregates over an appointment snapshot.
//!
//! Recomputed on demand from the current sequence; no caching. Counts by
//! status and by service type always sum to the total record count.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Appointment, AppointmentStatus, ServiceType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusBreakdown {
    pub fn from_appointments(appointments: &[Appointment]) -> Self {
        let mut breakdown = Self::default();
        for appointment in appointments {
            match appointment.status {
                AppointmentStatus::Pending => breakdown.pending += 1,
                AppointmentStatus::Confirmed => breakdown.confirmed += 1,
                AppointmentStatus::Completed => breakdown.completed += 1,
                AppointmentStatus::Cancelled => breakdown.cancelled += 1,
            }
        }
        breakdown
    }

    pub fn total(&self) -> usize {
        self.pending + self.confirmed + self.completed + self.cancelled
    }

    pub fn entries(&self) -> [(AppointmentStatus, usize); 4] {
        [
            (AppointmentStatus::Pending, self.pending),
            (AppointmentStatus::Confirmed, self.confirmed),
            (AppointmentStatus::Completed, self.completed),
            (AppointmentStatus::Cancelled, self.cancelled),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceBreakdown {
    pub medical: usize,
    pub dental: usize,
    pub counseling: usize,
    pub nutrition: usize,
}

impl ServiceBreakdown {
    pub fn from_appointments(appointments: &[Appointment]) -> Self {
        let mut breakdown = Self::default();
        for appointment in appointments {
            match appointment.service_type {
                ServiceType::Medical => breakdown.medical += 1,
                ServiceType::Dental => breakdown.dental += 1,
                ServiceType::Counseling => breakdown.counseling += 1,
                ServiceType::Nutrition => breakdown.nutrition += 1,
            }
        }
        breakdown
    }

    pub fn total(&self) -> usize {
        self.medical + self.dental + self.counseling + self.nutrition
    }

    pub fn entries(&self) -> [(ServiceType, usize); 4] {
        [
            (ServiceType::Medical, self.medical),
            (ServiceType::Dental, self.dental),
            (ServiceType::Counseling, self.counseling),
            (ServiceType::Nutrition, self.nutrition),
        ]
    }
}

/// The requester overview's "upcoming appointment": the earliest confirmed
/// appointment on or after `today` owned by `user_id`.
pub fn next_confirmed_for(
    appointments: &[Appointment],
    user_id: Uuid,
    today: NaiveDate,
) -> Option<&Appointment> {
    appointments
        .iter()
        .filter(|a| {
            a.user_id == user_id && a.status == AppointmentStatus::Confirmed && a.date >= today
        })
        .min_by_key(|a| (a.date, a.time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentDraft, User};
    use chrono::NaiveTime;

    fn appointment(
        user: &User,
        service: ServiceType,
        status: AppointmentStatus,
        date: &str,
        time: &str,
    ) -> Appointment {
        let mut a = Appointment::new(
            user,
            AppointmentDraft {
                service_type: service,
                date: date.parse().unwrap(),
                time: time.parse::<NaiveTime>().unwrap(),
                reason: "test".to_string(),
            },
        );
        a.status = status;
        a
    }

    fn sample() -> Vec<Appointment> {
        let user = User::demo_requester();
        vec![
            appointment(
                &user,
                ServiceType::Medical,
                AppointmentStatus::Pending,
                "2024-01-10",
                "09:00",
            ),
            appointment(
                &user,
                ServiceType::Medical,
                AppointmentStatus::Confirmed,
                "2024-01-12",
                "10:00",
            ),
            appointment(
                &user,
                ServiceType::Dental,
                AppointmentStatus::Completed,
                "2024-01-05",
                "14:00",
            ),
            appointment(
                &user,
                ServiceType::Counseling,
                AppointmentStatus::Cancelled,
                "2024-01-06",
                "11:00",
            ),
            appointment(
                &user,
                ServiceType::Nutrition,
                AppointmentStatus::Confirmed,
                "2024-01-11",
                "08:30",
            ),
        ]
    }

    #[test]
    fn test_status_breakdown_sums_to_total() {
        let appointments = sample();
        let breakdown = StatusBreakdown::from_appointments(&appointments);
        assert_eq!(breakdown.total(), appointments.len());
        assert_eq!(breakdown.pending, 1);
        assert_eq!(breakdown.confirmed, 2);
        assert_eq!(breakdown.completed, 1);
        assert_eq!(breakdown.cancelled, 1);
    }

    #[test]
    fn test_service_breakdown_sums_to_total() {
        let appointments = sample();
        let breakdown = ServiceBreakdown::from_appointments(&appointments);
        assert_eq!(breakdown.total(), appointments.len());
        assert_eq!(breakdown.medical, 2);
        assert_eq!(breakdown.dental, 1);
    }

    #[test]
    fn test_empty_snapshot() {
        assert_eq!(StatusBreakdown::from_appointments(&[]).total(), 0);
        assert_eq!(ServiceBreakdown::from_appointments(&[]).total(), 0);
    }

    #[test]
    fn test_next_confirmed_picks_earliest_future() {
        let appointments = sample();
        let user_id = User::demo_requester().id;
        let today: NaiveDate = "2024-01-08".parse().unwrap();

        let next = next_confirmed_for(&appointments, user_id, today).unwrap();
        assert_eq!(next.service_type, ServiceType::Nutrition);
        assert_eq!(next.date, "2024-01-11".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn test_next_confirmed_ignores_past_and_other_users() {
        let appointments = sample();
        let today: NaiveDate = "2024-02-01".parse().unwrap();
        let user_id = User::demo_requester().id;

        assert!(next_confirmed_for(&appointments, user_id, today).is_none());
        assert!(next_confirmed_for(&appointments, Uuid::new_v4(), "2024-01-01".parse().unwrap())
            .is_none());
    }
}
