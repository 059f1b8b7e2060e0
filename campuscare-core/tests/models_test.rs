use campuscare_core::models::{
    AppointmentStatus, ChatMessage, ChatRole, ChatTranscript, ServiceType, User, UserRole,
};
use campuscare_core::roles::Capabilities;
use campuscare_core::session;
use campuscare_core::stats::{ServiceBreakdown, StatusBreakdown};
use campuscare_core::store::AppointmentStore;

mod login_tests {
    use super::*;

    #[test]
    fn admin_substring_always_yields_the_administrator() {
        for email in [
            "admin@sfcg.edu.ph",
            "the-admin",
            "admin",
            "nurse.admin@clinic.edu",
        ] {
            assert_eq!(session::login(email).role, UserRole::Admin, "{email}");
        }
    }

    #[test]
    fn other_emails_always_yield_the_requester() {
        for email in ["juan@sfcg.edu.ph", "staff@sfcg.edu.ph", "", "ADMIN@x.y"] {
            let user = session::login(email);
            assert_eq!(user.role, UserRole::Student, "{email}");
            assert_eq!(user.id, User::demo_requester().id);
        }
    }
}

mod capability_tests {
    use super::*;

    #[test]
    fn capabilities_partition_cleanly_by_role() {
        let admin = Capabilities::for_role(UserRole::Admin);
        let student = Capabilities::for_role(UserRole::Student);

        assert!(admin.can_triage && !student.can_triage);
        assert!(student.can_create && !admin.can_create);
        assert!(student.can_chat && !admin.can_chat);
    }
}

mod serialization_tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        for status in [
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
            let back: AppointmentStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn appointment_roundtrips_through_json() {
        let store = AppointmentStore::with_demo_data();
        let appointment = &store.all()[0];

        let json = serde_json::to_string(appointment).unwrap();
        let back: campuscare_core::models::Appointment = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, appointment.id);
        assert_eq!(back.status, appointment.status);
        assert_eq!(back.service_type, appointment.service_type);
        assert_eq!(back.date, appointment.date);
        assert_eq!(back.time, appointment.time);
    }

    #[test]
    fn chat_message_roles_roundtrip() {
        let message = ChatMessage::user("is this contagious?");
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"user\""));
        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back.role, ChatRole::User);
    }
}

mod aggregate_tests {
    use super::*;

    #[test]
    fn breakdowns_always_sum_to_the_snapshot_total() {
        let store = AppointmentStore::with_demo_data();
        let status = StatusBreakdown::from_appointments(store.all());
        let service = ServiceBreakdown::from_appointments(store.all());

        assert_eq!(status.total(), store.len());
        assert_eq!(service.total(), store.len());
        assert_eq!(
            status.entries().iter().map(|(_, n)| n).sum::<usize>(),
            store.len()
        );
    }

    #[test]
    fn service_labels_cover_every_variant() {
        for service in ServiceType::all() {
            assert!(!service.label().is_empty());
        }
    }
}

mod transcript_tests {
    use super::*;

    #[test]
    fn transcript_keeps_conversation_order() {
        let mut transcript = ChatTranscript::greeting("Juan");
        transcript.push(ChatMessage::user("I have a headache"));
        transcript.push(ChatMessage::model("Try resting and hydrating."));

        let roles: Vec<ChatRole> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::Model, ChatRole::User, ChatRole::Model]);
    }
}
