mod appointment;
mod chat;
mod user;

pub use appointment::{
    service_catalog, Appointment, AppointmentDraft, AppointmentStatus, ServiceInfo, ServiceType,
};
pub use chat::{ChatMessage, ChatRole, ChatTranscript};
pub use user::{demo_admin_id, demo_requester_id, User, UserRole};
