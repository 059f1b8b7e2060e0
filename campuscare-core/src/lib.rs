#![allow(clippy::len_zero, dead_code, unused_imports)]

pub mod assistant;
pub mod config;
pub mod error;
pub mod models;
pub mod roles;
pub mod session;
pub mod stats;
pub mod store;

pub use assistant::{
    GeminiAssistant, WellnessAssistant, ANSWER_EMPTY, ANSWER_FALLBACK, TIP_EMPTY, TIP_FALLBACK,
};
pub use config::{get_config_dir, AssistantConfig, LoggingConfig, PortalConfig, TuiConfig};
pub use error::{PortalError, PortalResult};
pub use models::{
    service_catalog, Appointment, AppointmentDraft, AppointmentStatus, ChatMessage, ChatRole,
    ChatTranscript, ServiceInfo, ServiceType, User, UserRole,
};
pub use roles::Capabilities;
pub use session::Session;
pub use stats::{next_confirmed_for, ServiceBreakdown, StatusBreakdown};
pub use store::AppointmentStore;
