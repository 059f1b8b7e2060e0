mod appointments;
mod chat;
mod help;
mod landing;
mod login;
mod overview;
mod triage;

pub use appointments::AppointmentsView;
pub use chat::ChatView;
pub use help::HelpView;
pub use landing::LandingView;
pub use login::LoginView;
pub use overview::OverviewView;
pub use triage::TriageView;
