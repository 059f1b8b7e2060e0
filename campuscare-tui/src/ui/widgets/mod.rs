mod dialog;
mod footer;
mod header;
mod spinner;

pub use dialog::ConfirmDialog;
pub use footer::Footer;
pub use header::Header;
pub use spinner::Spinner;
