//! Common helper UI components

mod confirm_dialog;
mod error_display;
mod loading_spinner;
mod success_banner;

pub use confirm_dialog::ConfirmDialog;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use success_banner::SuccessBanner;
