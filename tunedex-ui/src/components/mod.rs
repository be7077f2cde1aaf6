//! Shared UI components

pub mod admin_song_table;
pub mod button;
pub mod filter_bar;
pub mod helpers;
pub mod modal;
pub mod pagination;
pub mod song_card;
pub mod song_form;
pub mod text_area;
pub mod text_input;

pub use admin_song_table::AdminSongTable;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use filter_bar::FilterBar;
pub use helpers::{ConfirmDialog, ErrorDisplay, LoadingSpinner, SuccessBanner};
pub use modal::Modal;
pub use pagination::PaginationControls;
pub use song_card::SongCard;
pub use song_form::SongFormView;
pub use text_area::TextArea;
pub use text_input::TextInput;
