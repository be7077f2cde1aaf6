//! tunedex-ui - Shared UI types and components for tunedex
//!
//! Contains display types, state stores, and pure view components used by
//! the web app. View components take props and callbacks only; network
//! access and routing live in tunedex-web.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
