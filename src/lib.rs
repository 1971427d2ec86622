//! SnapPro desktop client.
//!
//! Browse photographers and a photo gallery, filter them by category,
//! contact photographers, and (for admins) add new entries, all against
//! the SnapPro REST backend.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod state;
pub mod ui;
