/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Category filtering (filter.rs)
/// - Directory lists with load status (directory.rs)
/// - Overlay state machines (modal.rs) and their form drafts (forms.rs)
/// - The image viewer (lightbox.rs)
/// - The photographer and gallery views that wire those together
/// - The general contact section (inquiry.rs)
/// - Durable login session (session.rs)
/// - Downloaded image handles (images.rs)

pub mod data;
pub mod directory;
pub mod filter;
pub mod forms;
pub mod gallery;
pub mod images;
pub mod inquiry;
pub mod lightbox;
pub mod modal;
pub mod photographers;
pub mod session;
