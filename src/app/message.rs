/// Application messages (events)
///
/// Each section has its own message enum; the overlays shared between
/// sections (contact form, lightbox) have theirs too so the same view
/// code can render them anywhere.
use crate::api::types::ContactResponse;
use crate::state::data::{Category, GalleryImage, Photographer, Session};
use crate::state::directory::RequestId;
use crate::state::forms::{AuthField, ContactField, GalleryField, PhotographerField};
use crate::state::modal::AuthTab;

/// Top-level pages, reached from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Landing banner
    #[default]
    Home,
    Photographers,
    Gallery,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Photographers,
        Section::Gallery,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Photographers => "Photographers",
            Section::Gallery => "Gallery",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Header navigation
    ShowSection(Section),
    Photographers(PhotographersMessage),
    Gallery(GalleryMessage),
    Auth(AuthMessage),
    Inquiry(InquiryMessage),
    Logout,
    /// Background image download finished
    ImageLoaded(String, Result<Vec<u8>, String>),
}

/// Contact-a-photographer overlay
#[derive(Debug, Clone)]
pub enum ContactMessage {
    Field(ContactField, String),
    Submit,
    Sent(Result<ContactResponse, String>),
    /// Confirmation delay elapsed
    AutoClose,
    Close,
}

/// Image viewer controls
#[derive(Debug, Clone, Copy)]
pub enum LightboxMessage {
    Next,
    Previous,
    Close,
}

#[derive(Debug, Clone)]
pub enum PhotographersMessage {
    Loaded(RequestId, Result<Vec<Photographer>, String>),
    Retry,
    FilterSelected(String),
    OpenProfile(i64),
    CloseProfile,
    ContactFromProfile,
    OpenContact(i64),
    Contact(ContactMessage),
    OpenPortfolioImage(String),
    Lightbox(LightboxMessage),
    OpenAdd,
    CloseAdd,
    AddField(PhotographerField, String),
    SpecializationSelected(Category),
    AddPortfolioLink,
    RemovePortfolioLink(usize),
    SubmitAdd,
    Added(Result<Photographer, String>),
}

#[derive(Debug, Clone)]
pub enum GalleryMessage {
    Loaded(RequestId, Result<Vec<GalleryImage>, String>),
    Retry,
    FilterSelected(String),
    OpenImage(String),
    Lightbox(LightboxMessage),
    ContactFromLightbox,
    OpenContact(String),
    Contact(ContactMessage),
    OpenAdd,
    CloseAdd,
    AddField(GalleryField, String),
    CategorySelected(Category),
    SubmitAdd,
    Added(Result<GalleryImage, String>),
}

#[derive(Debug, Clone)]
pub enum AuthMessage {
    Open(AuthTab),
    SwitchTab(AuthTab),
    Field(AuthField, String),
    Submit,
    /// Error side holds the backend's own message, when it sent one
    Finished(Result<Session, Option<String>>),
    Close,
}

/// General "get in touch" section
#[derive(Debug, Clone)]
pub enum InquiryMessage {
    Field(ContactField, String),
    Submit,
    Sent(Result<ContactResponse, String>),
}
