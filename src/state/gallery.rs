/// Gallery view state
///
/// Unlike the photographer list, the gallery re-fetches from the backend
/// (`?category=`) whenever the filter changes. The visible list is still
/// filtered locally, so items added by an admin follow the active tag.
use std::time::Duration;

use super::data::{GalleryImage, User};
use super::directory::{Directory, RequestId};
use super::forms::GalleryDraft;
use super::lightbox::Lightbox;
use super::modal::{AddModal, ContactModal};

#[derive(Debug, Clone)]
pub struct GalleryView {
    pub directory: Directory<GalleryImage>,
    pub lightbox: Lightbox,
    pub contact: ContactModal,
    pub add: AddModal<GalleryDraft>,
}

impl GalleryView {
    pub fn new(is_admin: bool, contact_close_delay: Duration) -> Self {
        Self {
            directory: Directory::new(is_admin),
            lightbox: Lightbox::new(),
            contact: ContactModal::new(contact_close_delay),
            add: AddModal::default(),
        }
    }

    /// Change the filter and start the matching server-side fetch
    pub fn set_filter(&mut self, tag: &str) -> RequestId {
        self.directory.set_filter(tag);
        self.directory.begin_fetch()
    }

    /// Open the lightbox over the visible images, starting at `src`
    pub fn open_image(&mut self, src: &str) {
        let sources = self
            .directory
            .visible()
            .iter()
            .map(|image| image.src.clone())
            .collect();
        self.lightbox.open(sources, src);
    }

    /// Photographer credited for the image the lightbox shows
    pub fn current_credit(&self) -> Option<&str> {
        let current = self.lightbox.current()?;
        self.directory
            .visible()
            .iter()
            .find(|image| image.src == current)
            .map(|image| image.photographer.as_str())
    }

    /// "Contact Photographer" in the lightbox: hand over to the contact overlay
    pub fn contact_from_lightbox(&mut self, user: Option<&User>) {
        if let Some(name) = self.current_credit().map(str::to_string) {
            self.lightbox.close();
            self.contact.open(name, user);
        }
    }

    /// "Contact" button on a tile
    pub fn open_contact(&mut self, photographer: &str, user: Option<&User>) {
        self.contact.open(photographer, user);
    }

    /// Apply the result of an admin add. Returns whether it succeeded.
    pub fn image_added(&mut self, result: Result<GalleryImage, String>) -> bool {
        match result {
            Ok(image) => {
                tracing::info!(id = image.id, category = %image.category, "➕ gallery item added");
                self.directory.append(image);
                self.add.finish_submit(true);
                true
            }
            Err(error) => {
                tracing::error!(%error, "failed to add gallery item");
                self.add.finish_submit(false);
                false
            }
        }
    }
}
