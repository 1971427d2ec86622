/// Photographer directory view state
///
/// Wires the photographer list, its filter, the profile overlay, the
/// contact overlay, the portfolio lightbox and the admin add form.
use std::time::Duration;

use super::data::{Photographer, User};
use super::directory::Directory;
use super::forms::PhotographerDraft;
use super::lightbox::Lightbox;
use super::modal::{AddModal, ContactModal, DetailModal};

#[derive(Debug, Clone)]
pub struct PhotographersView {
    pub directory: Directory<Photographer>,
    pub detail: DetailModal,
    pub contact: ContactModal,
    pub lightbox: Lightbox,
    pub add: AddModal<PhotographerDraft>,
}

impl PhotographersView {
    pub fn new(is_admin: bool, contact_close_delay: Duration) -> Self {
        Self {
            directory: Directory::new(is_admin),
            detail: DetailModal::default(),
            contact: ContactModal::new(contact_close_delay),
            lightbox: Lightbox::new(),
            add: AddModal::default(),
        }
    }

    /// Filtering is client-side over the full list
    pub fn set_filter(&mut self, tag: &str) {
        self.directory.set_filter(tag);
    }

    /// Open the profile overlay for a visible photographer
    pub fn open_profile(&mut self, id: i64) {
        self.detail.open(id, self.directory.visible());
    }

    /// "Contact Photographer" inside the profile overlay
    pub fn contact_from_profile(&mut self, user: Option<&User>) {
        if let Some(name) = self.detail.contact_target() {
            self.contact.open(name, user);
        }
    }

    /// "Contact" button on a card
    pub fn open_contact(&mut self, id: i64, user: Option<&User>) {
        if let Some(photographer) = self.directory.find_visible(id) {
            let name = photographer.name.clone();
            self.contact.open(name, user);
        }
    }

    /// Portfolio thumbnail inside the profile overlay
    pub fn open_portfolio_image(&mut self, src: &str) {
        if let Some(photographer) = self.detail.selected() {
            let portfolio = photographer.portfolio.clone();
            self.lightbox.open(portfolio, src);
        }
    }

    /// Apply the result of an admin add. Returns whether it succeeded.
    pub fn photographer_added(&mut self, result: Result<Photographer, String>) -> bool {
        match result {
            Ok(photographer) => {
                tracing::info!(id = photographer.id, name = %photographer.name, "➕ photographer added");
                self.directory.append(photographer);
                self.add.finish_submit(true);
                true
            }
            Err(error) => {
                tracing::error!(%error, "failed to add photographer");
                self.add.finish_submit(false);
                false
            }
        }
    }
}
