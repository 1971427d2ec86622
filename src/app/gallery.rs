/// Gallery handling
use iced::Task;
use std::sync::Arc;

use crate::state::directory::RequestId;

use super::{App, GalleryMessage, LightboxMessage, Message};

fn wrap(message: GalleryMessage) -> Message {
    Message::Gallery(message)
}

impl App {
    /// Fetch the gallery narrowed to the active filter
    pub(super) fn fetch_gallery(&mut self) -> Task<Message> {
        let request = self.gallery.directory.begin_fetch();
        self.request_gallery(request)
    }

    fn request_gallery(&self, request: RequestId) -> Task<Message> {
        let category = self.gallery.directory.active_filter().tag().to_string();
        let api = Arc::clone(&self.api);
        Task::perform(
            async move {
                api.list_gallery(Some(&category))
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| wrap(GalleryMessage::Loaded(request, result)),
        )
    }

    pub(super) fn update_gallery(&mut self, message: GalleryMessage) -> Task<Message> {
        let view = &mut self.gallery;
        match message {
            GalleryMessage::Loaded(request, result) => {
                if view.directory.finish_fetch(request, result) {
                    let urls = view.directory.items().iter().map(|i| i.src.clone()).collect();
                    return self.load_images(urls);
                }
            }
            GalleryMessage::Retry => return self.fetch_gallery(),
            GalleryMessage::FilterSelected(tag) => {
                let request = view.set_filter(&tag);
                return self.request_gallery(request);
            }
            GalleryMessage::OpenImage(src) => view.open_image(&src),
            GalleryMessage::Lightbox(message) => match message {
                LightboxMessage::Next => view.lightbox.next(),
                LightboxMessage::Previous => view.lightbox.previous(),
                LightboxMessage::Close => view.lightbox.close(),
            },
            GalleryMessage::ContactFromLightbox => view.contact_from_lightbox(self.user.as_ref()),
            GalleryMessage::OpenContact(name) => view.open_contact(&name, self.user.as_ref()),
            GalleryMessage::Contact(message) => {
                return self.update_contact(message, |app| &mut app.gallery.contact, |m| {
                    wrap(GalleryMessage::Contact(m))
                });
            }
            GalleryMessage::OpenAdd => {
                if view.directory.is_admin() {
                    view.add.open();
                }
            }
            GalleryMessage::CloseAdd => view.add.close(),
            GalleryMessage::AddField(field, value) => {
                if let Some(draft) = view.add.draft_mut() {
                    draft.set(field, value);
                }
            }
            GalleryMessage::CategorySelected(category) => {
                if let Some(draft) = view.add.draft_mut() {
                    draft.category = category;
                }
            }
            GalleryMessage::SubmitAdd => return self.submit_gallery_item(),
            GalleryMessage::Added(result) => {
                if view.image_added(result) {
                    let urls = view.directory.items().iter().map(|i| i.src.clone()).collect();
                    return self.load_images(urls);
                }
            }
        }
        Task::none()
    }

    fn submit_gallery_item(&mut self) -> Task<Message> {
        let add = &mut self.gallery.add;
        if !add.draft().is_complete() {
            tracing::warn!("add gallery item: required fields missing");
            return Task::none();
        }
        if !add.begin_submit() {
            return Task::none();
        }

        let payload = add.draft().to_payload();
        let token = self.token();
        let api = Arc::clone(&self.api);
        Task::perform(
            async move {
                api.add_gallery_item(token.as_deref(), &payload)
                    .await
                    .map_err(|e| e.to_string())
            },
            |result| wrap(GalleryMessage::Added(result)),
        )
    }
}
