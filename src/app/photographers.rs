/// Photographer directory handling
use iced::Task;
use std::sync::Arc;

use super::{App, LightboxMessage, Message, PhotographersMessage};

fn wrap(message: PhotographersMessage) -> Message {
    Message::Photographers(message)
}

impl App {
    /// Fetch the full photographer list; filtering stays client-side
    pub(super) fn fetch_photographers(&mut self) -> Task<Message> {
        let request = self.photographers.directory.begin_fetch();
        let api = Arc::clone(&self.api);
        Task::perform(
            async move { api.list_photographers().await.map_err(|e| e.to_string()) },
            move |result| wrap(PhotographersMessage::Loaded(request, result)),
        )
    }

    pub(super) fn update_photographers(&mut self, message: PhotographersMessage) -> Task<Message> {
        let view = &mut self.photographers;
        match message {
            PhotographersMessage::Loaded(request, result) => {
                if view.directory.finish_fetch(request, result) {
                    let urls = view.directory.items().iter().map(|p| p.image.clone()).collect();
                    return self.load_images(urls);
                }
            }
            PhotographersMessage::Retry => return self.fetch_photographers(),
            PhotographersMessage::FilterSelected(tag) => view.set_filter(&tag),
            PhotographersMessage::OpenProfile(id) => {
                view.open_profile(id);
                if let Some(photographer) = view.detail.selected() {
                    let urls = photographer.portfolio.clone();
                    return self.load_images(urls);
                }
            }
            PhotographersMessage::CloseProfile => view.detail.close(),
            PhotographersMessage::ContactFromProfile => {
                view.contact_from_profile(self.user.as_ref());
            }
            PhotographersMessage::OpenContact(id) => view.open_contact(id, self.user.as_ref()),
            PhotographersMessage::Contact(message) => {
                return self.update_contact(message, |app| &mut app.photographers.contact, |m| {
                    wrap(PhotographersMessage::Contact(m))
                });
            }
            PhotographersMessage::OpenPortfolioImage(src) => view.open_portfolio_image(&src),
            PhotographersMessage::Lightbox(message) => match message {
                LightboxMessage::Next => view.lightbox.next(),
                LightboxMessage::Previous => view.lightbox.previous(),
                LightboxMessage::Close => view.lightbox.close(),
            },
            PhotographersMessage::OpenAdd => {
                if view.directory.is_admin() {
                    view.add.open();
                }
            }
            PhotographersMessage::CloseAdd => view.add.close(),
            PhotographersMessage::AddField(field, value) => {
                if let Some(draft) = view.add.draft_mut() {
                    draft.set(field, value);
                }
            }
            PhotographersMessage::SpecializationSelected(category) => {
                if let Some(draft) = view.add.draft_mut() {
                    draft.specialization = category;
                }
            }
            PhotographersMessage::AddPortfolioLink => {
                if let Some(draft) = view.add.draft_mut() {
                    draft.add_portfolio_link();
                }
            }
            PhotographersMessage::RemovePortfolioLink(index) => {
                if let Some(draft) = view.add.draft_mut() {
                    draft.remove_portfolio_link(index);
                }
            }
            PhotographersMessage::SubmitAdd => return self.submit_photographer(),
            PhotographersMessage::Added(result) => {
                if view.photographer_added(result) {
                    let urls = view.directory.items().iter().map(|p| p.image.clone()).collect();
                    return self.load_images(urls);
                }
            }
        }
        Task::none()
    }

    fn submit_photographer(&mut self) -> Task<Message> {
        let add = &mut self.photographers.add;
        if !add.draft().is_complete() {
            tracing::warn!("add photographer: required fields missing");
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
                api.add_photographer(token.as_deref(), &payload)
                    .await
                    .map_err(|e| e.to_string())
            },
            |result| wrap(PhotographersMessage::Added(result)),
        )
    }
}
