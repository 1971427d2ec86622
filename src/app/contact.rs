/// Contact handling: the per-photographer overlay and the general section
use iced::Task;
use std::sync::Arc;

use crate::state::modal::ContactModal;

use super::{App, ContactMessage, InquiryMessage, Message};

impl App {
    /// Shared contact-overlay handling. `modal` picks which section's
    /// overlay the message is for; `route` sends follow-up messages back.
    pub(super) fn update_contact(
        &mut self,
        message: ContactMessage,
        modal: fn(&mut App) -> &mut ContactModal,
        route: fn(ContactMessage) -> Message,
    ) -> Task<Message> {
        match message {
            ContactMessage::Field(field, value) => modal(self).set(field, value),
            ContactMessage::Submit => {
                if let Some(request) = modal(self).begin_submit() {
                    let api = Arc::clone(&self.api);
                    return Task::perform(
                        async move {
                            api.contact_photographer(&request)
                                .await
                                .map_err(|e| e.to_string())
                        },
                        move |result| route(ContactMessage::Sent(result)),
                    );
                }
            }
            ContactMessage::Sent(result) => {
                if let Some(delay) = modal(self).finish_submit(result) {
                    return Task::perform(tokio::time::sleep(delay), move |_| {
                        route(ContactMessage::AutoClose)
                    });
                }
            }
            ContactMessage::AutoClose => modal(self).auto_close(),
            ContactMessage::Close => modal(self).close(),
        }
        Task::none()
    }

    pub(super) fn update_inquiry(&mut self, message: InquiryMessage) -> Task<Message> {
        match message {
            InquiryMessage::Field(field, value) => self.inquiry.set(field, value),
            InquiryMessage::Submit => {
                if let Some(request) = self.inquiry.begin_submit() {
                    let api = Arc::clone(&self.api);
                    return Task::perform(
                        async move { api.send_inquiry(&request).await.map_err(|e| e.to_string()) },
                        |result| Message::Inquiry(InquiryMessage::Sent(result)),
                    );
                }
            }
            InquiryMessage::Sent(result) => self.inquiry.finish_submit(result),
        }
        Task::none()
    }
}
