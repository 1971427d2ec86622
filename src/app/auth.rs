/// Login, signup and logout
use iced::Task;
use std::sync::Arc;

use crate::state::modal::AuthRequest;

use super::{App, AuthMessage, Message};

impl App {
    pub(super) fn update_auth(&mut self, message: AuthMessage) -> Task<Message> {
        match message {
            AuthMessage::Open(tab) => self.auth.open(tab),
            AuthMessage::SwitchTab(tab) => self.auth.switch_tab(tab),
            AuthMessage::Field(field, value) => self.auth.set(field, value),
            AuthMessage::Submit => {
                if let Some(request) = self.auth.begin_submit() {
                    let api = Arc::clone(&self.api);
                    return Task::perform(
                        async move {
                            let result = match request {
                                AuthRequest::Login(login) => api.login(&login).await,
                                AuthRequest::Register(register) => api.register(&register).await,
                            };
                            result.map_err(|error| {
                                tracing::warn!(%error, "auth request failed");
                                error.server_message().map(str::to_string)
                            })
                        },
                        |result| Message::Auth(AuthMessage::Finished(result)),
                    );
                }
            }
            AuthMessage::Finished(result) => {
                if let Some(session) = self.auth.finish_submit(result) {
                    if let Err(error) = self.session.save(&session) {
                        tracing::error!(%error, "failed to persist session");
                    }
                    tracing::info!(user = %session.user.name, role = %session.user.role, "🔓 logged in");
                    // Directory views keep their admin snapshot until remounted
                    self.user = Some(session.user);
                }
            }
            AuthMessage::Close => self.auth.close(),
        }
        Task::none()
    }

    pub(super) fn logout(&mut self) {
        if let Err(error) = self.session.logout() {
            tracing::error!(%error, "failed to clear session");
        }
        self.user = None;
    }
}
