/// SnapPro application
///
/// Elm-style: `App` owns every piece of state, `update` applies one
/// `Message` and may return a `Task` for background work, `view` renders.
/// Section-specific handling lives in the submodules.
use iced::widget::column;
use iced::{Element, Length, Task, Theme};
use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::Config;
use crate::state::data::User;
use crate::state::gallery::GalleryView;
use crate::state::images::ImageCache;
use crate::state::inquiry::InquirySection;
use crate::state::modal::AuthModal;
use crate::state::photographers::PhotographersView;
use crate::state::session::SessionStore;
use crate::ui;

mod auth;
mod contact;
mod gallery;
pub mod message;
mod photographers;

pub use message::{
    AuthMessage, ContactMessage, GalleryMessage, InquiryMessage, LightboxMessage, Message,
    PhotographersMessage, Section,
};

/// Main application state
pub struct App {
    config: Config,
    api: Arc<ApiClient>,
    /// Durable login session
    session: SessionStore,
    /// Logged-in user, if the store holds a token
    user: Option<User>,
    section: Section,
    auth: AuthModal,
    photographers: PhotographersView,
    gallery: GalleryView,
    inquiry: InquirySection,
    images: ImageCache,
}

impl App {
    /// Build the app and start loading both directories
    pub fn new(config: Config, api: ApiClient, session: SessionStore) -> (Self, Task<Message>) {
        let user = if session.is_authenticated() {
            session.current_user()
        } else {
            None
        };
        let is_admin = user.as_ref().is_some_and(User::is_admin);
        let delay = config.contact_close_delay();

        tracing::info!(
            api = %api.base_url(),
            user = user.as_ref().map(|u| u.email.as_str()).unwrap_or("-"),
            is_admin,
            "📷 SnapPro started"
        );

        let mut app = App {
            config,
            api: Arc::new(api),
            session,
            user,
            section: Section::default(),
            auth: AuthModal::default(),
            photographers: PhotographersView::new(is_admin, delay),
            gallery: GalleryView::new(is_admin, delay),
            inquiry: InquirySection::default(),
            images: ImageCache::new(),
        };

        let task = Task::batch([app.fetch_photographers(), app.fetch_gallery()]);
        (app, task)
    }

    /// Handle application messages and update state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowSection(section) => self.show_section(section),
            Message::Photographers(message) => self.update_photographers(message),
            Message::Gallery(message) => self.update_gallery(message),
            Message::Auth(message) => self.update_auth(message),
            Message::Inquiry(message) => self.update_inquiry(message),
            Message::Logout => {
                self.logout();
                Task::none()
            }
            Message::ImageLoaded(url, result) => {
                self.images.complete(url, result);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = ui::header::view(self.section, self.user.as_ref());

        let body: Element<'_, Message> = match self.section {
            Section::Home => ui::hero::view(),
            Section::Photographers => {
                ui::photographers::view(&self.photographers, &self.images).map(Message::Photographers)
            }
            Section::Gallery => ui::gallery::view(&self.gallery, &self.images).map(Message::Gallery),
            Section::Contact => ui::contact::view(&self.inquiry).map(Message::Inquiry),
        };

        let page: Element<'_, Message> = column![header, body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        if self.auth.is_visible() {
            ui::modals::auth(page, &self.auth)
        } else {
            page
        }
    }

    /// Set the application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Switching to another directory section mounts it afresh: a new
    /// fetch, and a new admin snapshot from the current session.
    fn show_section(&mut self, section: Section) -> Task<Message> {
        if section == self.section {
            return Task::none();
        }
        self.section = section;

        let is_admin = self.user.as_ref().is_some_and(User::is_admin);
        let delay = self.config.contact_close_delay();
        match section {
            Section::Photographers => {
                self.photographers = PhotographersView::new(is_admin, delay);
                self.fetch_photographers()
            }
            Section::Gallery => {
                self.gallery = GalleryView::new(is_admin, delay);
                self.fetch_gallery()
            }
            Section::Home | Section::Contact => Task::none(),
        }
    }

    /// Token for admin requests. Storage errors count as logged out.
    fn token(&self) -> Option<String> {
        match self.session.token() {
            Ok(token) => token,
            Err(error) => {
                tracing::error!(%error, "failed to read session token");
                None
            }
        }
    }

    /// Start downloads for every URL not seen before
    fn load_images(&mut self, urls: Vec<String>) -> Task<Message> {
        let wanted = self.images.request(urls.iter().map(String::as_str));
        if wanted.is_empty() {
            return Task::none();
        }
        tracing::debug!(count = wanted.len(), "🖼️ downloading images");

        Task::batch(wanted.into_iter().map(|url| {
            let api = Arc::clone(&self.api);
            Task::perform(
                async move {
                    let result = api.fetch_image(&url).await.map_err(|e| e.to_string());
                    (url, result)
                },
                |(url, result)| Message::ImageLoaded(url, result),
            )
        }))
    }
}

/// Run the window until it is closed
pub fn run(config: Config, api: ApiClient, session: SessionStore) -> iced::Result {
    iced::application("SnapPro", App::update, App::view)
        .theme(App::theme)
        .centered()
        .run_with(move || App::new(config, api, session))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ContactResponse;
    use crate::state::data::{Category, Photographer, Session};
    use crate::state::forms::ContactField;
    use crate::state::modal::{AuthTab, ModalPhase};
    use std::time::Duration;

    fn app() -> App {
        let api = ApiClient::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
        let session = SessionStore::in_memory().unwrap();
        let (app, _) = App::new(Config::default(), api, session);
        app
    }

    fn admin_session() -> Session {
        Session {
            token: "t0k3n".to_string(),
            user: User {
                id: "u1".to_string(),
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                role: "admin".to_string(),
            },
        }
    }

    fn photographer(id: i64) -> Photographer {
        Photographer {
            id,
            name: "Lee".to_string(),
            specialization: Category::Wedding,
            bio: "Weddings across the coast".to_string(),
            image: "https://img.example/lee.jpg".to_string(),
            location: "Porto".to_string(),
            experience: 4,
            projects: 30,
            hourly_rate: 90.0,
            portfolio: Vec::new(),
        }
    }

    fn fill_contact(app: &mut App, route: fn(ContactMessage) -> Message) {
        for (field, value) in [
            (ContactField::Name, "Jo"),
            (ContactField::Email, "jo@example.com"),
            (ContactField::Message, "Are you free in June?"),
        ] {
            let _ = app.update(route(ContactMessage::Field(field, value.to_string())));
        }
    }

    fn login(app: &mut App) {
        let _ = app.update(Message::Auth(AuthMessage::Open(AuthTab::Login)));
        let _ = app.update(Message::Auth(AuthMessage::Field(
            crate::state::forms::AuthField::Email,
            "sam@example.com".to_string(),
        )));
        let _ = app.update(Message::Auth(AuthMessage::Field(
            crate::state::forms::AuthField::Password,
            "pw".to_string(),
        )));
        let _ = app.update(Message::Auth(AuthMessage::Submit));
        let _ = app.update(Message::Auth(AuthMessage::Finished(Ok(admin_session()))));
    }

    #[test]
    fn test_admin_login_keeps_snapshot_until_remount() {
        let mut app = app();
        assert!(!app.photographers.directory.is_admin());
        assert!(!app.gallery.directory.is_admin());

        login(&mut app);

        assert!(app.user.as_ref().is_some_and(User::is_admin));
        assert!(app.session.is_authenticated());
        assert!(!app.auth.is_visible());
        assert!(!app.photographers.directory.is_admin());
        assert!(!app.gallery.directory.is_admin());

        // Admin-only action is still refused by the old snapshot
        let _ = app.update(Message::Photographers(PhotographersMessage::OpenAdd));
        assert!(!app.photographers.add.is_visible());

        let _ = app.update(Message::ShowSection(Section::Gallery));
        assert!(app.gallery.directory.is_admin());
        assert!(!app.photographers.directory.is_admin());

        let _ = app.update(Message::ShowSection(Section::Photographers));
        assert!(app.photographers.directory.is_admin());
    }

    #[test]
    fn test_starts_on_home_then_explores_photographers() {
        let mut app = app();
        assert_eq!(app.section, Section::Home);
        assert_eq!(Section::ALL[0], Section::Home);

        let _ = app.update(Message::ShowSection(Section::Photographers));
        assert_eq!(app.section, Section::Photographers);
        assert!(app.photographers.directory.is_loading());
    }

    #[test]
    fn test_reselecting_current_section_keeps_view() {
        let mut app = app();
        assert_eq!(app.section, Section::Home);
        let _ = app.update(Message::ShowSection(Section::Photographers));
        login(&mut app);

        let _ = app.update(Message::ShowSection(Section::Photographers));
        assert!(!app.photographers.directory.is_admin());
    }

    #[test]
    fn test_logout_keeps_admin_snapshot() {
        let mut app = app();
        login(&mut app);
        let _ = app.update(Message::ShowSection(Section::Gallery));

        let _ = app.update(Message::Logout);
        assert!(app.user.is_none());
        assert!(!app.session.is_authenticated());
        assert!(app.gallery.directory.is_admin());
    }

    #[test]
    fn test_auth_transport_failure_shows_generic_message() {
        let mut app = app();
        let _ = app.update(Message::Auth(AuthMessage::Open(AuthTab::Login)));
        let _ = app.update(Message::Auth(AuthMessage::Field(
            crate::state::forms::AuthField::Email,
            "sam@example.com".to_string(),
        )));
        let _ = app.update(Message::Auth(AuthMessage::Field(
            crate::state::forms::AuthField::Password,
            "pw".to_string(),
        )));
        let _ = app.update(Message::Auth(AuthMessage::Submit));
        let _ = app.update(Message::Auth(AuthMessage::Finished(Err(None))));

        assert_eq!(app.auth.error(), Some("Login failed"));
        assert!(app.user.is_none());
    }

    #[tokio::test]
    async fn test_contact_auto_close_reaches_its_own_section() {
        let mut app = app();
        let request = app.photographers.directory.begin_fetch();
        let _ = app.update(Message::Photographers(PhotographersMessage::Loaded(
            request,
            Ok(vec![photographer(7)]),
        )));

        let _ = app.update(Message::Photographers(PhotographersMessage::OpenContact(7)));
        let _ = app.update(Message::Gallery(GalleryMessage::OpenContact("Kim".to_string())));
        assert_eq!(app.photographers.contact.photographer(), "Lee");
        assert_eq!(app.gallery.contact.photographer(), "Kim");

        let route: fn(ContactMessage) -> Message =
            |m| Message::Photographers(PhotographersMessage::Contact(m));
        fill_contact(&mut app, route);
        let _ = app.update(route(ContactMessage::Submit));
        assert!(app.photographers.contact.phase().is_submitting());

        let _ = app.update(route(ContactMessage::Sent(Ok(ContactResponse {
            success: true,
            message: "Message sent".to_string(),
        }))));
        assert_eq!(
            app.photographers.contact.phase(),
            &ModalPhase::Success("Message sent".to_string())
        );

        // The gallery's timer must not close the photographers' dialog
        let _ = app.update(Message::Gallery(GalleryMessage::Contact(ContactMessage::AutoClose)));
        assert!(app.photographers.contact.is_visible());
        assert!(app.gallery.contact.is_visible());

        let _ = app.update(route(ContactMessage::AutoClose));
        assert!(!app.photographers.contact.is_visible());
        assert!(app.gallery.contact.is_visible());
    }
}
