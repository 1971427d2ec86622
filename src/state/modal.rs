/// Overlay state machines
///
/// Every overlay owns its own visibility. Nothing enforces that only one
/// overlay is visible at a time; the views decide what to close when
/// they hand over from one overlay to another.
///
/// Form-backed overlays move through the same phases:
///
/// ```text
/// Closed --open--> Open --submit--> Submitting --ok--> Success --timer--> Closed
///                                        \--fail--> Error --submit--> Submitting
/// ```
use std::time::Duration;

use crate::api::types::{ContactRequest, ContactResponse};

use super::data::{Photographer, Session, User};
use super::forms::{AuthField, AuthForm, ContactField, ContactForm};

/// Shown when the contact service answers with `success: false`
pub const CONTACT_REJECTED: &str = "Failed to send message. Please try again.";
/// Shown when the contact request itself fails
pub const CONTACT_FAILED: &str = "An error occurred. Please try again later.";
/// Shown when required contact fields are blank
pub const CONTACT_INCOMPLETE: &str = "Please fill in your name, email and message.";

/// Phase of a form-backed overlay
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    Submitting,
    /// Sent; carries the service's confirmation text
    Success(String),
    /// Not sent; carries the inline error text
    Error(String),
}

impl ModalPhase {
    pub fn is_visible(&self) -> bool {
        !matches!(self, ModalPhase::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ModalPhase::Submitting)
    }
}

/// Profile overlay for one photographer
#[derive(Debug, Clone, Default)]
pub struct DetailModal {
    selected: Option<Photographer>,
}

impl DetailModal {
    /// Show the photographer with `id` from the currently visible list.
    /// Does nothing when the id is not there (e.g. filtered out).
    pub fn open(&mut self, id: i64, visible: &[Photographer]) {
        match visible.iter().find(|p| p.id == id) {
            Some(photographer) => self.selected = Some(photographer.clone()),
            None => tracing::debug!(id, "profile not in visible list, ignoring"),
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_visible(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&Photographer> {
        self.selected.as_ref()
    }

    /// Display name handed to the contact overlay
    pub fn contact_target(&self) -> Option<String> {
        self.selected.as_ref().map(|p| p.name.clone())
    }
}

/// Contact-a-photographer overlay
#[derive(Debug, Clone)]
pub struct ContactModal {
    phase: ModalPhase,
    photographer: String,
    form: ContactForm,
    close_delay: Duration,
}

impl Default for ContactModal {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

impl ContactModal {
    pub fn new(close_delay: Duration) -> Self {
        Self {
            phase: ModalPhase::Closed,
            photographer: String::new(),
            form: ContactForm::default(),
            close_delay,
        }
    }

    /// Open for `photographer`, pre-filling name and email from the
    /// logged-in user. Ignored while a submission is in flight.
    pub fn open(&mut self, photographer: impl Into<String>, user: Option<&User>) {
        if self.phase.is_submitting() {
            return;
        }
        self.photographer = photographer.into();
        if let Some(user) = user {
            if self.form.name.is_empty() {
                self.form.name = user.name.clone();
            }
            if self.form.email.is_empty() {
                self.form.email = user.email.clone();
            }
        }
        self.phase = ModalPhase::Open;
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        if self.phase.is_submitting() {
            return;
        }
        self.form.set(field, value);
    }

    /// Move to `Submitting` and hand back the request to send.
    /// Blank fields fail here without touching the network.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if !matches!(self.phase, ModalPhase::Open | ModalPhase::Error(_)) {
            return None;
        }
        if !self.form.is_complete() {
            self.phase = ModalPhase::Error(CONTACT_INCOMPLETE.to_string());
            return None;
        }
        self.phase = ModalPhase::Submitting;
        Some(self.form.to_request(&self.photographer))
    }

    /// Apply the service outcome. Returns the auto-close delay when the
    /// message was delivered.
    pub fn finish_submit(&mut self, result: Result<ContactResponse, String>) -> Option<Duration> {
        if !self.phase.is_submitting() {
            return None;
        }
        match result {
            Ok(response) if response.success => {
                tracing::info!(photographer = %self.photographer, "📨 contact message sent");
                self.form.reset();
                self.phase = ModalPhase::Success(response.message);
                Some(self.close_delay)
            }
            Ok(response) => {
                tracing::warn!(message = %response.message, "contact service rejected message");
                self.phase = ModalPhase::Error(CONTACT_REJECTED.to_string());
                None
            }
            Err(error) => {
                tracing::error!(%error, "contact request failed");
                self.phase = ModalPhase::Error(CONTACT_FAILED.to_string());
                None
            }
        }
    }

    /// Timer expiry after a successful send
    pub fn auto_close(&mut self) {
        if matches!(self.phase, ModalPhase::Success(_)) {
            self.close();
        }
    }

    pub fn close(&mut self) {
        self.form.reset();
        self.phase = ModalPhase::Closed;
    }

    pub fn phase(&self) -> &ModalPhase {
        &self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase.is_visible()
    }

    pub fn photographer(&self) -> &str {
        &self.photographer
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn close_delay(&self) -> Duration {
        self.close_delay
    }
}

/// Admin "add entity" overlay around a form draft `D`
#[derive(Debug, Clone, Default)]
pub struct AddModal<D> {
    visible: bool,
    submitting: bool,
    draft: D,
}

impl<D: Default> AddModal<D> {
    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.submitting = false;
        self.draft = D::default();
    }

    /// Guard against double submits
    pub fn begin_submit(&mut self) -> bool {
        if !self.visible || self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Success closes and resets; failure leaves the form as it was
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.close();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Edits are ignored while a submission is in flight
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        if self.submitting {
            None
        } else {
            Some(&mut self.draft)
        }
    }
}

/// Which form the auth overlay shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

/// Login / signup overlay
#[derive(Debug, Clone, Default)]
pub struct AuthModal {
    visible: bool,
    tab: AuthTab,
    form: AuthForm,
    error: Option<String>,
    loading: bool,
}

/// What the auth overlay wants sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login(crate::api::types::LoginRequest),
    Register(crate::api::types::RegisterRequest),
}

impl AuthModal {
    pub fn open(&mut self, tab: AuthTab) {
        self.visible = true;
        self.switch_tab(tab);
    }

    /// Switching tabs keeps the typed values but clears the error
    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
        self.error = None;
    }

    pub fn set(&mut self, field: AuthField, value: String) {
        self.form.set(field, value);
    }

    /// Validate and produce the request for the active tab.
    /// Validation failures are shown inline and nothing is sent.
    pub fn begin_submit(&mut self) -> Option<AuthRequest> {
        if !self.visible || self.loading {
            return None;
        }
        self.error = None;
        let request = match self.tab {
            AuthTab::Login => self.form.login_request().map(AuthRequest::Login),
            AuthTab::Signup => self.form.register_request().map(AuthRequest::Register),
        };
        match request {
            Ok(request) => {
                self.loading = true;
                Some(request)
            }
            Err(reason) => {
                self.error = Some(reason.to_string());
                None
            }
        }
    }

    /// Apply the backend answer. A session closes the overlay.
    ///
    /// The error side carries the backend's own message, if it sent one;
    /// anything else is shown as the generic failure for the tab. Answers
    /// arriving after the overlay was closed are ignored.
    pub fn finish_submit(&mut self, result: Result<Session, Option<String>>) -> Option<Session> {
        if !self.loading {
            tracing::debug!("ignoring auth answer for a closed dialog");
            return None;
        }
        self.loading = false;
        match result {
            Ok(session) => {
                self.close();
                Some(session)
            }
            Err(message) => {
                let fallback = match self.tab {
                    AuthTab::Login => "Login failed",
                    AuthTab::Signup => "Registration failed",
                };
                self.error = Some(
                    message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| fallback.to_string()),
                );
                None
            }
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.loading = false;
        self.error = None;
        self.form.reset();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn tab(&self) -> AuthTab {
        self.tab
    }

    pub fn form(&self) -> &AuthForm {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Category;
    use crate::state::forms::GalleryDraft;

    fn filled_contact() -> ContactModal {
        let mut modal = ContactModal::new(Duration::from_secs(2));
        modal.open("Ana Ruiz", None);
        modal.set(ContactField::Name, "Jo".to_string());
        modal.set(ContactField::Email, "jo@example.com".to_string());
        modal.set(ContactField::Message, "Are you free in May?".to_string());
        modal
    }

    fn sent(message: &str) -> Result<ContactResponse, String> {
        Ok(ContactResponse {
            success: true,
            message: message.to_string(),
        })
    }

    #[test]
    fn test_open_then_close_leaves_nothing_behind() {
        let mut modal = filled_contact();
        modal.close();

        assert_eq!(modal.phase(), &ModalPhase::Closed);
        assert!(modal.form().is_blank());
        assert!(!modal.is_visible());
    }

    #[test]
    fn test_contact_success_then_auto_close() {
        let mut modal = filled_contact();

        let request = modal.begin_submit().unwrap();
        assert_eq!(request.photographer, "Ana Ruiz");
        assert_eq!(modal.phase(), &ModalPhase::Submitting);

        let delay = modal.finish_submit(sent("Sent"));
        assert_eq!(delay, Some(Duration::from_secs(2)));
        assert_eq!(modal.phase(), &ModalPhase::Success("Sent".to_string()));
        assert!(modal.form().is_blank());

        modal.auto_close();
        assert_eq!(modal.phase(), &ModalPhase::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_closes_only_after_delay() {
        let mut modal = filled_contact();
        modal.begin_submit().unwrap();
        let delay = modal.finish_submit(sent("Sent")).unwrap();

        let started = tokio::time::Instant::now();
        tokio::time::sleep(delay).await;
        assert!(started.elapsed() >= Duration::from_secs(2));

        modal.auto_close();
        assert!(!modal.is_visible());
    }

    #[test]
    fn test_contact_failure_stays_open() {
        let mut modal = filled_contact();
        modal.begin_submit().unwrap();

        let delay = modal.finish_submit(Err("connection refused".to_string()));
        assert_eq!(delay, None);
        assert_eq!(modal.phase(), &ModalPhase::Error(CONTACT_FAILED.to_string()));

        // No timer fired, and a stray one must not close it either
        modal.auto_close();
        assert!(modal.is_visible());
        assert_eq!(modal.form().name, "Jo");
    }

    #[test]
    fn test_contact_rejected_by_service() {
        let mut modal = filled_contact();
        modal.begin_submit().unwrap();
        modal.finish_submit(Ok(ContactResponse {
            success: false,
            message: "nope".to_string(),
        }));
        assert_eq!(modal.phase(), &ModalPhase::Error(CONTACT_REJECTED.to_string()));
    }

    #[test]
    fn test_retry_after_error() {
        let mut modal = filled_contact();
        modal.begin_submit().unwrap();
        modal.finish_submit(Err("timeout".to_string()));

        assert!(modal.begin_submit().is_some());
        assert_eq!(modal.phase(), &ModalPhase::Submitting);
    }

    #[test]
    fn test_blank_contact_fields_fail_without_request() {
        let mut modal = ContactModal::default();
        modal.open("Ana Ruiz", None);

        assert!(modal.begin_submit().is_none());
        assert_eq!(modal.phase(), &ModalPhase::Error(CONTACT_INCOMPLETE.to_string()));
    }

    #[test]
    fn test_submit_requires_open_modal() {
        let mut modal = ContactModal::default();
        assert!(modal.begin_submit().is_none());
        assert_eq!(modal.finish_submit(sent("Sent")), None);
        assert_eq!(modal.phase(), &ModalPhase::Closed);
    }

    #[test]
    fn test_contact_prefills_logged_in_user() {
        let user = User {
            id: "u1".to_string(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            role: "user".to_string(),
        };
        let mut modal = ContactModal::default();
        modal.open("Kim", Some(&user));

        assert_eq!(modal.form().name, "Sam");
        assert_eq!(modal.form().email, "sam@example.com");
        assert_eq!(modal.photographer(), "Kim");
    }

    #[test]
    fn test_detail_lookup_miss_is_noop() {
        let visible = vec![Photographer {
            id: 1,
            name: "Ana Ruiz".to_string(),
            specialization: Category::Portrait,
            bio: String::new(),
            image: String::new(),
            location: String::new(),
            experience: 3,
            projects: 10,
            hourly_rate: 60.0,
            portfolio: Vec::new(),
        }];
        let mut detail = DetailModal::default();

        detail.open(42, &visible);
        assert!(!detail.is_visible());

        detail.open(1, &visible);
        assert_eq!(detail.contact_target(), Some("Ana Ruiz".to_string()));

        detail.close();
        assert!(detail.selected().is_none());
    }

    #[test]
    fn test_add_modal_failure_keeps_draft() {
        let mut modal: AddModal<GalleryDraft> = AddModal::default();
        assert!(!modal.begin_submit());

        modal.open();
        if let Some(draft) = modal.draft_mut() {
            draft.src = "https://img.example/a.jpg".to_string();
        }
        assert!(modal.begin_submit());
        assert!(!modal.begin_submit());
        assert!(modal.draft_mut().is_none());

        modal.finish_submit(false);
        assert!(modal.is_visible());
        assert_eq!(modal.draft().src, "https://img.example/a.jpg");

        assert!(modal.begin_submit());
        modal.finish_submit(true);
        assert!(!modal.is_visible());
        assert_eq!(modal.draft(), &GalleryDraft::default());
    }

    #[test]
    fn test_auth_signup_mismatch_stays_local() {
        let mut modal = AuthModal::default();
        modal.open(AuthTab::Signup);
        modal.set(AuthField::Name, "Ada".to_string());
        modal.set(AuthField::Email, "ada@example.com".to_string());
        modal.set(AuthField::Password, "secret1".to_string());
        modal.set(AuthField::ConfirmPassword, "secret9".to_string());

        assert!(modal.begin_submit().is_none());
        assert_eq!(modal.error(), Some("Passwords do not match"));
        assert!(!modal.is_loading());

        modal.switch_tab(AuthTab::Login);
        assert_eq!(modal.error(), None);
    }

    #[test]
    fn test_auth_failure_message() {
        let mut modal = AuthModal::default();
        modal.open(AuthTab::Login);
        modal.set(AuthField::Email, "ada@example.com".to_string());
        modal.set(AuthField::Password, "pw".to_string());

        assert!(matches!(modal.begin_submit(), Some(AuthRequest::Login(_))));
        assert!(modal.finish_submit(Err(None)).is_none());
        assert_eq!(modal.error(), Some("Login failed"));

        modal.begin_submit();
        assert!(modal.finish_submit(Err(Some("Invalid email or password".to_string()))).is_none());
        assert_eq!(modal.error(), Some("Invalid email or password"));

        modal.switch_tab(AuthTab::Signup);
        modal.set(AuthField::Name, "Ada".to_string());
        modal.set(AuthField::Password, "secret1".to_string());
        modal.set(AuthField::ConfirmPassword, "secret1".to_string());
        assert!(matches!(modal.begin_submit(), Some(AuthRequest::Register(_))));
        modal.finish_submit(Err(Some("  ".to_string())));
        assert_eq!(modal.error(), Some("Registration failed"));
    }

    #[test]
    fn test_auth_answer_after_close_is_ignored() {
        let mut modal = AuthModal::default();
        modal.open(AuthTab::Login);
        modal.set(AuthField::Email, "ada@example.com".to_string());
        modal.set(AuthField::Password, "pw".to_string());
        assert!(modal.begin_submit().is_some());
        modal.close();

        let session = Session {
            token: "late".to_string(),
            user: User {
                id: "u1".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                role: "user".to_string(),
            },
        };
        assert_eq!(modal.finish_submit(Ok(session)), None);
        assert!(!modal.is_visible());
        assert_eq!(modal.error(), None);
    }

    #[test]
    fn test_auth_success_closes_and_resets() {
        let mut modal = AuthModal::default();
        modal.open(AuthTab::Login);
        modal.set(AuthField::Email, "ada@example.com".to_string());
        modal.set(AuthField::Password, "pw".to_string());
        modal.begin_submit();

        let session = Session {
            token: "t0k3n".to_string(),
            user: User {
                id: "u1".to_string(),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                role: "admin".to_string(),
            },
        };
        assert_eq!(modal.finish_submit(Ok(session.clone())), Some(session));
        assert!(!modal.is_visible());
        assert_eq!(modal.form(), &AuthForm::default());
    }
}
