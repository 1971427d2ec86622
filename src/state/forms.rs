/// Form drafts for the add, contact and auth overlays
///
/// Each draft holds exactly what the user has typed so far.
/// Drafts are reset to their defaults whenever their overlay closes,
/// and converted into wire bodies only at submit time.
use crate::api::types::{
    ContactRequest, InquiryRequest, LoginRequest, NewGalleryImage, NewPhotographer,
    RegisterRequest,
};

use super::data::Category;

/// Minimum password length accepted by the signup form
pub const MIN_PASSWORD_LEN: usize = 6;

/// Recipient used by the general contact form when no subject is given
pub const DEFAULT_INQUIRY_RECIPIENT: &str = "SnapPro Photographer";

/// Editable fields of the add-photographer form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotographerField {
    Name,
    Bio,
    Image,
    Location,
    Experience,
    Projects,
    HourlyRate,
    PortfolioLink,
}

/// Add-photographer form state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhotographerDraft {
    pub name: String,
    pub specialization: Category,
    pub bio: String,
    pub image: String,
    pub location: String,
    // Numeric fields keep the raw text; they are parsed leniently on submit
    pub experience: String,
    pub projects: String,
    pub hourly_rate: String,
    pub portfolio: Vec<String>,
    /// Link being typed before it is added to the portfolio
    pub pending_link: String,
}

impl PhotographerDraft {
    pub fn set(&mut self, field: PhotographerField, value: String) {
        match field {
            PhotographerField::Name => self.name = value,
            PhotographerField::Bio => self.bio = value,
            PhotographerField::Image => self.image = value,
            PhotographerField::Location => self.location = value,
            PhotographerField::Experience => self.experience = value,
            PhotographerField::Projects => self.projects = value,
            PhotographerField::HourlyRate => self.hourly_rate = value,
            PhotographerField::PortfolioLink => self.pending_link = value,
        }
    }

    /// Move the pending link into the portfolio. Blank links are ignored.
    pub fn add_portfolio_link(&mut self) {
        let link = self.pending_link.trim();
        if link.is_empty() {
            return;
        }
        self.portfolio.push(link.to_string());
        self.pending_link.clear();
    }

    pub fn remove_portfolio_link(&mut self, index: usize) {
        if index < self.portfolio.len() {
            self.portfolio.remove(index);
        }
    }

    /// All required text fields are filled in
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.bio, &self.image, &self.location]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn to_payload(&self) -> NewPhotographer {
        NewPhotographer {
            name: self.name.trim().to_string(),
            specialization: self.specialization,
            bio: self.bio.trim().to_string(),
            image: self.image.trim().to_string(),
            location: self.location.trim().to_string(),
            experience: parse_count(&self.experience),
            projects: parse_count(&self.projects),
            hourly_rate: parse_rate(&self.hourly_rate),
            portfolio: self.portfolio.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Editable fields of the add-gallery-item form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryField {
    Src,
    Alt,
    Photographer,
}

/// Add-gallery-item form state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryDraft {
    pub category: Category,
    pub src: String,
    pub alt: String,
    pub photographer: String,
}

impl GalleryDraft {
    pub fn set(&mut self, field: GalleryField, value: String) {
        match field {
            GalleryField::Src => self.src = value,
            GalleryField::Alt => self.alt = value,
            GalleryField::Photographer => self.photographer = value,
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.src, &self.alt, &self.photographer]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn to_payload(&self) -> NewGalleryImage {
        NewGalleryImage {
            category: self.category,
            src: self.src.trim().to_string(),
            alt: self.alt.trim().to_string(),
            photographer: self.photographer.trim().to_string(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Fields shared by the contact forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// Contact-a-photographer form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Subject has no place in this form and is ignored
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
            ContactField::Subject => {}
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_request(&self, photographer: &str) -> ContactRequest {
        ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            photographer: photographer.to_string(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// General "get in touch" form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl InquiryForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    pub fn to_request(&self) -> InquiryRequest {
        let subject = self.subject.trim();
        InquiryRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            photographer_name: if subject.is_empty() {
                DEFAULT_INQUIRY_RECIPIENT.to_string()
            } else {
                subject.to_string()
            },
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Fields of the login/signup forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Login and signup share one set of inputs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthForm {
    pub fn set(&mut self, field: AuthField, value: String) {
        match field {
            AuthField::Name => self.name = value,
            AuthField::Email => self.email = value,
            AuthField::Password => self.password = value,
            AuthField::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn login_request(&self) -> Result<LoginRequest, &'static str> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err("Please enter your email and password");
        }
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    /// Validate the signup inputs before any network call
    pub fn register_request(&self) -> Result<RegisterRequest, &'static str> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err("Please fill in all fields");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 6 characters");
        }
        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Whole non-negative number; anything unparsable counts as 0
fn parse_count(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

fn parse_rate(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|rate| rate.is_finite() && *rate >= 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_links() {
        let mut draft = PhotographerDraft::default();

        draft.set(PhotographerField::PortfolioLink, "   ".to_string());
        draft.add_portfolio_link();
        assert!(draft.portfolio.is_empty());

        draft.set(PhotographerField::PortfolioLink, " https://img.example/a.jpg ".to_string());
        draft.add_portfolio_link();
        draft.set(PhotographerField::PortfolioLink, "https://img.example/b.jpg".to_string());
        draft.add_portfolio_link();
        assert_eq!(draft.portfolio, vec!["https://img.example/a.jpg", "https://img.example/b.jpg"]);
        assert!(draft.pending_link.is_empty());

        draft.remove_portfolio_link(0);
        draft.remove_portfolio_link(9);
        assert_eq!(draft.portfolio, vec!["https://img.example/b.jpg"]);
    }

    #[test]
    fn test_numeric_fields_parse_leniently() {
        let mut draft = PhotographerDraft::default();
        draft.set(PhotographerField::Experience, "12".to_string());
        draft.set(PhotographerField::Projects, "lots".to_string());
        draft.set(PhotographerField::HourlyRate, "-5".to_string());

        let payload = draft.to_payload();
        assert_eq!(payload.experience, 12);
        assert_eq!(payload.projects, 0);
        assert_eq!(payload.hourly_rate, 0.0);

        draft.set(PhotographerField::HourlyRate, "72.5".to_string());
        assert_eq!(draft.to_payload().hourly_rate, 72.5);
    }

    #[test]
    fn test_photographer_draft_completeness_and_reset() {
        let mut draft = PhotographerDraft::default();
        assert!(!draft.is_complete());

        draft.set(PhotographerField::Name, "Lee".to_string());
        draft.set(PhotographerField::Bio, "Events".to_string());
        draft.set(PhotographerField::Image, "https://img.example/lee.jpg".to_string());
        draft.set(PhotographerField::Location, "Seoul".to_string());
        assert!(draft.is_complete());

        draft.reset();
        assert_eq!(draft, PhotographerDraft::default());
    }

    #[test]
    fn test_payload_serializes_camel_case() {
        let mut draft = PhotographerDraft::default();
        draft.set(PhotographerField::HourlyRate, "40".to_string());
        let json = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(json["hourlyRate"], 40.0);
        assert_eq!(json["specialization"], "wedding");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_inquiry_defaults_recipient() {
        let mut form = InquiryForm::default();
        form.set(ContactField::Name, "Jo".to_string());
        form.set(ContactField::Email, "jo@example.com".to_string());
        form.set(ContactField::Message, "Hello".to_string());
        assert_eq!(form.to_request().photographer_name, DEFAULT_INQUIRY_RECIPIENT);

        form.set(ContactField::Subject, "Wedding quote".to_string());
        assert_eq!(form.to_request().photographer_name, "Wedding quote");
    }

    #[test]
    fn test_signup_validation() {
        let mut form = AuthForm::default();
        form.set(AuthField::Name, "Ada".to_string());
        form.set(AuthField::Email, "ada@example.com".to_string());
        form.set(AuthField::Password, "secret1".to_string());
        form.set(AuthField::ConfirmPassword, "secret2".to_string());
        assert_eq!(form.register_request(), Err("Passwords do not match"));

        form.set(AuthField::Password, "abc".to_string());
        form.set(AuthField::ConfirmPassword, "abc".to_string());
        assert_eq!(form.register_request(), Err("Password must be at least 6 characters"));

        form.set(AuthField::Password, "secret1".to_string());
        form.set(AuthField::ConfirmPassword, "secret1".to_string());
        let request = form.register_request().unwrap();
        assert_eq!(request.name, "Ada");
    }

    #[test]
    fn test_login_requires_credentials() {
        let mut form = AuthForm::default();
        assert!(form.login_request().is_err());
        form.set(AuthField::Email, " ada@example.com ".to_string());
        form.set(AuthField::Password, "pw".to_string());
        assert_eq!(form.login_request().unwrap().email, "ada@example.com");
    }
}
