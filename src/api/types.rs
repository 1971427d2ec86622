/// Request and response bodies for the SnapPro REST backend
use serde::{Deserialize, Serialize};

use crate::state::data::{Category, Session, User};

/// Body of `POST /api/photographers` (a photographer without its id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPhotographer {
    pub name: String,
    pub specialization: Category,
    pub bio: String,
    pub image: String,
    pub location: String,
    pub experience: u32,
    pub projects: u32,
    pub hourly_rate: f64,
    pub portfolio: Vec<String>,
}

/// Body of `POST /api/gallery` (a gallery image without its id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGalleryImage {
    pub category: Category,
    pub src: String,
    pub alt: String,
    pub photographer: String,
}

/// Body of `POST /api/photographers/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Display name of the photographer being contacted.
    pub photographer: String,
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub photographer_name: String,
}

/// Answer of both contact endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Flat login/register answer: the token plus the user's profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl AuthResponse {
    pub fn into_session(self) -> Session {
        Session {
            token: self.token,
            user: User {
                id: self.id,
                name: self.name,
                email: self.email,
                role: self.role,
            },
        }
    }
}

/// Error payload the backend sends with non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
