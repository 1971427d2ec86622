/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the REST backend and the UI layer.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Photography category shared by photographers and gallery images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Wedding,
    Portrait,
    Landscape,
    Event,
    Fashion,
    /// Anything the backend sends outside the fixed set.
    /// Only the "all" filter ever shows these.
    #[serde(other)]
    Other,
}

impl Category {
    /// The selectable categories, in the order the filter bar shows them
    pub const ALL: [Category; 5] = [
        Category::Wedding,
        Category::Portrait,
        Category::Landscape,
        Category::Event,
        Category::Fashion,
    ];

    /// Wire tag (e.g. "wedding")
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Wedding => "wedding",
            Category::Portrait => "portrait",
            Category::Landscape => "landscape",
            Category::Event => "event",
            Category::Fashion => "fashion",
            Category::Other => "other",
        }
    }

    /// Display label with the first letter capitalized
    pub fn label(&self) -> &'static str {
        match self {
            Category::Wedding => "Wedding",
            Category::Portrait => "Portrait",
            Category::Landscape => "Landscape",
            Category::Event => "Event",
            Category::Fashion => "Fashion",
            Category::Other => "Other",
        }
    }

    /// Parse a wire tag. Returns None for tags outside the fixed set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A photographer listed in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photographer {
    /// Identity, unique within a fetch
    pub id: i64,
    pub name: String,
    pub specialization: Category,
    pub bio: String,
    /// Profile image URL
    pub image: String,
    pub location: String,
    /// Years of experience
    pub experience: u32,
    pub projects: u32,
    pub hourly_rate: f64,
    /// Ordered portfolio image URLs
    #[serde(default)]
    pub portfolio: Vec<String>,
}

/// An image shown in the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: i64,
    pub category: Category,
    /// Image URL
    pub src: String,
    /// Description text
    pub alt: String,
    /// Photographer display name (not a foreign key)
    pub photographer: String,
}

/// Cached profile of the logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl User {
    /// Admins see the "add" affordances
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Proof of authentication plus the cached user profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}
