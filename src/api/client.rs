/// REST client for the SnapPro backend
///
/// Every operation is a single request/response round-trip over JSON,
/// using `reqwest`. Admin operations take the stored bearer token and
/// refuse to send anything without one.
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::types::{
    AuthResponse, ContactRequest, ContactResponse, ErrorBody, InquiryRequest, LoginRequest,
    NewGalleryImage, NewPhotographer, RegisterRequest,
};
use crate::error::ApiError;
use crate::state::data::{GalleryImage, Photographer, Session};

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with its own connection pool and request timeout.
    ///
    /// * `base_url` - e.g. `http://localhost:5000`, without trailing slash.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ---- photographers ----

    /// `GET /api/photographers`
    pub async fn list_photographers(&self) -> Result<Vec<Photographer>, ApiError> {
        let response = self.client.get(self.url("/api/photographers")).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /api/photographers/{id}`
    pub async fn get_photographer(&self, id: i64) -> Result<Photographer, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/api/photographers/{}", id)))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /api/photographers` (admin)
    pub async fn add_photographer(
        &self,
        token: Option<&str>,
        photographer: &NewPhotographer,
    ) -> Result<Photographer, ApiError> {
        let token = Self::require_token(token)?;
        let response = self
            .client
            .post(self.url("/api/photographers"))
            .bearer_auth(token)
            .json(photographer)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /api/photographers/contact`
    pub async fn contact_photographer(
        &self,
        request: &ContactRequest,
    ) -> Result<ContactResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/api/photographers/contact"))
            .json(request)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- gallery ----

    /// `GET /api/gallery`, narrowed server-side by `?category=` unless the
    /// category is absent or `"all"`.
    pub async fn list_gallery(&self, category: Option<&str>) -> Result<Vec<GalleryImage>, ApiError> {
        let mut request = self.client.get(self.url("/api/gallery"));
        if let Some(category) = category.filter(|c| !c.is_empty() && *c != "all") {
            request = request.query(&[("category", category)]);
        }
        let response = request.send().await?;
        Self::parse_response(response).await
    }

    /// `POST /api/gallery` (admin)
    pub async fn add_gallery_item(
        &self,
        token: Option<&str>,
        image: &NewGalleryImage,
    ) -> Result<GalleryImage, ApiError> {
        let token = Self::require_token(token)?;
        let response = self
            .client
            .post(self.url("/api/gallery"))
            .bearer_auth(token)
            .json(image)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- general contact ----

    /// `POST /api/contact`
    pub async fn send_inquiry(&self, request: &InquiryRequest) -> Result<ContactResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/api/contact"))
            .json(request)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- users ----

    /// `POST /api/users/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let response = self
            .client
            .post(self.url("/api/users/login"))
            .json(request)
            .send()
            .await?;
        let auth: AuthResponse = Self::parse_response(response).await?;
        Ok(auth.into_session())
    }

    /// `POST /api/users/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        let response = self
            .client
            .post(self.url("/api/users/register"))
            .json(request)
            .send()
            .await?;
        let auth: AuthResponse = Self::parse_response(response).await?;
        Ok(auth.into_session())
    }

    // ---- images ----

    /// Download raw image bytes. `url` is absolute; images live on
    /// arbitrary hosts, not only the backend.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.client.get(url).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    // ---- private helpers ----

    fn require_token(token: Option<&str>) -> Result<&str, ApiError> {
        match token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ApiError::Unauthenticated),
        }
    }

    /// Turn a non-2xx response into [`ApiError::Status`], keeping the
    /// backend's JSON `message` apart from the raw body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message);

        tracing::warn!(
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(body.as_str()),
            "backend returned an error"
        );
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
            body,
        })
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
