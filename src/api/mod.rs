/// SnapPro backend access
///
/// - HTTP client for every REST operation (client.rs)
/// - Request and response bodies (types.rs)

pub mod client;
pub mod types;

pub use client::ApiClient;
