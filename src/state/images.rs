/// In-memory image cache for remote photos
///
/// Every URL is downloaded at most once per run. A URL moves from
/// `Pending` to `Ready` (decoded handle) or `Failed`, and failed URLs
/// render as a placeholder instead of being retried.
use iced::widget::image::Handle;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum ImageSlot {
    Pending,
    Ready(Handle),
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    slots: HashMap<String, ImageSlot>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the given URLs as pending and return the ones that still
    /// need downloading. Blank and already-known URLs are skipped.
    pub fn request<'a, I>(&mut self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut wanted = Vec::new();
        for url in urls {
            let url = url.trim();
            if url.is_empty() || self.slots.contains_key(url) {
                continue;
            }
            self.slots.insert(url.to_string(), ImageSlot::Pending);
            wanted.push(url.to_string());
        }
        wanted
    }

    /// Store a finished download
    pub fn complete(&mut self, url: String, result: Result<Vec<u8>, String>) {
        let slot = match result {
            Ok(bytes) => ImageSlot::Ready(Handle::from_bytes(bytes)),
            Err(error) => {
                tracing::warn!(%url, %error, "image download failed");
                ImageSlot::Failed
            }
        };
        self.slots.insert(url, slot);
    }

    pub fn get(&self, url: &str) -> Option<&ImageSlot> {
        self.slots.get(url.trim())
    }

    pub fn handle(&self, url: &str) -> Option<&Handle> {
        match self.get(url) {
            Some(ImageSlot::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_url_requested_once() {
        let mut cache = ImageCache::new();

        let first = cache.request(["a.jpg", "b.jpg", "a.jpg", " "]);
        assert_eq!(first, vec!["a.jpg", "b.jpg"]);

        let second = cache.request(["b.jpg", "c.jpg"]);
        assert_eq!(second, vec!["c.jpg"]);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_failed_download_is_not_retried() {
        let mut cache = ImageCache::new();
        cache.request(["a.jpg"]);
        cache.complete("a.jpg".to_string(), Err("404".to_string()));

        assert!(matches!(cache.get("a.jpg"), Some(ImageSlot::Failed)));
        assert!(cache.handle("a.jpg").is_none());
        assert!(cache.request(["a.jpg"]).is_empty());
    }

    #[test]
    fn test_ready_after_download() {
        let mut cache = ImageCache::new();
        cache.request(["a.jpg"]);
        assert!(matches!(cache.get("a.jpg"), Some(ImageSlot::Pending)));

        cache.complete("a.jpg".to_string(), Ok(vec![0xFF, 0xD8, 0xFF, 0xD9]));
        assert!(cache.handle("a.jpg").is_some());
    }
}
