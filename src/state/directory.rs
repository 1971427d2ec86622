/// A browsable, filterable list of directory entries
///
/// Holds the full list fetched from the backend, the filtered view
/// derived from it, the load status and the admin snapshot taken when
/// the view was created.
use std::sync::atomic::{AtomicU64, Ordering};

use super::filter::{ActiveFilter, Categorized, FilterState};

/// Something listed in a directory
pub trait DirectoryEntry: Categorized + Clone {
    /// Message shown when the list cannot be loaded
    const LOAD_FAILED: &'static str;

    fn id(&self) -> i64;
}

impl DirectoryEntry for super::data::Photographer {
    const LOAD_FAILED: &'static str = "Failed to load photographers";

    fn id(&self) -> i64 {
        self.id
    }
}

impl DirectoryEntry for super::data::GalleryImage {
    const LOAD_FAILED: &'static str = "Failed to load gallery images";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Status of the most recent fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    /// Carries the fixed, user-facing failure message
    Failed(String),
}

/// Ticket identifying one fetch; only the latest one is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(u64);

/// Shared by every directory so a remounted view never reuses a ticket
/// still in flight for the view it replaced
static NEXT_REQUEST: AtomicU64 = AtomicU64::new(1);

impl RequestId {
    fn next() -> Self {
        RequestId(NEXT_REQUEST.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone)]
pub struct Directory<T> {
    items: Vec<T>,
    filter: FilterState<T>,
    load: LoadState,
    is_admin: bool,
    latest_request: Option<RequestId>,
}

impl<T: DirectoryEntry> Directory<T> {
    /// `is_admin` is a snapshot; later logins do not change it
    pub fn new(is_admin: bool) -> Self {
        Self {
            items: Vec::new(),
            filter: FilterState::new(),
            load: LoadState::Loading,
            is_admin,
            latest_request: None,
        }
    }

    /// Mark a fetch as pending and get its ticket
    pub fn begin_fetch(&mut self) -> RequestId {
        let request = RequestId::next();
        self.latest_request = Some(request);
        self.load = LoadState::Loading;
        request
    }

    /// Apply a fetch result. Answers to superseded requests are dropped.
    /// Returns whether the result was applied.
    pub fn finish_fetch(&mut self, request: RequestId, result: Result<Vec<T>, String>) -> bool {
        if self.latest_request != Some(request) {
            tracing::debug!(
                request = request.0,
                latest = ?self.latest_request.map(|r| r.0),
                "dropping stale directory response"
            );
            return false;
        }

        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "directory loaded");
                self.items = items;
                self.load = LoadState::Loaded;
            }
            Err(error) => {
                tracing::error!(%error, "{}", T::LOAD_FAILED);
                self.items.clear();
                self.load = LoadState::Failed(T::LOAD_FAILED.to_string());
            }
        }
        self.filter.refresh(&self.items);
        true
    }

    pub fn set_filter(&mut self, tag: &str) {
        self.filter.set_filter(tag, &self.items);
    }

    /// Add a newly created entry without re-fetching. It shows up in the
    /// visible list only if it matches the active filter.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
        self.filter.refresh(&self.items);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn visible(&self) -> &[T] {
        self.filter.visible()
    }

    pub fn active_filter(&self) -> &ActiveFilter {
        self.filter.active()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn find_visible(&self, id: i64) -> Option<&T> {
        self.visible().iter().find(|item| item.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Category, GalleryImage};

    fn image(id: i64, category: Category) -> GalleryImage {
        GalleryImage {
            id,
            category,
            src: format!("https://img.example/{}.jpg", id),
            alt: format!("Image {}", id),
            photographer: "Kim".to_string(),
        }
    }

    fn loaded(items: Vec<GalleryImage>) -> Directory<GalleryImage> {
        let mut directory = Directory::new(false);
        let request = directory.begin_fetch();
        assert!(directory.finish_fetch(request, Ok(items)));
        directory
    }

    #[test]
    fn test_starts_loading() {
        let directory: Directory<GalleryImage> = Directory::new(true);
        assert!(directory.is_loading());
        assert!(directory.is_admin());
        assert!(directory.visible().is_empty());
    }

    #[test]
    fn test_failure_clears_items() {
        let mut directory = loaded(vec![image(1, Category::Event)]);

        let request = directory.begin_fetch();
        directory.finish_fetch(request, Err("connection refused".to_string()));

        assert_eq!(
            directory.load_state(),
            &LoadState::Failed("Failed to load gallery images".to_string())
        );
        assert!(directory.items().is_empty());
        assert!(directory.visible().is_empty());
    }

    #[test]
    fn test_retry_after_failure() {
        let mut directory: Directory<GalleryImage> = Directory::new(false);
        let first = directory.begin_fetch();
        directory.finish_fetch(first, Err("timeout".to_string()));

        let retry = directory.begin_fetch();
        assert!(directory.is_loading());
        directory.finish_fetch(retry, Ok(vec![image(1, Category::Event)]));
        assert_eq!(directory.load_state(), &LoadState::Loaded);
        assert_eq!(directory.visible().len(), 1);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut directory: Directory<GalleryImage> = Directory::new(false);
        let older = directory.begin_fetch();
        let newer = directory.begin_fetch();

        assert!(directory.finish_fetch(newer, Ok(vec![image(2, Category::Fashion)])));
        assert!(!directory.finish_fetch(older, Ok(vec![image(1, Category::Wedding)])));

        assert_eq!(directory.items().len(), 1);
        assert_eq!(directory.items()[0].id, 2);
    }

    #[test]
    fn test_remounted_directory_drops_replaced_views_response() {
        let mut old_view: Directory<GalleryImage> = Directory::new(false);
        old_view.begin_fetch();
        old_view.set_filter("wedding");
        let wedding = old_view.begin_fetch();

        let mut new_view: Directory<GalleryImage> = Directory::new(false);
        new_view.begin_fetch();
        new_view.set_filter("landscape");
        let landscape = new_view.begin_fetch();
        assert_ne!(wedding, landscape);
        assert!(new_view.finish_fetch(landscape, Ok(vec![image(2, Category::Landscape)])));

        assert!(!new_view.finish_fetch(wedding, Ok(vec![image(1, Category::Wedding)])));
        let visible: Vec<i64> = new_view.visible().iter().map(|i| i.id).collect();
        assert_eq!(visible, vec![2]);
    }

    #[test]
    fn test_append_matching_active_filter_is_visible() {
        let mut directory = loaded(vec![image(1, Category::Wedding), image(2, Category::Event)]);
        directory.set_filter("wedding");

        directory.append(image(3, Category::Wedding));

        let visible: Vec<i64> = directory.visible().iter().map(|i| i.id).collect();
        assert_eq!(visible, vec![1, 3]);
    }

    #[test]
    fn test_append_not_matching_stays_hidden() {
        let mut directory = loaded(vec![image(1, Category::Wedding)]);
        directory.set_filter("wedding");

        directory.append(image(2, Category::Landscape));

        assert_eq!(directory.items().len(), 2);
        assert_eq!(directory.visible().len(), 1);
        assert!(directory.find_visible(2).is_none());

        directory.set_filter("landscape");
        assert!(directory.find_visible(2).is_some());
    }

    #[test]
    fn test_filter_applies_to_fetched_list() {
        let mut directory: Directory<GalleryImage> = Directory::new(false);
        directory.set_filter("event");
        let request = directory.begin_fetch();
        directory.finish_fetch(
            request,
            Ok(vec![image(1, Category::Event), image(2, Category::Portrait)]),
        );

        assert_eq!(directory.visible().len(), 1);
        assert_eq!(directory.active_filter().tag(), "event");
    }
}
