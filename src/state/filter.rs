/// Category filtering for directory lists
///
/// Filtering is pure and total: every item either matches the active
/// tag or it does not, and "all" matches everything. The visible subset
/// is recomputed in full whenever the tag or the source list changes.
use super::data::{Category, GalleryImage, Photographer};

/// Selectable filter tags, in the order the filter bar shows them
pub const FILTER_TAGS: [&str; 6] = ["all", "wedding", "portrait", "landscape", "event", "fashion"];

/// Anything that can be filtered by category
pub trait Categorized {
    fn category(&self) -> Category;
}

impl Categorized for Photographer {
    fn category(&self) -> Category {
        self.specialization
    }
}

impl Categorized for GalleryImage {
    fn category(&self) -> Category {
        self.category
    }
}

/// The currently selected filter tag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    All,
    Only(Category),
    /// A tag outside the fixed set; matches nothing
    Unrecognized(String),
}

impl ActiveFilter {
    pub fn from_tag(tag: &str) -> Self {
        if tag == "all" {
            return ActiveFilter::All;
        }
        match Category::from_tag(tag) {
            Some(category) => ActiveFilter::Only(category),
            None => ActiveFilter::Unrecognized(tag.to_string()),
        }
    }

    /// Wire tag for this filter
    pub fn tag(&self) -> &str {
        match self {
            ActiveFilter::All => "all",
            ActiveFilter::Only(category) => category.as_str(),
            ActiveFilter::Unrecognized(tag) => tag,
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            ActiveFilter::All => true,
            ActiveFilter::Only(wanted) => *wanted == category,
            ActiveFilter::Unrecognized(_) => false,
        }
    }
}

/// Every item matching `filter`, in input order
pub fn visible_items<T: Categorized + Clone>(items: &[T], filter: &ActiveFilter) -> Vec<T> {
    items
        .iter()
        .filter(|item| filter.matches(item.category()))
        .cloned()
        .collect()
}

/// Holds the active tag and the filtered view derived from it
#[derive(Debug, Clone)]
pub struct FilterState<T> {
    active: ActiveFilter,
    visible: Vec<T>,
}

impl<T> Default for FilterState<T> {
    fn default() -> Self {
        Self {
            active: ActiveFilter::All,
            visible: Vec::new(),
        }
    }
}

impl<T: Categorized + Clone> FilterState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active tag and re-filter `source`
    pub fn set_filter(&mut self, tag: &str, source: &[T]) {
        self.active = ActiveFilter::from_tag(tag);
        self.refresh(source);
    }

    /// Re-filter after the source list changed
    pub fn refresh(&mut self, source: &[T]) {
        self.visible = visible_items(source, &self.active);
    }

    pub fn active(&self) -> &ActiveFilter {
        &self.active
    }

    pub fn visible(&self) -> &[T] {
        &self.visible
    }
}
