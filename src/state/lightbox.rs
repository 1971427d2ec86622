/// Full-screen image viewer state
///
/// Tracks an ordered image sequence and the current position in it.
/// Stepping wraps around in both directions.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    images: Vec<String>,
    index: usize,
    open: bool,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `images` starting at `start_src`.
    ///
    /// A start image that is not in the sequence falls back to index 0.
    /// An empty sequence leaves the lightbox closed.
    pub fn open(&mut self, images: Vec<String>, start_src: &str) {
        if images.is_empty() {
            tracing::debug!("lightbox open ignored: no images");
            self.close();
            return;
        }

        self.index = images.iter().position(|src| src == start_src).unwrap_or(0);
        self.images = images;
        self.open = true;
    }

    pub fn next(&mut self) {
        if !self.can_navigate() {
            return;
        }
        self.index = (self.index + 1) % self.images.len();
    }

    pub fn previous(&mut self) {
        if !self.can_navigate() {
            return;
        }
        let len = self.images.len();
        self.index = (self.index + len - 1) % len;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.images.clear();
        self.index = 0;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// URL of the image being shown
    pub fn current(&self) -> Option<&str> {
        if !self.open {
            return None;
        }
        self.images.get(self.index).map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    fn can_navigate(&self) -> bool {
        self.open && !self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://img.example/{}.jpg", i)).collect()
    }

    #[test]
    fn test_open_at_start_image() {
        let mut lightbox = Lightbox::new();
        lightbox.open(urls(4), "https://img.example/2.jpg");

        assert!(lightbox.is_open());
        assert_eq!(lightbox.index(), 2);
        assert_eq!(lightbox.current(), Some("https://img.example/2.jpg"));
    }

    #[test]
    fn test_missing_start_image_opens_at_zero() {
        let mut lightbox = Lightbox::new();
        lightbox.open(urls(3), "https://img.example/missing.jpg");

        assert!(lightbox.is_open());
        assert_eq!(lightbox.index(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for n in 1..6 {
            for start in 0..n {
                let images = urls(n);
                let start_src = images[start].clone();
                let mut lightbox = Lightbox::new();
                lightbox.open(images, &start_src);

                for _ in 0..n {
                    lightbox.next();
                }
                assert_eq!(lightbox.index(), start);

                for _ in 0..n {
                    lightbox.previous();
                }
                assert_eq!(lightbox.index(), start);
            }
        }
    }

    #[test]
    fn test_next_then_previous_is_identity() {
        let mut lightbox = Lightbox::new();
        lightbox.open(urls(5), "https://img.example/4.jpg");

        lightbox.next();
        assert_eq!(lightbox.index(), 0);
        lightbox.previous();
        assert_eq!(lightbox.index(), 4);
    }

    #[test]
    fn test_previous_wraps_from_first() {
        let mut lightbox = Lightbox::new();
        lightbox.open(urls(3), "https://img.example/0.jpg");
        lightbox.previous();
        assert_eq!(lightbox.index(), 2);
    }

    #[test]
    fn test_navigation_without_images_is_noop() {
        let mut lightbox = Lightbox::new();
        lightbox.next();
        lightbox.previous();
        assert_eq!(lightbox.index(), 0);
        assert_eq!(lightbox.current(), None);

        lightbox.open(Vec::new(), "anything");
        assert!(!lightbox.is_open());
        lightbox.next();
        assert_eq!(lightbox.index(), 0);
    }

    #[test]
    fn test_close_discards_images() {
        let mut lightbox = Lightbox::new();
        lightbox.open(urls(2), "https://img.example/1.jpg");
        lightbox.close();

        assert!(!lightbox.is_open());
        assert!(lightbox.is_empty());
        assert_eq!(lightbox.current(), None);
    }
}
