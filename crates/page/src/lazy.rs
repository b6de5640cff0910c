use hw_domain::config::ImageEntry;

/// Source of a gallery image. `Deferred` renders as `data-src` without `src`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyImage {
    Deferred(String),
    Loaded(String),
}

impl LazyImage {
    #[must_use]
    pub fn new(entry: &ImageEntry) -> Self {
        Self::Deferred(entry.src.clone())
    }

    /// The live `src`, once loaded.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Loaded(src) => Some(src),
            Self::Deferred(_) => None,
        }
    }

    /// The pending `data-src`, until loaded.
    #[must_use]
    pub fn data_src(&self) -> Option<&str> {
        match self {
            Self::Deferred(src) => Some(src),
            Self::Loaded(_) => None,
        }
    }

    /// Promotes the deferred source. Returns `false` if already loaded.
    pub(crate) fn load(&mut self) -> bool {
        match self {
            Self::Deferred(src) => {
                *self = Self::Loaded(std::mem::take(src));
                true
            },
            Self::Loaded(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_moves_exactly_once() {
        let mut image = LazyImage::new(&ImageEntry {
            id: "yard".to_owned(),
            src: "img/yard.jpg".to_owned(),
            alt: String::new(),
        });
        assert_eq!(image.data_src(), Some("img/yard.jpg"));
        assert_eq!(image.src(), None);

        assert!(image.load());
        assert_eq!(image.src(), Some("img/yard.jpg"));
        assert_eq!(image.data_src(), None);
        assert!(!image.load());
        assert_eq!(image.src(), Some("img/yard.jpg"));
    }
}
