use crate::event::{AnchorTarget, ScrollSample};
use hw_domain::constants::HIGHLIGHT_COLOR;

/// Scroll-derived navbar state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    scrolled: bool,
    last_offset: f64,
    active: Option<String>,
}

impl NavState {
    /// Whether the navbar carries the `scrolled` class.
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub const fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Id of the highlighted section, if any.
    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Colour of the nav link pointing at `href`; `None` leaves it unstyled.
    #[must_use]
    pub fn link_color(&self, href: &str) -> Option<&'static str> {
        let id = href.strip_prefix('#')?;
        (self.active.as_deref() == Some(id)).then_some(HIGHLIGHT_COLOR)
    }

    pub(crate) fn observe(&mut self, sample: &ScrollSample, threshold: f64, lookahead: f64) {
        self.scrolled = sample.offset > threshold;
        self.last_offset = sample.offset;
        self.active = active_section(sample, lookahead).map(ToOwned::to_owned);
    }
}

/// The last section whose bounds contain `offset + navbar_height + lookahead`.
pub(crate) fn active_section(sample: &ScrollSample, lookahead: f64) -> Option<&str> {
    let position = sample.offset + sample.navbar_height + lookahead;
    sample
        .sections
        .iter()
        .rev()
        .find(|s| position >= s.top && position < s.top + s.height)
        .map(|s| s.id.as_str())
}

/// Window offset that puts the target just below the fixed navbar.
pub(crate) fn anchor_scroll_top(target: AnchorTarget) -> f64 {
    target.top - target.navbar_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::SectionBounds;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds { id: id.to_owned(), top, height }
    }

    fn sample(offset: f64) -> ScrollSample {
        ScrollSample {
            offset,
            navbar_height: 70.0,
            sections: vec![
                section("home", 0.0, 600.0),
                section("services", 600.0, 800.0),
                section("contact", 1400.0, 500.0),
            ],
        }
    }

    #[test]
    fn position_includes_navbar_and_lookahead() {
        // 480 + 70 + 50 = 600 is the first pixel of services
        assert_eq!(active_section(&sample(480.0), 50.0), Some("services"));
        assert_eq!(active_section(&sample(479.0), 50.0), Some("home"));
    }

    #[test]
    fn nothing_matches_past_the_last_section() {
        assert_eq!(active_section(&sample(5000.0), 50.0), None);
    }

    #[test]
    fn overlapping_sections_prefer_the_later_one() {
        let mut s = sample(0.0);
        s.sections.push(section("overlay", 0.0, 1000.0));
        assert_eq!(active_section(&s, 50.0), Some("overlay"));
    }

    #[test]
    fn only_the_active_link_is_coloured() {
        let mut nav = NavState::default();
        nav.observe(&sample(700.0), 100.0, 50.0);

        assert!(nav.is_scrolled());
        assert_eq!(nav.link_color("#services"), Some(HIGHLIGHT_COLOR));
        assert_eq!(nav.link_color("#home"), None);
        assert_eq!(nav.link_color("/about"), None);
    }

    #[test]
    fn anchor_offset_subtracts_navbar() {
        let top = anchor_scroll_top(AnchorTarget { top: 1400.0, navbar_height: 72.0 });
        assert!((top - 1328.0).abs() < f64::EPSILON);
    }
}
