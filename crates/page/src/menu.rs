/// Inline style of one hamburger bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

const CLOSED_BARS: [BarStyle; 3] = [
    BarStyle { transform: "", opacity: "1" },
    BarStyle { transform: "", opacity: "1" },
    BarStyle { transform: "", opacity: "1" },
];

const OPEN_BARS: [BarStyle; 3] = [
    BarStyle { transform: "rotate(45deg) translate(6px, 6px)", opacity: "1" },
    BarStyle { transform: "", opacity: "0" },
    BarStyle { transform: "rotate(-45deg) translate(6px, -6px)", opacity: "1" },
];

/// Mobile menu: open flag plus the three indicator bars derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Idempotent.
    pub const fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Styles of the top, middle and bottom bar.
    #[must_use]
    pub const fn bars(&self) -> [BarStyle; 3] {
        if self.open { OPEN_BARS } else { CLOSED_BARS }
    }
}
