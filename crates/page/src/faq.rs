/// Accordion over the FAQ list: at most one item is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqState {
    open: Option<usize>,
    len: usize,
}

impl FaqState {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    #[must_use]
    pub const fn open_item(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Collapses every other item and flips `index`.
    /// Returns `false` if `index` is out of range.
    pub(crate) fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
        true
    }
}
