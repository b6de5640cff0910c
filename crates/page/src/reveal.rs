//! One-shot entrance animations: scroll-revealed blocks, click-to-reveal text and the hero.

use hw_domain::config::RevealEntry;
use hw_domain::constants::BLUR_TEXT_CLASS;

const BLOCK_HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(30px); transition: opacity 0.6s ease-out, transform 0.6s ease-out;";
const BLOCK_VISIBLE_STYLE: &str =
    "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease-out, transform 0.6s ease-out;";

const HERO_HIDDEN_STYLE: &str = "opacity: 0; transform: translateY(30px);";
const HERO_SHOWN_STYLE: &str =
    "transition: opacity 1s ease-out, transform 1s ease-out; opacity: 1; transform: translateY(0);";

/// Scroll-reveal state of a service card, expertise item or contact item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockReveal {
    #[default]
    Hidden,
    Visible,
}

impl BlockReveal {
    #[must_use]
    pub const fn style(self) -> &'static str {
        match self {
            Self::Hidden => BLOCK_HIDDEN_STYLE,
            Self::Visible => BLOCK_VISIBLE_STYLE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Revealing,
    Revealed,
}

/// A click-to-reveal text element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlurText {
    phase: RevealPhase,
    teaser: String,
    content: Option<String>,
}

impl BlurText {
    #[must_use]
    pub fn new(entry: &RevealEntry) -> Self {
        Self { phase: RevealPhase::Hidden, teaser: entry.teaser.clone(), content: entry.content.clone() }
    }

    #[must_use]
    pub const fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Class list of the element.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self.phase {
            RevealPhase::Hidden => BLUR_TEXT_CLASS,
            RevealPhase::Revealing => "blur-text revealing",
            RevealPhase::Revealed => "blur-text revealed",
        }
    }

    /// Markup to show: the replacement once revealed, the teaser otherwise.
    #[must_use]
    pub fn text(&self) -> &str {
        match (self.phase, &self.content) {
            (RevealPhase::Revealed, Some(content)) => content,
            _ => &self.teaser,
        }
    }

    /// Hidden to Revealing. Returns `false` when the click should be ignored.
    pub(crate) fn start(&mut self) -> bool {
        if self.phase != RevealPhase::Hidden {
            return false;
        }
        self.phase = RevealPhase::Revealing;
        true
    }

    /// Revealing to Revealed. Returns whether replacement content exists,
    /// or `None` when the element was not revealing.
    pub(crate) fn finish(&mut self) -> Option<bool> {
        if self.phase != RevealPhase::Revealing {
            return None;
        }
        self.phase = RevealPhase::Revealed;
        Some(self.content.is_some())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeroState {
    #[default]
    Hidden,
    Shown,
}

impl HeroState {
    #[must_use]
    pub const fn style(self) -> &'static str {
        match self {
            Self::Hidden => HERO_HIDDEN_STYLE,
            Self::Shown => HERO_SHOWN_STYLE,
        }
    }
}
