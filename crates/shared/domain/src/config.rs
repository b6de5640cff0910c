use crate::constants::{DEFAULT_MESSAGES_TABLE, FALLBACK_EMAIL};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level site configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub store: StoreConfig,
    pub contact: ContactConfig,
    pub behavior: BehaviorConfig,
    pub content: ContentConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components and tasks.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct SiteConfig {
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Hosted table store holding contact messages.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

/// Contact form wording that depends on the deployment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Address offered to visitors when a submission fails.
    pub fallback_email: String,
    /// Public site key of the reCAPTCHA widget.
    pub recaptcha_site_key: String,
}

/// Thresholds and delays of the page reactions.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Vertical offset above which the navbar gets the `scrolled` class.
    pub scrolled_threshold: f64,
    /// Added to scroll offset and navbar height when picking the active section.
    pub highlight_lookahead: f64,
    pub reveal_delay_ms: u64,
    pub hero_delay_ms: u64,
}

/// Everything the page renders.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Document title.
    pub title: String,
    pub hero: HeroContent,
    pub nav: Vec<NavLink>,
    pub sections: Vec<SectionContent>,
    /// Options of the `service` select.
    pub services: Vec<String>,
    pub faq: Vec<FaqEntry>,
    pub gallery: Vec<ImageEntry>,
    /// Click-to-reveal texts, keyed by element id.
    pub reveals: Vec<RevealEntry>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub cta_href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    /// The section id this link points at, if it is an in-page anchor.
    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionContent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A content block animated in when it scrolls into view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Block {
    pub id: String,
    pub kind: BlockKind,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    ServiceCard,
    ExpertiseItem,
    ContactItem,
}

impl BlockKind {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::ServiceCard => "service-card",
            Self::ExpertiseItem => "expertise-item",
            Self::ContactItem => "contact-item",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// An image whose source is applied only once it nears the viewport.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageEntry {
    pub id: String,
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// Text shown blurred until clicked; `content` replaces `teaser` once revealed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RevealEntry {
    pub id: String,
    pub teaser: String,
    /// Replacement markup. `None` keeps the teaser after the reveal.
    #[serde(default)]
    pub content: Option<String>,
}

// --- Default ---

impl Default for StoreConfig {
    fn default() -> Self {
        Self { url: String::new(), anon_key: String::new(), table: DEFAULT_MESSAGES_TABLE.to_owned() }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { fallback_email: FALLBACK_EMAIL.to_owned(), recaptcha_site_key: String::new() }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 100.0,
            highlight_lookahead: 50.0,
            reveal_delay_ms: 1000,
            hero_delay_ms: 200,
        }
    }
}
