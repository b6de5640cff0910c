use crate::effect::Effect;
use crate::error::{PageError, PageErrorExt};
use crate::event::{AnchorTarget, Field, ScrollSample, SubmissionOutcome, UiEvent};
use crate::faq::FaqState;
use crate::form::{EMAIL_PATTERN, EmailRule, FormState};
use crate::lazy::LazyImage;
use crate::menu::MenuState;
use crate::navigation::{NavState, anchor_scroll_top};
use crate::reveal::{BlockReveal, BlurText, HeroState};
use chrono::{DateTime, Utc};
use fxhash::FxHashMap;
use hw_domain::config::SiteConfig;
use hw_domain::constants::FIXED_IDS;
use regex::Regex;
use std::time::Duration;
use tracing::{debug, error, info, instrument, trace, warn};

pub const MISSING_TOKEN_ALERT: &str = "Please complete the reCAPTCHA verification.";
pub const SUCCESS_ALERT: &str =
    "Thank you for your inquiry! We have received your message and will contact you soon.";

/// Alert shown when the store could not take the message.
#[must_use]
pub fn failure_alert(fallback_email: &str) -> String {
    format!(
        "Sorry, there was an error sending your message. Please try again or contact us directly at {fallback_email}"
    )
}

/// Presentation state of the whole page.
#[derive(Debug, Default)]
pub struct PageState {
    menu: MenuState,
    nav: NavState,
    form: FormState,
    hero: HeroState,
    faq: FaqState,
    blocks: FxHashMap<String, BlockReveal>,
    blur_texts: FxHashMap<String, BlurText>,
    images: FxHashMap<String, LazyImage>,
}

impl PageState {
    #[must_use]
    pub const fn menu(&self) -> &MenuState {
        &self.menu
    }

    #[must_use]
    pub const fn nav(&self) -> &NavState {
        &self.nav
    }

    #[must_use]
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub const fn hero(&self) -> HeroState {
        self.hero
    }

    #[must_use]
    pub const fn faq(&self) -> &FaqState {
        &self.faq
    }

    /// Unknown ids read as hidden.
    #[must_use]
    pub fn block(&self, id: &str) -> BlockReveal {
        self.blocks.get(id).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn blur_text(&self, id: &str) -> Option<&BlurText> {
        self.blur_texts.get(id)
    }

    #[must_use]
    pub fn image(&self, id: &str) -> Option<&LazyImage> {
        self.images.get(id)
    }
}

/// Owns the page state and maps each [`UiEvent`] to its handler.
///
/// Handlers run to completion and never block; anything asynchronous is
/// returned as an [`Effect`] for the host to run.
#[derive(Debug)]
pub struct PageController {
    config: SiteConfig,
    email: EmailRule,
    state: PageState,
    ready: bool,
}

impl PageController {
    /// Builds the controller for the given site.
    ///
    /// # Errors
    /// Returns [`PageError::Content`] when a section, block, reveal or image id
    /// is empty, repeats, or reuses an id the page renders itself, or an FAQ
    /// entry has no question.
    pub fn new(config: &SiteConfig) -> Result<Self, PageError> {
        let content = &config.content;

        let sections = content.sections.iter().map(|s| ("section", s.id.as_str()));
        let blocks =
            content.sections.iter().flat_map(|s| &s.blocks).map(|b| ("block", b.id.as_str()));
        let reveals = content.reveals.iter().map(|r| ("reveal", r.id.as_str()));
        let images = content.gallery.iter().map(|i| ("image", i.id.as_str()));
        unique_ids(sections.chain(blocks).chain(reveals).chain(images))?;

        if let Some(index) = content.faq.iter().position(|f| f.question.trim().is_empty()) {
            return Err(PageError::Content {
                message: format!("FAQ entry {index} has no question").into(),
                context: None,
            });
        }

        let pattern = Regex::new(EMAIL_PATTERN).context("Compiling email pattern")?;

        let state = PageState {
            faq: FaqState::new(content.faq.len()),
            blocks: content
                .sections
                .iter()
                .flat_map(|s| &s.blocks)
                .map(|b| (b.id.clone(), BlockReveal::Hidden))
                .collect(),
            blur_texts: content.reveals.iter().map(|r| (r.id.clone(), BlurText::new(r))).collect(),
            images: content.gallery.iter().map(|i| (i.id.clone(), LazyImage::new(i))).collect(),
            ..PageState::default()
        };

        debug!(
            blocks = state.blocks.len(),
            reveals = state.blur_texts.len(),
            images = state.images.len(),
            faq = content.faq.len(),
            "Page controller created"
        );

        Ok(Self { config: config.clone(), email: EmailRule::new(pattern), state, ready: false })
    }

    #[must_use]
    pub const fn state(&self) -> &PageState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Runs the handler of `event` and returns the effects it requests.
    ///
    /// Events other than [`UiEvent::Ready`] arriving before the page is ready are dropped.
    #[instrument(level = "trace", skip_all, fields(event = event.name()))]
    pub fn dispatch(&mut self, event: UiEvent) -> Vec<Effect> {
        if !self.ready && !matches!(event, UiEvent::Ready) {
            trace!("Page not ready, event dropped");
            return Vec::new();
        }

        match event {
            UiEvent::Ready => self.on_ready(),
            UiEvent::MenuToggled => {
                self.state.menu.toggle();
                debug!(open = self.state.menu.is_open(), "Menu toggled");
                Vec::new()
            },
            UiEvent::NavLinkClicked => {
                self.state.menu.close();
                Vec::new()
            },
            UiEvent::Scrolled(sample) => self.on_scrolled(&sample),
            UiEvent::AnchorClicked { href, target } => Self::on_anchor(&href, target),
            UiEvent::FieldInput { field, value } => {
                self.state.form.input(field, value);
                Vec::new()
            },
            UiEvent::FieldBlurred(field) => self.on_blur(field),
            UiEvent::FormSubmitted { token, at } => self.on_submit(token.as_deref(), at),
            UiEvent::SubmissionSettled(outcome) => self.on_settled(outcome),
            UiEvent::BlockIntersected(id) => self.on_block(&id),
            UiEvent::ImageIntersected(id) => self.on_image(&id),
            UiEvent::BlurTextClicked(id) => self.on_blur_text_clicked(id),
            UiEvent::BlurTextTimerElapsed(id) => self.on_blur_text_elapsed(&id),
            UiEvent::FaqQuestionClicked(index) => self.on_faq(index),
            UiEvent::HeroTimerElapsed => {
                self.state.hero = HeroState::Shown;
                Vec::new()
            },
        }
    }

    fn on_ready(&mut self) -> Vec<Effect> {
        if self.ready {
            debug!("Page already initialised, ready ignored");
            return Vec::new();
        }
        self.ready = true;
        self.state.hero = HeroState::Hidden;
        info!("Page ready");

        vec![Effect::Schedule {
            delay: Duration::from_millis(self.config.behavior.hero_delay_ms),
            event: UiEvent::HeroTimerElapsed,
        }]
    }

    fn on_scrolled(&mut self, sample: &ScrollSample) -> Vec<Effect> {
        let behavior = &self.config.behavior;
        self.state.nav.observe(sample, behavior.scrolled_threshold, behavior.highlight_lookahead);
        Vec::new()
    }

    fn on_anchor(href: &str, target: Option<AnchorTarget>) -> Vec<Effect> {
        let Some(target) = target else {
            debug!(%href, "Anchor target missing");
            return Vec::new();
        };
        vec![Effect::ScrollTo { top: anchor_scroll_top(target) }]
    }

    fn on_blur(&mut self, field: Field) -> Vec<Effect> {
        self.state.form.blur(field, &self.email);
        Vec::new()
    }

    fn on_submit(&mut self, token: Option<&str>, at: DateTime<Utc>) -> Vec<Effect> {
        if self.state.form.is_busy() {
            debug!("Submission already in flight");
            return Vec::new();
        }
        if token.is_none_or(str::is_empty) {
            info!("Submission blocked, verification missing");
            return vec![Effect::Alert(MISSING_TOKEN_ALERT.to_owned())];
        }

        let message = self.state.form.message(at);
        self.state.form.begin_submission();
        info!(created_at = %message.created_at, "Submitting contact message");

        vec![Effect::Submit(message)]
    }

    fn on_settled(&mut self, outcome: SubmissionOutcome) -> Vec<Effect> {
        if !self.state.form.settle_submission() {
            warn!("Submission settled with nothing in flight");
            return Vec::new();
        }

        match outcome {
            SubmissionOutcome::Stored => {
                self.state.form.reset();
                vec![Effect::Alert(SUCCESS_ALERT.to_owned()), Effect::ResetVerification]
            },
            SubmissionOutcome::Failed(reason) => {
                error!(%reason, "Form submission error");
                vec![Effect::Alert(failure_alert(&self.config.contact.fallback_email))]
            },
        }
    }

    fn on_block(&mut self, id: &str) -> Vec<Effect> {
        match self.state.blocks.get_mut(id) {
            Some(block) => *block = BlockReveal::Visible,
            None => debug!(%id, "Unknown reveal block"),
        }
        Vec::new()
    }

    fn on_image(&mut self, id: &str) -> Vec<Effect> {
        let Some(image) = self.state.images.get_mut(id) else {
            debug!(%id, "Unknown lazy image");
            return Vec::new();
        };
        if image.load() {
            debug!(%id, "Image source applied");
        }
        Vec::new()
    }

    fn on_blur_text_clicked(&mut self, id: String) -> Vec<Effect> {
        let Some(text) = self.state.blur_texts.get_mut(&id) else {
            warn!(%id, "Unknown blur text");
            return Vec::new();
        };
        if !text.start() {
            return Vec::new();
        }

        vec![Effect::Schedule {
            delay: Duration::from_millis(self.config.behavior.reveal_delay_ms),
            event: UiEvent::BlurTextTimerElapsed(id),
        }]
    }

    fn on_blur_text_elapsed(&mut self, id: &str) -> Vec<Effect> {
        let finished = self.state.blur_texts.get_mut(id).and_then(BlurText::finish);
        if finished == Some(false) {
            warn!(%id, "No replacement content declared, keeping teaser");
        }
        Vec::new()
    }

    fn on_faq(&mut self, index: usize) -> Vec<Effect> {
        if !self.state.faq.toggle(index) {
            warn!(index, "FAQ item out of range");
        }
        Vec::new()
    }
}

/// Content ids share one DOM namespace with each other and with the fixed page ids.
fn unique_ids<'a>(ids: impl Iterator<Item = (&'static str, &'a str)>) -> Result<(), PageError> {
    let fixed = FIXED_IDS.into_iter().chain(Field::ALL.map(Field::id));
    let mut seen: FxHashMap<&str, &str> = fixed.map(|id| (id, "page")).collect();

    for (kind, id) in ids {
        if id.trim().is_empty() {
            return Err(PageError::Content {
                message: format!("Empty {kind} id").into(),
                context: None,
            });
        }
        if let Some(owner) = seen.insert(id, kind) {
            return Err(PageError::Content {
                message: format!("Duplicate {kind} id '{id}' (already used by a {owner})").into(),
                context: None,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hw_domain::config::{Block, BlockKind, FaqEntry, ImageEntry, RevealEntry, SectionContent};

    fn config_with_blocks(ids: &[&str]) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.content.sections.push(SectionContent {
            id: "services".to_owned(),
            title: "Services".to_owned(),
            intro: None,
            blocks: ids
                .iter()
                .map(|id| Block {
                    id: (*id).to_owned(),
                    kind: BlockKind::ServiceCard,
                    title: (*id).to_owned(),
                    body: String::new(),
                })
                .collect(),
        });
        config
    }

    #[test]
    fn duplicate_block_ids_are_rejected() {
        let err = PageController::new(&config_with_blocks(&["audit", "audit"])).unwrap_err();
        assert!(err.to_string().contains("Duplicate block id 'audit'"), "unexpected {err}");
    }

    #[test]
    fn ids_must_be_unique_across_kinds() {
        let mut config = config_with_blocks(&["office"]);
        config.content.gallery.push(ImageEntry {
            id: "office".to_owned(),
            src: "office.jpg".to_owned(),
            alt: String::new(),
        });

        let err = PageController::new(&config).unwrap_err().to_string();
        assert!(err.contains("Duplicate image id 'office' (already used by a block)"), "unexpected {err}");
    }

    #[test]
    fn block_id_may_not_shadow_its_section() {
        let err = PageController::new(&config_with_blocks(&["services"])).unwrap_err();
        assert!(err.to_string().contains("Duplicate block id 'services'"), "unexpected {err}");
    }

    #[test]
    fn fixed_page_ids_are_reserved() {
        for id in ["contact", "faq", "navbar", "email"] {
            let mut config = SiteConfig::default();
            config.content.reveals.push(RevealEntry {
                id: id.to_owned(),
                teaser: "teaser".to_owned(),
                content: None,
            });

            let err = PageController::new(&config).unwrap_err();
            assert!(err.to_string().contains("already used by a page"), "{id}: unexpected {err}");
        }
    }

    #[test]
    fn blank_faq_question_is_rejected() {
        let mut config = SiteConfig::default();
        config.content.faq.push(FaqEntry { question: " ".to_owned(), answer: "a".to_owned() });
        assert!(matches!(PageController::new(&config), Err(PageError::Content { .. })));
    }

    #[test]
    fn events_before_ready_are_dropped() {
        let mut page = PageController::new(&SiteConfig::default()).unwrap();
        assert!(page.dispatch(UiEvent::MenuToggled).is_empty());
        assert!(!page.state().menu().is_open());
    }

    #[test]
    fn second_ready_is_ignored() {
        let mut page = PageController::new(&SiteConfig::default()).unwrap();
        assert_eq!(page.dispatch(UiEvent::Ready).len(), 1);
        assert!(page.dispatch(UiEvent::Ready).is_empty());
    }

    #[test]
    fn failure_alert_names_the_fallback_address() {
        let alert = failure_alert("info@haywilson.com");
        assert!(alert.ends_with("contact us directly at info@haywilson.com"));
    }
}
