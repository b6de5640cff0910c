//! Inputs of the controller. The host translates browser callbacks into these.

use chrono::{DateTime, Utc};

/// Contact form fields, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    pub const ALL: [Self; 5] = [Self::Name, Self::Email, Self::Phone, Self::Service, Self::Message];

    /// DOM id (and form name) of the input.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Service => "service",
            Self::Message => "message",
        }
    }

    /// Required fields get blur/input border feedback.
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Message)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Document-relative bounds of one `section[id]`, measured by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Everything a scroll handler needs from one scroll event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub navbar_height: f64,
    pub sections: Vec<SectionBounds>,
}

impl ScrollSample {
    /// A sample carrying only the page offset.
    #[must_use]
    pub const fn at(offset: f64) -> Self {
        Self { offset, navbar_height: 0.0, sections: Vec::new() }
    }
}

/// Measurement of an in-page anchor target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorTarget {
    /// Top of the target element relative to the document.
    pub top: f64,
    pub navbar_height: f64,
}

/// Result of handing a contact message to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Stored,
    Failed(String),
}

/// One UI event. Each variant has exactly one handler in the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The document finished loading.
    Ready,
    MenuToggled,
    NavLinkClicked,
    Scrolled(ScrollSample),
    /// Click on an `a[href^="#"]`; `target` is `None` when nothing matches the anchor.
    AnchorClicked { href: String, target: Option<AnchorTarget> },
    FieldInput { field: Field, value: String },
    FieldBlurred(Field),
    /// `token` is the verification widget response, read at submit time.
    FormSubmitted { token: Option<String>, at: DateTime<Utc> },
    SubmissionSettled(SubmissionOutcome),
    BlockIntersected(String),
    ImageIntersected(String),
    BlurTextClicked(String),
    BlurTextTimerElapsed(String),
    FaqQuestionClicked(usize),
    HeroTimerElapsed,
}

impl UiEvent {
    /// Short name used in log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::MenuToggled => "menu_toggled",
            Self::NavLinkClicked => "nav_link_clicked",
            Self::Scrolled(_) => "scrolled",
            Self::AnchorClicked { .. } => "anchor_clicked",
            Self::FieldInput { .. } => "field_input",
            Self::FieldBlurred(_) => "field_blurred",
            Self::FormSubmitted { .. } => "form_submitted",
            Self::SubmissionSettled(_) => "submission_settled",
            Self::BlockIntersected(_) => "block_intersected",
            Self::ImageIntersected(_) => "image_intersected",
            Self::BlurTextClicked(_) => "blur_text_clicked",
            Self::BlurTextTimerElapsed(_) => "blur_text_timer_elapsed",
            Self::FaqQuestionClicked(_) => "faq_question_clicked",
            Self::HeroTimerElapsed => "hero_timer_elapsed",
        }
    }
}

