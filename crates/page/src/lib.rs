//! # Page
//!
//! The interaction controller of the site. The host (the Dioxus app) turns
//! browser callbacks into [`UiEvent`]s and feeds them to
//! [`PageController::dispatch`]; the controller updates its [`PageState`] and
//! answers with [`Effect`]s the host must run (scrolling, alerts, timers, the
//! store insert, resetting the verification widget).
//!
//! Nothing here touches the DOM, so every reaction can be driven by synthetic
//! events in tests.
//!
//! ## Example
//!
//! ```rust
//! use hw_domain::config::SiteConfig;
//! use hw_page::{Effect, PageController, ScrollSample, UiEvent};
//!
//! let mut page = PageController::new(&SiteConfig::default()).unwrap();
//! let effects = page.dispatch(UiEvent::Ready);
//! assert!(matches!(effects[0], Effect::Schedule { .. }));
//!
//! page.dispatch(UiEvent::Scrolled(ScrollSample::at(240.0)));
//! assert!(page.state().nav().is_scrolled());
//! ```

mod controller;
mod effect;
mod error;
mod event;
pub mod faq;
pub mod form;
pub mod lazy;
pub mod menu;
pub mod navigation;
pub mod reveal;

pub use crate::controller::{
    MISSING_TOKEN_ALERT, PageController, PageState, SUCCESS_ALERT, failure_alert,
};
pub use crate::effect::Effect;
pub use crate::error::{PageError, PageErrorExt};
pub use crate::event::{
    AnchorTarget, Field, ScrollSample, SectionBounds, SubmissionOutcome, UiEvent,
};
pub use crate::form::deliver;
