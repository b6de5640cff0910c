//! Browser interop through `document::eval`.
//!
//! Scripts report back with `dioxus.send`, and the payloads are decoded into
//! the controller's event types here.

use dioxus::prelude::*;
use hw_domain::constants::NAVBAR_ID;
use hw_page::{AnchorTarget, ScrollSample, SectionBounds, UiEvent};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const SCROLL_SCRIPT: &str = r"
const report = () => {
    const navbar = document.getElementById('navbar');
    const sections = Array.from(document.querySelectorAll('section[id]')).map((section) => ({
        id: section.id,
        top: section.offsetTop,
        height: section.offsetHeight,
    }));
    dioxus.send({
        offset: window.pageYOffset,
        navbar_height: navbar ? navbar.offsetHeight : 0,
        sections,
    });
};
window.addEventListener('scroll', report);
";

const INTERSECTION_SCRIPT: &str = r"
if ('IntersectionObserver' in window) {
    const reveal = new IntersectionObserver((entries, observer) => {
        entries.forEach((entry) => {
            if (entry.isIntersecting) {
                dioxus.send({ kind: 'block', id: entry.target.id });
                observer.unobserve(entry.target);
            }
        });
    }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });
    document
        .querySelectorAll('.service-card, .expertise-item, .contact-item')
        .forEach((el) => reveal.observe(el));

    const images = new IntersectionObserver((entries, observer) => {
        entries.forEach((entry) => {
            if (entry.isIntersecting) {
                dioxus.send({ kind: 'image', id: entry.target.id });
                observer.unobserve(entry.target);
            }
        });
    });
    document.querySelectorAll('img[data-src]').forEach((img) => images.observe(img));
}
";

const TOKEN_SCRIPT: &str =
    "dioxus.send(typeof grecaptcha === 'undefined' ? null : grecaptcha.getResponse());";

const RESET_SCRIPT: &str = "if (typeof grecaptcha !== 'undefined') { grecaptcha.reset(); }";

#[derive(Debug, Deserialize)]
struct SectionDto {
    id: String,
    top: f64,
    height: f64,
}

#[derive(Debug, Deserialize)]
struct ScrollDto {
    offset: f64,
    navbar_height: f64,
    #[serde(default)]
    sections: Vec<SectionDto>,
}

impl From<ScrollDto> for ScrollSample {
    fn from(dto: ScrollDto) -> Self {
        Self {
            offset: dto.offset,
            navbar_height: dto.navbar_height,
            sections: dto
                .sections
                .into_iter()
                .map(|s| SectionBounds { id: s.id, top: s.top, height: s.height })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Intersection {
    Block { id: String },
    Image { id: String },
}

impl From<Intersection> for UiEvent {
    fn from(hit: Intersection) -> Self {
        match hit {
            Intersection::Block { id } => Self::BlockIntersected(id),
            Intersection::Image { id } => Self::ImageIntersected(id),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnchorDto {
    top: f64,
    navbar_height: f64,
}

/// Quotes `value` as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Forwards every window scroll to `on_sample` until the page goes away.
pub(crate) async fn watch_scroll(mut on_sample: impl FnMut(ScrollSample)) {
    let mut eval = document::eval(SCROLL_SCRIPT);
    loop {
        match eval.recv::<ScrollDto>().await {
            Ok(dto) => on_sample(dto.into()),
            Err(err) => {
                warn!(?err, "Scroll listener stopped");
                break;
            },
        }
    }
}

/// Observes reveal blocks and lazy images; each element reports once.
pub(crate) async fn watch_intersections(mut on_event: impl FnMut(UiEvent)) {
    let mut eval = document::eval(INTERSECTION_SCRIPT);
    loop {
        match eval.recv::<Intersection>().await {
            Ok(hit) => on_event(hit.into()),
            Err(err) => {
                debug!(?err, "Intersection observer stopped");
                break;
            },
        }
    }
}

/// Measures the element an in-page link points at; `None` if it does not exist.
pub(crate) async fn measure_anchor(href: &str) -> Option<AnchorTarget> {
    let script = format!(
        r"
        let target = null;
        try {{ target = document.querySelector({selector}); }} catch (_) {{ target = null; }}
        if (target) {{
            const navbar = document.getElementById({navbar});
            dioxus.send({{
                top: target.getBoundingClientRect().top + window.pageYOffset,
                navbar_height: navbar ? navbar.offsetHeight : 0,
            }});
        }} else {{
            dioxus.send(null);
        }}
        ",
        selector = js_string(href),
        navbar = js_string(NAVBAR_ID),
    );

    match document::eval(&script).recv::<Option<AnchorDto>>().await {
        Ok(dto) => dto.map(|d| AnchorTarget { top: d.top, navbar_height: d.navbar_height }),
        Err(err) => {
            warn!(?err, %href, "Anchor measurement failed");
            None
        },
    }
}

/// Current reCAPTCHA response; a missing widget reads as no token.
pub(crate) async fn verification_token() -> Option<String> {
    match document::eval(TOKEN_SCRIPT).recv::<Option<String>>().await {
        Ok(token) => token,
        Err(err) => {
            warn!(?err, "Could not read verification token");
            None
        },
    }
}

pub(crate) fn reset_verification() {
    let _ = document::eval(RESET_SCRIPT);
}

pub(crate) fn scroll_to(top: f64) {
    let _ = document::eval(&format!("window.scrollTo({{ top: {top}, behavior: 'smooth' }});"));
}

pub(crate) fn alert(text: &str) {
    let _ = document::eval(&format!("alert({});", js_string(text)));
}

pub(crate) async fn sleep(delay: Duration) {
    let script = format!("setTimeout(() => dioxus.send(true), {});", delay.as_millis());
    if let Err(err) = document::eval(&script).recv::<bool>().await {
        warn!(?err, "Timer interop failed");
    }
}
