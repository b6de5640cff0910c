use crate::dispatcher::Dispatcher;
use dioxus::prelude::*;
use hw_domain::config::{SectionContent, SiteConfig};
use hw_page::UiEvent;

/// Content sections with their scroll-revealed blocks, plus the click-to-reveal texts.
#[component]
pub(super) fn Sections() -> Element {
    let site = use_context::<SiteConfig>();

    let sections = site.content.sections.iter().map(|section| {
        rsx! { Section { key: "{section.id}", section: section.clone() } }
    });

    rsx! {
        {sections}
        Reveals {}
    }
}

#[component]
fn Section(section: SectionContent) -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let page = dispatcher.page();
    let page = page.read();

    let blocks = section.blocks.iter().map(|block| {
        let reveal = page.state().block(&block.id);
        rsx! {
            div {
                key: "{block.id}",
                id: "{block.id}",
                class: block.kind.class(),
                style: reveal.style(),
                h3 { "{block.title}" }
                if !block.body.is_empty() {
                    p { "{block.body}" }
                }
            }
        }
    });

    rsx! {
        section { id: "{section.id}", class: "section",
            div { class: "container",
                h2 { class: "section-title", "{section.title}" }
                if let Some(intro) = &section.intro {
                    p { class: "section-intro", "{intro}" }
                }
                div { class: "section-grid", {blocks} }
            }
        }
    }
}

#[component]
fn Reveals() -> Element {
    let site = use_context::<SiteConfig>();
    let dispatcher = use_context::<Dispatcher>();
    let page = dispatcher.page();
    let page = page.read();

    let reveals = site.content.reveals.iter().filter_map(|entry| {
        let text = page.state().blur_text(&entry.id)?;
        let id = entry.id.clone();
        Some(rsx! {
            p { key: "{entry.id}",
                span {
                    id: "{entry.id}",
                    class: text.class(),
                    onclick: move |_| dispatcher.send(UiEvent::BlurTextClicked(id.clone())),
                    dangerous_inner_html: text.text(),
                }
            }
        })
    });

    rsx! {
        div { class: "reveals", {reveals} }
    }
}
