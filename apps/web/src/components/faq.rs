use crate::dispatcher::Dispatcher;
use dioxus::prelude::*;
use hw_domain::config::SiteConfig;
use hw_domain::constants::{ACTIVE_CLASS, FAQ_ITEM_CLASS, FAQ_QUESTION_CLASS, FAQ_SECTION_ID};
use hw_page::UiEvent;

#[component]
pub(super) fn Faq() -> Element {
    let site = use_context::<SiteConfig>();
    let dispatcher = use_context::<Dispatcher>();
    let page = dispatcher.page();
    let page = page.read();
    let faq = page.state().faq();

    if site.content.faq.is_empty() {
        return rsx! {};
    }

    let items = site.content.faq.iter().enumerate().map(|(index, entry)| {
        let class = if faq.is_open(index) {
            format!("{FAQ_ITEM_CLASS} {ACTIVE_CLASS}")
        } else {
            FAQ_ITEM_CLASS.to_owned()
        };
        rsx! {
            div { key: "{index}", class,
                div {
                    class: FAQ_QUESTION_CLASS,
                    onclick: move |_| dispatcher.send(UiEvent::FaqQuestionClicked(index)),
                    h3 { "{entry.question}" }
                    span { class: "faq-icon", "+" }
                }
                div { class: "faq-answer",
                    p { "{entry.answer}" }
                }
            }
        }
    });

    rsx! {
        section { id: FAQ_SECTION_ID, class: "section faq",
            div { class: "container",
                h2 { class: "section-title", "Frequently Asked Questions" }
                div { class: "faq-list", {items} }
            }
        }
    }
}
