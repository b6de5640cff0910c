use super::link::InPageLink;
use crate::dispatcher::Dispatcher;
use dioxus::prelude::*;
use hw_domain::config::SiteConfig;
use hw_domain::constants::{HERO_CONTENT_CLASS, HOME_SECTION_ID};

#[component]
pub(super) fn Hero() -> Element {
    let site = use_context::<SiteConfig>();
    let dispatcher = use_context::<Dispatcher>();
    let hero = dispatcher.page().read().state().hero();
    let content = &site.content.hero;

    rsx! {
        section { id: HOME_SECTION_ID, class: "hero",
            div { class: HERO_CONTENT_CLASS, style: hero.style(),
                h1 { class: "hero-title", "{content.title}" }
                p { class: "hero-subtitle", "{content.subtitle}" }
                InPageLink { href: content.cta_href.clone(), class: "btn btn-primary", "{content.cta_label}" }
            }
        }
    }
}
