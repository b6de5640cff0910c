use crate::dispatcher::Dispatcher;
use dioxus::prelude::*;
use hw_domain::config::SiteConfig;
use hw_domain::constants::GALLERY_SECTION_ID;

/// Images render with `data-src` only; the controller promotes it to `src` on intersection.
#[component]
pub(super) fn Gallery() -> Element {
    let site = use_context::<SiteConfig>();
    let dispatcher = use_context::<Dispatcher>();
    let page = dispatcher.page();
    let page = page.read();

    if site.content.gallery.is_empty() {
        return rsx! {};
    }

    let images = site.content.gallery.iter().filter_map(|entry| {
        let image = page.state().image(&entry.id)?;
        Some(rsx! {
            img {
                key: "{entry.id}",
                id: "{entry.id}",
                class: "gallery-image",
                alt: "{entry.alt}",
                src: image.src(),
                "data-src": image.data_src(),
            }
        })
    });

    rsx! {
        section { id: GALLERY_SECTION_ID, class: "section gallery",
            div { class: "container gallery-grid", {images} }
        }
    }
}
