mod contact;
mod faq;
mod gallery;
mod hero;
mod link;
mod navbar;
mod sections;

use crate::dispatcher::Dispatcher;
use crate::platform;
use dioxus::prelude::*;
use hw_domain::config::SiteConfig;
use hw_page::{PageController, UiEvent};
use hw_store::RestStore;
use tracing::{error, warn};

const RECAPTCHA_SCRIPT: &str = "https://www.google.com/recaptcha/api.js";

/// Root component: owns the controller and the store, renders the page.
#[component]
pub fn App() -> Element {
    let site = use_context::<SiteConfig>();

    let page = use_hook(|| {
        PageController::new(&site).map(Signal::new).map_err(|err| {
            error!(%err, "Site content rejected");
            err.to_string()
        })
    });
    let page = match page {
        Ok(page) => page,
        Err(message) => return rsx! { div { class: "page-error", "{message}" } },
    };

    let store = use_signal(|| match RestStore::builder().config(&site.store).build() {
        Ok(store) => Some(store),
        Err(err) => {
            warn!(%err, "Message store disabled");
            None
        },
    });

    let dispatcher = use_context_provider(|| Dispatcher::new(page, store));

    use_effect(move || {
        dispatcher.send(UiEvent::Ready);
        spawn(platform::watch_scroll(move |sample| dispatcher.send(UiEvent::Scrolled(sample))));
        spawn(platform::watch_intersections(move |event| dispatcher.send(event)));
    });

    rsx! {
        document::Title { "{site.content.title}" }
        document::Script { src: RECAPTCHA_SCRIPT, r#async: true, defer: true }

        navbar::Navbar {}
        main {
            hero::Hero {}
            sections::Sections {}
            faq::Faq {}
            gallery::Gallery {}
            contact::Contact {}
        }
        footer { class: "footer",
            p { "{site.content.title}" }
        }
    }
}
