use crate::dispatcher::Dispatcher;
use crate::platform;
use dioxus::prelude::*;
use hw_page::UiEvent;

/// Whether a click on `href` stays on the page and gets the offset smooth scroll.
pub(super) fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}

/// Link that scrolls in-page targets below the fixed navbar. Other hrefs navigate normally.
#[component]
pub(super) fn InPageLink(
    #[props(into)] href: String,
    #[props(into)] class: String,
    #[props(into, default)] style: String,
    /// Nav menu links also close the mobile menu.
    #[props(default)]
    closes_menu: bool,
    children: Element,
) -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let target = href.clone();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            style: "{style}",
            onclick: move |evt: MouseEvent| {
                let href = target.clone();
                let in_page = is_in_page(&href);
                if in_page {
                    evt.prevent_default();
                }
                if closes_menu {
                    dispatcher.send(UiEvent::NavLinkClicked);
                }
                async move {
                    if in_page {
                        follow_anchor(dispatcher, href).await;
                    }
                }
            },
            {children}
        }
    }
}

async fn follow_anchor(dispatcher: Dispatcher, href: String) {
    let target = platform::measure_anchor(&href).await;
    dispatcher.send(UiEvent::AnchorClicked { href, target });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fragment_links_are_followed_in_page() {
        assert!(is_in_page("#home"));
        assert!(is_in_page("#services"));
        assert!(!is_in_page("https://haywilson.com/#home"));
        assert!(!is_in_page("/privacy"));
        assert!(!is_in_page("mailto:info@haywilson.com"));
    }
}
