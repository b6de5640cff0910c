use super::link::InPageLink;
use crate::dispatcher::Dispatcher;
use dioxus::prelude::*;
use hw_domain::config::SiteConfig;
use hw_domain::constants::{
    ACTIVE_CLASS, HOME_SECTION_ID, MENU_TOGGLE_ID, NAV_LINK_CLASS, NAV_MENU_ID, NAVBAR_ID,
    SCROLLED_CLASS,
};
use hw_page::UiEvent;
use hw_page::menu::BarStyle;

fn bar_style(bar: BarStyle) -> String {
    if bar.transform.is_empty() {
        format!("opacity: {};", bar.opacity)
    } else {
        format!("transform: {}; opacity: {};", bar.transform, bar.opacity)
    }
}

#[component]
pub(super) fn Navbar() -> Element {
    let site = use_context::<SiteConfig>();
    let dispatcher = use_context::<Dispatcher>();
    let page = dispatcher.page();
    let page = page.read();
    let state = page.state();

    let nav_class =
        if state.nav().is_scrolled() { format!("navbar {SCROLLED_CLASS}") } else { "navbar".to_owned() };
    let menu_class =
        if state.menu().is_open() { format!("nav-menu {ACTIVE_CLASS}") } else { "nav-menu".to_owned() };

    let bars = state.menu().bars().map(|bar| rsx! { span { class: "bar", style: bar_style(bar) } });

    let links = site.content.nav.iter().map(|link| {
        let color =
            state.nav().link_color(&link.href).map(|c| format!("color: {c};")).unwrap_or_default();
        rsx! {
            li { key: "{link.href}",
                InPageLink {
                    href: link.href.clone(),
                    class: NAV_LINK_CLASS,
                    style: color,
                    closes_menu: true,
                    "{link.label}"
                }
            }
        }
    });

    rsx! {
        nav { id: NAVBAR_ID, class: nav_class,
            div { class: "nav-container",
                InPageLink { href: format!("#{HOME_SECTION_ID}"), class: "nav-logo", "{site.content.title}" }
                ul { id: NAV_MENU_ID, class: menu_class, {links} }
                div {
                    id: MENU_TOGGLE_ID,
                    class: "mobile-menu-toggle",
                    onclick: move |_| dispatcher.send(UiEvent::MenuToggled),
                    {bars.into_iter()}
                }
            }
        }
    }
}
