//! # Web
//!
//! The Dioxus front end of the site. [`App`] renders the page from the
//! [`SiteConfig`] provided at launch and wires DOM callbacks to the page
//! controller through a [`Dispatcher`].

mod components;
mod dispatcher;
mod platform;

pub use crate::components::App;
pub use crate::dispatcher::Dispatcher;

use dioxus::prelude::*;
use hw_domain::config::SiteConfig;

#[derive(Debug)]
pub struct WebApp {
    config: SiteConfig,
}

impl WebApp {
    #[must_use]
    pub const fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// The entry point for launching the app
    pub fn launch(self, root: fn() -> Element) {
        tracing::info!(
            sections = self.config.content.sections.len(),
            store = %self.config.store.url,
            "Launching site"
        );

        LaunchBuilder::web().with_context(self.config).launch(root);
    }
}
