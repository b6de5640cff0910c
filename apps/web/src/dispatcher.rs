use crate::platform;
use dioxus::prelude::*;
use hw_page::{Effect, PageController, SubmissionOutcome, UiEvent, deliver};
use hw_store::RestStore;
use tracing::{debug, warn};

/// Feeds UI events to the page controller and runs the effects it returns.
///
/// Copyable handle shared through context; every component reads the page
/// state through [`Dispatcher::page`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispatcher {
    page: Signal<PageController>,
    store: Signal<Option<RestStore>>,
}

impl Dispatcher {
    pub(crate) const fn new(
        page: Signal<PageController>,
        store: Signal<Option<RestStore>>,
    ) -> Self {
        Self { page, store }
    }

    /// Reactive view of the controller.
    #[must_use]
    pub const fn page(&self) -> Signal<PageController> {
        self.page
    }

    /// Dispatches `event` and executes the resulting effects in order.
    pub fn send(mut self, event: UiEvent) {
        let effects = self.page.write().dispatch(event);
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: Effect) {
        match effect {
            Effect::ScrollTo { top } => platform::scroll_to(top),
            Effect::Alert(text) => platform::alert(&text),
            Effect::ResetVerification => platform::reset_verification(),
            Effect::Schedule { delay, event } => {
                debug!(delay_ms = delay.as_millis(), event = event.name(), "Timer scheduled");
                spawn(async move {
                    platform::sleep(delay).await;
                    self.send(event);
                });
            },
            Effect::Submit(message) => {
                let store = (*self.store.peek()).clone();
                spawn(async move {
                    let settled = match store {
                        Some(store) => deliver(&store, &message).await,
                        None => {
                            warn!("No message store configured");
                            UiEvent::SubmissionSettled(SubmissionOutcome::Failed(
                                "message store is not configured".to_owned(),
                            ))
                        },
                    };
                    self.send(settled);
                });
            },
        }
    }
}
