use crate::event::UiEvent;
use hw_domain::message::ContactMessage;
use std::time::Duration;

/// Side effects requested by a handler. The host executes them in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Smooth-scroll the window to a document offset.
    ScrollTo { top: f64 },
    /// Blocking alert with the given text.
    Alert(String),
    /// Feed `event` back into the controller after `delay`.
    Schedule { delay: Duration, event: UiEvent },
    /// Insert the message into the store, then dispatch
    /// [`UiEvent::SubmissionSettled`] with the outcome.
    Submit(ContactMessage),
    /// Clear the verification widget.
    ResetVerification,
}
