//! Contact form: controlled field values, border feedback, submit button and delivery.

use crate::event::{Field, SubmissionOutcome, UiEvent};
use chrono::{DateTime, SecondsFormat, Utc};
use hw_domain::constants::{DEFAULT_BORDER, ERROR_BORDER, SUCCESS_BORDER};
use hw_domain::message::ContactMessage;
use hw_store::MessageStore;
use regex::Regex;
use std::borrow::Cow;
use tracing::{info, instrument, warn};

/// Address shape accepted by the email field.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub const IDLE_LABEL: &str = "Send Message";
pub const BUSY_LABEL: &str = "Sending...";

/// Border feedback of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Default,
    Error,
    Success,
}

impl Tone {
    #[must_use]
    pub const fn border_color(self) -> &'static str {
        match self {
            Self::Default => DEFAULT_BORDER,
            Self::Error => ERROR_BORDER,
            Self::Success => SUCCESS_BORDER,
        }
    }
}

/// Blur rule for required fields.
#[must_use]
pub fn required_blur_tone(value: &str) -> Tone {
    if value.trim().is_empty() { Tone::Error } else { Tone::Default }
}

/// Input rule for required fields: empty input keeps whatever tone was there.
#[must_use]
pub fn input_tone(current: Tone, value: &str) -> Tone {
    if value.trim().is_empty() { current } else { Tone::Success }
}

/// Format check run on the email field after the required rule.
#[derive(Debug, Clone)]
pub struct EmailRule {
    pattern: Regex,
}

impl EmailRule {
    pub(crate) const fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Empty input leaves `current` untouched.
    #[must_use]
    pub fn tone(&self, current: Tone, value: &str) -> Tone {
        if value.is_empty() {
            current
        } else if self.pattern.is_match(value) {
            Tone::Success
        } else {
            Tone::Error
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub tone: Tone,
}

/// Held while a message is in flight; settling gives the label back.
#[derive(Debug, PartialEq, Eq)]
struct PendingSubmission {
    restore_label: Cow<'static, str>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SubmitButton {
    label: Cow<'static, str>,
    pending: Option<PendingSubmission>,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self { label: Cow::Borrowed(IDLE_LABEL), pending: None }
    }
}

impl SubmitButton {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.pending.is_some()
    }

    fn begin(&mut self) {
        let restore_label = std::mem::replace(&mut self.label, Cow::Borrowed(BUSY_LABEL));
        self.pending = Some(PendingSubmission { restore_label });
    }

    /// Returns `false` if nothing was in flight.
    fn settle(&mut self) -> bool {
        let Some(pending) = self.pending.take() else { return false };
        self.label = pending.restore_label;
        true
    }
}

/// Values and feedback of every field, plus the submit button.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormState {
    fields: [FieldState; Field::ALL.len()],
    submit: SubmitButton,
}

impl FormState {
    #[must_use]
    pub const fn field(&self, field: Field) -> &FieldState {
        &self.fields[field.index()]
    }

    #[must_use]
    pub const fn submit(&self) -> &SubmitButton {
        &self.submit
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.submit.is_disabled()
    }

    pub(crate) fn input(&mut self, field: Field, value: String) {
        let state = &mut self.fields[field.index()];
        if field.is_required() {
            state.tone = input_tone(state.tone, &value);
        }
        state.value = value;
    }

    pub(crate) fn blur(&mut self, field: Field, email: &EmailRule) {
        let state = &mut self.fields[field.index()];
        if field.is_required() {
            state.tone = required_blur_tone(&state.value);
        }
        if field == Field::Email {
            state.tone = email.tone(state.tone, &state.value);
        }
    }

    /// Snapshot of the current values as a store row.
    #[must_use]
    pub fn message(&self, at: DateTime<Utc>) -> ContactMessage {
        let value = |field: Field| self.field(field).value.clone();
        let optional = |field: Field| Some(value(field)).filter(|v| !v.is_empty());

        ContactMessage {
            name: value(Field::Name),
            email: value(Field::Email),
            phone: optional(Field::Phone),
            service: optional(Field::Service),
            message: value(Field::Message),
            created_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub(crate) fn begin_submission(&mut self) {
        self.submit.begin();
    }

    pub(crate) fn settle_submission(&mut self) -> bool {
        self.submit.settle()
    }

    /// Empties every field and clears the feedback.
    pub(crate) fn reset(&mut self) {
        self.fields = Default::default();
    }
}

/// Hands `message` to `store` and turns whatever happens into the settle event.
///
/// There is no early exit: a failed insert becomes [`SubmissionOutcome::Failed`]
/// so the controller always gets to release the submit button.
#[instrument(skip_all)]
pub async fn deliver<S>(store: &S, message: &ContactMessage) -> UiEvent
where
    S: MessageStore,
{
    let outcome = match store.insert(message).await {
        Ok(()) => {
            info!("Contact message delivered");
            SubmissionOutcome::Stored
        },
        Err(err) => {
            warn!(error = %err, "Contact message not delivered");
            SubmissionOutcome::Failed(err.to_string())
        },
    };

    UiEvent::SubmissionSettled(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn email_rule() -> EmailRule {
        EmailRule::new(Regex::new(EMAIL_PATTERN).unwrap())
    }

    #[test]
    fn required_rules() {
        assert_eq!(required_blur_tone("   "), Tone::Error);
        assert_eq!(required_blur_tone("Ann"), Tone::Default);
        assert_eq!(input_tone(Tone::Error, "A"), Tone::Success);
        assert_eq!(input_tone(Tone::Error, " "), Tone::Error);
    }

    #[test]
    fn email_rule_alone() {
        let rule = email_rule();
        assert_eq!(rule.tone(Tone::Default, "a@b.co"), Tone::Success);
        assert_eq!(rule.tone(Tone::Default, "not-an-email"), Tone::Error);
        assert_eq!(rule.tone(Tone::Default, "a b@c.de"), Tone::Error);
        assert_eq!(rule.tone(Tone::Success, ""), Tone::Success);
    }

    #[test]
    fn empty_email_blur_reports_missing_value() {
        let mut form = FormState::default();
        form.blur(Field::Email, &email_rule());
        assert_eq!(form.field(Field::Email).tone, Tone::Error);
    }

    #[test]
    fn optional_fields_are_not_styled() {
        let mut form = FormState::default();
        form.input(Field::Phone, "555".to_owned());
        form.blur(Field::Service, &email_rule());

        assert_eq!(form.field(Field::Phone).tone, Tone::Default);
        assert_eq!(form.field(Field::Service).tone, Tone::Default);
    }

    #[test]
    fn message_uses_null_for_empty_optionals() {
        let mut form = FormState::default();
        form.input(Field::Name, "A".to_owned());
        form.input(Field::Email, "a@b.co".to_owned());
        form.input(Field::Message, "hi".to_owned());
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();

        let message = form.message(at);
        assert_eq!(message.phone, None);
        assert_eq!(message.service, None);
        assert_eq!(message.created_at, "2026-10-19T09:30:00.000Z");
    }

    #[test]
    fn settle_restores_the_label_once() {
        let mut button = SubmitButton::default();
        button.begin();
        assert_eq!(button.label(), BUSY_LABEL);
        assert!(button.is_disabled());

        assert!(button.settle());
        assert_eq!(button.label(), IDLE_LABEL);
        assert!(!button.is_disabled());
        assert!(!button.settle());
    }
}
