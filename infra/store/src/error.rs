use std::borrow::Cow;

/// A specialized [`StoreError`] enum of this crate.
#[hw_derive::hw_error]
pub enum StoreError {
    /// Builder settings are missing or malformed.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The request never produced a response (network, CORS, DNS, TLS).
    #[error("Store transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The store answered with a non-success status.
    #[error("Store rejected the insert with status {status}{}: {message}", format_context(.context))]
    Rejected { status: u16, message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
