use std::borrow::Cow;

/// A specialized [`PageError`] enum of this crate.
#[hw_derive::hw_error]
pub enum PageError {
    /// The site content cannot drive the page (duplicate ids, empty entries).
    #[error("Content error{}: {message}", format_context(.context))]
    Content { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The built-in email pattern failed to compile.
    #[error("Pattern error{}: {source}", format_context(.context))]
    Pattern { source: regex::Error, context: Option<Cow<'static, str>> },
}
