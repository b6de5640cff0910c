#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared across the workspace.
//!
//! Only one macro lives here today: [`hw_error`], which turns a plain enum into a
//! `thiserror` error with context support. Every crate's `error.rs` is built on it.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug` and `thiserror::Error` unless already present.
/// * **Context**: a companion `<Name>Ext` trait adding `.context(..)` to
///   `Result<T, Name>` and to `Result<T, Source>` for every source-carrying variant.
/// * **Conversions**: `From<Source>` for variants with a `source` field (or a field
///   marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal fallback**: `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
/// * **Formatting**: a private `format_context` helper for `#[error(..)]` strings.
///
/// # Requirements
///
/// 1. Applied to an enum with named-field variants only.
/// 2. Context-aware variants hold `context: Option<Cow<'static, str>>`.
/// 3. A variant with a source must also hold a context field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[hw_derive::hw_error]
/// pub enum StoreError {
///     #[error("Transport error{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn send() -> Result<(), StoreError> {
///     client.execute(request).context("Posting contact message")?;
///     Err("unreachable".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn hw_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
