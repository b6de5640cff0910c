//! # Message Store
//!
//! The backend collaborator of the contact form: a hosted, table-oriented store
//! (Supabase / `PostgREST`) reached with a project URL and a public anon key.
//!
//! The page performs exactly one kind of write, inserting a single
//! [`ContactMessage`] row. Any failure, whether transport or a non-success status,
//! is reported as a [`StoreError`]; callers do not retry.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hw_domain::message::ContactMessage;
//! use hw_store::{MessageStore, RestStore, StoreError};
//!
//! # async fn example(message: ContactMessage) -> Result<(), StoreError> {
//! let store = RestStore::builder()
//!     .url("https://project.supabase.co")
//!     .anon_key("public-anon-key")
//!     .build()?;
//!
//! store.insert(&message).await?;
//! # Ok(())
//! # }
//! ```

mod error;

pub use crate::error::{StoreError, StoreErrorExt};

use hw_domain::config::StoreConfig;
use hw_domain::constants::DEFAULT_MESSAGES_TABLE;
use hw_domain::message::ContactMessage;
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Path of the REST interface below the project URL.
const REST_PREFIX: &str = "rest/v1";

/// Write side of the contact messages table.
///
/// Futures are not required to be `Send`: in the browser everything runs on the
/// main thread and `fetch` futures are `!Send`.
pub trait MessageStore {
    /// Inserts one message as a single atomic write.
    fn insert(&self, message: &ContactMessage) -> impl Future<Output = Result<(), StoreError>>;
}

#[derive(Debug)]
struct RestStoreInner {
    client: Client,
    endpoint: String,
    anon_key: String,
    table: String,
}

/// [`MessageStore`] speaking the `PostgREST` insert protocol.
#[derive(Debug, Clone)]
pub struct RestStore {
    inner: Arc<RestStoreInner>,
}

impl RestStore {
    /// Creates a new [`RestStoreBuilder`].
    pub fn builder() -> RestStoreBuilder {
        RestStoreBuilder::default()
    }

    /// The fully qualified insert endpoint, e.g. `https://p.supabase.co/rest/v1/hw_contact_messages`.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }
}

impl MessageStore for RestStore {
    #[instrument(skip_all, fields(table = %self.inner.table))]
    async fn insert(&self, message: &ContactMessage) -> Result<(), StoreError> {
        let inner = &self.inner;

        let response = inner
            .client
            .post(&inner.endpoint)
            .header("apikey", &inner.anon_key)
            .bearer_auth(&inner.anon_key)
            .header("Prefer", "return=minimal")
            .json(&[message])
            .send()
            .await
            .context("Posting contact message")?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Contact message stored");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Store rejected contact message");

        Err(StoreError::Rejected {
            status: status.as_u16(),
            message: body.into(),
            context: Some(format!("Inserting into {}", inner.table).into()),
        })
    }
}

/// A fluent builder for configuring a [`RestStore`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug)]
pub struct RestStoreBuilder {
    url: Option<String>,
    anon_key: Option<String>,
    table: String,
    client: Option<Client>,
}

impl Default for RestStoreBuilder {
    fn default() -> Self {
        Self { url: None, anon_key: None, table: DEFAULT_MESSAGES_TABLE.to_owned(), client: None }
    }
}

impl RestStoreBuilder {
    /// Copies url, key and table from the site configuration.
    pub fn config(self, cfg: &StoreConfig) -> Self {
        self.url(&cfg.url).anon_key(&cfg.anon_key).table(&cfg.table)
    }

    /// Sets the project URL (without the `rest/v1` suffix).
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the public anon key sent as `apikey` and bearer token.
    pub fn anon_key(mut self, key: impl Into<String>) -> Self {
        self.anon_key = Some(key.into());
        self
    }

    /// Sets the table receiving the messages.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Reuses an existing HTTP client.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and validates the settings.
    ///
    /// # Errors
    /// Returns [`StoreError::Validation`] if the URL is missing or not `http(s)`,
    /// or if the key or table is empty.
    pub fn build(self) -> Result<RestStore, StoreError> {
        let url = self.url.filter(|u| !u.trim().is_empty()).ok_or(StoreError::Validation {
            message: "URL is required".into(),
            context: None,
        })?;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(StoreError::Validation {
                message: format!("URL must be http(s), got '{url}'").into(),
                context: None,
            });
        }

        let anon_key = self.anon_key.filter(|k| !k.trim().is_empty()).ok_or(
            StoreError::Validation { message: "Anon key is required".into(), context: None },
        )?;

        let table = self.table.trim().to_owned();
        if table.is_empty() {
            return Err(StoreError::Validation {
                message: "Table name cannot be empty".into(),
                context: None,
            });
        }

        let endpoint = format!("{}/{REST_PREFIX}/{table}", url.trim_end_matches('/'));
        debug!(%endpoint, "Message store configured");

        Ok(RestStore {
            inner: Arc::new(RestStoreInner {
                client: self.client.unwrap_or_default(),
                endpoint,
                anon_key,
                table,
            }),
        })
    }
}
