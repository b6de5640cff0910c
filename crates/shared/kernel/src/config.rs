use config::{Config, Environment, File, FileFormat, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::{debug, info};

/// Prefix of environment overrides (`HW__STORE__URL` maps to `store.url`).
pub const ENV_PREFIX: &str = "HW";
const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[hw_derive::hw_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration compiled into the binary, layered with environment overrides.
///
/// The site ships as a wasm bundle without a filesystem, so the base layer is a TOML
/// document embedded with `include_str!`:
/// 1. **Embedded TOML**: the base settings.
/// 2. **Environment Overrides**: variables prefixed with `HW__`, nested keys separated
///    by double underscores. In the browser the process environment is empty and this
///    layer is a no-op; native tooling and tests can still override values.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the TOML is malformed or does not match `T`.
///
/// # Example
/// ```rust
/// use hw_kernel::config::load_embedded;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Limits {
///     retries: u8,
/// }
///
/// let limits: Limits = load_embedded("retries = 3").unwrap_or_default();
/// assert_eq!(limits.retries, 3);
/// ```
pub fn load_embedded<T>(raw: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build(raw, environment())
}

/// Same as [`load_embedded`], but reads overrides from `overrides` instead of the
/// process environment. Keys use the environment spelling (`HW__STORE__TABLE`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the TOML is malformed, an override cannot be
/// applied, or the result does not match `T`.
pub fn load_embedded_with<T, I>(raw: &str, overrides: I) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    let source: Map<String, String> = overrides.into_iter().collect();
    debug!(count = source.len(), "Applying explicit config overrides");

    build(raw, environment().source(Some(source)))
}

/// Override values stay strings; `config` converts them to the target field type.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR)
}

fn build<T>(raw: &str, environment: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    info!(bytes = raw.len(), "Loading embedded site config");

    let config = Config::builder()
        .add_source(File::from_str(raw, FileFormat::Toml))
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
