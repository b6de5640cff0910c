//! Kernel utilities shared across the site crates.
//! Keep this crate lightweight; today it owns configuration loading.
//!
//! ## Config loading
//! ```rust
//! use hw_kernel::config::load_embedded;
//! use hw_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_embedded("[store]\ntable = \"messages\"\n").unwrap();
//! assert_eq!(cfg.store.table, "messages");
//! ```

pub mod config;

pub use hw_domain as domain;
