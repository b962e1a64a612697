//! Hookdoc Core - documentation registry and renderers for React hook APIs
//!
//! This crate provides the core functionality:
//! - Registry: the immutable, ordered catalog of documented hooks
//! - Banner: the static page header fragment
//! - Render: HTML, Markdown and JSON generators over a registry
//! - Search: ranked lookup over hook names and descriptions
//! - Config: `hookdoc.toml` site configuration

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Registry module - hook entries and the built-in catalog
pub mod registry;

/// Static page banner
pub mod banner;

/// Output generators (HTML, Markdown, JSON)
pub mod render;

/// Search over registry entries
pub mod search;

/// Site configuration
pub mod config;

/// Error types
pub mod error;

pub use banner::Banner;
pub use config::{OutputFormat, SiteConfig};
pub use error::{ConfigError, EntryField, RegistryError};
pub use registry::{HookEntry, Registry};
pub use search::{search, SearchHit};

/// The built-in hook catalog, shared for the lifetime of the process.
pub fn registry() -> &'static Registry {
    Registry::builtin()
}

/// Render the page banner.
pub fn banner() -> String {
    Banner::render()
}
