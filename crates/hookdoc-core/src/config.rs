//! Site configuration (`hookdoc.toml`) parsing

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the configuration file looked up by [`SiteConfig::discover`].
pub const CONFIG_FILE: &str = "hookdoc.toml";

/// Output format for generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A static site: index page, optional per-hook pages, search index.
    #[default]
    Html,
    /// A single Markdown document.
    Markdown,
    /// A JSON export of every entry.
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }

    /// Extension of the main generated file.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Settings for a documentation build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Page title used in `<title>` and document headings.
    pub title: String,

    /// Directory the build writes into.
    pub output_dir: PathBuf,

    /// Output format.
    pub format: OutputFormat,

    /// Also write one HTML page per hook (HTML format only).
    pub detail_pages: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "React Hooks Visualization".to_string(),
            output_dir: PathBuf::from("site"),
            format: OutputFormat::default(),
            detail_pages: true,
        }
    }
}

impl SiteConfig {
    /// Load a configuration from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse a configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `hookdoc.toml` from `dir`, or fall back to defaults when absent.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading site config");
            Self::from_path(&path)
        } else {
            tracing::debug!(dir = %dir.as_ref().display(), "no site config found, using defaults");
            Ok(Self::default())
        }
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
