//! Error types for registry construction and configuration loading

use std::path::PathBuf;

use thiserror::Error;

/// Which field of a hook entry failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Id,
    Description,
    Example,
    ReferenceUrl,
}

impl std::fmt::Display for EntryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntryField::Id => "id",
            EntryField::Description => "description",
            EntryField::Example => "example",
            EntryField::ReferenceUrl => "reference_url",
        };
        f.write_str(name)
    }
}

/// Errors raised while building a [`crate::Registry`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate hook id '{0}'")]
    DuplicateId(String),

    #[error("hook '{id}' renders to the same anchor as '{existing}'")]
    AnchorCollision { id: String, existing: String },

    #[error("hook '{id}' has an empty {field}")]
    EmptyField { id: String, field: EntryField },

    #[error("hook '{id}' has a malformed reference url '{url}'")]
    InvalidUrl { id: String, url: String },
}

/// Errors that can occur when loading a site configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown output format '{0}', expected one of: html, markdown, json")]
    UnknownFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_messages() {
        let err = RegistryError::EmptyField {
            id: "useState".to_string(),
            field: EntryField::Example,
        };
        assert_eq!(err.to_string(), "hook 'useState' has an empty example");

        let err = RegistryError::DuplicateId("useRef".to_string());
        assert_eq!(err.to_string(), "duplicate hook id 'useRef'");

        let err = RegistryError::AnchorCollision {
            id: "usea".to_string(),
            existing: "useA".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "hook 'usea' renders to the same anchor as 'useA'"
        );
    }
}
