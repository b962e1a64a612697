//! A single documented hook

use serde::Serialize;
use url::Url;

use crate::error::{EntryField, RegistryError};

/// Documentation record for one named hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookEntry {
    /// Hook name, e.g. `useState`
    pub id: &'static str,
    /// Human-readable explanation
    pub description: &'static str,
    /// Usage snippet; opaque text, never parsed
    pub example: &'static str,
    /// Absolute link to the upstream reference page
    pub reference_url: &'static str,
}

impl HookEntry {
    pub const fn new(
        id: &'static str,
        description: &'static str,
        example: &'static str,
        reference_url: &'static str,
    ) -> Self {
        Self {
            id,
            description,
            example,
            reference_url,
        }
    }

    /// Check the per-entry invariants: every field non-empty, URL absolute.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let fields = [
            (EntryField::Id, self.id),
            (EntryField::Description, self.description),
            (EntryField::Example, self.example),
            (EntryField::ReferenceUrl, self.reference_url),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(RegistryError::EmptyField {
                    id: self.id.to_string(),
                    field,
                });
            }
        }

        if !is_absolute_url(self.reference_url) {
            return Err(RegistryError::InvalidUrl {
                id: self.id.to_string(),
                url: self.reference_url.to_string(),
            });
        }

        Ok(())
    }

    /// HTML anchor id for this entry
    pub fn anchor(&self) -> String {
        self.id
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect()
    }

    /// First sentence of the description
    pub fn summary(&self) -> &'static str {
        match self.description.find(". ") {
            Some(end) => &self.description[..=end],
            None => self.description,
        }
    }
}

/// Whether `url` is a well-formed absolute http(s) URL with a host.
///
/// Text the URL parser would silently repair (whitespace, control
/// characters, unescaped `<`, `>` or `"`) is rejected up front.
pub fn is_absolute_url(url: &str) -> bool {
    if url
        .chars()
        .any(|c| c.is_control() || c.is_whitespace() || matches!(c, '<' | '>' | '"'))
    {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some(),
        Err(_) => false,
    }
}
