//! Markdown documentation generator

use std::fmt::{self, Write};

use super::render_to_string;
use crate::config::SiteConfig;
use crate::registry::{HookEntry, Registry};

/// Generates a single Markdown document covering a registry
pub struct MarkdownGenerator;

impl MarkdownGenerator {
    /// Generate Markdown documentation for every hook in the registry
    pub fn generate(registry: &Registry, config: &SiteConfig) -> String {
        render_to_string(|output| Self::write_document(output, registry, config))
    }

    fn write_document(output: &mut String, registry: &Registry, config: &SiteConfig) -> fmt::Result {
        writeln!(output, "# {}", config.title)?;
        writeln!(output)?;

        if !registry.is_empty() {
            writeln!(output, "## Contents")?;
            writeln!(output)?;
            for entry in registry {
                writeln!(output, "- [{}](#{})", entry.id, entry.anchor())?;
            }
            writeln!(output)?;
        }

        for entry in registry {
            Self::write_entry(output, entry)?;
        }

        Ok(())
    }

    fn write_entry(output: &mut String, entry: &HookEntry) -> fmt::Result {
        writeln!(output, "## {}", entry.id)?;
        writeln!(output)?;
        writeln!(output, "{}", entry.description)?;
        writeln!(output)?;

        writeln!(output, "```jsx")?;
        writeln!(output, "{}", entry.example)?;
        writeln!(output, "```")?;
        writeln!(output)?;

        writeln!(output, "[React reference]({})", entry.reference_url)?;
        writeln!(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_markdown() {
        let registry = Registry::builtin();
        let md = MarkdownGenerator::generate(registry, &SiteConfig::default());

        assert!(md.starts_with("# React Hooks Visualization\n"));
        assert!(md.contains("- [useState](#usestate)"));
        assert_eq!(md.matches("\n## use").count(), registry.len());
        assert_eq!(md.matches("```jsx").count(), registry.len());
        assert!(md.contains("[React reference](https://react.dev/reference/react/useId)"));
    }

    #[test]
    fn test_sections_follow_registry_order() {
        let md = MarkdownGenerator::generate(Registry::builtin(), &SiteConfig::default());
        let state = md.find("## useState").unwrap();
        let effect = md.find("## useEffect").unwrap();
        let store = md.find("## useSyncExternalStore").unwrap();
        assert!(state < effect && effect < store);
    }

    #[test]
    fn test_empty_registry_has_only_title() {
        let registry = Registry::from_entries(Vec::new()).unwrap();
        let md = MarkdownGenerator::generate(&registry, &SiteConfig::default());
        assert_eq!(md, "# React Hooks Visualization\n\n");
    }
}
