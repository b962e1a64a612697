//! `hookdoc build`: write the generated documentation to disk

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hookdoc_core::render::{
    detail_page_path, export_json, generate_search_index, generate_search_js, HtmlGenerator,
    MarkdownGenerator, DETAIL_DIR,
};
use hookdoc_core::{registry, OutputFormat, SiteConfig};

/// Options for the build command; flags override the config file.
#[derive(Debug, Default)]
pub struct BuildOptions {
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub no_detail_pages: bool,
}

/// Files written by a build
#[derive(Debug)]
pub struct BuildSummary {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

impl BuildSummary {
    pub fn print(&self) {
        for file in &self.files {
            println!("Generated: {}", file.display());
        }
        println!("\nDocumentation generated in: {}", self.output_dir.display());
    }
}

/// Resolve the effective configuration for a build.
pub fn resolve_config(options: &BuildOptions) -> Result<SiteConfig> {
    let mut config = match &options.config {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => SiteConfig::discover(".").context("failed to load hookdoc.toml")?,
    };

    if let Some(output) = &options.output {
        config.output_dir.clone_from(output);
    }
    if let Some(format) = &options.format {
        config.format = format.parse::<OutputFormat>()?;
    }
    if options.no_detail_pages {
        config.detail_pages = false;
    }

    Ok(config)
}

/// Generate documentation according to `options`.
pub fn build_site(options: &BuildOptions) -> Result<BuildSummary> {
    let config = resolve_config(options)?;
    write_site(&config)
}

/// Write every output file for `config` into `config.output_dir`.
pub fn write_site(config: &SiteConfig) -> Result<BuildSummary> {
    let output_dir = config.output_dir.clone();
    std::fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory '{}'", output_dir.display())
    })?;

    tracing::info!(
        format = %config.format,
        output = %output_dir.display(),
        hooks = registry().len(),
        "building documentation"
    );

    let mut files = Vec::new();
    match config.format {
        OutputFormat::Html => {
            files.push(write_file(
                &output_dir.join("index.html"),
                &HtmlGenerator::index(registry(), config),
            )?);
            files.push(write_file(
                &output_dir.join("search-index.json"),
                &generate_search_index(registry(), config.detail_pages)?,
            )?);
            files.push(write_file(
                &output_dir.join("search.js"),
                generate_search_js(),
            )?);

            if config.detail_pages {
                let detail_dir = output_dir.join(DETAIL_DIR);
                std::fs::create_dir_all(&detail_dir).with_context(|| {
                    format!("failed to create directory '{}'", detail_dir.display())
                })?;
                for entry in registry() {
                    files.push(write_file(
                        &output_dir.join(detail_page_path(entry.id)),
                        &HtmlGenerator::detail(entry, config),
                    )?);
                }
            }
        }
        OutputFormat::Markdown => {
            files.push(write_file(
                &output_dir.join("HOOKS.md"),
                &MarkdownGenerator::generate(registry(), config),
            )?);
        }
        OutputFormat::Json => {
            files.push(write_file(
                &output_dir.join("hooks.json"),
                &export_json(registry())?,
            )?);
        }
    }

    Ok(BuildSummary { output_dir, files })
}

fn write_file(path: &Path, content: &str) -> Result<PathBuf> {
    std::fs::write(path, content)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path, format: OutputFormat) -> SiteConfig {
        SiteConfig {
            output_dir: dir.to_path_buf(),
            format,
            ..SiteConfig::default()
        }
    }

    #[test]
    fn build_html_site() {
        let dir = tempfile::tempdir().unwrap();
        let summary = write_site(&config_in(dir.path(), OutputFormat::Html)).unwrap();

        // index, search index, script, one page per hook
        assert_eq!(summary.files.len(), 3 + registry().len());
        assert!(dir.path().join("index.html").is_file());
        assert!(dir.path().join("search-index.json").is_file());
        assert!(dir.path().join("hooks/useState.html").is_file());
        assert!(dir.path().join("hooks/useSyncExternalStore.html").is_file());
    }

    #[test]
    fn build_html_without_detail_pages() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            detail_pages: false,
            ..config_in(dir.path(), OutputFormat::Html)
        };
        let summary = write_site(&config).unwrap();

        assert_eq!(summary.files.len(), 3);
        assert!(!dir.path().join(DETAIL_DIR).exists());
    }

    #[test]
    fn build_markdown_and_json() {
        let dir = tempfile::tempdir().unwrap();

        write_site(&config_in(dir.path(), OutputFormat::Markdown)).unwrap();
        let md = std::fs::read_to_string(dir.path().join("HOOKS.md")).unwrap();
        assert!(md.contains("## useReducer"));

        write_site(&config_in(dir.path(), OutputFormat::Json)).unwrap();
        let json = std::fs::read_to_string(dir.path().join("hooks.json")).unwrap();
        assert!(json.contains("\"useReducer\""));
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("hookdoc.toml");
        std::fs::write(&config_path, "format = \"json\"\noutput-dir = \"from-file\"\n").unwrap();

        let options = BuildOptions {
            config: Some(config_path.clone()),
            ..BuildOptions::default()
        };
        let config = resolve_config(&options).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.output_dir, PathBuf::from("from-file"));

        let options = BuildOptions {
            config: Some(config_path),
            output: Some(PathBuf::from("from-flag")),
            format: Some("markdown".to_string()),
            no_detail_pages: true,
        };
        let config = resolve_config(&options).unwrap();
        assert_eq!(config.format, OutputFormat::Markdown);
        assert_eq!(config.output_dir, PathBuf::from("from-flag"));
        assert!(!config.detail_pages);
    }

    #[test]
    fn unknown_format_flag_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("hookdoc.toml");
        std::fs::write(&config_path, "").unwrap();

        let options = BuildOptions {
            config: Some(config_path),
            format: Some("pdf".to_string()),
            ..BuildOptions::default()
        };
        let err = resolve_config(&options).unwrap_err();
        assert!(err.to_string().contains("unknown output format 'pdf'"));
    }
}
