//! HTML site generator

use std::fmt::{self, Write};

use super::{detail_page_path, escape_html, render_to_string};
use crate::banner::Banner;
use crate::config::SiteConfig;
use crate::registry::{HookEntry, Registry};

/// Generates the list-and-detail HTML site for a registry
pub struct HtmlGenerator;

impl HtmlGenerator {
    /// Generate the index page: sidebar list plus one section per hook
    pub fn index(registry: &Registry, config: &SiteConfig) -> String {
        render_to_string(|output| Self::write_index(output, registry, config))
    }

    /// Generate a stand-alone page for a single hook
    pub fn detail(entry: &HookEntry, config: &SiteConfig) -> String {
        render_to_string(|output| Self::write_detail(output, entry, config))
    }

    fn write_index(output: &mut String, registry: &Registry, config: &SiteConfig) -> fmt::Result {
        Self::write_head(output, &config.title)?;
        writeln!(output, "<body>")?;
        output.push_str(&Banner::render());

        writeln!(output, "<div class=\"layout\">")?;

        // Navigation sidebar
        writeln!(output, "<nav class=\"sidebar\">")?;
        writeln!(output, "  <div class=\"sidebar-header\">")?;
        writeln!(output, "    <h2>Hooks</h2>")?;
        writeln!(
            output,
            "    <input id=\"search-input\" type=\"search\" placeholder=\"Search hooks\">"
        )?;
        writeln!(output, "  </div>")?;
        writeln!(output, "  <ul id=\"hook-list\">")?;
        for entry in registry {
            writeln!(
                output,
                "    <li data-hook=\"{}\"><a href=\"#{}\">{}</a></li>",
                escape_html(entry.id),
                entry.anchor(),
                escape_html(entry.id)
            )?;
        }
        writeln!(output, "  </ul>")?;
        writeln!(output, "</nav>")?;

        // Main content
        writeln!(output, "<main class=\"content\">")?;
        writeln!(output, "<header>")?;
        writeln!(output, "  <h1>{}</h1>", escape_html(&config.title))?;
        writeln!(output, "</header>")?;
        for entry in registry {
            let page = config.detail_pages.then(|| detail_page_path(entry.id));
            Self::write_entry(output, entry, page.as_deref())?;
        }
        writeln!(output, "</main>")?;
        writeln!(output, "</div>")?;

        writeln!(output, "<script src=\"search.js\"></script>")?;
        Self::write_footer(output)?;
        writeln!(output, "</body>")?;
        writeln!(output, "</html>")
    }

    fn write_detail(output: &mut String, entry: &HookEntry, config: &SiteConfig) -> fmt::Result {
        let title = format!("{} - {}", entry.id, config.title);
        Self::write_head(output, &title)?;
        writeln!(output, "<body>")?;
        output.push_str(&Banner::render());

        writeln!(output, "<main class=\"content detail\">")?;
        writeln!(
            output,
            "  <p class=\"back\"><a href=\"../index.html\">&larr; All hooks</a></p>"
        )?;
        Self::write_entry(output, entry, None)?;
        writeln!(output, "</main>")?;

        Self::write_footer(output)?;
        writeln!(output, "</body>")?;
        writeln!(output, "</html>")
    }

    fn write_head(output: &mut String, title: &str) -> fmt::Result {
        writeln!(output, "<!DOCTYPE html>")?;
        writeln!(output, "<html lang=\"en\">")?;
        writeln!(output, "<head>")?;
        writeln!(output, "  <meta charset=\"UTF-8\">")?;
        writeln!(
            output,
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(output, "  <title>{}</title>", escape_html(title))?;
        Self::write_styles(output)?;
        writeln!(output, "</head>")
    }

    fn write_entry(output: &mut String, entry: &HookEntry, page: Option<&str>) -> fmt::Result {
        writeln!(
            output,
            "  <section class=\"item\" id=\"{}\">",
            entry.anchor()
        )?;
        writeln!(output, "    <h2><code>{}</code></h2>", escape_html(entry.id))?;
        writeln!(
            output,
            "    <p class=\"description\">{}</p>",
            escape_html(entry.description)
        )?;

        writeln!(output, "    <div class=\"example\">")?;
        writeln!(output, "      <h4>Example</h4>")?;
        writeln!(
            output,
            "      <pre><code class=\"language-jsx\">{}</code></pre>",
            escape_html(entry.example)
        )?;
        writeln!(output, "    </div>")?;

        writeln!(output, "    <p class=\"links\">")?;
        writeln!(
            output,
            "      <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">React reference</a>",
            escape_html(entry.reference_url)
        )?;
        if let Some(page) = page {
            writeln!(output, "      <a href=\"{}\">Permalink</a>", escape_html(page))?;
        }
        writeln!(output, "    </p>")?;
        writeln!(output, "  </section>")
    }

    fn write_footer(output: &mut String) -> fmt::Result {
        writeln!(output, "<footer>")?;
        writeln!(
            output,
            "  <p>Generated by hookdoc {}</p>",
            crate::VERSION
        )?;
        writeln!(output, "</footer>")
    }

    fn write_styles(output: &mut String) -> fmt::Result {
        writeln!(output, "<style>")?;
        writeln!(
            output,
            r#"
:root {{
  --bg-color: #1a1a2e;
  --text-color: #eaeaea;
  --accent-color: #61dafb;
  --code-bg: #16213e;
  --sidebar-bg: #0f0f23;
  --banner-bg: #0b0b1a;
  --border-color: #333;
}}

* {{
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}}

body {{
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
  background-color: var(--bg-color);
  color: var(--text-color);
  line-height: 1.6;
}}

.layout {{
  display: flex;
}}

.sidebar {{
  width: 260px;
  background-color: var(--sidebar-bg);
  min-height: 100vh;
  border-right: 1px solid var(--border-color);
  padding: 1rem;
}}

.sidebar-header h2 {{
  color: var(--accent-color);
  font-size: 1.1rem;
  margin-bottom: 0.5rem;
}}

.sidebar input {{
  width: 100%;
  padding: 0.35rem 0.5rem;
  margin-bottom: 0.75rem;
  background: var(--code-bg);
  color: var(--text-color);
  border: 1px solid var(--border-color);
  border-radius: 4px;
}}

.sidebar ul {{
  list-style: none;
}}

.sidebar a {{
  display: block;
  padding: 0.2rem 0;
  color: var(--text-color);
  text-decoration: none;
  font-size: 0.9rem;
}}

.sidebar a:hover {{
  color: var(--accent-color);
}}

.content {{
  padding: 2rem 3rem;
  max-width: 900px;
}}

header h1 {{
  font-size: 2rem;
  color: var(--accent-color);
  margin-bottom: 1rem;
}}

.item {{
  margin: 1.5rem 0;
  padding: 1rem;
  background: var(--code-bg);
  border-radius: 8px;
  border-left: 3px solid var(--accent-color);
}}

.item h2 code {{
  color: var(--accent-color);
  font-size: 1.2rem;
}}

.description {{
  margin: 0.75rem 0;
}}

.example h4 {{
  font-size: 0.9rem;
  color: #888;
  margin-bottom: 0.5rem;
}}

.example pre {{
  background: #0d1117;
  padding: 1rem;
  border-radius: 4px;
  overflow-x: auto;
  font-family: 'Fira Code', 'Consolas', monospace;
  font-size: 0.85rem;
}}

.links a, .back a {{
  color: var(--accent-color);
  margin-right: 1rem;
}}

footer {{
  padding: 1rem 3rem;
  font-size: 0.75rem;
  color: #666;
}}

@media (max-width: 768px) {{
  .sidebar {{
    display: none;
  }}
  .content {{
    padding: 1rem;
  }}
}}
"#
        )?;
        output.push_str(Banner::styles());
        writeln!(output, "</style>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_index() {
        let registry = Registry::builtin();
        let html = HtmlGenerator::index(registry, &SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>React Hooks Visualization</title>"));
        assert!(html.contains(&Banner::render()));
        assert!(html.contains("<section class=\"item\" id=\"usestate\">"));
        assert!(html.contains("href=\"hooks/useState.html\""));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_index_escapes_examples() {
        let html = HtmlGenerator::index(Registry::builtin(), &SiteConfig::default());
        assert!(html.contains("&lt;p&gt;Count: {count}&lt;/p&gt;"));
        assert!(!html.contains("<p>Count: {count}</p>"));
    }

    #[test]
    fn test_index_without_detail_pages() {
        let config = SiteConfig {
            detail_pages: false,
            ..SiteConfig::default()
        };
        let html = HtmlGenerator::index(Registry::builtin(), &config);
        assert!(!html.contains("Permalink"));
    }

    #[test]
    fn test_generate_detail() {
        let entry = Registry::builtin().get("useRef").unwrap();
        let html = HtmlGenerator::detail(entry, &SiteConfig::default());

        assert!(html.contains("<title>useRef - React Hooks Visualization</title>"));
        assert!(html.contains("href=\"../index.html\""));
        assert!(html.contains("https://react.dev/reference/react/useRef"));
        assert!(!html.contains("useState"));
    }

    #[test]
    fn test_title_is_escaped() {
        let config = SiteConfig {
            title: "Hooks <&> Docs".to_string(),
            ..SiteConfig::default()
        };
        let html = HtmlGenerator::index(Registry::builtin(), &config);
        assert!(html.contains("<h1>Hooks &lt;&amp;&gt; Docs</h1>"));
    }
}
