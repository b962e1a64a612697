//! Static page banner
//!
//! The banner takes no input and holds no state: every call yields the same
//! markup, a single link back to the site root.

/// Display text of the banner link
pub const BANNER_TITLE: &str = "🌟React Hooks Visualization";

/// Target of the banner link
pub const BANNER_HREF: &str = "/";

/// The page header component
pub struct Banner;

impl Banner {
    /// Render the banner fragment.
    pub fn render() -> String {
        format!(
            "<div class=\"banner\">\n  <div class=\"left\">\n    <a href=\"{}\" class=\"project-name\">{}</a>\n  </div>\n</div>\n",
            BANNER_HREF, BANNER_TITLE
        )
    }

    /// Stylesheet rules for the banner classes.
    pub fn styles() -> &'static str {
        r".banner {
  display: flex;
  align-items: center;
  padding: 0.75rem 1.5rem;
  background-color: var(--banner-bg);
  border-bottom: 1px solid var(--border-color);
}

.banner .project-name {
  color: var(--accent-color);
  font-size: 1.25rem;
  font-weight: 600;
  text-decoration: none;
}
"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_stable() {
        assert_eq!(Banner::render(), Banner::render());
        assert_eq!(Banner::render().as_bytes(), crate::banner().as_bytes());
    }

    #[test]
    fn test_render_has_single_root_link() {
        let html = Banner::render();
        assert_eq!(html.matches("<a ").count(), 1);
        assert!(html.contains(&format!("href=\"{}\"", BANNER_HREF)));
        assert!(html.contains(&format!(">{}</a>", BANNER_TITLE)));
        assert!(html.starts_with("<div class=\"banner\">"));
    }

    #[test]
    fn test_render_exact_markup() {
        assert_eq!(
            Banner::render(),
            concat!(
                "<div class=\"banner\">\n",
                "  <div class=\"left\">\n",
                "    <a href=\"/\" class=\"project-name\">🌟React Hooks Visualization</a>\n",
                "  </div>\n",
                "</div>\n",
            )
        );
    }
}
