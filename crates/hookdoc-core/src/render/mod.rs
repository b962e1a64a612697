//! Documentation generators
//!
//! Every generator reads a [`crate::Registry`] and never touches the file
//! system; writing output is left to the caller.

mod html;
mod json;
mod markdown;

use std::fmt;

pub use html::HtmlGenerator;
pub use json::{
    export_json, generate_search_index, generate_search_js, search_index_entries, SearchIndexEntry,
};
pub use markdown::MarkdownGenerator;

/// Directory (relative to the site root) holding per-hook pages.
pub const DETAIL_DIR: &str = "hooks";

/// Relative link to the detail page of a hook.
pub fn detail_page_path(id: &str) -> String {
    format!("{}/{}.html", DETAIL_DIR, id)
}

/// Run a writer closure against a fresh `String`.
pub(crate) fn render_to_string(f: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut output = String::new();
    f(&mut output).expect("writing to a String cannot fail");
    output
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
