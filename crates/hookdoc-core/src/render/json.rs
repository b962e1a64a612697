//! JSON export and client-side search index

use serde::Serialize;

use super::detail_page_path;
use crate::registry::Registry;

/// A single record in the search index
///
/// Keys are kept to one letter since the index ships with every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchIndexEntry {
    /// Hook name
    #[serde(rename = "n")]
    pub name: &'static str,
    /// First sentence of the description
    #[serde(rename = "d")]
    pub description: &'static str,
    /// Link to the hook, relative to the site root
    #[serde(rename = "l")]
    pub link: String,
}

/// Pretty-printed JSON array of every entry, in presentation order.
pub fn export_json(registry: &Registry) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&registry.list_all())
}

/// Build the search index records.
///
/// With `detail_pages` the links point at per-hook pages, otherwise at
/// anchors on the index page.
pub fn search_index_entries(registry: &Registry, detail_pages: bool) -> Vec<SearchIndexEntry> {
    registry
        .iter()
        .map(|entry| SearchIndexEntry {
            name: entry.id,
            description: entry.summary(),
            link: if detail_pages {
                detail_page_path(entry.id)
            } else {
                format!("index.html#{}", entry.anchor())
            },
        })
        .collect()
}

/// Compact JSON search index for the generated site.
pub fn generate_search_index(
    registry: &Registry,
    detail_pages: bool,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&search_index_entries(registry, detail_pages))
}

/// Script that filters the sidebar list against `search-index.json`.
pub fn generate_search_js() -> &'static str {
    r"// hookdoc sidebar search
(function() {
    'use strict';

    let index = [];

    function matches(entry, query) {
        return entry.n.toLowerCase().includes(query) ||
               entry.d.toLowerCase().includes(query);
    }

    function filter(query) {
        query = query.trim().toLowerCase();
        const visible = new Set(
            index.filter(e => query.length === 0 || matches(e, query)).map(e => e.n)
        );
        document.querySelectorAll('#hook-list li').forEach(li => {
            const show = query.length === 0 || visible.has(li.dataset.hook);
            li.style.display = show ? '' : 'none';
        });
    }

    function init() {
        const input = document.getElementById('search-input');
        if (!input) return;

        fetch('search-index.json')
            .then(r => r.json())
            .then(data => { index = data; })
            .catch(e => console.warn('Search index not available:', e));

        input.addEventListener('input', function() { filter(this.value); });
    }

    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', init);
    } else {
        init();
    }
})();
"
}
