//! Integration tests for the documentation generators

use hookdoc_core::render::{
    detail_page_path, export_json, generate_search_index, HtmlGenerator, MarkdownGenerator,
};
use hookdoc_core::{registry, search, Banner, SiteConfig};

#[test]
fn test_index_lists_hooks_in_order() {
    let html = HtmlGenerator::index(registry(), &SiteConfig::default());

    let positions: Vec<usize> = registry()
        .ids()
        .map(|id| {
            html.find(&format!("data-hook=\"{id}\""))
                .unwrap_or_else(|| panic!("{id} missing from sidebar"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_index_embeds_banner_once() {
    let html = HtmlGenerator::index(registry(), &SiteConfig::default());
    assert_eq!(html.matches(&Banner::render()).count(), 1);
}

#[test]
fn test_every_hook_has_detail_page() {
    let config = SiteConfig::default();
    for entry in registry() {
        let page = HtmlGenerator::detail(entry, &config);
        assert!(page.contains(&format!("<code>{}</code>", entry.id)));
        assert!(page.contains(entry.reference_url));
        assert_eq!(detail_page_path(entry.id), format!("hooks/{}.html", entry.id));
    }
}

#[test]
fn test_markdown_and_json_cover_registry() {
    let config = SiteConfig::default();
    let md = MarkdownGenerator::generate(registry(), &config);
    let json = export_json(registry()).unwrap();

    for id in registry().ids() {
        assert!(md.contains(&format!("## {id}\n")));
        assert!(json.contains(&format!("\"id\": \"{id}\"")));
    }
}

#[test]
fn test_search_index_parses() {
    let index = generate_search_index(registry(), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&index).unwrap();
    assert_eq!(value.as_array().unwrap().len(), registry().len());
}

#[test]
fn test_search_finds_memo_hooks() {
    let hits = search(registry(), "memo");
    let ids: Vec<_> = hits.iter().map(|h| h.entry.id).collect();
    assert_eq!(ids[0], "useMemo");
    assert!(ids.contains(&"useCallback"));
}
