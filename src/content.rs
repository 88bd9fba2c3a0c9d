use std::collections::HashSet;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};

use crate::data_models::PageContent;
use crate::text::is_invisible;
use crate::urls::normalize_href;

pub const MAX_CONTENT_CHARS: usize = 4000;
pub const MIN_CODE_CHARS: usize = 10;
pub const MAX_RELATED_LINKS: usize = 10;
pub const TRUNCATION_MARKER: &str = "...";
pub const DEFAULT_TITLE: &str = "MSFS SDK Documentation";

/// Regions that never contribute text, code or links.
const BOILERPLATE: &str = "nav, header, footer, .navigation, .toc";
/// Tried in order when no section was asked for, or it could not be found.
static MAIN_REGIONS: Lazy<[Selector; 3]> =
    Lazy::new(|| ["main", ".content", "body"].map(parse_selector));

static BOILERPLATE_SELECTOR: Lazy<Selector> = Lazy::new(|| parse_selector(BOILERPLATE));
static TITLE: Lazy<Selector> = Lazy::new(|| parse_selector("title"));
static CODE: Lazy<Selector> = Lazy::new(|| parse_selector("code, pre"));
static HTM_ANCHOR: Lazy<Selector> = Lazy::new(|| parse_selector(r#"a[href*=".htm"]"#));
static ANY: Lazy<Selector> = Lazy::new(|| parse_selector("*"));

fn parse_selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

/// Isolates the readable part of a single documentation page.
pub struct ContentExtractor {
    base_url: String,
}

impl ContentExtractor {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn extract(&self, html: &str, section: Option<&str>) -> PageContent {
        let document = Html::parse_document(html);
        let page = Page::new(&document);

        let title = document
            .select(&TITLE)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let region = section
            .filter(|s| !s.trim().is_empty())
            .and_then(|s| {
                let found = page.find_section(s.trim());
                if found.is_none() {
                    log::debug!("section {s} not found, using main content");
                }
                found
            })
            .unwrap_or_else(|| page.main_region());

        PageContent {
            title,
            content: truncate_content(&page.text_of(region)),
            code_examples: page.code_examples(),
            related_links: page.related_links(region, &self.base_url),
        }
    }
}

/// A parsed document whose boilerplate regions are skipped everywhere.
struct Page<'a> {
    document: &'a Html,
}

impl<'a> Page<'a> {
    fn new(document: &'a Html) -> Self {
        Self { document }
    }

    fn is_excluded(&self, el: ElementRef<'_>) -> bool {
        BOILERPLATE_SELECTOR.matches(&el)
            || el
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|a| BOILERPLATE_SELECTOR.matches(&a))
    }

    fn visible(&self) -> impl Iterator<Item = ElementRef<'a>> + '_ {
        self.document
            .select(&ANY)
            .filter(move |el| !self.is_excluded(*el))
    }

    /// Looks the section up by id, then class, then `data-section`.
    fn find_section(&self, section: &str) -> Option<ElementRef<'a>> {
        self.visible()
            .find(|el| el.value().id() == Some(section))
            .or_else(|| {
                self.visible()
                    .find(|el| el.value().classes().any(|c| c == section))
            })
            .or_else(|| {
                self.visible()
                    .find(|el| el.value().attr("data-section") == Some(section))
            })
    }

    fn main_region(&self) -> ElementRef<'a> {
        MAIN_REGIONS
            .iter()
            .find_map(|selector| {
                self.document
                    .select(selector)
                    .find(|el| !self.is_excluded(*el))
            })
            .unwrap_or_else(|| self.document.root_element())
    }

    fn text_of(&self, region: ElementRef<'_>) -> String {
        let mut raw = String::new();
        self.collect_text(region, &mut raw);
        compress_whitespace(&raw)
    }

    fn collect_text(&self, el: ElementRef<'_>, out: &mut String) {
        for child in el.children() {
            match child.value() {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => {
                    if is_invisible(element) {
                        continue;
                    }
                    if let Some(child_el) = ElementRef::wrap(child) {
                        if BOILERPLATE_SELECTOR.matches(&child_el) {
                            continue;
                        }
                        if is_block_like(element.name()) {
                            out.push('\n');
                        }
                        self.collect_text(child_el, out);
                        if is_block_like(element.name()) {
                            out.push('\n');
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// `pre`/`code` blocks across the whole page, in document order.
    /// Anything nested in a `pre` is already part of that block.
    fn code_examples(&self) -> Vec<String> {
        self.document
            .select(&CODE)
            .filter(|el| !self.is_excluded(*el))
            .filter(|el| {
                !el.ancestors()
                    .filter_map(ElementRef::wrap)
                    .any(|a| a.value().name() == "pre")
            })
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|code| code.chars().count() > MIN_CODE_CHARS)
            .collect()
    }

    fn related_links(&self, region: ElementRef<'_>, base_url: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        region
            .select(&HTM_ANCHOR)
            .filter(|a| !self.is_excluded(*a))
            .filter_map(|a| a.value().attr("href"))
            .map(|href| normalize_href(href, base_url))
            .filter(|url| seen.insert(url.clone()))
            .take(MAX_RELATED_LINKS)
            .collect()
    }
}

fn is_block_like(name: &str) -> bool {
    matches!(
        name,
        "p" | "div"
            | "section"
            | "article"
            | "li"
            | "ul"
            | "ol"
            | "table"
            | "tr"
            | "pre"
            | "br"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
    )
}

/// Collapses runs of whitespace inside lines and drops blank lines.
fn compress_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<&str>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<String>>()
        .join("\n")
}

/// Cuts to `MAX_CONTENT_CHARS` characters and marks the cut.
pub fn truncate_content(text: &str) -> String {
    let text = text.trim();
    match text.char_indices().nth(MAX_CONTENT_CHARS) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &text[..cut]),
        None => text.to_string(),
    }
}
