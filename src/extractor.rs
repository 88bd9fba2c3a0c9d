use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::classifier::classify_path;
use crate::data_models::SearchResult;
use crate::text::visible_text;
use crate::urls::normalize_href;

pub const MAX_TITLE_CHARS: usize = 100;

static ANCHOR_WITH_HREF: Lazy<Selector> = Lazy::new(|| parse_selector("a[href]"));
static HTM_ANCHOR: Lazy<Selector> = Lazy::new(|| parse_selector(r#"a[href*=".htm"]"#));
static LIST_ITEM: Lazy<Selector> = Lazy::new(|| parse_selector("li"));
static DIV: Lazy<Selector> = Lazy::new(|| parse_selector("div"));

fn parse_selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

/// One structural guess at where the search page keeps its hits.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Elements matching a CSS selector.
    Css {
        css: &'static str,
        selector: Selector,
    },
    /// `li` elements whose text contains the phrase.
    ListItemContaining(&'static str),
    /// Element siblings following any `div` whose text contains the marker.
    SiblingsAfterDivContaining(&'static str),
}

/// Tried in order; the first pattern that produces a result ends the tier.
pub static STRUCTURAL_PATTERNS: Lazy<[Pattern; 10]> = Lazy::new(|| {
    [
        Pattern::css(".search-result"),
        Pattern::css(".result-item"),
        Pattern::css(".topic"),
        Pattern::css(".search-hit"),
        Pattern::css(".result"),
        Pattern::ListItemContaining("Samples, Schemas, Tutorials"),
        Pattern::ListItemContaining("How To"),
        Pattern::ListItemContaining("Content Configuration"),
        Pattern::ListItemContaining("Developer Mode"),
        Pattern::SiblingsAfterDivContaining("result(s) found"),
    ]
});

impl Pattern {
    /// Compiles `css`; only for built-in selectors.
    pub fn css(css: &'static str) -> Self {
        Pattern::Css {
            css,
            selector: parse_selector(css),
        }
    }

    pub fn elements<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        match self {
            Pattern::Css { selector, .. } => document.select(selector).collect(),
            Pattern::ListItemContaining(phrase) => document
                .select(&LIST_ITEM)
                .filter(|li| visible_text(*li).contains(phrase))
                .collect(),
            Pattern::SiblingsAfterDivContaining(marker) => document
                .select(&DIV)
                .filter(|div| visible_text(*div).contains(marker))
                .flat_map(|div| div.next_siblings().filter_map(ElementRef::wrap))
                .collect(),
        }
    }

    /// (href, visible text) pairs for every element that links somewhere.
    pub fn candidates(&self, document: &Html) -> Vec<Candidate> {
        self.elements(document)
            .into_iter()
            .filter_map(|el| {
                let href = el.value().attr("href").or_else(|| {
                    el.select(&ANCHOR_WITH_HREF)
                        .next()
                        .and_then(|a| a.value().attr("href"))
                })?;
                Some(Candidate {
                    href: href.to_string(),
                    text: visible_text(el),
                })
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Css { css, .. } => write!(f, "css {css}"),
            Pattern::ListItemContaining(phrase) => write!(f, "li containing {phrase:?}"),
            Pattern::SiblingsAfterDivContaining(marker) => {
                write!(f, "siblings after div containing {marker:?}")
            }
        }
    }
}

/// How a result was found; surfaces in its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMethod {
    Structural,
    LinkText,
}

impl MatchMethod {
    pub fn describe(self, query: &str) -> String {
        match self {
            MatchMethod::Structural => format!("Documentation page containing \"{query}\""),
            MatchMethod::LinkText => format!("Found \"{query}\" in link text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub href: String,
    pub text: String,
}

/// Anchors to `.htm` pages whose text contains `query`, ignoring case.
pub fn link_text_candidates(document: &Html, query: &str) -> Vec<Candidate> {
    let needle = query.to_lowercase();
    document
        .select(&HTM_ANCHOR)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let text = visible_text(a);
            text.to_lowercase().contains(&needle).then(|| Candidate {
                href: href.to_string(),
                text,
            })
        })
        .collect()
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Collects results in insertion order, rejecting repeated URLs.
struct Accumulator<'a> {
    base_url: &'a str,
    query: &'a str,
    limit: usize,
    seen: HashSet<String>,
    results: Vec<SearchResult>,
}

impl<'a> Accumulator<'a> {
    fn new(base_url: &'a str, query: &'a str, limit: usize) -> Self {
        Self {
            base_url,
            query,
            limit,
            seen: HashSet::new(),
            results: Vec::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.results.len() >= self.limit
    }

    fn offer(&mut self, candidate: Candidate, method: MatchMethod) {
        if self.is_full() || !candidate.href.contains(".htm") || candidate.text.is_empty() {
            return;
        }
        let url = normalize_href(&candidate.href, self.base_url);
        if !self.seen.insert(url.clone()) {
            return;
        }
        log::debug!("found result via {method:?}: {}", truncate_chars(&candidate.text, 50));
        self.results.push(SearchResult::new(
            truncate_chars(&candidate.text, MAX_TITLE_CHARS),
            url,
            method.describe(self.query),
            classify_path(&candidate.href),
        ));
    }
}

/// Recovers search hits from a results page whose markup is not stable.
///
/// The structural tier runs first; the link-text tier only runs when it
/// found nothing. Results are unique by URL and at most `limit` long.
pub struct ResultExtractor {
    base_url: String,
}

impl ResultExtractor {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn extract(&self, html: &str, query: &str, limit: usize) -> Vec<SearchResult> {
        let document = Html::parse_document(html);
        let mut acc = Accumulator::new(&self.base_url, query, limit);

        for pattern in STRUCTURAL_PATTERNS.iter() {
            for candidate in pattern.candidates(&document) {
                if acc.is_full() {
                    break;
                }
                acc.offer(candidate, MatchMethod::Structural);
            }
            if !acc.results.is_empty() {
                log::info!(
                    "found {} results using pattern {pattern}",
                    acc.results.len()
                );
                return acc.results;
            }
        }

        log::info!("no structured results found, trying all links");
        for candidate in link_text_candidates(&document, query) {
            if acc.is_full() {
                break;
            }
            acc.offer(candidate, MatchMethod::LinkText);
        }
        acc.results
    }
}
