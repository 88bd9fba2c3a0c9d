#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use msfs_docs::config::Config;
use msfs_docs::error::{DocsError, Result};
use msfs_docs::fetcher::PageFetcher;
use msfs_docs::DocsService;

/// Serves canned HTML keyed by URL prefix and records every request.
#[derive(Default)]
pub struct FakeFetcher {
    pages: Vec<(String, String)>,
    failures: HashMap<String, u16>,
    pub requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url_prefix: &str, html: &str) -> Self {
        self.pages.push((url_prefix.to_string(), html.to_string()));
        self
    }

    pub fn with_status(mut self, url_prefix: &str, status: u16) -> Self {
        self.failures.insert(url_prefix.to_string(), status);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        if let Some((_, status)) = self.failures.iter().find(|(p, _)| url.starts_with(p.as_str())) {
            return Err(DocsError::Status {
                url: url.to_string(),
                status: *status,
            });
        }
        self.pages
            .iter()
            .find(|(prefix, _)| url.starts_with(prefix.as_str()))
            .map(|(_, html)| html.clone())
            .ok_or_else(|| DocsError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

pub const SEARCH_PAGE: &str = "https://docs.flightsimulator.com/html/Introduction/Introduction.htm";

pub const SEARCH_HTML: &str = r#"
<html><body>
  <div>2 result(s) found</div>
  <div class="search-result"><a href="../Content_Configuration/Aircraft/Liveries.htm">Aircraft Liveries</a></div>
  <div class="search-result"><a href="/html/Content_Configuration/Aircraft/Liveries.htm">Aircraft Liveries (duplicate)</a></div>
  <div class="search-result"><a href="../Tools/Livery_Tool.htm">Livery Tool</a></div>
</body></html>
"#;

pub const DOC_URL: &str = "https://docs.flightsimulator.com/html/Content_Configuration/Aircraft/Liveries.htm";

pub const DOC_HTML: &str = r#"
<html><head><title>Liveries</title></head><body>
  <nav>Menu</nav>
  <main>
    <p>Liveries change the look of an aircraft.</p>
    <pre>[FLTSIM.0]
title = "Livery"</pre>
  </main>
</body></html>
"#;

pub fn service(fetcher: FakeFetcher) -> DocsService<FakeFetcher> {
    DocsService::new(&Config::default(), fetcher)
}
