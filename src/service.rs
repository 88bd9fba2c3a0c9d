use crate::catalog::CatalogSection;
use crate::config::Config;
use crate::content::ContentExtractor;
use crate::data_models::{PageContent, ParsedCommand, SearchResult};
use crate::error::{DocsError, Result};
use crate::extractor::ResultExtractor;
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::format;
use crate::intent::parse_command;
use crate::query_builder::{QueryBuilder, SearchRequest};

/// Entry point for every documentation operation. Each call is independent;
/// nothing is cached between calls.
pub struct DocsService<F = HttpFetcher> {
    fetcher: F,
    queries: QueryBuilder,
    results: ResultExtractor,
    pages: ContentExtractor,
}

impl DocsService<HttpFetcher> {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config, HttpFetcher::new(config)?))
    }
}

impl<F: PageFetcher> DocsService<F> {
    pub fn new(config: &Config, fetcher: F) -> Self {
        Self {
            fetcher,
            queries: QueryBuilder::new(config),
            results: ResultExtractor::new(config.base_url.clone()),
            pages: ContentExtractor::new(config.base_url.clone()),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Runs a search and returns the structured hits.
    pub async fn search_results(
        &self,
        query: &str,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<(SearchRequest, Vec<SearchResult>)> {
        if query.trim().is_empty() {
            return Err(DocsError::validation("Query parameter is required"));
        }

        let request = self.queries.build(query, category, limit);
        log::info!("searching MSFS docs: {}", request.url);

        let html = self.fetcher.fetch(&request.url).await?;
        log::info!("search page loaded, length: {}", html.len());

        let results = self.results.extract(&html, query, request.limit);
        Ok((request, results))
    }

    pub async fn search(
        &self,
        query: &str,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<String> {
        let (request, results) = self.search_results(query, category, limit).await?;
        Ok(format::search_results(query, request.category, &results))
    }

    pub async fn page_content(&self, url: &str, section: Option<&str>) -> Result<PageContent> {
        if url.trim().is_empty() {
            return Err(DocsError::validation("URL parameter is required"));
        }
        let html = self.fetcher.fetch(url).await?;
        Ok(self.pages.extract(&html, section))
    }

    pub async fn get_content(&self, url: &str, section: Option<&str>) -> Result<String> {
        let page = self.page_content(url, section).await?;
        Ok(format::page_content(url, &page))
    }

    pub fn list_categories(&self) -> String {
        format::categories()
    }

    pub fn list_category_items(&self, category: &str) -> Result<String> {
        if category.is_empty() {
            return Err(DocsError::validation("Category parameter is required"));
        }
        let section: CatalogSection = category.parse()?;
        Ok(format::catalog_items(section.items()))
    }

    pub fn parse_intent(&self, command: &str) -> Option<ParsedCommand> {
        parse_command(command)
    }

    pub async fn execute(&self, command: &ParsedCommand) -> Result<String> {
        match command {
            ParsedCommand::Search {
                query,
                category,
                limit,
            } => {
                self.search(query, Some(category.as_str()), Some(*limit))
                    .await
            }
            ParsedCommand::GetContent { url, section } => {
                self.get_content(url, section.as_deref()).await
            }
            ParsedCommand::ListCategories {} => Ok(self.list_categories()),
        }
    }

    /// Parses a free-text command and runs it. An unrecognized command is an
    /// error, never reinterpreted.
    pub async fn run_command(&self, command: &str) -> Result<String> {
        if command.trim().is_empty() {
            return Err(DocsError::validation("Query parameter is required"));
        }
        let parsed = self
            .parse_intent(command)
            .ok_or_else(|| DocsError::UnrecognizedCommand(command.to_string()))?;
        log::info!("running parsed command: {}", parsed.tool_name());
        self.execute(&parsed).await
    }
}
