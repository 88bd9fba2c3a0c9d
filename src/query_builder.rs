use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::Config;
use crate::data_models::ScopeCategory;

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 20;

/// Characters the site's search script expects escaped in a query value.
/// Leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )` as they are; a space becomes `%20`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Everything needed to issue one search against the documentation site.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub url: String,
    pub query: String,
    pub category: ScopeCategory,
    pub limit: usize,
}

pub fn clamp_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

pub struct QueryBuilder {
    endpoint: String,
}

impl QueryBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.search_endpoint(),
        }
    }

    /// Builds the search URL. `category` is matched leniently; anything
    /// unknown, or nothing at all, searches like `all`.
    pub fn build(
        &self,
        query: &str,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> SearchRequest {
        let category = category
            .map(ScopeCategory::parse_lossy)
            .unwrap_or_default();

        let mut url = format!("{}?rhsearch={}", self.endpoint, encode_query_value(query));
        if let Some(agt) = category.scope_param() {
            url.push_str("&agt=");
            url.push_str(&encode_query_value(agt));
        }

        SearchRequest {
            url,
            query: query.to_string(),
            category,
            limit: clamp_limit(limit),
        }
    }
}
