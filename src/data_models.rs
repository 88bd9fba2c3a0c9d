use std::fmt;

use serde::{Deserialize, Serialize};

/// Which part of the documentation site a search targets.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScopeCategory {
    Contents,
    Index,
    Glossary,
    #[default]
    All,
}

impl ScopeCategory {
    pub const ALL: [ScopeCategory; 4] = [
        ScopeCategory::Contents,
        ScopeCategory::Index,
        ScopeCategory::Glossary,
        ScopeCategory::All,
    ];

    /// Unknown names resolve to `All`.
    pub fn parse_lossy(name: &str) -> ScopeCategory {
        match name.trim().to_lowercase().as_str() {
            "contents" => ScopeCategory::Contents,
            "index" => ScopeCategory::Index,
            "glossary" => ScopeCategory::Glossary,
            _ => ScopeCategory::All,
        }
    }

    /// Value of the site's `agt` search parameter. `All` searches the index.
    pub fn scope_param(self) -> Option<&'static str> {
        match self {
            ScopeCategory::Contents => None,
            ScopeCategory::Index | ScopeCategory::All => Some("index"),
            ScopeCategory::Glossary => Some("glossary"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScopeCategory::Contents => "contents",
            ScopeCategory::Index => "index",
            ScopeCategory::Glossary => "glossary",
            ScopeCategory::All => "all",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScopeCategory::Contents => "Search in documentation contents",
            ScopeCategory::Index => "Search in documentation index",
            ScopeCategory::Glossary => "Search in documentation glossary",
            ScopeCategory::All => "Search in all categories (default: index)",
        }
    }
}

impl fmt::Display for ScopeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification tag derived from a result's URL path.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PathCategory {
    Aircraft,
    Scenery,
    SimVars,
    Panels,
    Missions,
    Packaging,
    Tools,
    General,
}

impl PathCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PathCategory::Aircraft => "aircraft",
            PathCategory::Scenery => "scenery",
            PathCategory::SimVars => "simvars",
            PathCategory::Panels => "panels",
            PathCategory::Missions => "missions",
            PathCategory::Packaging => "packaging",
            PathCategory::Tools => "tools",
            PathCategory::General => "general",
        }
    }
}

impl fmt::Display for PathCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: PathCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl SearchResult {
    pub fn new(
        title: String,
        url: String,
        description: String,
        category: PathCategory,
    ) -> SearchResult {
        SearchResult {
            title,
            url,
            description,
            category,
            last_updated: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub title: String,
    pub content: String,
    pub code_examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_links: Vec<String>,
}

/// A structured operation recovered from a free-text command.
///
/// Serializes as `{"tool": "...", "arguments": {...}}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "tool", content = "arguments", rename_all = "snake_case")]
pub enum ParsedCommand {
    Search {
        query: String,
        /// Kept as text: a path-derived name here resolves to `all` at search time.
        category: String,
        limit: usize,
    },
    GetContent {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        section: Option<String>,
    },
    ListCategories {},
}

impl ParsedCommand {
    pub fn tool_name(&self) -> &'static str {
        match self {
            ParsedCommand::Search { .. } => "search",
            ParsedCommand::GetContent { .. } => "get_content",
            ParsedCommand::ListCategories {} => "list_categories",
        }
    }
}
