use crate::data_models::{PageContent, ScopeCategory, SearchResult};

/// Code examples shown per page.
pub const MAX_CODE_EXAMPLES: usize = 3;

pub fn search_results(query: &str, category: ScopeCategory, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!(
            "No results found for \"{query}\" in category \"{category}\". The search was performed on the MSFS documentation website."
        );
    }

    let formatted = results
        .iter()
        .map(|r| {
            format!(
                "**{}**\n- Category: {}\n- URL: {}\n- Description: {}\n",
                r.title, r.category, r.url, r.description
            )
        })
        .collect::<Vec<String>>()
        .join("\n---\n");

    format!("Search results for \"{query}\" in category \"{category}\":\n\n{formatted}")
}

pub fn page_content(url: &str, page: &PageContent) -> String {
    let mut out = format!("**{}**\n\nURL: {url}\n\n{}", page.title, page.content);

    if !page.code_examples.is_empty() {
        out.push_str("\n\n**Code Examples:**\n");
        for (i, example) in page.code_examples.iter().take(MAX_CODE_EXAMPLES).enumerate() {
            out.push_str(&format!("\n\nExample {}:\n```\n{example}\n```", i + 1));
        }
    }

    if !page.related_links.is_empty() {
        out.push_str("\n\n**Related Pages:**\n");
        for link in &page.related_links {
            out.push_str(&format!("\n- {link}"));
        }
    }

    out
}

pub fn categories() -> String {
    let listed = ScopeCategory::ALL
        .iter()
        .map(|c| format!("- **{}**: {}", c, c.description()))
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        "Available MSFS SDK Documentation Categories:\n\n{listed}\n\n\
         Usage examples:\n\
         - Search for \"livery\" in all categories: use category \"all\" or \"index\"\n\
         - Search for \"livery\" in contents: use category \"contents\"\n\
         - Search for \"livery\" in glossary: use category \"glossary\""
    )
}

pub fn catalog_items(items: &[&str]) -> String {
    items.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_models::PathCategory;

    #[test]
    fn test_search_results_layout() {
        let results = vec![
            SearchResult::new(
                "Liveries".into(),
                "https://docs.flightsimulator.com/html/A.htm".into(),
                "Found \"livery\" in link text".into(),
                PathCategory::Aircraft,
            ),
            SearchResult::new(
                "Paint".into(),
                "https://docs.flightsimulator.com/html/B.htm".into(),
                "d".into(),
                PathCategory::General,
            ),
        ];
        let text = search_results("livery", ScopeCategory::All, &results);
        assert!(text.starts_with(
            "Search results for \"livery\" in category \"all\":\n\n**Liveries**"
        ));
        let entry = "- Category: aircraft\n- URL: https://docs.flightsimulator.com/html/A.htm";
        assert!(text.contains(entry));
        assert_eq!(text.matches("\n---\n").count(), 1);
    }

    #[test]
    fn test_empty_results_message() {
        let text = search_results("zzz", ScopeCategory::Glossary, &[]);
        assert_eq!(
            text,
            "No results found for \"zzz\" in category \"glossary\". The search was performed on the MSFS documentation website."
        );
    }

    #[test]
    fn test_page_content_caps_examples() {
        let page = PageContent {
            title: "T".into(),
            content: "body".into(),
            code_examples: (1..=5).map(|i| format!("example code {i}")).collect(),
            related_links: vec![],
        };
        let text = page_content("https://x/y.htm", &page);
        assert!(text.starts_with("**T**\n\nURL: https://x/y.htm\n\nbody"));
        assert!(text.contains("Example 3:\n```\nexample code 3\n```"));
        assert!(!text.contains("Example 4:"));
        assert!(!text.contains("Related Pages"));
    }

    #[test]
    fn test_categories_lists_every_scope() {
        let text = categories();
        for scope in ScopeCategory::ALL {
            assert!(text.contains(&format!("- **{scope}**")));
        }
    }
}
