use msfs_docs::content::*;

const BASE: &str = "https://docs.flightsimulator.com";

fn extract(html: &str, section: Option<&str>) -> msfs_docs::data_models::PageContent {
    ContentExtractor::new(BASE).extract(html, section)
}

const PAGE: &str = r#"
<html>
  <head><title> Liveries </title></head>
  <body>
    <header>Site header</header>
    <nav><a href="Nav.htm">Navigation link</a><pre>nav code that is long</pre></nav>
    <div class="toc">Table of contents</div>
    <main>
      <h1>Liveries</h1>
      <p>A livery is a   paint scheme.</p>
      <section id="overview"><p>Overview text</p></section>
      <div class="examples"><p>Examples text</p><a href="../Aircraft/Textures.htm">Textures</a></div>
      <div data-section="api-reference"><p>API text</p></div>
      <pre><code>[FLTSIM.0]
title = "My Livery"</code></pre>
      <code>short</code>
      <script>var hidden = "script text";</script>
    </main>
    <div class="content">Secondary content</div>
    <footer>Footer text</footer>
  </body>
</html>
"#;

#[cfg(test)]
mod region_selection {
    use super::*;

    #[test]
    fn test_title_from_title_element() {
        assert_eq!(extract(PAGE, None).title, "Liveries");
    }

    #[test]
    fn test_default_title() {
        let page = extract("<body><p>hello</p></body>", None);
        assert_eq!(page.title, DEFAULT_TITLE);
        let page = extract("<title>  </title><p>hello</p>", None);
        assert_eq!(page.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_main_region_preferred() {
        let page = extract(PAGE, None);
        assert!(page.content.starts_with("Liveries\nA livery is a paint scheme."));
        assert!(page.content.contains("Overview text"));
        assert!(!page.content.contains("Secondary content"));
    }

    #[test]
    fn test_boilerplate_never_contributes() {
        let page = extract(PAGE, None);
        for noise in ["Site header", "Navigation link", "Table of contents", "Footer text"] {
            assert!(!page.content.contains(noise), "{noise} leaked");
        }
        assert!(!page.content.contains("script text"));

        // even when the whole body is the region
        let body_only = extract(
            "<body><nav>Menu</nav><p>Body text</p><footer>Bottom</footer></body>",
            None,
        );
        assert_eq!(body_only.content, "Body text");
    }

    #[test]
    fn test_content_class_when_no_main() {
        let page = extract(
            r#"<body><p>outside</p><div class="content"><p>inside</p></div></body>"#,
            None,
        );
        assert_eq!(page.content, "inside");
    }

    #[test]
    fn test_section_by_id_class_and_data_attribute() {
        assert_eq!(extract(PAGE, Some("overview")).content, "Overview text");
        assert_eq!(
            extract(PAGE, Some("examples")).content,
            "Examples text\nTextures"
        );
        assert_eq!(extract(PAGE, Some("api-reference")).content, "API text");
    }

    #[test]
    fn test_section_preference_order() {
        let html = r#"<body>
            <div data-section="intro">by data</div>
            <div class="intro">by class</div>
            <div id="intro">by id</div>
        </body>"#;
        assert_eq!(extract(html, Some("intro")).content, "by id");

        let html = r#"<body>
            <div data-section="intro">by data</div>
            <div class="intro">by class</div>
        </body>"#;
        assert_eq!(extract(html, Some("intro")).content, "by class");
    }

    #[test]
    fn test_missing_section_falls_back_to_main() {
        assert_eq!(
            extract(PAGE, Some("does-not-exist")).content,
            extract(PAGE, None).content
        );
        // selector syntax in a section name is treated as a plain name
        assert_eq!(
            extract(PAGE, Some("a[b")).content,
            extract(PAGE, None).content
        );
    }
}

#[cfg(test)]
mod code_examples {
    use super::*;

    #[test]
    fn test_collects_long_code_once_in_order() {
        let html = r#"<body>
            <pre><code>first example here</code></pre>
            <code>tiny</code>
            <p>Use <code>SetVariable(x, 1)</code> to set.</p>
            <nav><code>navigation code block</code></nav>
        </body>"#;
        let page = extract(html, None);
        assert_eq!(
            page.code_examples,
            vec!["first example here", "SetVariable(x, 1)"]
        );
    }

    #[test]
    fn test_scans_whole_page_not_just_section() {
        let page = extract(PAGE, Some("overview"));
        assert_eq!(page.content, "Overview text");
        assert_eq!(page.code_examples.len(), 1);
        assert!(page.code_examples[0].starts_with("[FLTSIM.0]"));
    }

    #[test]
    fn test_exactly_ten_chars_rejected() {
        let page = extract("<body><code>0123456789</code><code>0123456789a</code></body>", None);
        assert_eq!(page.code_examples, vec!["0123456789a"]);
    }
}

#[cfg(test)]
mod truncation_and_links {
    use super::*;

    #[test]
    fn test_long_content_truncated_with_marker() {
        let html = format!("<body><p>{}</p></body>", "word ".repeat(2000));
        let page = extract(&html, None);
        assert!(page.content.ends_with(TRUNCATION_MARKER));
        assert_eq!(
            page.content.chars().count(),
            MAX_CONTENT_CHARS + TRUNCATION_MARKER.len()
        );
    }

    #[test]
    fn test_code_examples_not_truncated() {
        let code = "x".repeat(MAX_CONTENT_CHARS * 2);
        let html = format!("<body><pre>{code}</pre></body>");
        let page = extract(&html, None);
        assert_eq!(page.code_examples, vec![code]);
    }

    #[test]
    fn test_related_links_normalized_and_scoped() {
        let html = r#"<body>
            <nav><a href="Nav.htm">Nav</a></nav>
            <main>
              <a href="../Aircraft/Textures.htm">Textures</a>
              <a href="/html/Aircraft/Textures.htm">Textures again</a>
              <a href="https://example.com/">External</a>
              <a href="Scenery/Terrain.htm">Terrain</a>
            </main>
        </body>"#;
        let page = extract(html, None);
        assert_eq!(
            page.related_links,
            vec![
                "https://docs.flightsimulator.com/html/Aircraft/Textures.htm",
                "https://docs.flightsimulator.com/html/Scenery/Terrain.htm",
            ]
        );
    }

    #[test]
    fn test_related_links_capped() {
        let links: String = (0..25)
            .map(|i| format!(r#"<a href="P{i}.htm">p</a>"#))
            .collect();
        let page = extract(&format!("<body>{links}</body>"), None);
        assert_eq!(page.related_links.len(), MAX_RELATED_LINKS);
    }
}
