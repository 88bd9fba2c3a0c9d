/// Turns a documentation href into an absolute URL under `base_url`.
///
/// Relative hrefs on the site are resolved against `/html/`; a single
/// leading `../` is folded into that prefix.
pub fn normalize_href(href: &str, base_url: &str) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }

    let base = base_url.trim_end_matches('/');
    if let Some(rest) = href.strip_prefix("../") {
        format!("{base}/html/{rest}")
    } else if !href.starts_with('/') {
        format!("{base}/html/{href}")
    } else {
        format!("{base}{href}")
    }
}
