use scraper::node::Element;
use scraper::{ElementRef, Node};

/// Elements whose text never renders.
pub fn is_invisible(element: &Element) -> bool {
    matches!(element.name(), "script" | "style" | "noscript" | "template")
}

/// Rendered text of `el` on one line, whitespace runs collapsed.
pub fn visible_text(el: ElementRef<'_>) -> String {
    if is_invisible(el.value()) {
        return String::new();
    }
    let mut words = Vec::new();
    collect_words(el, &mut words);
    words.join(" ")
}

fn collect_words<'a>(el: ElementRef<'a>, words: &mut Vec<&'a str>) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => words.extend(text.split_whitespace()),
            Node::Element(element) if !is_invisible(element) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_words(child_el, words);
                }
            }
            _ => {}
        }
    }
}
