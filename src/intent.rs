use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::data_models::ParsedCommand;

/// Result count used by commands that search.
pub const COMMAND_SEARCH_LIMIT: usize = 5;

static SEARCH_OP_MSFS_SDK: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^Search\s+(.+?)\s+op\s+msfs\s+sdk\s*$"));
static GET_CONTENT: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^Get\s+content\s+for\s+(https?://.+)$"));
static SEARCH_IN_CATEGORY: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)^Search\s+(.+?)\s+in\s+(aircraft|scenery|simvars|panels|missions|packaging|tools|general)$",
    )
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

type Rule = fn(&str) -> Option<ParsedCommand>;

/// Evaluated top to bottom; the first rule that matches decides.
const RULES: [(&str, Rule); 4] = [
    ("search op msfs sdk", search_op_msfs_sdk),
    ("get content for", get_content_for),
    ("list categories", list_categories),
    ("search in category", search_in_category),
];

/// Maps a short free-text command to a structured operation.
///
/// Returns `None` when no rule matches; callers should report that rather
/// than guess.
pub fn parse_command(command: &str) -> Option<ParsedCommand> {
    RULES.iter().find_map(|(name, rule)| {
        let parsed = rule(command)?;
        log::debug!("command {command:?} matched rule {name:?}");
        Some(parsed)
    })
}

fn capture(caps: &Captures<'_>, group: usize) -> String {
    caps.get(group)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn search_op_msfs_sdk(command: &str) -> Option<ParsedCommand> {
    let caps = SEARCH_OP_MSFS_SDK.captures(command)?;
    Some(ParsedCommand::Search {
        query: capture(&caps, 1),
        category: "all".to_string(),
        limit: COMMAND_SEARCH_LIMIT,
    })
}

fn get_content_for(command: &str) -> Option<ParsedCommand> {
    let caps = GET_CONTENT.captures(command)?;
    Some(ParsedCommand::GetContent {
        url: capture(&caps, 1),
        section: None,
    })
}

fn list_categories(command: &str) -> Option<ParsedCommand> {
    let lowered = command.to_lowercase();
    (lowered == "list categories" || lowered == "show categories")
        .then_some(ParsedCommand::ListCategories {})
}

fn search_in_category(command: &str) -> Option<ParsedCommand> {
    let caps = SEARCH_IN_CATEGORY.captures(command)?;
    Some(ParsedCommand::Search {
        query: capture(&caps, 1),
        category: capture(&caps, 2).to_lowercase(),
        limit: COMMAND_SEARCH_LIMIT,
    })
}
