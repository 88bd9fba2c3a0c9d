use msfs_docs::data_models::ParsedCommand;
use msfs_docs::intent::*;

fn search(query: &str, category: &str) -> Option<ParsedCommand> {
    Some(ParsedCommand::Search {
        query: query.to_string(),
        category: category.to_string(),
        limit: COMMAND_SEARCH_LIMIT,
    })
}

#[test]
fn test_search_op_msfs_sdk() {
    assert_eq!(parse_command("Search livery op msfs sdk"), search("livery", "all"));
    assert_eq!(
        parse_command("search Flight Model op MSFS SDK  "),
        search("Flight Model", "all")
    );
}

#[test]
fn test_get_content_for_url() {
    assert_eq!(
        parse_command("Get content for https://docs.flightsimulator.com/html/Introduction/Introduction.htm"),
        Some(ParsedCommand::GetContent {
            url: "https://docs.flightsimulator.com/html/Introduction/Introduction.htm".to_string(),
            section: None,
        })
    );
    assert_eq!(parse_command("get CONTENT for ftp://example.com/a.htm"), None);
    assert_eq!(parse_command("Get content for docs.flightsimulator.com"), None);
}

#[test]
fn test_list_categories() {
    for command in ["List categories", "list categories", "SHOW CATEGORIES"] {
        assert_eq!(
            parse_command(command),
            Some(ParsedCommand::ListCategories {}),
            "{command}"
        );
    }
    // exact match only
    assert_eq!(parse_command(" list categories"), None);
    assert_eq!(parse_command("list all categories"), None);
}

#[test]
fn test_search_in_category() {
    assert_eq!(parse_command("Search engine in simvars"), search("engine", "simvars"));
    assert_eq!(
        parse_command("SEARCH fuel tanks IN Aircraft"),
        search("fuel tanks", "aircraft")
    );
    assert_eq!(parse_command("Search engine in glossary"), None);
}

#[test]
fn test_rule_order() {
    // both search rules could apply; the first listed one wins
    assert_eq!(
        parse_command("Search panels in tools op msfs sdk"),
        search("panels in tools", "all")
    );
}

#[test]
fn test_unrecognized() {
    assert_eq!(parse_command("banana"), None);
    assert_eq!(parse_command(""), None);
    assert_eq!(parse_command("Search op msfs sdk"), None);
}

#[test]
fn test_parsed_command_json_shape() {
    let json = serde_json::to_value(search("livery", "all").unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "tool": "search",
            "arguments": {"query": "livery", "category": "all", "limit": 5}
        })
    );

    let json = serde_json::to_value(ParsedCommand::ListCategories {}).unwrap();
    assert_eq!(json, serde_json::json!({"tool": "list_categories", "arguments": {}}));
}
