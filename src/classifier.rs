use crate::data_models::PathCategory;

/// Ordered keyword table. Matching is case-sensitive and the first hit wins,
/// so `Aircraft/Panels.htm` is `aircraft`, not `panels`.
pub const PATH_KEYWORDS: [(&str, PathCategory); 7] = [
    ("Aircraft", PathCategory::Aircraft),
    ("Scenery", PathCategory::Scenery),
    ("SimVars", PathCategory::SimVars),
    ("Panel", PathCategory::Panels),
    ("Missions", PathCategory::Missions),
    ("Packaging", PathCategory::Packaging),
    ("Tools", PathCategory::Tools),
];

pub fn classify_path(path: &str) -> PathCategory {
    PATH_KEYWORDS
        .iter()
        .find(|(keyword, _)| path.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(PathCategory::General)
}

#[test]
fn test_classify_path() {
    assert_eq!(
        classify_path("../Content_Configuration/Aircraft/Liveries.htm"),
        PathCategory::Aircraft
    );
    assert_eq!(classify_path("/html/Scenery/Terrain.htm"), PathCategory::Scenery);
    assert_eq!(
        classify_path("Programming_Tools/SimVars/Engine_Variables.htm"),
        PathCategory::SimVars
    );
    assert_eq!(classify_path("Instruments/Panel_Config.htm"), PathCategory::Panels);
    assert_eq!(classify_path("Missions/Bush_Trips.htm"), PathCategory::Missions);
    assert_eq!(classify_path("Packaging/Package_Tool.htm"), PathCategory::Packaging);
    assert_eq!(classify_path("Dev_Tools/Overview.htm"), PathCategory::Tools);
    assert_eq!(classify_path("Introduction/Introduction.htm"), PathCategory::General);
    assert_eq!(classify_path(""), PathCategory::General);
}

#[test]
fn test_classify_path_order_and_case() {
    // several keywords present: the earliest table entry wins
    assert_eq!(classify_path("Tools/Aircraft_Panel.htm"), PathCategory::Aircraft);
    assert_eq!(classify_path("SimVars/Panel.htm"), PathCategory::SimVars);
    // case-sensitive
    assert_eq!(classify_path("aircraft/liveries.htm"), PathCategory::General);
    assert_eq!(classify_path("simvars.htm"), PathCategory::General);
}
