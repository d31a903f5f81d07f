use super::*;

#[test]
fn resolve_is_case_insensitive() {
    let lower = resolve(Some("boston celtics"));
    let canonical = resolve(Some("Boston Celtics"));
    let shouting = resolve(Some("BOSTON CELTICS"));
    assert_eq!(lower, canonical);
    assert_eq!(shouting, canonical);
    assert_eq!(canonical.name, "Boston Celtics");
}

#[test]
fn resolve_unknown_team_falls_back_to_default() {
    let team = resolve(Some("Not A Team"));
    assert_eq!(team.name, DEFAULT_TEAM);
    assert!(!team.report_url.is_empty());
    assert_eq!(team, resolve(Some(DEFAULT_TEAM)));
}

#[test]
fn resolve_absent_or_empty_team_falls_back_to_default() {
    assert_eq!(resolve(None).name, DEFAULT_TEAM);
    assert_eq!(resolve(Some("")).name, DEFAULT_TEAM);
}

#[test]
fn resolve_does_not_trim_or_fuzzy_match() {
    assert_eq!(resolve(Some(" Boston Celtics ")).name, DEFAULT_TEAM);
    assert_eq!(resolve(Some("Celtics")).name, DEFAULT_TEAM);
}

#[test]
fn default_team_is_in_the_table() {
    assert!(team_names().any(|name| name == DEFAULT_TEAM));
}

#[test]
fn every_team_has_a_distinct_report() {
    let names: Vec<&str> = team_names().collect();
    assert_eq!(names.len(), 30);
    for name in &names {
        let team = resolve(Some(name));
        assert_eq!(team.name, *name);
        assert!(team.report_url.starts_with("https://"));
        assert_ne!(team.report_url, LEAGUE_REPORT_URL);
    }
}

#[test]
fn find_returns_none_for_unknown_names() {
    assert!(find("Seattle SuperSonics").is_none());
    assert_eq!(find("la clippers").map(|t| t.name), Some("LA Clippers"));
}
