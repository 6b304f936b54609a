use super::*;

#[test]
fn required_ids_are_unique() {
    let mut ids = REQUIRED_IDS.to_vec();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), REQUIRED_IDS.len());
}

#[test]
fn first_missing_id_is_none_when_page_is_complete() {
    assert_eq!(first_missing_id(|_| true), None);
}

#[test]
fn first_missing_id_reports_first_absent_element() {
    let present = ["questionInput", "askBtn", "clearBtn"];
    assert_eq!(first_missing_id(|id| present.contains(&id)), Some("copyBtn"));
}

#[test]
fn first_missing_id_finds_late_regions() {
    assert_eq!(first_missing_id(|id| id != "errorMessage"), Some("errorMessage"));
}
