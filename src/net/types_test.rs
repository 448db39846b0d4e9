use super::*;

fn activity(max: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "Learn strategies".to_owned(),
        schedule: "Fridays, 3:30 PM".to_owned(),
        max_participants: max,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

// =============================================================
// Activity
// =============================================================

#[test]
fn spots_left_subtracts_participants_from_capacity() {
    assert_eq!(activity(12, &["a@x.edu", "b@x.edu"]).spots_left(), 10);
}

#[test]
fn spots_left_is_zero_when_full() {
    assert_eq!(activity(2, &["a@x.edu", "b@x.edu"]).spots_left(), 0);
}

#[test]
fn spots_left_goes_negative_for_over_full_input() {
    assert_eq!(activity(0, &["a@x.edu"]).spots_left(), -1);
}

#[test]
fn activity_participants_default_to_empty() {
    let json = r#"{"description":"d","schedule":"s","max_participants":5}"#;
    let parsed: Activity = serde_json::from_str(json).unwrap();
    assert!(parsed.participants.is_empty());
}

// =============================================================
// Roster
// =============================================================

#[test]
fn roster_preserves_server_order() {
    let json = r#"{
        "Chess Club": {"description":"d","schedule":"s","max_participants":12,"participants":[]},
        "Art Club": {"description":"d","schedule":"s","max_participants":15,"participants":[]},
        "Math Club": {"description":"d","schedule":"s","max_participants":10,"participants":[]}
    }"#;
    let roster: Roster = serde_json::from_str(json).unwrap();
    let names: Vec<&str> = roster.names().collect();
    assert_eq!(names, vec!["Chess Club", "Art Club", "Math Club"]);
}

#[test]
fn roster_preserves_participant_order() {
    let json = r#"{"Chess Club":{"description":"d","schedule":"s","max_participants":12,
        "participants":["z@x.edu","a@x.edu"]}}"#;
    let roster: Roster = serde_json::from_str(json).unwrap();
    assert_eq!(roster.get("Chess Club").unwrap().participants, vec!["z@x.edu", "a@x.edu"]);
}

#[test]
fn roster_rejects_non_object_payload() {
    assert!(serde_json::from_str::<Roster>("[1,2,3]").is_err());
}

#[test]
fn roster_duplicate_name_replaces_in_place() {
    let roster = Roster::new([
        ("Chess".to_owned(), activity(1, &[])),
        ("Art".to_owned(), activity(2, &[])),
        ("Chess".to_owned(), activity(3, &[])),
    ]);
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.names().collect::<Vec<_>>(), vec!["Chess", "Art"]);
    assert_eq!(roster.get("Chess").unwrap().max_participants, 3);
}

#[test]
fn roster_default_is_empty() {
    let roster = Roster::default();
    assert!(roster.is_empty());
    assert!(roster.get("anything").is_none());
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn message_body_reads_message() {
    let body: MessageBody = serde_json::from_str(r#"{"message":"Signed up!"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Signed up!"));
}

#[test]
fn error_body_string_detail_is_text() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"Activity full"}"#).unwrap();
    assert_eq!(body.detail_text().as_deref(), Some("Activity full"));
}

#[test]
fn error_body_list_detail_is_not_text() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":[{"msg":"field required"}]}"#).unwrap();
    assert!(body.detail_text().is_none());
}
