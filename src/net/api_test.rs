use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn activities_endpoint_uses_base() {
    assert_eq!(activities_endpoint(""), "/activities");
    assert_eq!(activities_endpoint("https://school.test"), "https://school.test/activities");
}

#[test]
fn signup_endpoint_percent_encodes_name_and_email() {
    assert_eq!(
        signup_endpoint("", "Chess Club", "a+b@x.edu"),
        "/activities/Chess%20Club/signup?email=a%2Bb%40x.edu"
    );
}

#[test]
fn participants_endpoint_encodes_path_separators() {
    assert_eq!(
        participants_endpoint("", "Art/Design", "a&b=c@x.edu"),
        "/activities/Art%2FDesign/participants?email=a%26b%3Dc%40x.edu"
    );
}

// =============================================================
// parse_roster
// =============================================================

#[test]
fn parse_roster_accepts_activity_map() {
    let body = r#"{"Chess Club":{"description":"d","schedule":"s","max_participants":12,"participants":["m@x.edu"]}}"#;
    let roster = parse_roster(200, body).unwrap();
    assert_eq!(roster.len(), 1);
}

#[test]
fn parse_roster_non_json_success_is_transport_error() {
    let err = parse_roster(200, "<html>oops</html>").unwrap_err();
    assert!(err.is_transport());
}

#[test]
fn parse_roster_error_status_is_server_error() {
    let err = parse_roster(500, "Internal Server Error").unwrap_err();
    assert_eq!(err, ApiError::Server { status: 500, detail: None });
}

// =============================================================
// parse_message
// =============================================================

#[test]
fn parse_message_returns_server_message() {
    let msg = parse_message(200, r#"{"message":"Signed up!"}"#).unwrap();
    assert_eq!(msg.as_deref(), Some("Signed up!"));
}

#[test]
fn parse_message_tolerates_missing_message() {
    assert_eq!(parse_message(200, "{}").unwrap(), None);
}

#[test]
fn parse_message_error_status_carries_detail() {
    let err = parse_message(400, r#"{"detail":"Activity full"}"#).unwrap_err();
    assert_eq!(err.detail(), Some("Activity full"));
    assert!(!err.is_transport());
}

#[test]
fn parse_message_error_status_without_json_has_no_detail() {
    let err = parse_message(404, "not found").unwrap_err();
    assert_eq!(err, ApiError::Server { status: 404, detail: None });
}

#[test]
fn parse_message_error_status_with_list_detail_has_no_detail() {
    let err = parse_message(422, r#"{"detail":[{"msg":"field required"}]}"#).unwrap_err();
    assert_eq!(err.detail(), None);
}

#[test]
fn parse_message_treats_redirect_status_as_failure() {
    assert!(parse_message(302, r#"{"message":"moved"}"#).is_err());
}

#[test]
fn api_error_display_mentions_status() {
    let err = ApiError::Server { status: 404, detail: Some("gone".to_owned()) };
    assert_eq!(err.to_string(), "server returned status 404");
}

#[test]
fn http_api_uses_configured_base() {
    let config = BoardConfig { api_base: "https://school.test".to_owned(), ..BoardConfig::default() };
    assert_eq!(HttpApi::new(&config), HttpApi { base: "https://school.test".to_owned() });
}
