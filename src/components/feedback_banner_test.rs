use super::*;

#[test]
fn banner_hidden_without_feedback() {
    assert_eq!(banner_class(None), "hidden");
}

#[test]
fn banner_class_follows_kind() {
    assert_eq!(banner_class(Some(&Feedback::success("ok"))), "success");
    assert_eq!(banner_class(Some(&Feedback::error("no"))), "error");
}
