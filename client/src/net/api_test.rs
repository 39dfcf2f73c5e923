use super::*;

#[test]
fn request_failed_message_uses_server_error_body() {
    let msg = request_failed_message(RECIPES_ENDPOINT, 502, r#"{"error":"backend returned status 500: boom"}"#);
    assert_eq!(msg, "/api/recipes failed (502): backend returned status 500: boom");
}

#[test]
fn request_failed_message_falls_back_to_status() {
    assert_eq!(request_failed_message(MENU_ENDPOINT, 404, "<html>"), "/api/menu failed: 404");
    assert_eq!(request_failed_message(INFORMATION_ENDPOINT, 500, ""), "/api/information failed: 500");
}

#[test]
fn endpoints_match_server_routes() {
    assert_eq!(MENU_ENDPOINT, "/api/menu");
    assert_eq!(RECIPES_ENDPOINT, "/api/recipes");
    assert_eq!(INFORMATION_ENDPOINT, "/api/information");
}
