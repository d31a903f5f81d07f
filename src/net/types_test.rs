use super::*;

#[test]
fn login_request_serializes_email_as_username() {
    let req = LoginRequest { username: "a@b.com".to_owned(), password: "Abcdef1!".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "username": "a@b.com", "password": "Abcdef1!" })
    );
}

#[test]
fn signup_request_includes_favorite_team() {
    let req = SignupRequest {
        username: "a@b.com".to_owned(),
        password: "Abcdef1!".to_owned(),
        favorite_team: "Phoenix Suns".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "username": "a@b.com",
            "password": "Abcdef1!",
            "favorite_team": "Phoenix Suns",
        })
    );
}

#[test]
fn request_debug_output_never_contains_password() {
    let login = LoginRequest { username: "a@b.com".to_owned(), password: "Secret1!x".to_owned() };
    let signup = SignupRequest {
        username: "a@b.com".to_owned(),
        password: "Secret1!x".to_owned(),
        favorite_team: "Utah Jazz".to_owned(),
    };
    assert!(!format!("{login:?}").contains("Secret1!x"));
    assert!(!format!("{signup:?}").contains("Secret1!x"));
    assert!(format!("{login:?}").contains("a@b.com"));
}

#[test]
fn login_response_tolerates_missing_optional_fields() {
    let resp: LoginResponse = serde_json::from_str(r#"{"access_token":"t"}"#).unwrap();
    assert_eq!(resp.access_token, "t");
    assert!(resp.token_type.is_none());
    assert!(resp.user.is_none());
}

#[test]
fn login_response_requires_access_token() {
    assert!(serde_json::from_str::<LoginResponse>(r#"{"token_type":"bearer"}"#).is_err());
}

#[test]
fn error_response_message_only_accepts_non_empty_strings() {
    let text: ErrorResponse = serde_json::from_str(r#"{"detail":"Invalid username or password"}"#).unwrap();
    assert_eq!(text.message(), Some("Invalid username or password"));

    let structured: ErrorResponse = serde_json::from_str(r#"{"detail":[{"loc":["body"],"msg":"x"}]}"#).unwrap();
    assert_eq!(structured.message(), None);

    let blank: ErrorResponse = serde_json::from_str(r#"{"detail":"   "}"#).unwrap();
    assert_eq!(blank.message(), None);

    assert_eq!(ErrorResponse::default().message(), None);
}
