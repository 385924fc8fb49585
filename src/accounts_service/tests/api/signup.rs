use serde_json::{Value, json};

use crate::helpers::{TestApp, error_message, random_email, random_password, random_signup};

#[tokio::test]
async fn should_return_201_with_public_account_view() {
    let app = TestApp::new().await;
    let credentials = random_signup();

    let response = app.post_signup(&credentials).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["username"], credentials["username"]);
    assert_eq!(body["data"]["email"], credentials["email"]);
    assert!(body["data"]["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn should_return_400_if_email_already_exists() {
    let app = TestApp::new().await;
    let credentials = random_signup();

    let first = app.post_signup(&credentials).await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app
        .post_signup(&json!({
            "username": "someone-else",
            "email": credentials["email"],
            "password": random_password(),
        }))
        .await;

    assert_eq!(second.status().as_u16(), 400);
    assert_eq!(error_message(second).await, "Email already exists!");
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        (
            json!({"email": random_email(), "password": random_password()}),
            "\"username\" is required",
        ),
        (
            json!({"username": "short", "email": random_email(), "password": random_password()}),
            "\"username\" length must be at least 6 characters long",
        ),
        (
            json!({"username": "valid-name", "email": "not-an-email", "password": random_password()}),
            "\"email\" must be a valid email",
        ),
        (
            json!({"username": "valid-name", "email": random_email(), "password": ""}),
            "\"password\" is not allowed to be empty",
        ),
        (
            json!({"username": "valid-name", "email": random_email(), "password": 123456}),
            "\"password\" must be a string",
        ),
        (
            json!({"username": "a".repeat(256), "email": random_email(), "password": random_password()}),
            "\"username\" length must be less than or equal to 255 characters long",
        ),
    ];

    for (body, expected) in test_cases {
        let response = app.post_signup(&body).await;
        assert_eq!(response.status().as_u16(), 400, "Failed for input: {body}");
        assert_eq!(error_message(response).await, expected, "Failed for input: {body}");
    }
}

#[tokio::test]
async fn should_return_400_for_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/api/signup", app.address))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{\"username\": ")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}
