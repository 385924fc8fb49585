use serde_json::{Value, json};

use accounts_core::{AccountId, TokenService};

use crate::helpers::{TestApp, error_message, random_email, random_password};

#[tokio::test]
async fn should_return_200_with_token_for_the_account() {
    let app = TestApp::new().await;
    let (id, credentials) = app.signup_random().await;

    let response = app
        .post_signin(&json!({
            "email": credentials["email"],
            "password": credentials["password"],
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    let token = body["data"].as_str().unwrap();
    assert!(!token.is_empty());

    let account_id = app.token_service.verify(token).unwrap();
    assert_eq!(account_id, AccountId::parse(&id).unwrap());
}

#[tokio::test]
async fn should_return_400_for_wrong_password() {
    let app = TestApp::new().await;
    let (_, credentials) = app.signup_random().await;

    let response = app
        .post_signin(&json!({
            "email": credentials["email"],
            "password": "definitely-not-it",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "Wrong Email or Password!");
}

#[tokio::test]
async fn should_return_same_error_for_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .post_signin(&json!({
            "email": random_email(),
            "password": random_password(),
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "Wrong Email or Password!");
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        (json!({"password": random_password()}), "\"email\" is required"),
        (
            json!({"email": "nope", "password": random_password()}),
            "\"email\" length must be at least 6 characters long",
        ),
        (json!({"email": random_email()}), "\"password\" is required"),
    ];

    for (body, expected) in test_cases {
        let response = app.post_signin(&body).await;
        assert_eq!(response.status().as_u16(), 400, "Failed for input: {body}");
        assert_eq!(error_message(response).await, expected, "Failed for input: {body}");
    }
}
