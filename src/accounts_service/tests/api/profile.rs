use accounts_core::AccountId;
use chrono::{Duration, Utc};
use serde_json::Value;

use crate::helpers::{TestApp, error_message};

#[tokio::test]
async fn should_return_200_with_account_for_valid_token() {
    let app = TestApp::new().await;
    let (id, token) = app.signed_in().await;

    let response = app
        .get_profile(&id, Some(&format!("Bearer {token}")))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], id.as_str());
    assert!(body["data"]["username"].is_string());
    assert!(body["data"]["email"].is_string());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn should_return_403_without_authorization_header() {
    let app = TestApp::new().await;
    let (id, _) = app.signup_random().await;

    let response = app.get_profile(&id, None).await;

    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(
        error_message(response).await,
        "No authorization header found! Access denied!"
    );
}

#[tokio::test]
async fn should_return_401_when_header_has_no_token() {
    let app = TestApp::new().await;
    let (id, _) = app.signup_random().await;

    let response = app.get_profile(&id, Some("Bearer")).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        error_message(response).await,
        "No token found! Access denied!"
    );
}

#[tokio::test]
async fn should_return_401_for_tampered_token() {
    let app = TestApp::new().await;
    let (id, token) = app.signed_in().await;

    let mut tampered: Vec<char> = token.chars().collect();
    let index = tampered.len() / 2;
    tampered[index] = if tampered[index] == 'a' { 'b' } else { 'a' };
    let tampered: String = tampered.into_iter().collect();

    let response = app
        .get_profile(&id, Some(&format!("Bearer {tampered}")))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        error_message(response).await,
        "Invalid token! Access denied!"
    );
}

#[tokio::test]
async fn should_return_401_for_expired_token() {
    let app = TestApp::new().await;
    let (id, _) = app.signup_random().await;

    let expired = app
        .token_service
        .issue_at(&AccountId::parse(&id).unwrap(), Utc::now() - Duration::hours(2))
        .unwrap();

    let response = app
        .get_profile(&id, Some(&format!("Bearer {}", expired.as_str())))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        error_message(response).await,
        "Invalid token! Access denied!"
    );
}

#[tokio::test]
async fn should_return_404_for_unknown_account() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in().await;

    let response = app
        .get_profile(
            &AccountId::new().to_string(),
            Some(&format!("Bearer {token}")),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(error_message(response).await, "User does not exist!");
}

#[tokio::test]
async fn should_return_400_for_malformed_id() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in().await;

    let response = app
        .get_profile("not-an-id", Some(&format!("Bearer {token}")))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        error_message(response).await,
        "Invalid account id \"not-an-id\""
    );
}
