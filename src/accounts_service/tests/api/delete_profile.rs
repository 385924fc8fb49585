use serde_json::{Value, json};

use accounts_core::AccountId;

use crate::helpers::{TestApp, error_message};

#[tokio::test]
async fn should_delete_account_and_report_count() {
    let app = TestApp::new().await;
    let (id, credentials) = app.signup_random().await;

    let response = app.delete_profile(&id).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": true, "data": {"deleted": 1}}));

    let signin = app
        .post_signin(&json!({
            "email": credentials["email"],
            "password": credentials["password"],
        }))
        .await;
    assert_eq!(signin.status().as_u16(), 400);
}

#[tokio::test]
async fn should_return_404_when_deleting_twice() {
    let app = TestApp::new().await;
    let (id, _) = app.signup_random().await;

    assert_eq!(app.delete_profile(&id).await.status().as_u16(), 200);

    let response = app.delete_profile(&id).await;
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(error_message(response).await, "User does not exist!");
}

#[tokio::test]
async fn should_return_404_for_unknown_account() {
    let app = TestApp::new().await;

    let response = app.delete_profile(&AccountId::new().to_string()).await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn should_return_400_for_malformed_id() {
    let app = TestApp::new().await;

    let response = app.delete_profile("12345").await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "Invalid account id \"12345\"");
}
