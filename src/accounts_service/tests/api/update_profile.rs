use serde_json::{Value, json};

use accounts_core::AccountId;

use crate::helpers::{TestApp, error_message, random_email};

#[tokio::test]
async fn should_update_username_and_report_count() {
    let app = TestApp::new().await;
    let (id, token) = app.signed_in().await;

    let response = app
        .patch_profile(&id, &json!({"username": "renamed-user"}))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": true, "data": {"updated": 1}}));

    let profile: Value = app
        .get_profile(&id, Some(&format!("Bearer {token}")))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(profile["data"]["username"], "renamed-user");
}

#[tokio::test]
async fn should_allow_signin_with_changed_password() {
    let app = TestApp::new().await;
    let (id, credentials) = app.signup_random().await;

    let response = app
        .patch_profile(&id, &json!({"password": "a-brand-new-password"}))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let old = app
        .post_signin(&json!({
            "email": credentials["email"],
            "password": credentials["password"],
        }))
        .await;
    assert_eq!(old.status().as_u16(), 400);

    let new = app
        .post_signin(&json!({
            "email": credentials["email"],
            "password": "a-brand-new-password",
        }))
        .await;
    assert_eq!(new.status().as_u16(), 200);
}

#[tokio::test]
async fn should_reject_fields_outside_the_allow_list() {
    let app = TestApp::new().await;
    let (id, _) = app.signup_random().await;

    for body in [
        json!({"password_hash": "plain-text"}),
        json!({"id": AccountId::new().to_string()}),
        json!({"username": "renamed-user", "admin": true}),
    ] {
        let response = app.patch_profile(&id, &body).await;
        assert_eq!(response.status().as_u16(), 400, "Failed for input: {body}");
        assert!(
            error_message(response).await.ends_with("is not allowed"),
            "Failed for input: {body}"
        );
    }
}

#[tokio::test]
async fn should_reject_empty_update() {
    let app = TestApp::new().await;
    let (id, _) = app.signup_random().await;

    let response = app.patch_profile(&id, &json!({})).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        error_message(response).await,
        "\"value\" must contain at least one of [username, email, password]"
    );
}

#[tokio::test]
async fn should_reject_email_owned_by_another_account() {
    let app = TestApp::new().await;
    let (_, first) = app.signup_random().await;
    let (second_id, _) = app.signup_random().await;

    let response = app
        .patch_profile(&second_id, &json!({"email": first["email"]}))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "Email already exists!");
}

#[tokio::test]
async fn should_validate_new_values() {
    let app = TestApp::new().await;
    let (id, _) = app.signup_random().await;

    let response = app
        .patch_profile(&id, &json!({"email": "not-an-email"}))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        error_message(response).await,
        "\"email\" must be a valid email"
    );
}

#[tokio::test]
async fn should_return_404_for_unknown_account() {
    let app = TestApp::new().await;

    let response = app
        .patch_profile(
            &AccountId::new().to_string(),
            &json!({"email": random_email()}),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(error_message(response).await, "User does not exist!");
}
