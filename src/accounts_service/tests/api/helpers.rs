use accounts_adapters::{
    Argon2PasswordHasher, HashMapAccountStore, JwtTokenService,
    config::{AllowedOrigins, JwtSetting, PasswordHashingSetting, test},
};
use accounts_service::AccountService;
use fake::{
    Fake,
    faker::internet::en::{Password, SafeEmail, Username},
};
use secrecy::Secret;
use serde::Serialize;
use serde_json::{Value, json};

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub token_service: JwtTokenService,
}

impl TestApp {
    pub async fn new() -> Self {
        let hasher = Argon2PasswordHasher::new(&PasswordHashingSetting {
            memory_kib: test::password_hashing::MEMORY_KIB,
            iterations: test::password_hashing::ITERATIONS,
            parallelism: test::password_hashing::PARALLELISM,
        })
        .expect("Failed to build password hasher");

        let token_service = JwtTokenService::new(&JwtSetting {
            secret: Secret::from(test::JWT_SECRET.to_owned()),
        });

        let service = AccountService::new(
            HashMapAccountStore::new(),
            hasher,
            token_service.clone(),
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            service
                .run_standalone(listener, Some(AllowedOrigins::parse("http://localhost")))
                .await
                .expect("Failed to run account service")
        });

        Self {
            address,
            http_client: reqwest::Client::new(),
            token_service,
        }
    }

    pub async fn post_signup<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/signup", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_signin<Body: Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/signin", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_profile(&self, user_id: &str, authorization: Option<&str>) -> reqwest::Response {
        let mut request = self
            .http_client
            .get(format!("{}/api/profile/{user_id}", self.address));
        if let Some(value) = authorization {
            request = request.header(reqwest::header::AUTHORIZATION, value);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn patch_profile<Body: Serialize>(
        &self,
        user_id: &str,
        body: &Body,
    ) -> reqwest::Response {
        self.http_client
            .patch(format!("{}/api/profile/update/{user_id}", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_profile(&self, user_id: &str) -> reqwest::Response {
        self.http_client
            .delete(format!("{}/api/profile/delete/{user_id}", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Sign up a fresh account and return its id together with the credentials used.
    pub async fn signup_random(&self) -> (String, Value) {
        let credentials = random_signup();
        let response = self.post_signup(&credentials).await;
        assert_eq!(response.status().as_u16(), 201);

        let body: Value = response.json().await.unwrap();
        let id = body["data"]["id"].as_str().unwrap().to_owned();
        (id, credentials)
    }

    /// Sign up and sign in, returning the account id and a bearer token.
    pub async fn signed_in(&self) -> (String, String) {
        let (id, credentials) = self.signup_random().await;
        let response = self
            .post_signin(&json!({
                "email": credentials["email"],
                "password": credentials["password"],
            }))
            .await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        (id, body["data"].as_str().unwrap().to_owned())
    }
}

pub fn random_username() -> String {
    format!("{}-{}", Username().fake::<String>(), uuid_suffix())
}

pub fn random_email() -> String {
    format!("{}{}", uuid_suffix(), SafeEmail().fake::<String>())
}

pub fn random_password() -> String {
    Password(8..32).fake()
}

pub fn random_signup() -> Value {
    json!({
        "username": random_username(),
        "email": random_email(),
        "password": random_password(),
    })
}

fn uuid_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_owned()
}

pub async fn error_message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.expect("Could not deserialize error body");
    assert_eq!(body["success"], false);
    body["error"].as_str().unwrap_or_default().to_owned()
}
