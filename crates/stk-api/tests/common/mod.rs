use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use axum_extra::extract::cookie::Key;
use http_body_util::BodyExt;
use serde::Deserialize;
use serde_json::json;
use stk_api::{config::Environment, state::ApiState};
use stk_store::SessionStore;
use tower::ServiceExt;

/// Test configuration
pub struct TestConfig {
    pub jwt_secret: String,
    pub cookie_secret: String,
    pub jwt_expiry_hours: i64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "test_jwt_secret_minimum_32_characters_long".to_string(),
            cookie_secret: "test_cookie_secret_minimum_64_characters_long_for_secure_encryption"
                .to_string(),
            jwt_expiry_hours: 24,
        }
    }
}

/// Test state builder for creating mock ApiState
pub struct TestStateBuilder {
    config: TestConfig,
}

impl TestStateBuilder {
    pub fn new() -> Self {
        Self {
            config: TestConfig::default(),
        }
    }

    /// Build a test ApiState; the simulated login delay is zeroed so tests
    /// run instantly
    pub fn build(self) -> ApiState {
        let cookie_key = Key::from(self.config.cookie_secret.as_bytes());

        ApiState {
            sessions: SessionStore::new(),
            jwt_secret: self.config.jwt_secret,
            jwt_expiry_hours: self.config.jwt_expiry_hours,
            cookie_key,
            environment: Environment::Development,
            login_delay: Duration::ZERO,
        }
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a full test app and a client against it
pub fn test_app() -> (TestClient, ApiState) {
    let state = TestStateBuilder::new().build();
    let router = stk_api::router::router().with_state(state.clone());

    (TestClient::new(router), state)
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a GET request with the session cookie
    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .header("cookie", cookie)
            .body(Body::empty())
            .expect("Failed to build authenticated request");

        self.request(request).await
    }

    /// Send a POST request with the session cookie (no body)
    pub async fn post_with_cookie(&self, uri: &str, cookie: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("cookie", cookie)
            .body(Body::empty())
            .expect("Failed to build authenticated request");

        self.request(request).await
    }

    /// Send a POST request with JSON body and the session cookie
    pub async fn post_json_with_cookie<T: serde::Serialize>(
        &self,
        uri: &str,
        body: &T,
        cookie: &str,
    ) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("cookie", cookie)
            .body(Body::from(json_body))
            .expect("Failed to build authenticated request");

        self.request(request).await
    }

    /// Send a PUT request with JSON body and the session cookie
    pub async fn put_json_with_cookie<T: serde::Serialize>(
        &self,
        uri: &str,
        body: &T,
        cookie: &str,
    ) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .header("cookie", cookie)
            .body(Body::from(json_body))
            .expect("Failed to build authenticated request");

        self.request(request).await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: axum::http::HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }

    /// Extract cookie value by name
    pub fn get_cookie(&self, name: &str) -> Option<String> {
        // Use get_all to handle multiple Set-Cookie headers
        for value in self.headers.get_all("set-cookie").iter() {
            if let Ok(cookie_str) = value.to_str() {
                if cookie_str.starts_with(&format!("{}=", name)) {
                    // split_once keeps '=' padding inside encrypted values intact
                    let value = cookie_str.split(';').next()?.split_once('=')?.1.to_string();
                    return Some(value);
                }
            }
        }
        None
    }
}

/// Login helpers; the returned string is a ready-to-send `cookie` header value
pub mod auth_flow {
    use super::*;

    /// Log in as a student (year 2 unless the test overrides it later)
    pub async fn login_student(client: &TestClient, name: &str) -> String {
        login(
            client,
            &json!({
                "role": "student",
                "name": name,
                "email": "student@example.com",
                "password": "password123",
                "year": 2,
            }),
        )
        .await
    }

    /// Log in as a faculty member
    pub async fn login_faculty(client: &TestClient, name: &str) -> String {
        login(
            client,
            &json!({
                "role": "faculty",
                "name": name,
                "email": "faculty@example.com",
                "password": "password123",
            }),
        )
        .await
    }

    pub async fn login(client: &TestClient, payload: &serde_json::Value) -> String {
        let response = client.post_json("/auth/login", payload).await;
        response.assert_status(StatusCode::OK);

        let value = response
            .get_cookie("auth_token")
            .expect("Login should set the auth cookie");
        format!("auth_token={}", value)
    }
}
