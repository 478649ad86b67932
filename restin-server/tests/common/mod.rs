//! In-process test harness: full router over an in-memory database

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shared::models::Role;
use tower::ServiceExt;

use restin_server::auth::{JwtConfig, password};
use restin_server::db::DbService;
use restin_server::db::models::User;
use restin_server::db::repository::UserRepository;
use restin_server::{Config, ServerState, build_app};

pub const PASSWORD: &str = "secret123";

pub struct TestApp {
    pub state: ServerState,
    app: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Config::in_memory(JwtConfig::with_secret(
            "integration-test-secret-0123456789abcdef",
        ));
        let db = DbService::memory().await.expect("memory db");
        let state = ServerState::new(config, db.db);
        let app = build_app(&state).with_state(state.clone());
        Self { state, app }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(token), body).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, Some(token), None).await
    }

    /// Insert a user straight into the store and log in; returns `(token, user id)`
    pub async fn user_with_role(&self, email: &str, role: Role) -> (String, String) {
        UserRepository::new(self.state.get_db())
            .create(User {
                id: None,
                name: format!("{role} {email}"),
                email: email.to_string(),
                password: password::hash_password(PASSWORD).unwrap(),
                role,
                created_at: shared::util::now_millis(),
            })
            .await
            .unwrap();
        self.login(email).await
    }

    pub async fn login(&self, email: &str) -> (String, String) {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "email": email, "password": PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        (
            body["token"].as_str().unwrap().to_string(),
            body["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    /// Self-registered customer
    pub async fn customer(&self, email: &str) -> (String, String) {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({ "name": "Guest", "email": email, "password": PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        (
            body["token"].as_str().unwrap().to_string(),
            body["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    pub async fn admin(&self) -> (String, String) {
        self.user_with_role("admin@restin.test", Role::Admin).await
    }

    pub async fn staff(&self) -> (String, String) {
        self.user_with_role("staff@restin.test", Role::Staff).await
    }

    pub async fn create_restaurant(&self, admin: &str, name: &str) -> String {
        let (status, body) = self
            .post(
                "/api/restaurants",
                admin,
                json!({
                    "name": name,
                    "description": "Harbour view",
                    "location": "Pier 3",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_room(&self, token: &str, restaurant: &str, body: Value) -> Value {
        let mut payload = json!({
            "name": "Room A",
            "restaurant": restaurant,
            "capacity": 2,
        });
        if let (Some(target), Some(extra)) = (payload.as_object_mut(), body.as_object()) {
            for (k, v) in extra {
                target.insert(k.clone(), v.clone());
            }
        }
        let (status, body) = self.post("/api/rooms", token, payload).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body
    }
}
