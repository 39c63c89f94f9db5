#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use fake::Fake;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use http_body_util::BodyExt;
use jschs::jschs_config::{CorsConfig, ServerConfig};
use jschs::jschs_core::BcryptCodec;
use jschs::modules::teachers::memory::InMemoryTeacherStore;
use jschs::modules::teachers::{Email, Teacher, TeacherId, TeacherService};
use jschs::router::init_router;
use jschs::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

/// Lowest cost bcrypt accepts; keeps the suite fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn generate_unique_email() -> String {
    format!("teacher_{}@school.edu", Uuid::new_v4().simple())
}

pub fn fake_name() -> String {
    Name().fake()
}

pub fn fake_phone() -> String {
    PhoneNumber().fake()
}

/// A valid, unsaved teacher with only the required fields set.
pub fn sample_teacher() -> Teacher {
    Teacher {
        id: TeacherId::nil(),
        email: Email::new(generate_unique_email()).unwrap(),
        password_hash: String::new(),
        full_name: fake_name(),
        phone: fake_phone(),
        is_active: true,
        photo: String::new(),
        date_of_birth: None,
        joining_date: None,
        gender: None,
        bio: String::new(),
        address: String::new(),
        designation: String::new(),
        qualification: String::new(),
    }
}

pub fn test_service() -> (TeacherService, Arc<InMemoryTeacherStore>) {
    let store = Arc::new(InMemoryTeacherStore::new());
    let service = TeacherService::new(
        store.clone(),
        Arc::new(BcryptCodec::new(TEST_BCRYPT_COST)),
    );
    (service, store)
}

pub fn setup_test_app() -> (Router, Arc<InMemoryTeacherStore>) {
    let (service, store) = test_service();
    let state = AppState::new(service, CorsConfig::default(), ServerConfig::default());
    (init_router(state), store)
}

/// Minimal valid create-teacher body.
pub fn create_body(email: &str, password: &str) -> Value {
    json!({
        "email": email,
        "password": password,
        "full_name": fake_name(),
        "phone": fake_phone(),
    })
}

/// Send one request through the router and decode the JSON response body
/// (`Value::Null` when empty).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

pub async fn create_teacher(app: &Router, email: &str, password: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/teachers",
        Some(create_body(email, password)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
    body
}

/// Recursively check that no credential material appears in a response.
pub fn assert_no_credentials(value: &Value) {
    match value {
        Value::Object(map) => {
            assert!(!map.contains_key("password"), "password leaked: {}", value);
            assert!(
                !map.contains_key("password_hash"),
                "password_hash leaked: {}",
                value
            );
            map.values().for_each(assert_no_credentials);
        }
        Value::Array(items) => items.iter().for_each(assert_no_credentials),
        _ => {}
    }
}
