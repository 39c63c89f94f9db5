mod common;

use axum::http::StatusCode;
use common::{
    assert_no_credentials, create_body, create_teacher, generate_unique_email, send,
    setup_test_app,
};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_create_teacher() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();

    let mut body = create_body(&email, "s3cret");
    body["date_of_birth"] = json!("1985-04-12");
    body["joining_date"] = json!("");
    body["gender"] = json!("male");
    body["bio"] = json!("Physics");

    let (status, teacher) = send(&app, "POST", "/api/v1/teachers", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_no_credentials(&teacher);
    assert_eq!(teacher["email"], email);
    assert_eq!(teacher["is_active"], true);
    assert_eq!(teacher["date_of_birth"], "1985-04-12");
    assert_eq!(teacher["joining_date"], serde_json::Value::Null);
    assert_eq!(teacher["gender"], "male");
    assert_eq!(teacher["bio"], "Physics");
    assert_eq!(teacher["photo"], "");
    assert!(Uuid::parse_str(teacher["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_create_teacher_duplicate_email() {
    let (app, store) = setup_test_app();
    let email = generate_unique_email();
    create_teacher(&app, &email, "s3cret").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/teachers",
        Some(create_body(&email, "another")),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_create_teacher_validation_errors() {
    let (app, store) = setup_test_app();

    let mut short_password = create_body(&generate_unique_email(), "abc");
    short_password["password"] = json!("abc");
    let mut bad_email = create_body("not-an-email", "s3cret");
    bad_email["email"] = json!("not-an-email");
    let mut bad_gender = create_body(&generate_unique_email(), "s3cret");
    bad_gender["gender"] = json!("robot");
    let mut bad_date = create_body(&generate_unique_email(), "s3cret");
    bad_date["date_of_birth"] = json!("12/04/1985");
    let mut missing_phone = create_body(&generate_unique_email(), "s3cret");
    missing_phone.as_object_mut().unwrap().remove("phone");

    for body in [short_password, bad_email, bad_gender, bad_date, missing_phone] {
        let (status, response) = send(&app, "POST", "/api/v1/teachers", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert!(response["error"].is_string());
    }

    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn test_create_teacher_malformed_json() {
    let (app, _) = setup_test_app();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/teachers")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_teacher() {
    let (app, _) = setup_test_app();
    let created = create_teacher(&app, &generate_unique_email(), "s3cret").await;
    let id = created["id"].as_str().unwrap();

    let (status, teacher) = send(&app, "GET", &format!("/api/v1/teachers/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_no_credentials(&teacher);
    assert_eq!(teacher, created);
}

#[tokio::test]
async fn test_get_teacher_not_found() {
    let (app, _) = setup_test_app();

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/v1/teachers/{}", Uuid::new_v4()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Teacher not found");
}

#[tokio::test]
async fn test_get_teacher_malformed_id() {
    let (app, store) = setup_test_app();

    let (status, body) = send(&app, "GET", "/api/v1/teachers/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn test_list_teachers() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, "GET", "/api/v1/teachers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    create_teacher(&app, &generate_unique_email(), "s3cret").await;
    create_teacher(&app, &generate_unique_email(), "s3cret").await;

    let (status, body) = send(&app, "GET", "/api/v1/teachers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_no_credentials(&body);
}

#[tokio::test]
async fn test_list_teachers_store_failure() {
    let (app, store) = setup_test_app();
    store.set_unavailable(true);

    let (status, body) = send(&app, "GET", "/api/v1/teachers", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn test_update_teacher() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();
    let created = create_teacher(&app, &email, "s3cret").await;
    let id = created["id"].as_str().unwrap();

    let body = json!({
        "id": Uuid::new_v4(),
        "email": email,
        "password": "ignored",
        "password_hash": "ignored",
        "full_name": "Grace Hopper",
        "phone": "555-0100",
        "is_active": false,
        "designation": "Principal",
    });
    let (status, teacher) = send(&app, "PUT", &format!("/api/v1/teachers/{}", id), Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_no_credentials(&teacher);
    assert_eq!(teacher["id"], id);
    assert_eq!(teacher["full_name"], "Grace Hopper");
    assert_eq!(teacher["is_active"], false);
    assert_eq!(teacher["designation"], "Principal");

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/teachers/login",
        Some(json!({ "email": email, "password": "s3cret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_teacher_errors() {
    let (app, _) = setup_test_app();
    let first_email = generate_unique_email();
    create_teacher(&app, &first_email, "s3cret").await;
    let second = create_teacher(&app, &generate_unique_email(), "s3cret").await;
    let second_id = second["id"].as_str().unwrap();

    let collision = json!({ "email": first_email, "full_name": "Some One", "phone": "1" });
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/teachers/{}", second_id),
        Some(collision),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let valid = json!({ "email": generate_unique_email(), "full_name": "Some One", "phone": "1" });
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/teachers/{}", Uuid::new_v4()),
        Some(valid.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", "/api/v1/teachers/123", Some(valid)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let invalid = json!({ "email": generate_unique_email(), "full_name": "S", "phone": "1" });
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/teachers/{}", second_id),
        Some(invalid),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_teacher() {
    let (app, _) = setup_test_app();
    let created = create_teacher(&app, &generate_unique_email(), "s3cret").await;
    let uri = format!("/api/v1/teachers/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_change_password() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();
    let created = create_teacher(&app, &email, "old-pw").await;
    let uri = format!(
        "/api/v1/teachers/{}/password",
        created["id"].as_str().unwrap()
    );

    let (status, _) = send(&app, "PUT", &uri, Some(json!({ "new_password": "abc" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "PUT", &uri, Some(json!({ "new_password": "new-pw" }))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let login = |password: &str| json!({ "email": email, "password": password });
    let (status, _) = send(&app, "POST", "/api/v1/teachers/login", Some(login("old-pw"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, "POST", "/api/v1/teachers/login", Some(login("new-pw"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/teachers/{}/password", Uuid::new_v4()),
        Some(json!({ "new_password": "new-pw" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();
    let created = create_teacher(&app, &email, "s3cret").await;

    let (status, teacher) = send(
        &app,
        "POST",
        "/api/v1/teachers/login",
        Some(json!({ "email": email, "password": "s3cret" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_no_credentials(&teacher);
    assert_eq!(teacher["id"], created["id"]);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();
    create_teacher(&app, &email, "s3cret").await;

    let (wrong_status, wrong_body) = send(
        &app,
        "POST",
        "/api/v1/teachers/login",
        Some(json!({ "email": email, "password": "wrong!" })),
    )
    .await;
    let (unknown_status, unknown_body) = send(
        &app,
        "POST",
        "/api/v1/teachers/login",
        Some(json!({ "email": generate_unique_email(), "password": "s3cret" })),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, unknown_status);
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let (app, _) = setup_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/teachers/login",
        Some(json!({ "email": generate_unique_email() })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "password is required");
}

#[tokio::test]
async fn test_login_segment_is_not_an_id() {
    let (app, store) = setup_test_app();

    let (status, _) = send(&app, "GET", "/api/v1/teachers/login", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app, "DELETE", "/api/v1/teachers/login", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/teachers"].is_object());
}
