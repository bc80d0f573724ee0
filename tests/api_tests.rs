//! Integration tests for user registration, exercise logging and routing.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use extrack::config::Config;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let db_path = std::env::temp_dir().join(format!("extrack-api-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());

    let state = extrack::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    extrack::api::router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn register(app: &Router, username: &str) -> String {
    let (status, body) = send(
        app,
        post_json(
            "/api/exercise/new-user",
            serde_json::json!({ "username": username }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "registration failed: {body}");

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    json["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_new_user_returns_username_and_id() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/exercise/new-user",
            serde_json::json!({ "username": "alice" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["username"], "alice");

    let id = json["id"].as_str().unwrap();
    assert_eq!(id.len(), 5);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let app = spawn_app().await;
    register(&app, "bob").await;

    let (status, body) = send(&app, post_form("/api/exercise/new-user", "username=bob")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, "Username already taken");

    let (_, body) = send(&app, get("/api/exercise/users")).await;
    let users: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn test_new_user_requires_username() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        post_json("/api/exercise/new-user", serde_json::json!({ "username": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "username is required");
}

#[tokio::test]
async fn test_list_users_is_stable() {
    let app = spawn_app().await;
    let carol = register(&app, "carol").await;
    let dave = register(&app, "dave").await;

    let (status, first) = send(&app, get("/api/exercise/users")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(&app, get("/api/exercise/users")).await;
    assert_eq!(first, second);

    let users: Vec<serde_json::Value> = serde_json::from_str(&first).unwrap();
    let ids: Vec<&str> = users.iter().map(|u| u["id"].as_str().unwrap()).collect();
    assert_eq!(users.len(), 2);
    assert!(ids.contains(&carol.as_str()));
    assert!(ids.contains(&dave.as_str()));
}

#[tokio::test]
async fn test_add_exercise_via_form() {
    let app = spawn_app().await;
    let id = register(&app, "erin").await;

    let (status, body) = send(
        &app,
        post_form(
            "/api/exercise/add",
            &format!("userId={id}&description=pushups&duration=15&date=2021-01-01"),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "username": "erin",
            "description": "pushups",
            "duration": 15,
            "id": id,
            "date": "Fri Jan 01 2021"
        })
    );
}

#[tokio::test]
async fn test_add_exercise_defaults_date_to_today() {
    let app = spawn_app().await;
    let id = register(&app, "frank").await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/exercise/add",
            serde_json::json!({ "userId": id, "description": "swim", "duration": 40, "date": "" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let today = chrono::Local::now().date_naive().format("%a %b %d %Y").to_string();
    assert_eq!(json["date"], today);
    assert_eq!(json["duration"], 40);
}

#[tokio::test]
async fn test_add_exercise_missing_fields() {
    let app = spawn_app().await;
    let id = register(&app, "grace").await;

    let cases = [
        (serde_json::json!({ "description": "run", "duration": 5 }), "userId is required"),
        (serde_json::json!({ "userId": id, "duration": 5 }), "description is required"),
        (serde_json::json!({ "userId": id, "description": "run" }), "duration is required"),
    ];

    for (payload, message) in cases {
        let (status, body) = send(&app, post_json("/api/exercise/add", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, message);
    }

    let (_, body) = send(&app, get(&format!("/api/exercise/log?userId={id}"))).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_add_exercise_unknown_user() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        post_form("/api/exercise/add", "userId=nobody&description=run&duration=10"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Unknown userId 'nobody'");
}

#[tokio::test]
async fn test_add_exercise_rejects_bad_input() {
    let app = spawn_app().await;
    let id = register(&app, "heidi").await;

    let (status, body) = send(
        &app,
        post_form(
            "/api/exercise/add",
            &format!("userId={id}&description=run&duration=forever"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Invalid duration"));

    let (status, body) = send(
        &app,
        post_form(
            "/api/exercise/add",
            &format!("userId={id}&description=run&duration=10&date=someday"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Invalid date"));
}

#[tokio::test]
async fn test_unknown_routes_are_not_found() {
    let app = spawn_app().await;

    for uri in ["/nope", "/api/exercise", "/api/exercise/unknown"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, "not found");
    }

    let (status, body) = send(&app, post_json("/api/exercise/users", serde_json::json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "not found");
}

#[tokio::test]
async fn test_front_page_is_served() {
    let app = spawn_app().await;

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&body).contains("/api/exercise/new-user"));

    let (status, _) = send(&app, get("/style.css")).await;
    assert_eq!(status, StatusCode::OK);
}
