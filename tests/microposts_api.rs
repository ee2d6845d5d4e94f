//! End-to-end tests for the `/microposts` routes.

mod common;

use common::{signup_and_login, test_server, with_token};
use serde_json::{json, Value};

#[tokio::test]
async fn microposts_require_authentication() {
    let server = test_server();

    let response = server.get("/microposts").await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(
        response.json::<Value>()["error"],
        "Authorization header required"
    );

    let response = server
        .post("/microposts")
        .json(&json!({ "title": "hello" }))
        .await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn create_micropost_owned_by_the_caller() {
    let server = test_server();
    let token = signup_and_login(&server, "user1@example.com", "password123").await;

    let me = with_token(server.get("/auth/me"), &token).await.json::<Value>();

    let response = with_token(
        server.post("/microposts").json(&json!({ "title": "first post" })),
        &token,
    )
    .await;

    assert_eq!(response.status_code(), 201);
    let body = response.json::<Value>();
    assert_eq!(body["title"], "first post");
    assert_eq!(body["user_id"], me["id"]);
    assert!(body.get("id").is_some());
    assert!(body.get("created_at").is_some());
}

#[tokio::test]
async fn create_micropost_requires_a_title() {
    let server = test_server();
    let token = signup_and_login(&server, "user1@example.com", "password123").await;

    let response = with_token(
        server.post("/microposts").json(&json!({ "title": "   " })),
        &token,
    )
    .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["error"], "Title is required");
}

#[tokio::test]
async fn list_and_get_microposts() {
    let server = test_server();
    let token = signup_and_login(&server, "user1@example.com", "password123").await;

    for title in ["one", "two"] {
        let response = with_token(
            server.post("/microposts").json(&json!({ "title": title })),
            &token,
        )
        .await;
        assert_eq!(response.status_code(), 201);
    }

    let list = with_token(server.get("/microposts"), &token).await;
    assert_eq!(list.status_code(), 200);
    let body = list.json::<Value>();
    let microposts = body.as_array().unwrap();
    assert_eq!(microposts.len(), 2);

    let id = microposts[0]["id"].as_str().unwrap();
    let one = with_token(server.get(&format!("/microposts/{id}")), &token).await;
    assert_eq!(one.status_code(), 200);
    assert_eq!(one.json::<Value>()["id"], microposts[0]["id"]);
}

#[tokio::test]
async fn get_unknown_micropost_is_404() {
    let server = test_server();
    let token = signup_and_login(&server, "user1@example.com", "password123").await;

    for id in ["0b41e9c2-8f3d-4f6a-b0e3-0e6c1df0a111", "not-a-uuid"] {
        let response = with_token(server.get(&format!("/microposts/{id}")), &token).await;

        assert_eq!(response.status_code(), 404);
        assert_eq!(response.json::<Value>()["error"], "Record not found!");
    }
}
