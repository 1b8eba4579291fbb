/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use roster_core::{InMemoryUserStore, UserStore};
use roster_server::{create_router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

/// Create a test app over a fresh seeded store
pub fn create_test_app() -> (Router, Arc<dyn UserStore>) {
    let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::seeded());
    let app_state = AppState::new(Arc::clone(&store), 16, true);
    (create_router(app_state), store)
}

/// POST a GraphQL request and return the status and decoded body
pub async fn graphql(app: &Router, query: &str, variables: Value) -> (StatusCode, Value) {
    let body = json!({ "query": query, "variables": variables });

    let request = Request::builder()
        .uri("/graphql")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&body_bytes).unwrap())
}

/// Extension code of the first GraphQL error in a response
pub fn first_error_code(body: &Value) -> Option<&str> {
    body["errors"][0]["extensions"]["code"].as_str()
}

pub mod fixtures {
    pub const CREATE_USER: &str = "mutation CreateUser($input: UserInput!) { \
        createUser(input: $input) { id name email createdAt } }";
    pub const UPDATE_USER: &str = "mutation UpdateUser($id: ID!, $input: UpdateUserInput!) { \
        updateUser(id: $id, input: $input) { id name email createdAt } }";
    pub const DELETE_USER: &str = "mutation DeleteUser($id: ID!) { deleteUser(id: $id) }";
    pub const GET_USER: &str = "query GetUser($id: ID!) { user(id: $id) { id name email createdAt } }";
    pub const LIST_USERS: &str = "{ users { id name email createdAt } }";
}
