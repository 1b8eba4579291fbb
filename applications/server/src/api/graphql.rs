/// GraphQL endpoint and IDE
use crate::state::AppState;
use async_graphql::http::GraphiQLSource;
use axum::{extract::State, response::Html, Json};

/// Path the GraphQL endpoint is mounted on
pub const GRAPHQL_PATH: &str = "/graphql";

/// POST /graphql - `{query, variables, operationName}` in, `{data, errors}` out
pub async fn execute(
    State(app_state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    let operation = request.operation_name.clone();
    let response = app_state.schema.execute(request).await;

    if response.is_err() {
        tracing::debug!(
            operation = operation.as_deref().unwrap_or("<anonymous>"),
            errors = response.errors.len(),
            "GraphQL request returned errors"
        );
    }

    Json(response)
}

/// GET / and GET /graphql - GraphiQL IDE
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
