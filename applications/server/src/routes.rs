/// Router construction
use crate::{api, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub fn create_router(app_state: AppState) -> Router {
    let mut graphql = post(api::graphql::execute);
    let mut router = Router::new().route("/health", get(api::health::health));

    if app_state.ide {
        graphql = graphql.get(api::graphql::graphiql);
        router = router.route("/", get(api::graphql::graphiql));
    }

    router
        .route(api::graphql::GRAPHQL_PATH, graphql)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
