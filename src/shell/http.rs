use axum::{
    Extension, Json, Router,
    response::Redirect,
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub const INDEX_PATH: &str = "/static/index.html";

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/activities", get(list_http::handle))
        .route("/activities/{activity}/signup", post(sign_up_http::handle))
        .route(
            "/activities/{activity}/unregister",
            delete(unregister_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
