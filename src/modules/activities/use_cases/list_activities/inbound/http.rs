use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shared::inbound::http::ErrorDetail;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_activities().await {
        Ok(activities) => Json(activities).into_response(),
        Err(error) => {
            tracing::error!(%error, "listing activities failed");
            ErrorDetail::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                .into_response()
        }
    }
}

#[cfg(test)]
mod list_activities_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::activities::core::catalogue::default_catalogue;
    use crate::shared::infrastructure::activity_registry::in_memory::InMemoryActivityRegistry;
    use crate::shell::state::AppState;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/activities", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_every_seeded_activity() {
        let response = app(AppState::in_memory(default_catalogue()))
            .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let listed = json.as_object().expect("expected a JSON object");
        assert_eq!(listed.len(), default_catalogue().len());
        let chess = &listed["Chess Club"];
        assert!(chess["participants"].is_array());
        assert_eq!(chess["max_participants"], 12);
        assert!(chess["description"].is_string());
        assert!(chess["schedule"].is_string());
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_registry_is_offline() {
        let mut registry = InMemoryActivityRegistry::default();
        registry.toggle_offline();
        let response = app(AppState::from_registry(registry))
            .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
