use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shared::inbound::http::{ErrorDetail, MessageResponse};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity): Path<String>,
    params: Result<Query<UnregisterParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => {
            return ErrorDetail::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
                .into_response();
        }
    };

    let command = UnregisterFromActivity {
        activity,
        email: params.email,
    };

    match state.unregister_handler.handle(command).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(error) => ErrorDetail::from(error).into_response(),
    }
}
