use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shared::inbound::http::{ErrorDetail, MessageResponse};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity): Path<String>,
    params: Result<Query<SignUpParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => {
            return ErrorDetail::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
                .into_response();
        }
    };

    let command = SignUpForActivity {
        activity,
        email: params.email,
    };

    match state.sign_up_handler.handle(command).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(error) => ErrorDetail::from(error).into_response(),
    }
}
