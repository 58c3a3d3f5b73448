use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::{
    commands::broadcast::{broadcast, BroadcastError, BroadcastRequest},
    entity::users,
    export::export_to_csv,
    state::AppState,
    users::utils::select_all_users,
};

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("userIds (number[]) and text (string) are required")]
    InvalidPayload,
    #[error(transparent)]
    Broadcast(#[from] BroadcastError),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = match &self {
            AdminError::InvalidPayload
            | AdminError::Broadcast(BroadcastError::EmptyText)
            | AdminError::Broadcast(BroadcastError::NoRecipients) => StatusCode::BAD_REQUEST,
            AdminError::Broadcast(BroadcastError::Database(_)) | AdminError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = if status.is_server_error() {
            log::error!("Admin request failed: {:?}", self);
            "Internal server error".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BroadcastResponse {
    pub ok: bool,
    pub attempted: usize,
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<users::Model>>, AdminError> {
    let users = select_all_users().all(&*state.connection).await?;
    Ok(Json(users))
}

pub async fn export_users(State(state): State<AppState>) -> Result<impl IntoResponse, AdminError> {
    let users = select_all_users().all(&*state.connection).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"users.csv\""),
        ],
        export_to_csv(&users),
    ))
}

pub async fn send_message(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BroadcastResponse>, AdminError> {
    let request: BroadcastRequest =
        serde_json::from_slice(&body).map_err(|_| AdminError::InvalidPayload)?;

    let report = broadcast(&state.connection, state.messenger.as_ref(), request).await?;

    Ok(Json(BroadcastResponse {
        ok: true,
        attempted: report.attempted,
    }))
}
