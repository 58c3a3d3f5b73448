use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;

use crate::{commands::registration::process_update, state::AppState, types::Update};

#[derive(Debug, Serialize)]
pub struct Ack {
    pub ok: bool,
}

/// Telegram retries any update that is not answered with 2xx, so this
/// handler acknowledges everything, including payloads it can't read.
pub async fn telegram_update(State(state): State<AppState>, body: Bytes) -> Json<Ack> {
    match serde_json::from_slice::<Update>(&body) {
        Ok(update) => {
            log::debug!("Telegram update {:?}", update.update_id);
            process_update(&state, update).await;
        }
        Err(err) => log::error!("Failed to parse Telegram update JSON: {}", err),
    }

    Json(Ack { ok: true })
}
