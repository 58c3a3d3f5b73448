use futures::{stream, StreamExt};
use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use teloxide::types::ChatId;
use thiserror::Error;

use crate::{entity::users, messaging::Messenger, users::utils::select_users};

pub const MAX_CONCURRENT_SENDS: usize = 16;

#[derive(Debug, Error)]
pub enum BroadcastError {
    #[error("Message text cannot be empty")]
    EmptyText,
    #[error("No users selected")]
    NoRecipients,
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastRequest {
    #[serde(alias = "userIds")]
    pub recipient_ids: Vec<i32>,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BroadcastReport {
    pub attempted: usize,
}

pub async fn broadcast(
    connection: &DatabaseConnection,
    messenger: &dyn Messenger,
    request: BroadcastRequest,
) -> Result<BroadcastReport, BroadcastError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(BroadcastError::EmptyText);
    }
    if request.recipient_ids.is_empty() {
        return Err(BroadcastError::NoRecipients);
    }

    let recipients = select_users(&request.recipient_ids).all(connection).await?;
    log::info!(
        "Broadcasting to {} of {} requested users",
        recipients.len(),
        request.recipient_ids.len()
    );

    Ok(deliver(messenger, &recipients, text).await)
}

/// Sends `text` to every recipient, at most [`MAX_CONCURRENT_SENDS`] at a
/// time. A failed send is logged and does not affect the others or the result.
pub async fn deliver(
    messenger: &dyn Messenger,
    recipients: &[users::Model],
    text: &str,
) -> BroadcastReport {
    let sends: Vec<_> = recipients
        .iter()
        .map(|user| async move {
            if let Err(err) = messenger.send_text(ChatId(user.telegram_id), text).await {
                log::error!("Failed to send message to {}: {:?}", user.telegram_id, err);
            }
        })
        .collect();

    stream::iter(sends)
        .buffer_unordered(MAX_CONCURRENT_SENDS)
        .collect::<Vec<()>>()
        .await;

    BroadcastReport {
        attempted: recipients.len(),
    }
}
