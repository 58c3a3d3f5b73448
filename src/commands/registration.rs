use sea_orm::{ActiveEnum, DbErr};
use teloxide::types::ChatId;
use thiserror::Error;

use crate::{
    flow::{transition, Input, Reply},
    state::AppState,
    types::{IncomingMessage, Update},
    users::utils::{apply_transition, resolve_user},
};

#[derive(Debug, Error)]
pub enum BotError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("can't render reply: {0}")]
    Template(#[from] tera::Error),
}

pub async fn handle_message(state: &AppState, message: &IncomingMessage) -> Result<(), BotError> {
    let connection = &*state.connection;
    let resolved = resolve_user(
        connection,
        message.telegram_id,
        message.username.as_deref(),
    )
    .await?;

    // A brand new record is already at the first step; greet instead of
    // taking this message as the name.
    if resolved.is_first_contact() {
        return send_reply(state, message.chat_id, &Reply::AskName).await;
    }

    let input = Input::parse(message.text.as_deref());
    let transition = transition(&resolved.user, input);
    let user = apply_transition(connection, resolved.user, &transition).await?;
    log::debug!("User {} is at step {}", user.id, user.step.to_value());

    send_reply(state, message.chat_id, &transition.reply).await
}

/// Entry point for one webhook update. Never fails: updates without the
/// required identities are dropped, and internal errors are reported to the
/// user with a generic apology.
pub async fn process_update(state: &AppState, update: Update) {
    let Some(message) = update.into_incoming() else {
        log::debug!("Ignoring update without chat or sender");
        return;
    };

    if let Err(err) = handle_message(state, &message).await {
        log::error!(
            "Can't handle message from {}: {:?}",
            message.telegram_id,
            err
        );
        sentry::capture_error(&err);
        send_failure_notice(state, message.chat_id).await;
    }
}

async fn send_reply(state: &AppState, chat_id: ChatId, reply: &Reply) -> Result<(), BotError> {
    let text = state.replies.render(reply)?;

    let result = match reply {
        Reply::Completed { artifact } => {
            let image_url = state.qr.image_url(artifact);
            match state
                .messenger
                .send_image_with_caption(chat_id, &image_url, &text)
                .await
            {
                Ok(()) => Ok(()),
                Err(err) => {
                    log::error!("Can't send QR code to {}: {:?}", chat_id.0, err);
                    state.messenger.send_text(chat_id, &text).await
                }
            }
        }
        _ => state.messenger.send_text(chat_id, &text).await,
    };

    if let Err(err) = result {
        log::error!("Can't send reply to {}: {:?}", chat_id.0, err);
    }
    Ok(())
}

async fn send_failure_notice(state: &AppState, chat_id: ChatId) {
    let text = match state.replies.render(&Reply::ServerError) {
        Ok(text) => text,
        Err(err) => {
            log::error!("Can't render server error reply: {:?}", err);
            return;
        }
    };
    if let Err(err) = state.messenger.send_text(chat_id, &text).await {
        log::error!("Can't send reply to {}: {:?}", chat_id.0, err);
    }
}
