use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, InputFile},
    utils::command::BotCommands,
    RequestError,
};
use thiserror::Error;
use url::Url;

use crate::flow::Command;

#[derive(Debug, Error)]
pub enum MessengerError {
    #[error("telegram request failed: {0}")]
    Request(#[from] RequestError),
}

/// Outbound side of the messaging platform.
///
/// Callers treat every send as best-effort: errors are logged where they are
/// received and never abort the surrounding operation.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), MessengerError>;

    async fn send_image_with_caption(
        &self,
        chat_id: ChatId,
        image_url: &Url,
        caption: &str,
    ) -> Result<(), MessengerError>;
}

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Option<Bot>,
}

impl TelegramMessenger {
    pub fn new(token: Option<&str>) -> Self {
        TelegramMessenger {
            bot: token.map(Bot::new),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.bot.is_some()
    }

    pub async fn register_commands(&self) {
        let Some(bot) = &self.bot else {
            return;
        };
        if let Err(err) = bot.set_my_commands(Command::bot_commands()).await {
            log::error!("Can't register bot commands: {:?}", err);
        }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), MessengerError> {
        let Some(bot) = &self.bot else {
            return Ok(());
        };
        bot.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn send_image_with_caption(
        &self,
        chat_id: ChatId,
        image_url: &Url,
        caption: &str,
    ) -> Result<(), MessengerError> {
        let Some(bot) = &self.bot else {
            return Ok(());
        };
        bot.send_photo(chat_id, InputFile::url(image_url.clone()))
            .caption(caption)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_token_disables_sending() {
        let messenger = TelegramMessenger::new(None);
        assert!(!messenger.is_enabled());

        let url = Url::parse("https://qr.example.com/?data=x").unwrap();
        assert!(messenger.send_text(ChatId(1), "hello").await.is_ok());
        assert!(messenger
            .send_image_with_caption(ChatId(1), &url, "caption")
            .await
            .is_ok());
    }
}
