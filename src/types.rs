use serde::Deserialize;
use teloxide::types::ChatId;

#[derive(Debug, Default, Deserialize)]
pub struct Update {
    pub update_id: Option<i64>,
    pub message: Option<IncomingPayload>,
    pub edited_message: Option<IncomingPayload>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IncomingPayload {
    pub chat: Option<Chat>,
    pub from: Option<Sender>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct Sender {
    pub id: Option<i64>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: ChatId,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub text: Option<String>,
}

impl Update {
    pub fn into_incoming(self) -> Option<IncomingMessage> {
        let message = self.message.or(self.edited_message)?;
        let chat_id = message.chat?.id?;
        let sender = message.from?;
        let telegram_id = sender.id?;

        Some(IncomingMessage {
            chat_id: ChatId(chat_id),
            telegram_id,
            username: sender.username,
            text: message.text,
        })
    }
}
