#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use registration_bot::{
    config::DEFAULT_QR_SERVICE_URL,
    connection,
    messaging::{Messenger, MessengerError},
    qr::QrService,
    state::AppState,
    templates::Replies,
};
use teloxide::{types::ChatId, ApiError, RequestError};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Image { chat_id: i64, url: String, caption: String },
}

/// Records outgoing messages instead of calling Telegram. Chats listed in
/// `failing` get an error back.
#[derive(Default)]
pub struct RecordingMessenger {
    pub sent: Mutex<Vec<Sent>>,
    pub failing: Vec<i64>,
    pub fail_images: bool,
}

impl RecordingMessenger {
    pub fn failing(chat_ids: &[i64]) -> Self {
        RecordingMessenger {
            failing: chat_ids.to_vec(),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn fail_for(&self, chat_id: ChatId) -> Result<(), MessengerError> {
        if self.failing.contains(&chat_id.0) {
            return Err(RequestError::Api(ApiError::BotBlocked).into());
        }
        Ok(())
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), MessengerError> {
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id: chat_id.0,
            text: text.to_owned(),
        });
        self.fail_for(chat_id)
    }

    async fn send_image_with_caption(
        &self,
        chat_id: ChatId,
        image_url: &Url,
        caption: &str,
    ) -> Result<(), MessengerError> {
        self.sent.lock().unwrap().push(Sent::Image {
            chat_id: chat_id.0,
            url: image_url.to_string(),
            caption: caption.to_owned(),
        });
        if self.fail_images {
            let err = ApiError::Unknown("wrong file identifier/HTTP URL specified".to_owned());
            return Err(RequestError::Api(err).into());
        }
        self.fail_for(chat_id)
    }
}

pub async fn test_state(messenger: Arc<RecordingMessenger>) -> AppState {
    let connection = connection::connect("sqlite::memory:").await.unwrap();
    AppState::new(
        connection,
        messenger,
        Replies::new().unwrap(),
        QrService::new(DEFAULT_QR_SERVICE_URL).unwrap(),
    )
}

pub fn text_update(chat_id: i64, text: &str) -> serde_json::Value {
    text_update_from(chat_id, "tester", text)
}

pub fn text_update_from(chat_id: i64, username: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "update_id": 1,
        "message": {
            "message_id": 1,
            "chat": { "id": chat_id, "type": "private" },
            "from": { "id": chat_id, "is_bot": false, "first_name": "Test", "username": username },
            "text": text
        }
    })
}
