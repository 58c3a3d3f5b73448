use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{messaging::Messenger, qr::QrService, templates::Replies};

#[derive(Clone)]
pub struct AppState {
    pub connection: Arc<DatabaseConnection>,
    pub messenger: Arc<dyn Messenger>,
    pub replies: Arc<Replies>,
    pub qr: Arc<QrService>,
}

impl AppState {
    pub fn new(
        connection: DatabaseConnection,
        messenger: Arc<dyn Messenger>,
        replies: Replies,
        qr: QrService,
    ) -> Self {
        AppState {
            connection: Arc::new(connection),
            messenger,
            replies: Arc::new(replies),
            qr: Arc::new(qr),
        }
    }
}
