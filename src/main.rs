use registration_bot::{
    config::Config, connection, messaging::TelegramMessenger, qr::QrService, server,
    state::AppState, templates::Replies,
};
use std::error::Error;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    log::info!("Starting...");
    let config = Config::init()?;
    log::info!("Initialized config...");

    let _sentry = config.sentry_url.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let connection = connection::init(&config).await?;

    let messenger = TelegramMessenger::new(config.bot_token.as_deref());
    if messenger.is_enabled() {
        messenger.register_commands().await;
    } else {
        log::warn!("TELEGRAM_BOT_TOKEN is not set, outgoing messages are disabled");
    }

    let state = AppState::new(
        connection,
        Arc::new(messenger),
        Replies::new()?,
        QrService::new(&config.qr_service_url)?,
    );

    server::serve(state, config.listen_addr).await?;

    Ok(())
}
