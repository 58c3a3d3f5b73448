use sea_orm::{EntityTrait, PaginatorTrait};
use std::{
    error::Error,
    io::{self, Read},
};
use registration_bot::commands::broadcast::deliver;
use registration_bot::config::Config;
use registration_bot::connection;
use registration_bot::entity::users;
use registration_bot::messaging::TelegramMessenger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();
    log::info!("Starting...");
    let config = Config::init()?;
    log::info!("Initialized config...");
    let connection = connection::init(&config).await?;
    let messenger = TelegramMessenger::new(config.bot_token.as_deref());
    if !messenger.is_enabled() {
        log::warn!("TELEGRAM_BOT_TOKEN is not set, nothing will be sent");
    }

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let input = input.trim();

    if input.is_empty() {
        log::error!("Input is empty");
        return Ok(());
    }

    let mut attempted = 0;
    let mut user_pages = users::Entity::find().paginate(&connection, 50);

    while let Some(users) = user_pages.fetch_and_next().await? {
        attempted += deliver(&messenger, &users, input).await.attempted;
    }

    log::info!("Finished! Attempted {} users", attempted);

    Ok(())
}
