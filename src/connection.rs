use crate::{config::Config, migration::Migrator};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::{MigratorTrait, SchemaManager};

pub async fn init(config: &Config) -> Result<DatabaseConnection, DbErr> {
    connect(&config.db_url).await
}

pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url.to_owned());
    opt.sqlx_logging_level(log::LevelFilter::Debug);
    if database_url.starts_with("sqlite") {
        // each in-memory connection would see its own empty database
        opt.max_connections(1);
    }
    let connection = Database::connect(opt).await?;
    log::info!("Connected to database...");

    let schema_manager = SchemaManager::new(&connection);
    Migrator::up(&connection, None).await?;
    if !schema_manager.has_table("users").await? {
        return Err(DbErr::Migration("users table is missing after migrations".into()));
    }
    log::info!("Applied migrations...");

    Ok(connection)
}
