pub mod commands;
pub mod config;
pub mod connection;
pub mod entity;
pub mod export;
pub mod flow;
pub mod messaging;
pub mod migration;
pub mod qr;
pub mod server;
pub mod state;
pub mod templates;
pub mod types;
pub mod users;
