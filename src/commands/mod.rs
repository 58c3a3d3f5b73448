pub mod broadcast;
pub mod registration;
