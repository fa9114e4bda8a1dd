pub mod chat;
pub mod health;
pub mod plant;
pub mod server;
pub mod suggestion;
