pub mod chat;
pub mod common;
pub mod plant;
pub mod suggestion;
