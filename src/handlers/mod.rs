pub mod chat;
pub mod dictionary;
pub mod generate;
pub mod health;
pub mod translate;
