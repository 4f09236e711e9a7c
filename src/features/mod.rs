pub mod ai;
pub mod api;
pub mod dictionary;
pub mod search;
pub mod synthesis;
