pub mod store;

pub use store::{DictionaryStore, LoadError, SaveError};
