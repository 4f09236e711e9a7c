pub mod dictionary_models;
pub mod generate_models;
pub mod translate_models;

pub use dictionary_models::{
    DictionaryDocument, DictionaryParams, DictionaryResponse,
    EmergencyResponse, WordEntry,
};
pub use generate_models::{GenerateRequest, GenerateResponse};
pub use translate_models::{
    ChatRequest, ChatResponse, HealthResponse, ServiceError,
    TranslateRequest, TranslateResponse,
};
