pub mod clients;
pub mod gemini;
pub mod prompts;

pub use clients::{
    GeneratedImage, ImageSynthesis, ProviderError, ServiceClients, TextCompletion,
};
pub use gemini::GeminiClient;
