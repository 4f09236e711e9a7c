use axum::{
    Router,
    extract::{Extension, State},
    response::IntoResponse,
    routing::{get, get_service, post},
};
use std::sync::Arc;
use tera::{Context, Tera};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

mod data;
mod features;
mod handlers;
mod utils;

use features::ai::ServiceClients;
use features::dictionary::DictionaryStore;
use features::synthesis::SynthesisCoordinator;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DictionaryStore>,
    pub clients: ServiceClients,
    pub coordinator: Arc<SynthesisCoordinator>,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Dictionary storage and AI clients
    let dictionary_path = std::env::var("DICTIONARY_PATH")
        .unwrap_or_else(|_| "sign_language_data.json".to_string());
    let generated_dir =
        std::env::var("GENERATED_DIR").unwrap_or_else(|_| "static/generated".to_string());

    let store = Arc::new(DictionaryStore::new(dictionary_path));
    let clients = ServiceClients::from_env();
    let coordinator = Arc::new(SynthesisCoordinator::new(
        store.clone(),
        clients.images.clone(),
        generated_dir,
        "/static/generated",
    ));

    let state = AppState {
        store,
        clients,
        coordinator,
    };

    // Templates configuration
    let templates = match Tera::new("templates/**/*.html") {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    let templates = Arc::new(templates);

    // API router
    let api_router = Router::new()
        .route("/translate", post(handlers::translate::translate))
        .route("/chat", post(handlers::chat::chat))
        .route("/dictionary", get(handlers::dictionary::dictionary))
        .route("/emergency", get(handlers::dictionary::emergency))
        .route("/generate-sign", post(handlers::generate::generate_sign));

    // Main application router
    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(handlers::health::health))
        .nest("/api", api_router)
        .nest_service("/static", get_service(ServeDir::new("static")))
        .with_state(state.clone())
        .layer(Extension(templates));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    let listener = match TcpListener::bind(("0.0.0.0", port)).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to address: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(port, ai_method = %state.clients.method, "Sign Language Assistant running");

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn index(
    Extension(templates): Extension<Arc<Tera>>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let mut context = Context::new();
    context.insert("ai_configured", &state.clients.ai_configured());
    utils::render_template(&templates, "index.html", context)
}
