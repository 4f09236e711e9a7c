use axum::{
    Json,
    extract::{Query, State},
};

use crate::AppState;
use crate::data::models::{DictionaryParams, DictionaryResponse, EmergencyResponse};
use crate::features::search::SearchEngine;

/// Dictionary lookup. The full category list always rides along with the
/// filtered words so clients can populate their UI filters.
pub async fn dictionary(
    State(state): State<AppState>,
    Query(params): Query<DictionaryParams>,
) -> Json<DictionaryResponse> {
    let doc = state.store.load();
    let query = params.search.unwrap_or_default();

    Json(DictionaryResponse {
        words: SearchEngine::filter_words(&doc, &query),
        categories: doc.categories,
    })
}

pub async fn emergency(State(state): State<AppState>) -> Json<EmergencyResponse> {
    let doc = state.store.load();
    Json(EmergencyResponse {
        phrases: SearchEngine::emergency_phrases(&doc),
    })
}
