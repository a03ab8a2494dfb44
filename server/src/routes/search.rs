//! Public chemical search used by the sidebar and the main table.

use axum::extract::{Query, State};
use axum::response::Json;
use records::SearchHit;
use serde::Deserialize;

use super::error::ApiResult;
use crate::services::search::{self, SearchFilters, parse_id_list};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub synonyms: bool,
    pub room: Option<String>,
    pub manufacturers: Option<String>,
}

impl SearchQuery {
    pub(crate) fn filters(&self) -> SearchFilters {
        SearchFilters {
            room: self.room.as_deref().and_then(|r| r.trim().parse().ok()),
            manufacturers: self.manufacturers.as_deref().map(parse_id_list).unwrap_or_default(),
        }
    }
}

/// `GET /api/search?query=&synonyms=&room=&manufacturers=`
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchQuery>) -> ApiResult<Json<Vec<SearchHit>>> {
    let source = params.synonyms.then_some(state.synonyms.as_ref());
    let hits = search::search_chemicals(&state.pool, source, &params.query, &params.filters()).await?;
    Ok(Json(hits))
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
