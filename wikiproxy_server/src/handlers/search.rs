use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use wikiproxy_lib::validation::{validate_search_limit, validate_search_term};
use wikiproxy_lib::{SearchPaging, SearchResult};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /wikipedia/search`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_term: String,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

pub async fn search_pages(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload.map_err(|e| {
        tracing::warn!("Rejected search request: {}", e.body_text());
        ApiError::from(e)
    })?;
    let term = validate_search_term(&body.search_term)?;
    let paging = SearchPaging {
        limit: body.limit.map(validate_search_limit).transpose()?,
        offset: body.offset,
    };

    tracing::info!("Searching for {:?}", term);

    let response = match state.searcher.search(&term, paging).await {
        SearchResult::Success(payload) => (StatusCode::OK, Json(payload)).into_response(),
        SearchResult::Error(payload) => {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    };
    Ok(response)
}
