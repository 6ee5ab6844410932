use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::{HeaderValue, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use wikiproxy_lib::{render_page, ConversionRequest, ProxyError, RenderedPage, ResponseFormat};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /wikipedia/page`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_title: String,
    #[serde(default)]
    pub response_type: ResponseFormat,
    /// `responseAsBlob` is the field's older name.
    #[serde(default, alias = "responseAsBlob")]
    pub as_attachment: bool,
}

pub async fn fetch_page(
    State(state): State<AppState>,
    payload: Result<Json<PageRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload.map_err(|e| {
        tracing::warn!("Rejected page request: {}", e.body_text());
        ApiError::from(e)
    })?;
    let request = ConversionRequest::new(&body.page_title, body.response_type, body.as_attachment)
        .map_err(|e| {
            tracing::warn!("Rejected page request: {}", e);
            e
        })?;

    tracing::info!(
        "Fetching page {:?} as {}{}",
        request.page_title(),
        request.format(),
        if request.as_attachment() { " (attachment)" } else { "" }
    );

    let fetched = state.fetcher.fetch(request.page_title()).await;
    let page = render_page(fetched, &request, state.converter.as_ref(), &state.options)?;
    Ok(into_response(page)?)
}

fn into_response(page: RenderedPage) -> Result<Response, ProxyError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(page.content_type));
    if let Some(disposition) = page.content_disposition {
        let value = HeaderValue::from_str(&disposition)
            .map_err(|e| ProxyError::Conversion(format!("invalid Content-Disposition: {}", e)))?;
        headers.insert(CONTENT_DISPOSITION, value);
    }
    Ok((StatusCode::OK, headers, page.body).into_response())
}
