use axum::{
    body::Body,
    http::{Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use super::ApiError;

#[derive(RustEmbed)]
#[folder = "assets"]
struct Asset;

fn asset_response(path: &str) -> Option<Response> {
    let content = Asset::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Some(
        (
            [(header::CONTENT_TYPE, mime.as_ref())],
            Body::from(content.data),
        )
            .into_response(),
    )
}

/// GET /
pub async fn index() -> Response {
    asset_response("index.html").unwrap_or_else(|| ApiError::not_found().into_response())
}

/// Serves embedded assets by path; anything else is a 404.
pub async fn serve_asset(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if path.is_empty() {
        return index().await;
    }

    asset_response(path).unwrap_or_else(|| ApiError::not_found().into_response())
}

/// Fallback for a known path hit with an unsupported method.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
