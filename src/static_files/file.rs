use std::path::Path;

use crate::http::response::Response;

/// Serves the whole file in one response, buffered in memory.
pub async fn respond(path: &Path) -> Response {
    match tokio::fs::read(path).await {
        Ok(contents) => Response::ok(contents),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "File not readable");
            Response::not_found("File not found")
        }
    }
}
