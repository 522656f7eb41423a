use std::path::Path;

use crate::http::response::Response;

const STUB_BODY: &str = "<html><body>Executed CGI</body></html>";

/// Answers for a script target without running it, whether or not the script
/// exists.
pub fn respond(path: &Path) -> Response {
    tracing::debug!(path = %path.display(), "Script target, returning stub");
    Response::html(STUB_BODY)
}
