//! Serving the document root.
//!
//! A request target is first resolved to a path and a [`TargetKind`], then
//! handed to the responder for that kind:
//!
//! - **`directory`**: HTML listing of a directory's entries
//! - **`file`**: the file's bytes, whole
//! - **`cgi`**: a fixed stub page for script targets; nothing is executed

pub mod cgi;
pub mod directory;
pub mod file;
pub mod resolver;

pub use resolver::{ResolveError, ResolvedTarget, Resolver, TargetKind};

use crate::http::response::Response;

/// Produces the response for an already resolved target.
pub async fn respond(target: &ResolvedTarget) -> Response {
    match target.kind {
        TargetKind::ScriptLike => cgi::respond(&target.path),
        TargetKind::Directory => directory::respond(&target.path).await,
        TargetKind::File => file::respond(&target.path).await,
    }
}
