//! Request target to filesystem path.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Substring that marks a target as a script.
const SCRIPT_MARKER: &str = ".cgi";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Directory,
    /// May not exist; the file responder finds out.
    File,
    ScriptLike,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub path: PathBuf,
    pub kind: TargetKind,
    /// Decoded query string pairs. Parsed, never acted on.
    pub query: Vec<(String, String)>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("path escapes the document root: {0}")]
    Traversal(String),
}

#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
}

impl Resolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps `target` onto the document root and classifies it.
    ///
    /// The query string is split off first. A `..` segment anywhere in the
    /// path is rejected.
    pub async fn resolve(&self, target: &str) -> Result<ResolvedTarget, ResolveError> {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (target, Vec::new()),
        };

        let relative = Path::new(path.trim_start_matches('/'));
        if relative.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(ResolveError::Traversal(path.to_string()));
        }

        let fs_path = self.root.join(relative);

        let kind = if path.contains(SCRIPT_MARKER) {
            TargetKind::ScriptLike
        } else if is_dir(&fs_path).await {
            TargetKind::Directory
        } else {
            TargetKind::File
        };

        tracing::debug!(request_target = %target, path = %fs_path.display(), ?kind, "Resolved target");

        Ok(ResolvedTarget {
            path: fs_path,
            kind,
            query,
        })
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}
