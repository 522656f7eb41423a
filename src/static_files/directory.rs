use std::fmt::Write as _;
use std::io;
use std::path::Path;

use crate::http::response::Response;

/// Renders an HTML index of the directory's immediate entries.
///
/// `.` and `..` come first, followed by whatever order the filesystem
/// enumerates entries in. A directory that cannot be opened or fully
/// enumerated is a 404; a partial listing is never sent.
pub async fn respond(path: &Path) -> Response {
    match read_names(path).await {
        Ok(names) => Response::html(render_listing(&path.display().to_string(), &names)),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Directory not readable");
            Response::not_found("Directory not found")
        }
    }
}

async fn read_names(path: &Path) -> io::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(path).await?;

    let mut names = vec![".".to_string(), "..".to_string()];
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

pub fn render_listing(title: &str, names: &[String]) -> String {
    let mut html = format!(
        "<html><body><h1>Directory Listing of {}</h1><ul>",
        escape(title)
    );
    for name in names {
        let name = escape(name);
        let _ = write!(html, "<li><a href='{name}'>{name}</a></li>");
    }
    html.push_str("</ul></body></html>");
    html
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
