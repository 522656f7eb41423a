//! Tests for mapping request targets onto the document root

use std::fs;

use webserv::static_files::{ResolveError, Resolver, TargetKind};

fn docroot() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/readme.txt"), b"hello").unwrap();
    fs::write(dir.path().join("index.html"), b"<p>hi</p>").unwrap();
    dir
}

#[tokio::test]
async fn test_resolve_existing_file() {
    let root = docroot();
    let resolver = Resolver::new(root.path());

    let target = resolver.resolve("/index.html").await.unwrap();

    assert_eq!(target.kind, TargetKind::File);
    assert_eq!(target.path, root.path().join("index.html"));
}

#[tokio::test]
async fn test_resolve_missing_path_is_file() {
    let root = docroot();
    let resolver = Resolver::new(root.path());

    let target = resolver.resolve("/nope.txt").await.unwrap();

    assert_eq!(target.kind, TargetKind::File);
}

#[tokio::test]
async fn test_resolve_directory() {
    let root = docroot();
    let resolver = Resolver::new(root.path());

    assert_eq!(resolver.resolve("/docs").await.unwrap().kind, TargetKind::Directory);
    assert_eq!(resolver.resolve("/docs/").await.unwrap().kind, TargetKind::Directory);
    assert_eq!(resolver.resolve("/").await.unwrap().kind, TargetKind::Directory);
}

#[tokio::test]
async fn test_resolve_script_marker_wins() {
    let root = docroot();
    fs::create_dir(root.path().join("bin.cgi")).unwrap();
    let resolver = Resolver::new(root.path());

    // Classified before the directory check, and without requiring existence
    assert_eq!(resolver.resolve("/bin.cgi").await.unwrap().kind, TargetKind::ScriptLike);
    assert_eq!(resolver.resolve("/run.cgi").await.unwrap().kind, TargetKind::ScriptLike);
    assert_eq!(
        resolver.resolve("/x.cgi.bak").await.unwrap().kind,
        TargetKind::ScriptLike
    );
}

#[tokio::test]
async fn test_resolve_marker_in_query_is_ignored() {
    let root = docroot();
    let resolver = Resolver::new(root.path());

    let target = resolver.resolve("/index.html?next=run.cgi").await.unwrap();

    assert_eq!(target.kind, TargetKind::File);
    assert_eq!(target.path, root.path().join("index.html"));
}

#[tokio::test]
async fn test_resolve_strips_and_decodes_query() {
    let root = docroot();
    let resolver = Resolver::new(root.path());

    let target = resolver.resolve("/docs/readme.txt?lang=en&q=a+b%21").await.unwrap();

    assert_eq!(target.path, root.path().join("docs/readme.txt"));
    assert_eq!(
        target.query,
        vec![
            ("lang".to_string(), "en".to_string()),
            ("q".to_string(), "a b!".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_resolve_rejects_parent_segments() {
    let root = docroot();
    let resolver = Resolver::new(root.path().join("docs"));

    for target in ["/../index.html", "/docs/../../etc/passwd", "/.."] {
        assert!(
            matches!(resolver.resolve(target).await, Err(ResolveError::Traversal(_))),
            "{target} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_resolve_allows_dots_inside_names() {
    let root = docroot();
    let resolver = Resolver::new(root.path());

    let target = resolver.resolve("/..hidden/file..txt").await.unwrap();

    assert_eq!(target.path, root.path().join("..hidden/file..txt"));
}

#[tokio::test]
async fn test_resolve_splits_at_first_question_mark() {
    let root = docroot();
    let resolver = Resolver::new(root.path());

    let target = resolver.resolve("/index.html?b=1?c=2").await.unwrap();

    assert_eq!(target.path, root.path().join("index.html"));
    assert_eq!(target.query, vec![("b".to_string(), "1?c=2".to_string())]);
}

#[tokio::test]
async fn test_resolve_empty_and_absent_query() {
    let root = docroot();
    let resolver = Resolver::new(root.path());

    let bare = resolver.resolve("/index.html").await.unwrap();
    let trailing = resolver.resolve("/index.html?").await.unwrap();

    assert_eq!(bare.path, trailing.path);
    assert!(bare.query.is_empty());
    assert!(trailing.query.is_empty());
}
