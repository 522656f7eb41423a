//! webserv - minimal static file server
//!
//! Serves files, directory listings and a CGI stub from a document root, one
//! request per connection.

pub mod config;
pub mod http;
pub mod server;
pub mod static_files;
