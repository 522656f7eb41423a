use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use webserv::config::Config;
use webserv::server;

#[derive(Debug, Parser)]
#[command(name = "webserv", about = "Serve static files from the document root")]
struct Cli {
    /// Port to listen on (all IPv4 interfaces)
    port: u16,

    /// Optional YAML file with server and static_files settings
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    }
    .with_port(cli.port);

    tracing::info!(root = %cfg.static_files.root.display(), "Serving document root");

    tokio::select! {
        res = server::listener::run(Arc::new(cfg)) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
