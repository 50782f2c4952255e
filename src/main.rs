//! AgroTrack portal binary.
//!
//! Bootstraps the on-disk layout (idempotent), builds the route table, and
//! serves until SIGTERM / Ctrl-C.
//!
//! ```text
//! RUST_LOG=info agrotrack --listen 0.0.0.0:8888 --base-dir .
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use agrotrack::{Server, Storage, routes};

#[derive(Parser, Debug)]
#[command(name = "agrotrack", about = "AgroTrack internal portal", version)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8888")]
    listen: SocketAddr,

    /// Directory holding `public/` and `data/`. Created and seeded on
    /// first run.
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), agrotrack::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let storage = Arc::new(Storage::new(&args.base_dir));
    storage.ensure_initial_files().await?;

    info!(public_dir = %storage.public_dir().display(), "serving static assets");
    info!(log_file = %storage.log_file().display(), "contact log");

    Server::bind(args.listen).serve(routes::router(storage)).await
}
