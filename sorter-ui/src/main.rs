//! Sorter UI server - HTML table whose column headers sort it.

mod page;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use sorter::session::TableSession;

use crate::page::PageRenderer;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "sorter-ui")]
#[command(about = "Web table sorted by clicking its column headers")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "3001")]
    port: u16,

    /// Config file (defaults apply when missing)
    #[arg(long, default_value = "sorter.toml")]
    config: PathBuf,

    /// JSON record set; overrides `records_path` from config
    #[arg(long)]
    records: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sorter_ui=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let session = TableSession::open(&args.config, args.records.as_deref())?;
    let lang = session.collation_locale();
    info!(config = %args.config.display(), lang = %lang, "starting sorter-ui");

    let state = AppState::new(session, PageRenderer::new()?, lang);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::page_router())
        .nest("/api", routes::api_router())
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
