//! Menubuilder
//!
//! HTTP server and command-line renderer for navigation menus.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use menubuilder_kernel::menu::{MemoryMenuStore, MenuStore, RenderOptions};
use menubuilder_kernel::{AppState, Config, routes};

#[derive(Debug, Parser)]
#[command(name = "menubuilder", version, about = "Navigation menu renderer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve rendered menus over HTTP (default).
    Serve,

    /// Render one menu from a JSON fixture file and print the markup.
    Render {
        /// Fixture file: {"menus": [...], "items": [...]}.
        #[arg(long)]
        fixture: PathBuf,

        /// Slug of the menu to render.
        #[arg(long)]
        slug: String,

        /// Route name currently being served.
        #[arg(long)]
        route: Option<String>,

        #[arg(long)]
        parent_tag: Option<String>,

        #[arg(long)]
        child_tag: Option<String>,

        #[arg(long)]
        parent_class: Option<String>,

        #[arg(long)]
        child_class: Option<String>,

        /// Render top-level items only.
        #[arg(long)]
        no_children: bool,

        /// Do not add the `active` class.
        #[arg(long)]
        no_active: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Render {
            fixture,
            slug,
            route,
            parent_tag,
            child_tag,
            parent_class,
            child_class,
            no_children,
            no_active,
        } => {
            let mut options = RenderOptions::new()
                .include_children(!no_children)
                .mark_active(!no_active);
            if let Some(tag) = parent_tag {
                options = options.parent_tag(&tag);
            }
            if let Some(tag) = child_tag {
                options = options.child_tag(&tag);
            }
            if let Some(class) = parent_class {
                options = options.parent_class(class);
            }
            if let Some(class) = child_class {
                options = options.child_class(class);
            }

            let store = MemoryMenuStore::from_json_file(&fixture)?;
            let menu = store
                .find_menu_by_slug(&slug)
                .await?
                .with_context(|| format!("menu '{slug}' not found in {}", fixture.display()))?;

            println!("{}", menu.render(&store, &options, route.as_deref()).await?);
            Ok(())
        }
    }
}

async fn serve() -> Result<()> {
    info!("Starting menubuilder");

    let config = Config::from_env().context("failed to load configuration")?;
    info!(port = config.port, "Configuration loaded");

    let state = AppState::new(&config)
        .await
        .context("failed to initialize application state")?;

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug,sqlx=warn"));

    // Logs go to stderr so `render` output stays clean on stdout
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
