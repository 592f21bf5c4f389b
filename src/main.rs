use clap::Parser;
use formbase::cli::Cli;
use formbase::config::Settings;
use formbase::persistence::DataStore;
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting formbase server on {}:{}", host, port);

    // Connect to the database and run migrations
    let store = DataStore::new(&settings.persistence).await?;
    if settings.persistence.auto_migrate {
        let result = store.migrate().await?;
        info!(
            "Migrations: {} applied, {} already up to date ({})",
            result.applied,
            result.skipped,
            store.backend().name()
        );
    }

    // Create application using the library function
    let app = formbase::create_app(store);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
