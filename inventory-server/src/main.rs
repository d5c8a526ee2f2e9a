use inventory_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    let _ = dotenvy::dotenv();

    // 2. Configuration, then logging with the configured level
    let config = Config::from_env()?;
    let _log_guard = init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Inventory server starting"
    );

    // 3. Database, migrations, seed data, clients
    let state = ServerState::initialize(&config).await?;

    // 4. Serve until Ctrl+C / SIGTERM
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
