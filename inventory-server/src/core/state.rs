//! Server State
//!
//! Everything a handler needs, cloned into each request through axum's
//! `State` extractor.

use crate::chat::ChatClient;
use crate::core::Config;
use crate::db::{DbService, seed};

/// Shared server state
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Connection pool and backend
    pub db: DbService,
    /// Chat completion client
    pub chat: ChatClient,
}

impl ServerState {
    pub fn new(config: Config, db: DbService, chat: ChatClient) -> Self {
        Self { config, db, chat }
    }

    /// Open the database, apply migrations, seed if configured, build clients
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;

        if config.seed_on_start {
            seed::seed_if_empty(&db.pool).await?;
        }

        let chat = ChatClient::new(config.chat.clone())?;
        if !chat.is_configured() {
            tracing::warn!("OPENAI_API_KEY not set, /api/chat will answer 503");
        }

        Ok(Self::new(config.clone(), db, chat))
    }

    /// Close the connection pool
    pub async fn shutdown(&self) {
        self.db.close().await;
    }
}
