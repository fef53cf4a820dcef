//! Application state - built once at startup and shared across all handlers.

use std::sync::Arc;

use blog_core::error::RepoError;
use blog_core::ports::PostRepository;
use blog_infra::DatabaseConfig;

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConnections, PostgresPostRepository};

/// Errors that abort startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to connect to database: {0}")]
    Connect(String),

    #[error("Failed to initialize schema: {0}")]
    Schema(#[from] RepoError),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state and make sure the posts table exists.
    pub async fn new(db_config: &DatabaseConfig) -> Result<Self, StartupError> {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostRepository> = {
            let connections = DatabaseConnections::init(db_config)
                .await
                .map_err(|e| StartupError::Connect(e.to_string()))?;
            Arc::new(PostgresPostRepository::new(connections.main))
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostRepository> = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(blog_infra::InMemoryPostRepository::new())
        };

        posts.initialize_schema().await?;
        tracing::info!("Application state initialized");

        Ok(Self::with_repository(posts))
    }

    /// Wrap an already constructed repository.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}
