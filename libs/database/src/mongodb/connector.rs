use mongodb::{Client, options::ClientOptions};
use tracing::info;

use super::MongoConfig;
use super::health::ping;

/// Error type for MongoDB operations
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed")]
    ConnectionFailed(#[source] Box<MongoError>),

    #[error("Connection not verified within {secs}s")]
    Timeout { secs: u64 },
}

/// Connect using a MongoConfig
///
/// Parses the URI, applies the configured timeouts and verifies the
/// connection with a primary `ping`. The whole verification is bounded by
/// `config.connect_timeout()`.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "cooking_recipe");
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Attempting to connect to MongoDB at {}", config.redacted_uri());

    let mut options = ClientOptions::parse(&config.uri).await?;

    let timeout = config.connect_timeout();
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    match tokio::time::timeout(timeout, ping(&client)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            client.shutdown().await;
            return Err(MongoError::ConnectionFailed(Box::new(e)));
        }
        Err(_) => {
            client.shutdown().await;
            return Err(MongoError::Timeout {
                secs: config.connect_timeout_secs,
            });
        }
    }

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Connect to MongoDB with default settings
///
/// # Example
/// ```ignore
/// use database::mongodb::connect;
///
/// let client = connect("mongodb://localhost:27017").await?;
/// ```
pub async fn connect(uri: &str) -> Result<Client, MongoError> {
    connect_from_config(&MongoConfig::new(uri)).await
}

/// Release the client's connections and background tasks
///
/// Consumes the client; every clone of it becomes unusable afterwards.
pub async fn disconnect(client: Client) {
    client.shutdown().await;
    info!("MongoDB connection closed");
}
