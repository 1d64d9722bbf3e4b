//! Database and collection enumeration

use mongodb::{Client, Database};
use tracing::instrument;

use super::MongoError;

/// Names of every database visible to the connecting credential
///
/// Order is whatever the server returns.
#[instrument(skip(client))]
pub async fn list_database_names(client: &Client) -> Result<Vec<String>, MongoError> {
    let names = client.list_database_names().await?;
    tracing::debug!(count = names.len(), "Listed databases");
    Ok(names)
}

/// Names of the collections in `database`
#[instrument(skip(database), fields(database = %database.name()))]
pub async fn list_collection_names(database: &Database) -> Result<Vec<String>, MongoError> {
    let names = database.list_collection_names().await?;
    tracing::debug!(count = names.len(), "Listed collections");
    Ok(names)
}
