//! Database library providing MongoDB connectors and utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connection manager, health checks and catalog browsing
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "cooking_recipe");
//! let client = mongodb::connect_from_config(&config).await?;
//!
//! let names = mongodb::list_database_names(&client).await?;
//! let collections = mongodb::list_collection_names(&client.database(config.database())).await?;
//!
//! mongodb::disconnect(client).await;
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
