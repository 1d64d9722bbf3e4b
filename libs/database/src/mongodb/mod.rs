//! MongoDB database connector and utilities
//!
//! Provides connection management, health checks and catalog browsing.

mod catalog;
mod config;
mod connector;
mod health;

pub use catalog::{list_collection_names, list_database_names};
pub use config::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_DATABASE, MongoConfig};
pub use connector::{MongoError, connect, connect_from_config, disconnect};
pub use health::{HealthStatus, check_health, check_health_detailed, ping};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
