//! Configuration for the cooking-recipe tool

use core_config::{FromEnv, dotenv::load_dotenv, env_or_default};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

const DEFAULT_COLLECTION: &str = "ingredients";

/// Application configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    /// Collection holding the ingredient documents
    pub collection: String,
    pub environment: Environment,
}

impl Config {
    /// Load `.env` (if any) under the process environment, then read settings
    pub fn from_env() -> eyre::Result<Self> {
        load_dotenv()?;
        Self::from_process_env()
    }

    fn from_process_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();

        let mut mongodb = MongoConfig::from_env()?;
        if mongodb.app_name.is_none() {
            mongodb = mongodb.with_app_name(env!("CARGO_PKG_NAME"));
        }

        let collection = env_or_default("MONGODB_COLLECTION", DEFAULT_COLLECTION);

        Ok(Self {
            mongodb,
            collection,
            environment,
        })
    }
}
