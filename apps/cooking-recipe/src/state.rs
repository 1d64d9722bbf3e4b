//! Application state shared by the commands.

use database::mongodb::{Client, Database};
use domain_ingredients::{IngredientService, MongoIngredientRepository};

use crate::config::Config;

/// Everything a command needs, built once after the connection is verified
pub struct AppState {
    pub config: Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub client: Client,
    /// The configured database
    pub db: Database,
    pub ingredients: IngredientService<MongoIngredientRepository>,
}

impl AppState {
    pub fn new(config: Config, client: Client) -> Self {
        let db = client.database(config.mongodb.database());
        let repository = MongoIngredientRepository::with_collection(&db, &config.collection);

        Self {
            ingredients: IngredientService::new(repository),
            config,
            client,
            db,
        }
    }
}
