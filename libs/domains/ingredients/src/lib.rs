//! Ingredients Domain
//!
//! CRUD over the `ingredients` collection of the cooking-recipe database.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← String ids parsed and validated, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, typed id, DTOs, filter
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_ingredients::{CreateIngredient, IngredientService, MongoIngredientRepository};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("cooking_recipe");
//!
//! let service = IngredientService::new(MongoIngredientRepository::new(&db));
//! let id = service.add_ingredient(CreateIngredient::new("FISH", "Kilo")).await?;
//! let fish = service.get_ingredient(&id).await?;
//! assert_eq!(fish.unit, "Kilo");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{IngredientError, IngredientResult};
pub use models::{CreateIngredient, Ingredient, IngredientFilter, IngredientId, UpdateIngredient};
pub use mongodb::MongoIngredientRepository;
pub use repository::IngredientRepository;
pub use service::IngredientService;
