//! MongoDB implementation of IngredientRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc},
};
use tracing::instrument;

use crate::error::{IngredientError, IngredientResult};
use crate::models::{
    CreateIngredient, Ingredient, IngredientFilter, IngredientId, UpdateIngredient,
};
use crate::repository::IngredientRepository;

/// Default collection name
pub const COLLECTION: &str = "ingredients";

/// MongoDB implementation of the IngredientRepository
#[derive(Clone)]
pub struct MongoIngredientRepository {
    collection: Collection<Ingredient>,
}

impl MongoIngredientRepository {
    /// Create a repository over the `ingredients` collection of `db`
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoIngredientRepository::new(&client.database("cooking_recipe"));
    /// ```
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    /// Create a repository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<Ingredient>(collection_name),
        }
    }

    fn build_filter(filter: &IngredientFilter) -> Document {
        let mut doc = doc! {};

        if let Some(ref name) = filter.name {
            doc.insert("name", name.as_str());
        }

        if let Some(ref unit) = filter.unit {
            doc.insert("unit", unit.as_str());
        }

        doc
    }

    fn build_update(input: &UpdateIngredient) -> Document {
        doc! {
            "$set": {
                "name": input.name.as_str(),
                "unit": input.unit.as_str(),
            }
        }
    }
}

#[async_trait]
impl IngredientRepository for MongoIngredientRepository {
    #[instrument(skip(self))]
    async fn find_all(&self, filter: IngredientFilter) -> IngredientResult<Vec<Ingredient>> {
        let cursor = self.collection.find(Self::build_filter(&filter)).await?;
        let ingredients: Vec<Ingredient> = cursor.try_collect().await?;

        tracing::debug!(count = ingredients.len(), "Ingredients listed");
        Ok(ingredients)
    }

    #[instrument(skip(self, input), fields(ingredient_name = %input.name))]
    async fn insert(&self, input: CreateIngredient) -> IngredientResult<IngredientId> {
        let result = self
            .collection
            .clone_with_type::<CreateIngredient>()
            .insert_one(&input)
            .await?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(IngredientId::from)
            .ok_or_else(|| IngredientError::UnexpectedId(result.inserted_id.to_string()))?;

        tracing::info!(ingredient_id = %id, "Ingredient created successfully");
        Ok(id)
    }

    #[instrument(skip(self), fields(ingredient_id = %id))]
    async fn delete_by_id(&self, id: IngredientId) -> IngredientResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        let deleted = result.deleted_count == 1;
        if deleted {
            tracing::info!("Ingredient deleted successfully");
        } else {
            tracing::debug!("No ingredient matched for delete");
        }
        Ok(deleted)
    }

    #[instrument(skip(self), fields(ingredient_id = %id))]
    async fn find_by_id(&self, id: IngredientId) -> IngredientResult<Option<Ingredient>> {
        let ingredient = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(ingredient)
    }

    #[instrument(skip(self, input), fields(ingredient_id = %id))]
    async fn update_by_id(
        &self,
        id: IngredientId,
        input: UpdateIngredient,
    ) -> IngredientResult<bool> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, Self::build_update(&input))
            .await?;

        let modified = result.modified_count == 1;
        if modified {
            tracing::info!("Ingredient updated successfully");
        } else {
            tracing::debug!(
                matched = result.matched_count,
                "No ingredient modified by update"
            );
        }
        Ok(modified)
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: IngredientFilter) -> IngredientResult<u64> {
        let count = self
            .collection
            .count_documents(Self::build_filter(&filter))
            .await?;
        Ok(count)
    }
}
