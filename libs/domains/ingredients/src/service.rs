//! Ingredient Service - the public CRUD operations
//!
//! Ids arrive as strings and are parsed here, so a malformed id is rejected
//! before the repository (and the server) is touched.

use std::sync::Arc;
use tracing::instrument;

use crate::error::{IngredientError, IngredientResult};
use crate::models::{
    CreateIngredient, Ingredient, IngredientFilter, IngredientId, UpdateIngredient,
};
use crate::repository::IngredientRepository;

pub struct IngredientService<R: IngredientRepository> {
    repository: Arc<R>,
}

impl<R: IngredientRepository> Clone for IngredientService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: IngredientRepository> IngredientService<R> {
    /// Create a new IngredientService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List ingredients matching `filter`
    #[instrument(skip(self))]
    pub async fn list_ingredients(
        &self,
        filter: IngredientFilter,
    ) -> IngredientResult<Vec<Ingredient>> {
        self.repository.find_all(filter).await
    }

    /// Insert an ingredient, returning its id as hex
    #[instrument(skip(self, input), fields(ingredient_name = %input.name))]
    pub async fn add_ingredient(&self, input: CreateIngredient) -> IngredientResult<String> {
        let id = self.repository.insert(input).await?;
        Ok(id.to_hex())
    }

    /// Delete an ingredient. `Ok(false)` when nothing matched.
    #[instrument(skip(self))]
    pub async fn delete_ingredient(&self, id: &str) -> IngredientResult<bool> {
        let id: IngredientId = id.parse()?;
        self.repository.delete_by_id(id).await
    }

    /// Get an ingredient by id
    #[instrument(skip(self))]
    pub async fn get_ingredient(&self, id: &str) -> IngredientResult<Ingredient> {
        let id: IngredientId = id.parse()?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(IngredientError::NotFound(id))
    }

    /// Overwrite name and unit. `Ok(false)` when nothing was modified.
    #[instrument(skip(self, input))]
    pub async fn update_ingredient(
        &self,
        id: &str,
        input: UpdateIngredient,
    ) -> IngredientResult<bool> {
        let id: IngredientId = id.parse()?;
        self.repository.update_by_id(id, input).await
    }

    /// Count ingredients matching `filter`
    #[instrument(skip(self))]
    pub async fn count_ingredients(&self, filter: IngredientFilter) -> IngredientResult<u64> {
        self.repository.count(filter).await
    }
}
