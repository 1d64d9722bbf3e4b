use async_trait::async_trait;

use crate::error::IngredientResult;
use crate::models::{
    CreateIngredient, Ingredient, IngredientFilter, IngredientId, UpdateIngredient,
};

/// Repository trait for Ingredient persistence
///
/// Ids are already parsed here; string validation lives in the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// List ingredients matching a filter (empty filter = all)
    async fn find_all(&self, filter: IngredientFilter) -> IngredientResult<Vec<Ingredient>>;

    /// Insert a new ingredient and return its assigned id
    async fn insert(&self, input: CreateIngredient) -> IngredientResult<IngredientId>;

    /// Delete by id; `true` only if exactly one document was removed
    async fn delete_by_id(&self, id: IngredientId) -> IngredientResult<bool>;

    /// Get an ingredient by id
    async fn find_by_id(&self, id: IngredientId) -> IngredientResult<Option<Ingredient>>;

    /// Set name and unit; `true` only if exactly one document was modified
    async fn update_by_id(
        &self,
        id: IngredientId,
        input: UpdateIngredient,
    ) -> IngredientResult<bool>;

    /// Count ingredients matching a filter
    async fn count(&self, filter: IngredientFilter) -> IngredientResult<u64>;
}
