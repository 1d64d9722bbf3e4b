use mongodb::error::ErrorKind;
use thiserror::Error;

use crate::models::IngredientId;

#[derive(Debug, Error)]
pub enum IngredientError {
    #[error("Invalid ingredient id '{0}': expected a 24-character hex string")]
    InvalidId(String),

    #[error("Ingredient not found: {0}")]
    NotFound(IngredientId),

    #[error("Failed to decode ingredient document: {0}")]
    Decode(String),

    #[error("Inserted document has a non-ObjectId _id: {0}")]
    UnexpectedId(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type IngredientResult<T> = Result<T, IngredientError>;

impl From<mongodb::error::Error> for IngredientError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::BsonDeserialization(e) => IngredientError::Decode(e.to_string()),
            _ => IngredientError::Database(err.to_string()),
        }
    }
}

impl From<mongodb::bson::de::Error> for IngredientError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        IngredientError::Decode(err.to_string())
    }
}
