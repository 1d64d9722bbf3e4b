use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IngredientError;

/// Ingredient identifier - the document's `_id`
///
/// Rendered as a 24-character lowercase hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(ObjectId);

impl IngredientId {
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl FromStr for IngredientId {
    type Err = IngredientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| IngredientError::InvalidId(s.to_string()))
    }
}

impl From<ObjectId> for IngredientId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<IngredientId> for Bson {
    fn from(id: IngredientId) -> Self {
        Bson::ObjectId(id.0)
    }
}

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

/// Ingredient entity - a document of the `ingredients` collection
///
/// Empty `name`/`unit` are omitted from stored documents and read back as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: IngredientId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unit: String,
    /// Version counter maintained by whichever ODM wrote the document; never written here
    #[serde(rename = "__v", default, skip_serializing_if = "is_zero")]
    pub version: i64,
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} name={:?} unit={:?}", self.id, self.name, self.unit)
    }
}

/// DTO for inserting a new ingredient; the `_id` is assigned on insert
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateIngredient {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unit: String,
}

impl CreateIngredient {
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
        }
    }
}

/// DTO for updating an ingredient. Both fields are always written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateIngredient {
    pub name: String,
    pub unit: String,
}

impl UpdateIngredient {
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
        }
    }
}

impl From<CreateIngredient> for UpdateIngredient {
    fn from(input: CreateIngredient) -> Self {
        Self {
            name: input.name,
            unit: input.unit,
        }
    }
}

/// Query criteria for listing ingredients. Unset fields match anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientFilter {
    /// Exact name match
    pub name: Option<String>,
    /// Exact unit match
    pub unit: Option<String>,
}

impl IngredientFilter {
    /// Matches every ingredient
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.unit.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    #[test]
    fn test_parse_valid_id() {
        let id: IngredientId = "60696ba7f08a5d110bcdfb00".parse().unwrap();
        assert_eq!(id.to_hex(), "60696ba7f08a5d110bcdfb00");
        assert_eq!(id.to_string(), "60696ba7f08a5d110bcdfb00");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let result = "60696ba7f08a5d110bcdfb".parse::<IngredientId>();
        assert!(matches!(result, Err(IngredientError::InvalidId(ref s)) if s == "60696ba7f08a5d110bcdfb"));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let result = "zzzzzzzzzzzzzzzzzzzzzzzz".parse::<IngredientId>();
        assert!(matches!(result, Err(IngredientError::InvalidId(_))));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!("".parse::<IngredientId>().is_err());
    }

    #[test]
    fn test_id_into_bson_is_object_id() {
        let oid = ObjectId::new();
        let bson: Bson = IngredientId::from(oid).into();
        assert_eq!(bson, Bson::ObjectId(oid));
    }

    #[test]
    fn test_create_ingredient_omits_empty_fields() {
        let doc = to_document(&CreateIngredient::new("FISH", "")).unwrap();
        assert_eq!(doc, doc! { "name": "FISH" });
    }

    #[test]
    fn test_decode_full_document() {
        let oid = ObjectId::new();
        let ingredient: Ingredient = from_document(doc! {
            "_id": oid,
            "name": "FISH",
            "unit": "Kilo",
            "__v": 3,
        })
        .unwrap();

        assert_eq!(ingredient.id.as_object_id(), oid);
        assert_eq!(ingredient.name, "FISH");
        assert_eq!(ingredient.unit, "Kilo");
        assert_eq!(ingredient.version, 3);
    }

    #[test]
    fn test_decode_sparse_document() {
        let oid = ObjectId::new();
        let ingredient: Ingredient = from_document(doc! { "_id": oid }).unwrap();
        assert!(ingredient.name.is_empty());
        assert!(ingredient.unit.is_empty());
        assert_eq!(ingredient.version, 0);
    }

    #[test]
    fn test_decode_rejects_wrong_field_type() {
        let result = from_document::<Ingredient>(doc! { "_id": ObjectId::new(), "unit": 5 });
        assert!(result.is_err());
    }

    #[test]
    fn test_display_ingredient() {
        let ingredient = Ingredient {
            id: "60696ba7f08a5d110bcdfb00".parse().unwrap(),
            name: "FISH".to_string(),
            unit: "Kilo".to_string(),
            version: 0,
        };
        assert_eq!(
            ingredient.to_string(),
            r#"60696ba7f08a5d110bcdfb00 name="FISH" unit="Kilo""#
        );
    }

    #[test]
    fn test_filter_builders() {
        assert!(IngredientFilter::all().is_empty());
        let filter = IngredientFilter::all().with_name("FISH").with_unit("Kilo");
        assert_eq!(filter.name.as_deref(), Some("FISH"));
        assert_eq!(filter.unit.as_deref(), Some("Kilo"));
        assert!(!filter.is_empty());
    }
}
