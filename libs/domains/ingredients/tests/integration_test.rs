//! Integration tests for the Ingredients domain
//!
//! These tests use a real MongoDB via testcontainers to ensure:
//! - Inserted documents read back with the same fields
//! - Delete and update report whether exactly one document changed
//! - Decode failures surface as errors instead of partial results

use domain_ingredients::{
    CreateIngredient, IngredientError, IngredientFilter, IngredientService,
    MongoIngredientRepository, UpdateIngredient,
};
use mongodb::bson::{Document, doc, oid::ObjectId};
use test_utils::{TestDataBuilder, TestMongo, assertions::*};

async fn service_for(
    mongo: &TestMongo,
    test_name: &str,
) -> (IngredientService<MongoIngredientRepository>, mongodb::Database) {
    let builder = TestDataBuilder::from_test_name(test_name);
    let db = mongo.database(&builder.database_name());
    let service = IngredientService::new(MongoIngredientRepository::new(&db));
    (service, db)
}

// ============================================================================
// Repository / service round trips
// ============================================================================

#[tokio::test]
async fn test_insert_then_get_returns_same_fields() {
    let mongo = TestMongo::new().await;
    let (service, _db) = service_for(&mongo, "insert_then_get").await;

    let id = service
        .add_ingredient(CreateIngredient::new("FISH", "Kilo"))
        .await
        .unwrap();
    assert_object_id_hex(&id, "inserted id");

    let ingredient = service.get_ingredient(&id).await.unwrap();
    assert_eq!(ingredient.id.to_hex(), id);
    assert_eq!(ingredient.name, "FISH");
    assert_eq!(ingredient.unit, "Kilo");
    assert_eq!(ingredient.version, 0);
}

#[tokio::test]
async fn test_delete_twice_returns_true_then_false() {
    let mongo = TestMongo::new().await;
    let (service, _db) = service_for(&mongo, "delete_twice").await;

    let id = service
        .add_ingredient(CreateIngredient::new("EGG", "Piece"))
        .await
        .unwrap();

    assert!(service.delete_ingredient(&id).await.unwrap());
    assert!(!service.delete_ingredient(&id).await.unwrap());
}

#[tokio::test]
async fn test_update_existing_changes_fields_keeps_id() {
    let mongo = TestMongo::new().await;
    let (service, _db) = service_for(&mongo, "update_existing").await;

    let id = service
        .add_ingredient(CreateIngredient::new("FISH", "Kilo"))
        .await
        .unwrap();

    let updated = service
        .update_ingredient(&id, UpdateIngredient::new("SALMON", "Gram"))
        .await
        .unwrap();
    assert!(updated);

    let ingredient = service.get_ingredient(&id).await.unwrap();
    assert_eq!(ingredient.id.to_hex(), id);
    assert_eq!(ingredient.name, "SALMON");
    assert_eq!(ingredient.unit, "Gram");
}

#[tokio::test]
async fn test_update_leaves_version_counter_alone() {
    let mongo = TestMongo::new().await;
    let (service, db) = service_for(&mongo, "update_version").await;

    let oid = ObjectId::new();
    db.collection::<Document>("ingredients")
        .insert_one(doc! { "_id": oid, "name": "RICE", "unit": "Cup", "__v": 4 })
        .await
        .unwrap();

    let id = oid.to_hex();
    assert!(
        service
            .update_ingredient(&id, UpdateIngredient::new("RICE", "Gram"))
            .await
            .unwrap()
    );

    let ingredient = service.get_ingredient(&id).await.unwrap();
    assert_eq!(ingredient.unit, "Gram");
    assert_eq!(ingredient.version, 4);
}

#[tokio::test]
async fn test_missing_id_mutations_return_false() {
    let mongo = TestMongo::new().await;
    let (service, _db) = service_for(&mongo, "missing_id").await;

    let absent = ObjectId::new().to_hex();

    assert!(!service.delete_ingredient(&absent).await.unwrap());
    assert!(
        !service
            .update_ingredient(&absent, UpdateIngredient::new("FISH", "Kilo"))
            .await
            .unwrap()
    );
    assert!(matches!(
        service.get_ingredient(&absent).await,
        Err(IngredientError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_malformed_id_is_rejected() {
    let mongo = TestMongo::new().await;
    let (service, _db) = service_for(&mongo, "malformed_id").await;

    assert!(matches!(
        service.delete_ingredient("not-an-id").await,
        Err(IngredientError::InvalidId(_))
    ));
    assert!(matches!(
        service.get_ingredient("60696ba7").await,
        Err(IngredientError::InvalidId(_))
    ));
}

#[tokio::test]
async fn test_find_all_matches_collection_size() {
    let mongo = TestMongo::new().await;
    let (service, _db) = service_for(&mongo, "find_all_size").await;
    let builder = TestDataBuilder::from_test_name("find_all_size");

    for suffix in ["a", "b", "c"] {
        service
            .add_ingredient(CreateIngredient::new(builder.name("ingredient", suffix), "Kilo"))
            .await
            .unwrap();
    }
    service
        .add_ingredient(CreateIngredient::new(builder.name("ingredient", "d"), "Gram"))
        .await
        .unwrap();

    let all = service.list_ingredients(IngredientFilter::all()).await.unwrap();
    let total = service.count_ingredients(IngredientFilter::all()).await.unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all.len() as u64, total);

    let kilos = service
        .list_ingredients(IngredientFilter::all().with_unit("Kilo"))
        .await
        .unwrap();
    assert_eq!(kilos.len(), 3);

    let one = service
        .list_ingredients(IngredientFilter::all().with_name(builder.name("ingredient", "d")))
        .await
        .unwrap();
    assert_eq!(assert_some(one.first(), "named ingredient").unit, "Gram");
}

#[tokio::test]
async fn test_empty_fields_are_not_stored() {
    let mongo = TestMongo::new().await;
    let (service, db) = service_for(&mongo, "empty_fields").await;

    let id = service
        .add_ingredient(CreateIngredient::new("WATER", ""))
        .await
        .unwrap();

    let raw = db
        .collection::<Document>("ingredients")
        .find_one(doc! { "_id": ObjectId::parse_str(&id).unwrap() })
        .await
        .unwrap()
        .unwrap();
    assert!(raw.contains_key("name"));
    assert!(!raw.contains_key("unit"));

    let ingredient = service.get_ingredient(&id).await.unwrap();
    assert_eq!(ingredient.unit, "");
}

#[tokio::test]
async fn test_find_all_reports_decode_mismatch() {
    let mongo = TestMongo::new().await;
    let (service, db) = service_for(&mongo, "decode_mismatch").await;

    db.collection::<Document>("ingredients")
        .insert_one(doc! { "name": 42, "unit": "Kilo" })
        .await
        .unwrap();

    let result = service.list_ingredients(IngredientFilter::all()).await;
    assert!(matches!(result, Err(IngredientError::Decode(_))));
}

// ============================================================================
// End-to-end
// ============================================================================

#[tokio::test]
async fn test_fish_lifecycle() {
    let mongo = TestMongo::new().await;
    let (service, _db) = service_for(&mongo, "fish_lifecycle").await;

    let id = service
        .add_ingredient(CreateIngredient::new("FISH", "Kilo"))
        .await
        .unwrap();

    let fish = service.get_ingredient(&id).await.unwrap();
    assert_eq!((fish.name.as_str(), fish.unit.as_str()), ("FISH", "Kilo"));

    assert!(service.delete_ingredient(&id).await.unwrap());

    match service.get_ingredient(&id).await {
        Err(IngredientError::NotFound(missing)) => assert_eq!(missing.to_hex(), id),
        other => panic!("expected NotFound, got {:?}", other),
    }
}
