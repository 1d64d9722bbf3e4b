use database::mongodb::{check_health_detailed, list_collection_names, list_database_names};
use domain_ingredients::{CreateIngredient, Ingredient, IngredientFilter, UpdateIngredient};
use eyre::{Result, WrapErr};
use tracing::info;

use crate::cli::{Commands, DemoArgs};
use crate::state::AppState;

pub async fn run(command: Commands, state: &AppState) -> Result<()> {
    match command {
        Commands::Demo(args) => demo(state, args).await,

        Commands::Databases => {
            let names = list_database_names(&state.client).await?;
            println!("{:?}", names);
            Ok(())
        }

        Commands::Collections => {
            let names = list_collection_names(&state.db).await?;
            println!("{:?}", names);
            Ok(())
        }

        Commands::List { name, unit } => {
            let filter = IngredientFilter { name, unit };
            let ingredients = state.ingredients.list_ingredients(filter.clone()).await?;
            print_ingredients(&ingredients);

            let total = state.ingredients.count_ingredients(filter).await?;
            println!("{} ingredient(s)", total);
            Ok(())
        }

        Commands::Add(fields) => {
            let id = state
                .ingredients
                .add_ingredient(CreateIngredient::new(fields.name, fields.unit))
                .await?;
            println!("{}", id);
            Ok(())
        }

        Commands::Get { id } => {
            let ingredient = state.ingredients.get_ingredient(&id).await?;
            println!("{}", ingredient);
            Ok(())
        }

        Commands::Update { id, fields } => {
            let updated = state
                .ingredients
                .update_ingredient(&id, UpdateIngredient::new(fields.name, fields.unit))
                .await?;
            report(updated, "Update data successfully", "Nothing was modified");
            Ok(())
        }

        Commands::Delete { id } => {
            let deleted = state.ingredients.delete_ingredient(&id).await?;
            report(deleted, "delete item successfully", "Nothing was deleted");
            Ok(())
        }
    }
}

/// The full walkthrough, one status line per step
async fn demo(state: &AppState, args: DemoArgs) -> Result<()> {
    let health = check_health_detailed(&state.client).await;
    if !health.healthy {
        eyre::bail!(
            "MongoDB ping failed: {}",
            health.message.unwrap_or_default()
        );
    }
    println!(
        "connect to database successfully ({} ms)",
        health.response_time_ms
    );

    let databases = list_database_names(&state.client)
        .await
        .wrap_err("Failed to list databases")?;
    println!("{:?}", databases);

    let collections = list_collection_names(&state.db)
        .await
        .wrap_err_with(|| format!("Failed to list collections of {}", state.db.name()))?;
    println!("{:?}", collections);

    let ingredients = state
        .ingredients
        .list_ingredients(IngredientFilter::all())
        .await
        .wrap_err_with(|| format!("Failed to list {}", state.config.collection))?;
    print_ingredients(&ingredients);

    let fields = CreateIngredient::new(args.name, args.unit);
    let inserted_id = state
        .ingredients
        .add_ingredient(fields.clone())
        .await
        .wrap_err("Failed to insert ingredient")?;
    println!("{}", inserted_id);

    if state.ingredients.delete_ingredient(&inserted_id).await? {
        println!("delete item successfully");
    }

    let Some(target) = args.id.or_else(|| ingredients.first().map(|i| i.id.to_hex())) else {
        info!("Collection is empty and no --id given; skipping lookup and update");
        return Ok(());
    };

    println!("Get ingredient by ID");
    let ingredient = state
        .ingredients
        .get_ingredient(&target)
        .await
        .wrap_err_with(|| format!("Failed to get ingredient {}", target))?;
    println!("{}", ingredient);

    let updated = state
        .ingredients
        .update_ingredient(&target, UpdateIngredient::from(fields))
        .await
        .wrap_err_with(|| format!("Failed to update ingredient {}", target))?;
    if updated {
        println!("Update data successfully");
    } else {
        info!(ingredient_id = %target, "Update left the ingredient unchanged");
    }

    Ok(())
}

fn print_ingredients(ingredients: &[Ingredient]) {
    if ingredients.is_empty() {
        println!("[]");
    }
    for ingredient in ingredients {
        println!("{}", ingredient);
    }
}

fn report(done: bool, success: &str, noop: &str) {
    if done {
        println!("{}", success);
    } else {
        println!("{}", noop);
    }
}
