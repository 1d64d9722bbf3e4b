use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cooking-recipe")]
#[command(about = "Browse the cooking_recipe MongoDB database and manage its ingredients")]
pub struct Cli {
    /// Defaults to `demo`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ping, list databases and collections, then insert/delete/find/update an ingredient
    Demo(DemoArgs),

    /// List database names
    Databases,

    /// List collection names of the configured database
    Collections,

    /// List ingredients, optionally filtered
    List {
        /// Only ingredients with exactly this name
        #[arg(long)]
        name: Option<String>,

        /// Only ingredients with exactly this unit
        #[arg(long)]
        unit: Option<String>,
    },

    /// Insert an ingredient and print its id
    Add(IngredientArgs),

    /// Print one ingredient
    Get {
        /// 24-character hex id
        id: String,
    },

    /// Overwrite an ingredient's name and unit
    Update {
        /// 24-character hex id
        id: String,

        #[command(flatten)]
        fields: IngredientArgs,
    },

    /// Delete an ingredient
    Delete {
        /// 24-character hex id
        id: String,
    },
}

#[derive(Args, Clone, Debug)]
pub struct IngredientArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub unit: String,
}

#[derive(Args, Clone, Debug)]
pub struct DemoArgs {
    /// Ingredient to look up and update. Defaults to the first one listed.
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long, default_value = "FISH")]
    pub name: String,

    #[arg(long, default_value = "Kilo")]
    pub unit: String,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            id: None,
            name: "FISH".to_string(),
            unit: "Kilo".to_string(),
        }
    }
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Demo(DemoArgs::default())
    }
}
