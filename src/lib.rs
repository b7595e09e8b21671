//! Recipe recommendations with the user's pantry ingredients highlighted.
//!
//! The [`matcher`] module decides which tokens of a recipe's ingredient list
//! refer to pantry ingredients. The [`backend`] module talks to the external
//! recommendation and pantry-storage service.

pub mod backend;
pub mod builder;
pub mod cards;
pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod pantry;

pub use backend::{Backend, FallbackBackend, HttpBackend, SampleBackend};
pub use builder::{Recommendation, Recommender, RecommenderBuilder};
pub use cards::RecipeCard;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use matcher::{
    find_matches, highlight, highlight_marked, normalize, render_escaped, render_raw, Match,
    Segment,
};
pub use model::{PantryIngredient, Recipe, RecommendationResponse, User};
pub use pantry::Pantry;

use model::NewPantryIngredient;

/// Recommend recipes for `query` using the configured backend
pub async fn recommend(query: &str) -> Result<Recommendation> {
    let config = ClientConfig::load()?;
    Recommender::builder().query(query).config(config).build().await
}

/// Fetch a user's pantry from the backend
pub async fn load_pantry(backend: &dyn Backend, user_id: i64) -> Result<Pantry> {
    Ok(Pantry::from(backend.list_ingredients(user_id).await?))
}

/// Validate `name` against `pantry`, store it on the backend, then record it locally
pub async fn add_to_pantry(
    backend: &dyn Backend,
    pantry: &mut Pantry,
    user_id: i64,
    name: &str,
    quantity: f64,
) -> Result<PantryIngredient> {
    let mut staged = pantry.clone();
    let name = staged.add(name, quantity)?.name.clone();

    let stored = backend
        .add_ingredient(&NewPantryIngredient {
            user_id,
            name,
            quantity,
        })
        .await?;

    *pantry = staged;
    Ok(stored)
}

/// Remove `name` on the backend, then locally
pub async fn remove_from_pantry(
    backend: &dyn Backend,
    pantry: &mut Pantry,
    user_id: i64,
    name: &str,
) -> Result<()> {
    backend.remove_ingredient(user_id, name).await?;
    pantry.remove(name);
    Ok(())
}
