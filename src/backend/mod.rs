mod fallback;
mod http;
mod sample;

pub use fallback::FallbackBackend;
pub use http::HttpBackend;
pub use sample::{sample_recommendations, SampleBackend, SAMPLE_FRIDGE};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::{
    NewPantryIngredient, NewUser, PantryIngredient, RecommendRequest, RecommendationResponse,
    User,
};
use async_trait::async_trait;

/// The external recommendation and pantry-storage service
#[async_trait]
pub trait Backend: Send + Sync {
    /// Name used in log messages (e.g., "http", "sample")
    fn backend_name(&self) -> &str;

    /// Ask for recipes matching `request.query`, ranked with the user's pantry
    async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendationResponse>;

    async fn list_ingredients(&self, user_id: i64) -> Result<Vec<PantryIngredient>>;

    async fn add_ingredient(&self, ingredient: &NewPantryIngredient) -> Result<PantryIngredient>;

    /// Delete a pantry ingredient by exact name
    async fn remove_ingredient(&self, user_id: i64, name: &str) -> Result<()>;

    async fn register(&self, user: &NewUser) -> Result<User>;

    async fn login(&self, user: &NewUser) -> Result<User>;
}

/// Build the backend described by `config`: plain HTTP, or HTTP wrapped in the
/// sample-data fallback when `fallback.enabled` is set.
pub fn from_config(config: &ClientConfig) -> Result<Box<dyn Backend>> {
    let http = HttpBackend::new(config)?;
    if config.fallback.enabled {
        Ok(Box::new(FallbackBackend::new(Box::new(http), &config.fallback)))
    } else {
        Ok(Box::new(http))
    }
}
