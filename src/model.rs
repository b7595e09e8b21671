use serde::{Deserialize, Serialize};

/// A recommended recipe as served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub method: String,
    /// Comma-separated ingredient list, e.g. "당근 2개, 밥 2공기"
    #[serde(default)]
    pub description: String,
    /// Why the backend picked this recipe
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecommendationResponse {
    /// Pantry ingredient names the backend used for the query
    #[serde(default)]
    pub fridge: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<Recipe>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendRequest {
    pub user_id: i64,
    pub query: String,
    pub top_k: u32,
    pub boost: f64,
}

/// An ingredient the user has on hand.
///
/// The backend stores quantities as floats, so whole numbers arrive as `2.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryIngredient {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPantryIngredient {
    pub user_id: i64,
    pub name: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Credentials used both to register and to log in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

pub(crate) fn default_quantity() -> f64 {
    1.0
}
