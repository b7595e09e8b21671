use crate::backend::{self, Backend, SampleBackend};
use crate::cards::{annotate, RecipeCard};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::model::RecommendRequest;
use log::info;

/// Recommendations with every recipe matched against the returned pantry
#[derive(Debug, Clone)]
pub struct Recommendation {
    /// Pantry ingredient names the backend ranked with
    pub fridge: Vec<String>,
    pub cards: Vec<RecipeCard>,
}

/// Builder for configuring and running a recommendation query
#[derive(Default)]
pub struct RecommenderBuilder {
    query: Option<String>,
    user_id: Option<i64>,
    top_k: Option<u32>,
    boost: Option<f64>,
    config: Option<ClientConfig>,
    backend: Option<Box<dyn Backend>>,
}

impl RecommenderBuilder {
    /// Set the free-text query
    ///
    /// # Example
    /// ```
    /// use pantry_recipes::Recommender;
    ///
    /// let builder = Recommender::builder().query("상큼한 샐러드");
    /// ```
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the user whose pantry the backend ranks with
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set how many recipes to request
    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Set the ranking boost for recipes that use pantry ingredients
    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    /// Take defaults and the backend URL from `config` instead of
    /// [`ClientConfig::default`]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a specific backend instead of one built from the configuration
    pub fn backend(mut self, backend: Box<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Answer from the built-in sample recipes without any network access
    ///
    /// # Example
    /// ```
    /// # use pantry_recipes::Recommender;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = Recommender::builder()
    ///     .query("당근 요리")
    ///     .offline()
    ///     .build()
    ///     .await?;
    /// assert_eq!(result.cards[0].used_count(), 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn offline(self) -> Self {
        self.backend(Box::new(SampleBackend))
    }

    /// Run the query and annotate the results
    ///
    /// # Errors
    /// Returns `Error` if:
    /// - No query was set, or the query is blank
    /// - The backend rejects the request (`Error::Unauthenticated` on 422)
    /// - The backend cannot be reached and no fallback is configured
    pub async fn build(self) -> Result<Recommendation> {
        let query = self
            .query
            .ok_or_else(|| Error::Builder("No query specified. Use .query()".to_string()))?;
        if query.trim().is_empty() {
            return Err(Error::InvalidInput("query cannot be empty".to_string()));
        }

        let config = self.config.unwrap_or_default();
        let backend = match self.backend {
            Some(backend) => backend,
            None => backend::from_config(&config)?,
        };

        let request = RecommendRequest {
            user_id: self.user_id.unwrap_or(config.user_id),
            query: query.trim().to_string(),
            top_k: self.top_k.unwrap_or(config.top_k),
            boost: self.boost.unwrap_or(config.boost),
        };

        let response = backend.recommend(&request).await?;
        info!(
            "{} returned {} recipes for {:?}",
            backend.backend_name(),
            response.recommendations.len(),
            request.query
        );

        let cards = annotate(response.recommendations, &response.fridge);
        Ok(Recommendation {
            fridge: response.fridge,
            cards,
        })
    }
}

/// Main entry point for the builder API
pub struct Recommender;

impl Recommender {
    /// Creates a new builder for a recommendation query
    pub fn builder() -> RecommenderBuilder {
        RecommenderBuilder::default()
    }
}
