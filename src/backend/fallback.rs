use crate::backend::{sample_recommendations, Backend};
use crate::config::FallbackConfig;
use crate::error::{Error, Result};
use crate::model::{
    NewPantryIngredient, NewUser, PantryIngredient, RecommendRequest, RecommendationResponse,
    User,
};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::time::Duration;
use tokio::time::sleep;

/// Retries recommendations against a primary backend and serves the sample
/// recipes once every attempt has failed. Pantry and user operations go to
/// the primary only.
pub struct FallbackBackend {
    primary: Box<dyn Backend>,
    retry_attempts: u32,
    retry_delay_ms: u64,
}

impl FallbackBackend {
    pub fn new(primary: Box<dyn Backend>, config: &FallbackConfig) -> Self {
        FallbackBackend {
            primary,
            retry_attempts: config.retry_attempts.max(1),
            retry_delay_ms: config.retry_delay_ms,
        }
    }

    /// Linear backoff, saturating for very large configured delays
    fn retry_delay(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.retry_delay_ms.saturating_mul(u64::from(attempt)))
    }

    async fn recommend_with_retry(&self, request: &RecommendRequest) -> Result<RecommendationResponse> {
        let mut attempt = 1;
        loop {
            debug!(
                "Requesting recommendations from {} (attempt {}/{})",
                self.primary.backend_name(),
                attempt,
                self.retry_attempts
            );

            match self.primary.recommend(request).await {
                Ok(response) => return Ok(response),
                // 422 is never retried
                Err(Error::Unauthenticated) => return Err(Error::Unauthenticated),
                Err(e) => {
                    warn!(
                        "Backend {} failed (attempt {}/{}): {}",
                        self.primary.backend_name(),
                        attempt,
                        self.retry_attempts,
                        e
                    );
                    if attempt >= self.retry_attempts {
                        return Err(e);
                    }
                }
            }

            let delay = self.retry_delay(attempt);
            debug!("Waiting {:?} before retry", delay);
            sleep(delay).await;
            attempt += 1;
        }
    }
}

#[async_trait]
impl Backend for FallbackBackend {
    fn backend_name(&self) -> &str {
        "fallback"
    }

    async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendationResponse> {
        match self.recommend_with_retry(request).await {
            Err(Error::Unauthenticated) => Err(Error::Unauthenticated),
            Err(e) => {
                info!("Serving sample recommendations after backend failure: {}", e);
                let mut response = sample_recommendations();
                response.recommendations.truncate(request.top_k as usize);
                Ok(response)
            }
            ok => ok,
        }
    }

    async fn list_ingredients(&self, user_id: i64) -> Result<Vec<PantryIngredient>> {
        self.primary.list_ingredients(user_id).await
    }

    async fn add_ingredient(&self, ingredient: &NewPantryIngredient) -> Result<PantryIngredient> {
        self.primary.add_ingredient(ingredient).await
    }

    async fn remove_ingredient(&self, user_id: i64, name: &str) -> Result<()> {
        self.primary.remove_ingredient(user_id, name).await
    }

    async fn register(&self, user: &NewUser) -> Result<User> {
        self.primary.register(user).await
    }

    async fn login(&self, user: &NewUser) -> Result<User> {
        self.primary.login(user).await
    }
}
