use crate::backend::Backend;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::model::{
    NewPantryIngredient, NewUser, PantryIngredient, RecommendRequest, RecommendationResponse,
    User,
};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Talks to the backend over HTTP/JSON
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_base_url(&config.backend_url, Some(Duration::from_secs(config.timeout)))
    }

    pub fn with_base_url(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pantry-recipes/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let backend = Self {
            client,
            base_url: base_url.to_string(),
        };
        // Validate the base URL up front
        backend.endpoint(&[])?;
        Ok(backend)
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    /// An empty last segment produces a trailing slash.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::InvalidInput(format!("backend URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidInput(format!("backend URL {} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Map error statuses onto [`Error`]; 422 means the caller is not logged in.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNPROCESSABLE_ENTITY {
        return Err(Error::Unauthenticated);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::Status {
        status: status.as_u16(),
        body,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    let body = response.text().await?;
    debug!("backend response: {}", body);
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl Backend for HttpBackend {
    fn backend_name(&self) -> &str {
        "http"
    }

    async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendationResponse> {
        let url = self.endpoint(&["api", "rag", "recommend"])?;
        debug!("POST {} query={:?} top_k={}", url, request.query, request.top_k);
        let response = self
            .client
            .post(url)
            .header("accept", "application/json")
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    async fn list_ingredients(&self, user_id: i64) -> Result<Vec<PantryIngredient>> {
        let user_id = user_id.to_string();
        let url = self.endpoint(&["api", "user_ingredients", user_id.as_str()])?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn add_ingredient(&self, ingredient: &NewPantryIngredient) -> Result<PantryIngredient> {
        let url = self.endpoint(&["api", "user_ingredients", ""])?;
        debug!("POST {} name={:?}", url, ingredient.name);
        let response = self.client.post(url).json(ingredient).send().await?;
        read_json(response).await
    }

    async fn remove_ingredient(&self, user_id: i64, name: &str) -> Result<()> {
        let user_id = user_id.to_string();
        let url = self.endpoint(&["api", "user_ingredients", user_id.as_str(), name])?;
        debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn register(&self, user: &NewUser) -> Result<User> {
        let url = self.endpoint(&["api", "users", ""])?;
        debug!("POST {} username={:?}", url, user.username);
        let response = self.client.post(url).json(user).send().await?;
        read_json(response).await
    }

    async fn login(&self, user: &NewUser) -> Result<User> {
        let url = self.endpoint(&["api", "users", "login"])?;
        debug!("POST {} username={:?}", url, user.username);
        let response = self.client.post(url).json(user).send().await?;
        read_json(response).await
    }
}
