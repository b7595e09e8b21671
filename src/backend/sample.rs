use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::model::{
    NewPantryIngredient, NewUser, PantryIngredient, Recipe, RecommendRequest,
    RecommendationResponse, User,
};
use async_trait::async_trait;
use log::debug;

/// Pantry served with the sample recommendations
pub const SAMPLE_FRIDGE: [&str; 4] = ["당근", "두부", "양파", "계란"];

fn recipe(id: i64, name: &str, category: &str, method: &str, description: &str, reason: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        category: category.to_string(),
        method: method.to_string(),
        description: description.to_string(),
        reason: reason.to_string(),
    }
}

/// Built-in recommendations shown when the backend cannot be reached
pub fn sample_recommendations() -> RecommendationResponse {
    RecommendationResponse {
        fridge: SAMPLE_FRIDGE.iter().map(|s| s.to_string()).collect(),
        recommendations: vec![
            recipe(
                1,
                "당근 볶음밥",
                "밥",
                "볶기",
                "당근 2개, 밥 2공기, 계란 2개, 양파 1/2개, 간장 2큰술, 참기름 1큰술",
                "냉장고에 있는 당근과 계란을 활용한 영양만점 볶음밥입니다.",
            ),
            recipe(
                2,
                "두부 당근 조림",
                "반찬",
                "끓이기",
                "두부 1모, 당근 1개, 양파 1/2개, 간장 3큰술, 설탕 1큰술, 물 1컵",
                "부드러운 두부와 달콤한 당근이 어우러진 건강한 반찬입니다.",
            ),
            recipe(
                3,
                "당근 계란말이",
                "반찬",
                "굽기",
                "계란 4개, 당근 1/2개, 소금 약간, 식용유 2큰술",
                "아이들이 좋아하는 달콤한 당근이 들어간 계란말이입니다.",
            ),
        ],
    }
}

/// Offline backend: answers recommendations from [`sample_recommendations`]
/// and refuses everything else.
#[derive(Debug, Default)]
pub struct SampleBackend;

impl SampleBackend {
    fn unavailable(operation: &str) -> Error {
        Error::Unavailable(format!("{} needs a running backend", operation))
    }
}

#[async_trait]
impl Backend for SampleBackend {
    fn backend_name(&self) -> &str {
        "sample"
    }

    async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendationResponse> {
        debug!("Serving sample recommendations for {:?}", request.query);
        let mut response = sample_recommendations();
        response.recommendations.truncate(request.top_k as usize);
        Ok(response)
    }

    async fn list_ingredients(&self, _user_id: i64) -> Result<Vec<PantryIngredient>> {
        Err(Self::unavailable("listing pantry ingredients"))
    }

    async fn add_ingredient(&self, _ingredient: &NewPantryIngredient) -> Result<PantryIngredient> {
        Err(Self::unavailable("adding a pantry ingredient"))
    }

    async fn remove_ingredient(&self, _user_id: i64, _name: &str) -> Result<()> {
        Err(Self::unavailable("removing a pantry ingredient"))
    }

    async fn register(&self, _user: &NewUser) -> Result<User> {
        Err(Self::unavailable("registration"))
    }

    async fn login(&self, _user: &NewUser) -> Result<User> {
        Err(Self::unavailable("login"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::find_matches;

    fn request(top_k: u32) -> RecommendRequest {
        RecommendRequest {
            user_id: 1,
            query: "당근".to_string(),
            top_k,
            boost: 0.2,
        }
    }

    #[tokio::test]
    async fn test_recommend_returns_samples() {
        let response = SampleBackend.recommend(&request(10)).await.unwrap();
        assert_eq!(response.fridge, SAMPLE_FRIDGE);
        assert_eq!(response.recommendations.len(), 3);
        assert_eq!(response.recommendations[0].name, "당근 볶음밥");
    }

    #[tokio::test]
    async fn test_recommend_honors_top_k() {
        let response = SampleBackend.recommend(&request(1)).await.unwrap();
        assert_eq!(response.recommendations.len(), 1);
    }

    #[tokio::test]
    async fn test_other_operations_unavailable() {
        assert!(matches!(
            SampleBackend.list_ingredients(1).await,
            Err(Error::Unavailable(_))
        ));
        assert!(matches!(
            SampleBackend.remove_ingredient(1, "당근").await,
            Err(Error::Unavailable(_))
        ));
    }

    #[test]
    fn test_sample_match_counts() {
        let response = sample_recommendations();
        let counts: Vec<usize> = response
            .recommendations
            .iter()
            .map(|r| find_matches(&r.description, &response.fridge).len())
            .collect();
        assert_eq!(counts, vec![3, 3, 2]);
    }
}
