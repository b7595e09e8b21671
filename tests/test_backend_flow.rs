use mockito::Matcher;
use pantry_recipes::backend::{self, HttpBackend};
use pantry_recipes::{
    add_to_pantry, load_pantry, remove_from_pantry, ClientConfig, Error, Recommender,
};
use serde_json::json;

fn config_for(server: &mockito::Server) -> ClientConfig {
    ClientConfig {
        backend_url: server.url(),
        ..Default::default()
    }
}

const RECOMMEND_BODY: &str = r#"{
    "fridge": ["두부", "양파"],
    "recommendations": [
        {
            "id": 2,
            "name": "두부 당근 조림",
            "category": "반찬",
            "method": "끓이기",
            "description": "두부 1모, 당근 1개, 양파 1/2개, 간장 3큰술",
            "reason": "부드러운 두부"
        },
        {
            "id": 11,
            "name": "미역국",
            "category": "국",
            "method": "끓이기",
            "description": "미역 20g, 소고기 100g, 국간장 2큰술",
            "reason": "따뜻한 국물"
        }
    ]
}"#;

#[tokio::test]
async fn test_recommend_through_builder() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/rag/recommend")
        .match_body(Matcher::PartialJson(json!({
            "user_id": 7,
            "query": "조림",
            "top_k": 2
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RECOMMEND_BODY)
        .create_async()
        .await;

    let result = Recommender::builder()
        .query("  조림 ")
        .user_id(7)
        .top_k(2)
        .config(config_for(&server))
        .build()
        .await
        .unwrap();

    assert_eq!(result.fridge, vec!["두부", "양파"]);
    assert_eq!(result.cards.len(), 2);
    assert_eq!(result.cards[0].used_count(), 2);
    assert_eq!(
        result.cards[0].description_html(),
        "<mark>두부 1모</mark>, 당근 1개, <mark>양파 1/2개</mark>, 간장 3큰술"
    );
    assert_eq!(result.cards[1].used_count(), 0);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_builder_requires_query() {
    let result = Recommender::builder().offline().build().await;
    assert!(matches!(result, Err(Error::Builder(_))));

    let result = Recommender::builder().query("   ").offline().build().await;
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[tokio::test]
async fn test_unauthenticated_recommendation() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/rag/recommend")
        .with_status(422)
        .create_async()
        .await;

    let mut config = config_for(&server);
    config.fallback.enabled = true;
    config.fallback.retry_delay_ms = 0;

    let result = Recommender::builder()
        .query("볶음밥")
        .config(config)
        .build()
        .await;
    assert!(matches!(result, Err(Error::Unauthenticated)));
}

#[tokio::test]
async fn test_fallback_serves_samples_on_server_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/rag/recommend")
        .with_status(503)
        .expect(2)
        .create_async()
        .await;

    let mut config = config_for(&server);
    config.fallback.enabled = true;
    config.fallback.retry_attempts = 2;
    config.fallback.retry_delay_ms = 0;

    let result = Recommender::builder()
        .query("당근")
        .config(config)
        .build()
        .await
        .unwrap();

    assert_eq!(result.fridge, vec!["당근", "두부", "양파", "계란"]);
    assert_eq!(result.cards[0].recipe.name, "당근 볶음밥");
    assert_eq!(result.cards[0].used_count(), 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_without_fallback() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/rag/recommend")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let result = Recommender::builder()
        .query("당근")
        .config(config_for(&server))
        .build()
        .await;
    assert!(matches!(result, Err(Error::Status { status: 503, .. })));
}

#[tokio::test]
async fn test_pantry_add_and_remove() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/api/user_ingredients/3")
        .with_status(200)
        .with_body(r#"[{"name": "당근", "quantity": 2.0}]"#)
        .create_async()
        .await;
    let add = server
        .mock("POST", "/api/user_ingredients/")
        .match_body(Matcher::PartialJson(json!({"user_id": 3, "name": "계란"})))
        .with_status(201)
        .with_body(r#"{"user_id": 3, "name": "계란", "quantity": 6.0}"#)
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/api/user_ingredients/3/%EB%8B%B9%EA%B7%BC")
        .with_status(204)
        .create_async()
        .await;

    let backend = HttpBackend::new(&config_for(&server)).unwrap();
    let mut pantry = load_pantry(&backend, 3).await.unwrap();
    assert_eq!(pantry.names(), vec!["당근"]);

    let stored = add_to_pantry(&backend, &mut pantry, 3, " 계란 ", 6.0)
        .await
        .unwrap();
    assert_eq!(stored.name, "계란");
    assert_eq!(pantry.names(), vec!["당근", "계란"]);

    remove_from_pantry(&backend, &mut pantry, 3, "당근")
        .await
        .unwrap();
    assert_eq!(pantry.names(), vec!["계란"]);

    list.assert_async().await;
    add.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn test_duplicate_add_never_reaches_backend() {
    let mut server = mockito::Server::new_async().await;
    let add = server
        .mock("POST", "/api/user_ingredients/")
        .expect(0)
        .create_async()
        .await;

    let backend = backend::from_config(&config_for(&server)).unwrap();
    let mut pantry = pantry_recipes::Pantry::from_fridge(["당근"]);
    let result = add_to_pantry(backend.as_ref(), &mut pantry, 1, "당근", 1.0).await;
    assert!(matches!(result, Err(Error::Duplicate(_))));

    let result = add_to_pantry(backend.as_ref(), &mut pantry, 1, "  ", 1.0).await;
    assert!(matches!(result, Err(Error::InvalidInput(_))));
    assert_eq!(pantry.len(), 1);

    add.assert_async().await;
}

#[tokio::test]
async fn test_failed_add_leaves_pantry_unchanged() {
    let mut server = mockito::Server::new_async().await;
    let _add = server
        .mock("POST", "/api/user_ingredients/")
        .with_status(400)
        .with_body(r#"{"detail": "Ingredient already exists"}"#)
        .create_async()
        .await;

    let backend = HttpBackend::new(&config_for(&server)).unwrap();
    let mut pantry = pantry_recipes::Pantry::new();
    let result = add_to_pantry(&backend, &mut pantry, 1, "양파", 1.0).await;
    assert!(result.is_err());
    assert!(pantry.is_empty());
}
