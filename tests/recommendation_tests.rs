use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use stylist_api::models::{CartItem, Catalog, Category, Origin, Product, StyleTag};
use stylist_api::services::providers::{
    ExternalSuggestion, SourceFailure, StylingRequest, SuggestionSource,
};
use stylist_api::services::{recommend, StylistService};
use stylist_api::store::seed;
use stylist_api::AppError;

fn product(id: &str, category: &str, color: &str, fit: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("{} {}", color, category),
        image: format!("https://images.example/{}.jpg", id),
        category: Category::from(category),
        color: color.to_string(),
        fit: fit.to_string(),
        price: 49.0,
    }
}

fn seed_catalog() -> Catalog {
    Catalog::new(seed::seed_products()).unwrap()
}

/// Source that always answers with a fixed result and counts its calls
struct FixedSource {
    answer: fn() -> Result<ExternalSuggestion, SourceFailure>,
    calls: AtomicUsize,
}

impl FixedSource {
    fn new(answer: fn() -> Result<ExternalSuggestion, SourceFailure>) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl SuggestionSource for FixedSource {
    async fn suggest(&self, _request: &StylingRequest) -> Result<ExternalSuggestion, SourceFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.answer)()
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Source that never answers in time
struct StalledSource;

#[async_trait::async_trait]
impl SuggestionSource for StalledSource {
    async fn suggest(&self, _request: &StylingRequest) -> Result<ExternalSuggestion, SourceFailure> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Err(SourceFailure::MalformedPayload("unreachable".to_string()))
    }

    fn name(&self) -> &'static str {
        "stalled"
    }
}

#[test]
fn test_pants_without_top_gets_only_available_top() {
    let current = product("p1", "pants", "blue", "slim");
    let catalog = Catalog::new(vec![
        product("p2", "tshirt", "white", "regular"),
        product("p3", "pants", "black", "regular"),
    ])
    .unwrap();

    let suggestion = recommend(&current, &[], &catalog).unwrap();
    assert_eq!(suggestion.suggested_product_id, "p2");
    assert!(suggestion.product.category.is_top());
}

#[test]
fn test_red_tee_avoids_green_bottom() {
    let current = product("t1", "tshirt", "red", "regular");
    let catalog = Catalog::new(vec![
        product("g1", "pants", "green", "regular"),
        product("k1", "pants", "black", "regular"),
    ])
    .unwrap();

    let suggestion = recommend(&current, &[], &catalog).unwrap();
    assert_eq!(suggestion.suggested_product_id, "k1");
}

#[test]
fn test_complete_outfit_returns_first_catalog_entry() {
    let current = product("h1", "hoodie", "gray", "oversized");
    let cart = vec![CartItem::new(product("b1", "jeans", "blue", "slim"))];
    let catalog = seed_catalog();

    let suggestion = recommend(&current, &cart, &catalog).unwrap();
    assert_eq!(suggestion.suggested_product_id, "sku001");
    assert_eq!(
        suggestion.style_tags,
        vec![StyleTag::Casual, StyleTag::Streetwear]
    );
}

#[test]
fn test_recommend_is_deterministic() {
    let current = product("sku789", "pants", "blue", "slim");
    let cart = seed::seed_cart();
    let catalog = seed_catalog();

    let first = recommend(&current, &cart, &catalog).unwrap();
    for _ in 0..20 {
        assert_eq!(recommend(&current, &cart, &catalog).unwrap(), first);
    }
}

#[test]
fn test_result_properties_hold_across_seed_catalog() {
    let catalog = seed_catalog();

    for current in catalog.iter() {
        for cart_product in catalog.iter().filter(|p| p.id != current.id) {
            let cart = vec![CartItem::new(cart_product.clone())];
            let suggestion = recommend(current, &cart, &catalog).unwrap();

            assert!(catalog.find(&suggestion.suggested_product_id).is_some());
            assert_eq!(suggestion.product.id, suggestion.suggested_product_id);
            assert_ne!(suggestion.suggested_product_id, current.id);
            assert_ne!(suggestion.suggested_product_id, cart_product.id);
            assert!(!suggestion.style_tags.is_empty());
            assert!(suggestion.reason.contains(&suggestion.product.name));
        }
    }
}

#[test]
fn test_empty_catalog_has_no_suggestion() {
    let current = product("p1", "pants", "blue", "slim");
    let err = recommend(&current, &[], &Catalog::default()).unwrap_err();
    assert!(err.is_no_suggestion());
}

#[tokio::test]
async fn test_unknown_external_id_matches_local_heuristic() {
    let source = Arc::new(FixedSource::new(|| {
        Ok(ExternalSuggestion {
            suggested_product_id: "sku-missing".to_string(),
            reason: "Trust me".to_string(),
            style_tags: vec![StyleTag::Formal],
        })
    }));
    let service = StylistService::new(
        Some(source.clone() as Arc<dyn SuggestionSource>),
        Duration::from_secs(1),
    );

    let current = product("sku789", "pants", "blue", "slim");
    let catalog = seed_catalog();

    let recommendation = service.suggest(&current, &[], &catalog).await.unwrap();
    let local = recommend(&current, &[], &catalog).unwrap();

    assert_eq!(recommendation.suggestion, local);
    assert_eq!(recommendation.origin, Origin::Heuristic);
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_valid_external_suggestion_wins() {
    let source = Arc::new(FixedSource::new(|| {
        Ok(ExternalSuggestion {
            suggested_product_id: "sku006".to_string(),
            reason: "A crisp shirt dresses up slim jeans".to_string(),
            style_tags: vec![StyleTag::Formal],
        })
    }));
    let service = StylistService::new(Some(source), Duration::from_secs(1));

    let current = product("sku789", "pants", "blue", "slim");
    let recommendation = service
        .suggest(&current, &[], &seed_catalog())
        .await
        .unwrap();

    assert_eq!(recommendation.suggestion.suggested_product_id, "sku006");
    assert_eq!(recommendation.suggestion.product.name, "White Button Shirt");
    assert_eq!(
        recommendation.suggestion.reason,
        "A crisp shirt dresses up slim jeans"
    );
    assert_eq!(recommendation.suggestion.style_tags, vec![StyleTag::Formal]);
    assert_eq!(
        recommendation.origin,
        Origin::External {
            source: "fixed".to_string()
        }
    );
}

#[tokio::test]
async fn test_source_failure_is_not_surfaced() {
    let source = Arc::new(FixedSource::new(|| {
        Err(SourceFailure::Status {
            provider: "glm",
            status: 500,
            body: "boom".to_string(),
        })
    }));
    let service = StylistService::new(Some(source), Duration::from_secs(1));

    let current = product("sku789", "pants", "blue", "slim");
    let recommendation = service
        .suggest(&current, &[], &seed_catalog())
        .await
        .unwrap();

    assert_eq!(recommendation.origin, Origin::Heuristic);
    assert_eq!(recommendation.suggestion.suggested_product_id, "sku001");
}

#[tokio::test]
async fn test_slow_source_times_out_to_heuristic() {
    let service = StylistService::new(
        Some(Arc::new(StalledSource)),
        Duration::from_millis(200),
    );

    let current = product("sku789", "pants", "blue", "slim");
    let recommendation = service
        .suggest(&current, &[], &seed_catalog())
        .await
        .unwrap();

    assert_eq!(recommendation.origin, Origin::Heuristic);
}

#[test]
fn test_pipeline_without_source_blocks_on_runtime() {
    let service = StylistService::local();
    let current = product("sku003", "hoodie", "gray", "oversized");

    let recommendation =
        tokio_test::block_on(service.suggest(&current, &[], &seed_catalog())).unwrap();

    // Gray is neutral and chinos come in regular fit.
    assert_eq!(recommendation.suggestion.suggested_product_id, "sku004");
    assert!(matches!(
        tokio_test::block_on(service.suggest(&current, &[], &Catalog::default())),
        Err(AppError::EmptyCatalog)
    ));
}
