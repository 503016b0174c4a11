use crate::domain::{POI, SearchQuery};
use crate::provider::{Provider, ProviderError};
use async_trait::async_trait;

/// Deterministic, richly-populated provider for local development and demos that
/// don't have live provider API keys configured. Gated behind `mock.enabled`.
pub struct MockProvider;

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<POI>, ProviderError> {
        let (lat, lng) = query.center();
        Ok(vec![POI {
            id: "mock-1".to_string(),
            name: "Svenska Bageriet".to_string(),
            lat,
            lng,
            category: "cafe".to_string(),
            source: "mock".to_string(),
            rating: Some(4.5),
            rating_count: Some(120),
            price_level: Some(2),
            phone: Some("+46 8 123 456".to_string()),
            website: Some("https://example.com/svenska-bageriet".to_string()),
            opening_hours: Some(vec!["Mon-Sun 10:00-22:00".to_string()]),
            cuisine: Some("Swedish".to_string()),
            address: Some("Drottninggatan 1".to_string()),
            description: Some("Neighborhood bakery and cafe".to_string()),
            email: Some("hej@svenskabageriet.example".to_string()),
            menu_url: Some("https://example.com/svenska-bageriet/menu".to_string()),
            open_now: Some(true),
            wheelchair_accessible: Some(true),
            outdoor_seating: Some(true),
            takeaway: Some(true),
            delivery: Some(false),
            verified: Some(true),
            popularity: Some(0.82),
        }])
    }
}
