use crate::categories::google_place_type;
use crate::domain::POI;
use crate::domain::SearchQuery;
use crate::provider::{Provider, ProviderError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
const CLIENT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct GoogleProvider {
    client: reqwest::Client,
    api_key: String,
}

impl GoogleProvider {
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .build()
            .expect("building Google Places http client");
        GoogleProvider { client, api_key }
    }
}

#[derive(Deserialize)]
struct GoogleResponse {
    results: Vec<GoogleResult>,
}

#[derive(Deserialize)]
struct GoogleResult {
    place_id: String,
    name: String,
    #[serde(default)]
    types: Vec<String>,
    geometry: Geometry,
    rating: Option<f64>,
    user_ratings_total: Option<u32>,
    price_level: Option<u8>,
}

#[derive(Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

#[async_trait]
impl Provider for GoogleProvider {
    fn name(&self) -> &str {
        "google"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<POI>, ProviderError> {
        let (lat, lng) = query.center();
        let mut params = vec![
            ("key".to_string(), self.api_key.clone()),
            ("location".to_string(), format!("{lat},{lng}")),
            ("radius".to_string(), query.radius().to_string()),
        ];
        if let Some(place_type) = query.categories.first().and_then(|c| google_place_type(c)) {
            params.push(("type".to_string(), place_type.to_string()));
        }

        let response = self
            .client
            .get(ENDPOINT)
            .query(&params)
            .send()
            .await
            .map_err(|e| ProviderError::Transport {
                provider: "google".to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider: "google".to_string(),
                status: response.status().as_u16(),
            });
        }

        let body: GoogleResponse =
            response.json().await.map_err(|e| ProviderError::Transport {
                provider: "google".to_string(),
                message: e.to_string(),
            })?;

        let pois = body
            .results
            .into_iter()
            .filter(|r| !r.name.is_empty())
            .map(|r| POI {
                id: r.place_id,
                name: r.name,
                lat: r.geometry.location.lat,
                lng: r.geometry.location.lng,
                category: r.types.first().cloned().unwrap_or_default(),
                source: "google".to_string(),
                rating: r.rating,
                rating_count: r.user_ratings_total,
                price_level: r.price_level,
                ..Default::default()
            })
            .collect();

        Ok(pois)
    }
}
