use crate::categories::foursquare_category_id;
use crate::domain::{POI, SearchQuery};
use crate::provider::{Provider, ProviderError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const ENDPOINT: &str = "https://api.foursquare.com/v3/places/search";
const CLIENT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct FoursquareProvider {
    client: reqwest::Client,
    api_key: String,
}

impl FoursquareProvider {
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .build()
            .expect("building Foursquare http client");
        FoursquareProvider { client, api_key }
    }
}

#[derive(Deserialize)]
struct FoursquareResponse {
    results: Vec<FoursquareResult>,
}

#[derive(Deserialize)]
struct FoursquareResult {
    fsq_id: String,
    name: String,
    #[serde(default)]
    categories: Vec<FoursquareCategory>,
    geocodes: Geocodes,
}

#[derive(Deserialize)]
struct FoursquareCategory {
    name: String,
}

#[derive(Deserialize)]
struct Geocodes {
    main: LatLng,
}

#[derive(Deserialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[async_trait]
impl Provider for FoursquareProvider {
    fn name(&self) -> &str {
        "foursquare"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<POI>, ProviderError> {
        let (lat, lng) = query.center();
        let mut params = vec![
            ("ll".to_string(), format!("{lat},{lng}")),
            ("radius".to_string(), query.radius().to_string()),
        ];
        if let Some(category_id) = query
            .categories
            .first()
            .and_then(|c| foursquare_category_id(c))
        {
            params.push(("categories".to_string(), category_id.to_string()));
        }

        let response = self
            .client
            .get(ENDPOINT)
            .header("Authorization", &self.api_key)
            .query(&params)
            .send()
            .await
            .map_err(|e| ProviderError::Transport {
                provider: "foursquare".to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider: "foursquare".to_string(),
                status: response.status().as_u16(),
            });
        }

        let body: FoursquareResponse =
            response.json().await.map_err(|e| ProviderError::Transport {
                provider: "foursquare".to_string(),
                message: e.to_string(),
            })?;

        let pois = body
            .results
            .into_iter()
            .filter(|r| !r.name.is_empty())
            .map(|r| POI {
                id: r.fsq_id,
                name: r.name,
                lat: r.geocodes.main.latitude,
                lng: r.geocodes.main.longitude,
                category: r
                    .categories
                    .first()
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
                source: "foursquare".to_string(),
                ..Default::default()
            })
            .collect();

        Ok(pois)
    }
}
