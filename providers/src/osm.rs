use crate::categories::osm_amenity;
use crate::domain::{POI, SearchQuery, Spatial};
use crate::provider::{Provider, ProviderError};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

const ENDPOINT: &str = "https://overpass-api.de/api/interpreter";
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct OsmProvider {
    client: reqwest::Client,
}

impl OsmProvider {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .build()
            .expect("building OSM http client");
        OsmProvider { client }
    }

    fn build_query(&self, query: &SearchQuery) -> String {
        let amenity = query
            .categories
            .iter()
            .find_map(|c| osm_amenity(c))
            .unwrap_or("");
        let filter = if amenity.is_empty() {
            String::new()
        } else {
            format!("[\"amenity\"=\"{amenity}\"]")
        };

        match query.spatial {
            Spatial::Point { lat, lng, radius } => format!(
                "[out:json];node{filter}(around:{radius},{lat},{lng});out;",
                filter = filter,
                radius = radius,
                lat = lat,
                lng = lng,
            ),
            Spatial::BBox(b) => format!(
                "[out:json];node{filter}({min_lat},{min_lng},{max_lat},{max_lng});out;",
                filter = filter,
                min_lat = b.min_lat,
                min_lng = b.min_lng,
                max_lat = b.max_lat,
                max_lng = b.max_lng,
            ),
        }
    }
}

impl Default for OsmProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct OverpassResponse {
    elements: Vec<OverpassElement>,
}

#[derive(Deserialize)]
struct OverpassElement {
    id: u64,
    lat: Option<f64>,
    lon: Option<f64>,
    tags: Option<HashMap<String, String>>,
}

#[async_trait]
impl Provider for OsmProvider {
    fn name(&self) -> &str {
        "osm"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<POI>, ProviderError> {
        let overpass_query = self.build_query(query);

        let response = self
            .client
            .post(ENDPOINT)
            .form(&[("data", overpass_query.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::Transport {
                provider: "osm".to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider: "osm".to_string(),
                status: response.status().as_u16(),
            });
        }

        let body: OverpassResponse =
            response.json().await.map_err(|e| ProviderError::Transport {
                provider: "osm".to_string(),
                message: e.to_string(),
            })?;

        let pois = body
            .elements
            .into_iter()
            .filter_map(|el| {
                let tags = el.tags?;
                let name = tags.get("name")?.clone();
                if name.is_empty() {
                    return None;
                }
                let lat = el.lat?;
                let lon = el.lon?;
                Some(POI {
                    id: el.id.to_string(),
                    name,
                    lat,
                    lng: lon,
                    category: tags.get("amenity").cloned().unwrap_or_default(),
                    source: "osm".to_string(),
                    ..Default::default()
                })
            })
            .collect();

        Ok(pois)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_query_embeds_radius_and_amenity_filter() {
        let provider = OsmProvider::new();
        let query = SearchQuery {
            spatial: Spatial::Point {
                lat: 59.3293,
                lng: 18.0686,
                radius: 1000,
            },
            limit: 50,
            categories: vec!["restaurant".to_string()],
        };

        let overpass = provider.build_query(&query);
        assert!(overpass.contains("around:1000,59.3293,18.0686"));
        assert!(overpass.contains("\"amenity\"=\"restaurant\""));
    }

    #[test]
    fn bbox_query_has_no_around_clause() {
        let provider = OsmProvider::new();
        let query = SearchQuery {
            spatial: Spatial::BBox(crate::domain::BBox {
                min_lat: 59.0,
                min_lng: 18.0,
                max_lat: 59.5,
                max_lng: 18.5,
            }),
            limit: 50,
            categories: vec![],
        };

        let overpass = provider.build_query(&query);
        assert!(!overpass.contains("around"));
        assert!(overpass.contains("59,18,59.5,18.5"));
    }
}
