use serde::{Deserialize, Serialize};

/// A bounding box selector, `minLat,minLng,maxLat,maxLng`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

/// Either a point+radius or a bbox, never both.
#[derive(Clone, Debug, PartialEq)]
pub enum Spatial {
    Point { lat: f64, lng: f64, radius: u32 },
    BBox(BBox),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    pub spatial: Spatial,
    pub limit: u32,
    pub categories: Vec<String>,
}

impl SearchQuery {
    /// The point providers should search around. For a bbox query this is the box centroid.
    pub fn center(&self) -> (f64, f64) {
        match &self.spatial {
            Spatial::Point { lat, lng, .. } => (*lat, *lng),
            Spatial::BBox(b) => ((b.min_lat + b.max_lat) / 2.0, (b.min_lng + b.max_lng) / 2.0),
        }
    }

    pub fn radius(&self) -> u32 {
        match &self.spatial {
            Spatial::Point { radius, .. } => *radius,
            Spatial::BBox(_) => 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct POI {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub category: String,
    pub source: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rating_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub opening_hours: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub menu_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub open_now: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub wheelchair_accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub outdoor_seating: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub takeaway: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub delivery: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub popularity: Option<f64>,
}

impl POI {
    /// Name normalised for dedupe/identity comparisons: lowercased, trimmed.
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}
