pub mod categories;
pub mod circuit_breaker;
pub mod domain;
pub mod foursquare;
pub mod google;
pub mod mock;
pub mod osm;
pub mod provider;
pub mod registry;
pub mod retry;
pub mod timeout;

pub use domain::{BBox, POI, SearchQuery, Spatial};
pub use provider::{Provider, ProviderError};
pub use registry::{ProviderConfig, ProvidersConfig, RegisteredProvider, build_providers};
