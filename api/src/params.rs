use crate::error::ApiError;
use providers::{BBox, SearchQuery, Spatial};
use serde::Deserialize;

const DEFAULT_RADIUS: u32 = 1000;
const PROVIDER_LIMIT: u32 = 50;
const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;

#[derive(Deserialize, Debug)]
pub struct SearchParams {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(default)]
    pub categories: Option<String>,
    pub bbox: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl SearchParams {
    pub fn into_query(self) -> Result<(SearchQuery, Pagination), ApiError> {
        let categories: Vec<String> = self
            .categories
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();

        let spatial = match self.bbox {
            Some(raw) => Spatial::BBox(parse_bbox(&raw)?),
            None => Spatial::Point {
                lat: self.lat.unwrap_or_default(),
                lng: self.lng.unwrap_or_default(),
                radius: DEFAULT_RADIUS,
            },
        };

        let query = SearchQuery {
            spatial,
            limit: PROVIDER_LIMIT,
            categories,
        };

        let page = self.page.filter(|p| *p >= 1).unwrap_or(1);
        let page_size = self
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE)
            .max(1);

        Ok((query, Pagination { page, page_size }))
    }
}

fn parse_bbox(raw: &str) -> Result<BBox, ApiError> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 4 {
        return Err(ApiError::InvalidBBox(format!(
            "expected 4 comma-separated components, got {}",
            parts.len()
        )));
    }

    let mut values = [0f64; 4];
    for (i, part) in parts.iter().enumerate() {
        values[i] = part
            .trim()
            .parse()
            .map_err(|_| ApiError::InvalidBBox(format!("non-numeric component: {part}")))?;
    }

    let bbox = BBox {
        min_lat: values[0],
        min_lng: values[1],
        max_lat: values[2],
        max_lng: values[3],
    };

    if bbox.min_lat >= bbox.max_lat || bbox.min_lng >= bbox.max_lng {
        return Err(ApiError::InvalidBBox(
            "min must be strictly less than max on each axis".to_string(),
        ));
    }

    Ok(bbox)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_arity_bbox_is_rejected() {
        assert!(parse_bbox("1,2,3").is_err());
    }

    #[test]
    fn non_numeric_bbox_component_is_rejected() {
        assert!(parse_bbox("1,2,3,nope").is_err());
    }

    #[test]
    fn inverted_bbox_is_rejected() {
        assert!(parse_bbox("10,10,5,5").is_err());
    }

    #[test]
    fn valid_bbox_parses() {
        let bbox = parse_bbox("59.0,18.0,59.5,18.5").unwrap();
        assert_eq!(bbox.min_lat, 59.0);
        assert_eq!(bbox.max_lng, 18.5);
    }

    #[test]
    fn page_size_above_max_is_clamped_not_rejected() {
        let params = SearchParams {
            lat: Some(0.0),
            lng: Some(0.0),
            categories: None,
            bbox: None,
            page: None,
            page_size: Some(500),
        };
        let (_, pagination) = params.into_query().unwrap();
        assert_eq!(pagination.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn page_below_one_behaves_as_page_one() {
        let params = SearchParams {
            lat: Some(0.0),
            lng: Some(0.0),
            categories: None,
            bbox: None,
            page: Some(0),
            page_size: None,
        };
        let (_, pagination) = params.into_query().unwrap();
        assert_eq!(pagination.page, 1);
    }

    #[test]
    fn categories_are_normalized() {
        let params = SearchParams {
            lat: Some(0.0),
            lng: Some(0.0),
            categories: Some(" Cafe, RESTAURANT ,".to_string()),
            bbox: None,
            page: None,
            page_size: None,
        };
        let (query, _) = params.into_query().unwrap();
        assert_eq!(query.categories, vec!["cafe".to_string(), "restaurant".to_string()]);
    }
}
