use providers::{SearchQuery, Spatial};

const GEOHASH_PRECISION: usize = 6;

/// Deterministic fingerprint of a query: `poi:<spatial>:<radius>:<categories>`.
/// Two queries that differ only in category order, whitespace, or letter case
/// produce the same key; two queries that differ in location, radius, or category
/// set do not.
pub fn build_key(query: &SearchQuery) -> String {
    let spatial = match &query.spatial {
        Spatial::Point { lat, lng, .. } => {
            geohash::encode(geohash::Coord { x: *lng, y: *lat }, GEOHASH_PRECISION)
                .unwrap_or_else(|_| "invalid".to_string())
        }
        Spatial::BBox(b) => format!(
            "{:.6}:{:.6}:{:.6}:{:.6}",
            b.min_lat, b.min_lng, b.max_lat, b.max_lng
        ),
    };

    let categories = normalize_categories(&query.categories);

    format!("poi:{spatial}:{}:{categories}", query.radius())
}

fn normalize_categories(categories: &[String]) -> String {
    let mut normalized: Vec<String> = categories
        .iter()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect();

    if normalized.is_empty() {
        return "all".to_string();
    }

    normalized.sort();
    normalized.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use providers::BBox;

    fn point(lat: f64, lng: f64, radius: u32, categories: &[&str]) -> SearchQuery {
        SearchQuery {
            spatial: Spatial::Point { lat, lng, radius },
            limit: 50,
            categories: categories.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn same_point_radius_and_category_set_share_a_key() {
        let q1 = point(59.3293, 18.0686, 1000, &["Restaurant", "CAFE"]);
        let q2 = point(59.3293, 18.0686, 1000, &["cafe", "restaurant"]);
        assert_eq!(build_key(&q1), build_key(&q2));
    }

    #[test]
    fn whitespace_and_case_are_ignored() {
        let q1 = point(59.3293, 18.0686, 1000, &[" Cafe ", "Restaurant"]);
        let q2 = point(59.3293, 18.0686, 1000, &["cafe", "restaurant"]);
        assert_eq!(build_key(&q1), build_key(&q2));
    }

    #[test]
    fn empty_category_set_renders_as_all() {
        let q = point(59.3293, 18.0686, 1000, &[]);
        assert!(build_key(&q).ends_with(":all"));
    }

    #[test]
    fn different_radius_changes_the_key() {
        let q1 = point(59.3293, 18.0686, 1000, &["cafe"]);
        let q2 = point(59.3293, 18.0686, 2000, &["cafe"]);
        assert_ne!(build_key(&q1), build_key(&q2));
    }

    #[test]
    fn different_location_changes_the_key() {
        let q1 = point(59.3293, 18.0686, 1000, &[]);
        let q2 = point(60.0, 20.0, 1000, &[]);
        assert_ne!(build_key(&q1), build_key(&q2));
    }

    #[test]
    fn bbox_queries_render_as_literal_coordinates() {
        let q = SearchQuery {
            spatial: Spatial::BBox(BBox {
                min_lat: 59.0,
                min_lng: 18.0,
                max_lat: 59.5,
                max_lng: 18.5,
            }),
            limit: 50,
            categories: vec![],
        };
        let key = build_key(&q);
        assert!(key.starts_with("poi:59.000000:18.000000:59.500000:18.500000:"));
    }
}
