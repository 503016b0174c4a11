use providers::POI;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
const DUPLICATE_DISTANCE_METERS: f64 = 50.0;

fn haversine_meters(a: &POI, b: &POI) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

fn is_duplicate(a: &POI, b: &POI) -> bool {
    a.normalized_name() == b.normalized_name() && haversine_meters(a, b) < DUPLICATE_DISTANCE_METERS
}

/// First-occurrence-wins dedupe over the merged, arrival-ordered list. O(n^2) by
/// design: n is small because each provider's own limit bounds it.
pub fn dedupe(pois: Vec<POI>) -> Vec<POI> {
    let mut survivors: Vec<POI> = Vec::with_capacity(pois.len());
    for poi in pois {
        if !survivors.iter().any(|kept| is_duplicate(kept, &poi)) {
            survivors.push(poi);
        }
    }
    survivors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(id: &str, name: &str, lat: f64, lng: f64, source: &str) -> POI {
        POI {
            id: id.to_string(),
            name: name.to_string(),
            lat,
            lng,
            source: source.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn near_duplicates_with_matching_names_keep_the_first() {
        let pois = vec![
            poi("a1", "Starbucks", 59.3293, 18.0686, "A"),
            poi("b1", "STARBUCKS ", 59.32935, 18.06865, "B"),
        ];
        let result = dedupe(pois);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "a1");
    }

    #[test]
    fn same_name_far_apart_are_both_kept() {
        let pois = vec![
            poi("a1", "Starbucks", 59.3293, 18.0686, "A"),
            poi("a2", "Starbucks", 60.1, 19.1, "A"),
        ];
        assert_eq!(dedupe(pois).len(), 2);
    }

    #[test]
    fn different_names_at_the_same_pin_are_both_kept() {
        let pois = vec![
            poi("a1", "Coffee Shop", 59.3293, 18.0686, "A"),
            poi("b1", "Bookstore", 59.3293, 18.0686, "B"),
        ];
        assert_eq!(dedupe(pois).len(), 2);
    }

    #[test]
    fn dedupe_is_idempotent() {
        let pois = vec![
            poi("a1", "Starbucks", 59.3293, 18.0686, "A"),
            poi("b1", "starbucks", 59.32935, 18.06865, "B"),
            poi("c1", "Cafe Nero", 59.5, 18.5, "C"),
        ];
        let once = dedupe(pois.clone());
        let twice = dedupe(once.clone());
        assert_eq!(once, twice);
    }
}
