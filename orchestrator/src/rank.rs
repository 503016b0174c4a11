use providers::POI;
use std::collections::HashMap;

/// Unknown providers rank behind every configured one.
pub const DEFAULT_PRIORITY: i32 = providers::registry::DEFAULT_PRIORITY;

fn squared_planar_distance(a: &POI, origin: (f64, f64)) -> f64 {
    let dlat = a.lat - origin.0;
    let dlng = a.lng - origin.1;
    dlat * dlat + dlng * dlng
}

/// Stable sort by (provider priority asc, squared planar distance to `origin` asc).
/// Priorities are read-only for the duration of the call; nothing here mutates the
/// map, consistent with it being assigned once at startup.
pub fn rank(mut pois: Vec<POI>, priorities: &HashMap<String, i32>, origin: (f64, f64)) -> Vec<POI> {
    pois.sort_by(|a, b| {
        let pa = priorities.get(&a.source).copied().unwrap_or(DEFAULT_PRIORITY);
        let pb = priorities.get(&b.source).copied().unwrap_or(DEFAULT_PRIORITY);
        pa.cmp(&pb).then_with(|| {
            let da = squared_planar_distance(a, origin);
            let db = squared_planar_distance(b, origin);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    });
    pois
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(id: &str, lat: f64, lng: f64, source: &str) -> POI {
        POI {
            id: id.to_string(),
            name: "x".to_string(),
            lat,
            lng,
            source: source.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn lower_priority_integer_sorts_first() {
        let priorities = HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
        let pois = vec![poi("b1", 0.0, 0.0, "b"), poi("a1", 0.0, 0.0, "a")];
        let ranked = rank(pois, &priorities, (0.0, 0.0));
        assert_eq!(ranked[0].id, "a1");
        assert_eq!(ranked[1].id, "b1");
    }

    #[test]
    fn unknown_provider_defaults_to_100() {
        let priorities = HashMap::from([("known".to_string(), 50)]);
        let pois = vec![poi("u1", 0.0, 0.0, "unknown"), poi("k1", 0.0, 0.0, "known")];
        let ranked = rank(pois, &priorities, (0.0, 0.0));
        assert_eq!(ranked[0].id, "k1");
    }

    #[test]
    fn ties_fall_back_to_distance_then_stability() {
        let priorities = HashMap::from([("a".to_string(), 1)]);
        let pois = vec![
            poi("far", 10.0, 10.0, "a"),
            poi("near", 0.1, 0.1, "a"),
            poi("tied1", 1.0, 1.0, "a"),
            poi("tied2", 1.0, 1.0, "a"),
        ];
        let ranked = rank(pois, &priorities, (0.0, 0.0));
        assert_eq!(ranked[0].id, "near");
        assert_eq!(ranked[1].id, "tied1");
        assert_eq!(ranked[2].id, "tied2");
        assert_eq!(ranked[3].id, "far");
    }
}
