/// Lookup tables translating our canonical lowercase category tokens into the
/// vocabulary each upstream provider expects. Unknown categories fall through to
/// the provider's own default (an unfiltered or generic search).

pub fn osm_amenity(category: &str) -> Option<&'static str> {
    match category {
        "restaurant" => Some("restaurant"),
        "cafe" => Some("cafe"),
        "bar" => Some("bar"),
        "pub" => Some("pub"),
        "fast_food" => Some("fast_food"),
        "hotel" => Some("hotel"),
        "atm" => Some("atm"),
        "bank" => Some("bank"),
        "hospital" => Some("hospital"),
        "pharmacy" => Some("pharmacy"),
        "fuel" => Some("fuel"),
        "parking" => Some("parking"),
        _ => None,
    }
}

pub fn google_place_type(category: &str) -> Option<&'static str> {
    match category {
        "restaurant" => Some("restaurant"),
        "cafe" => Some("cafe"),
        "bar" => Some("bar"),
        "pub" => Some("bar"),
        "fast_food" => Some("meal_takeaway"),
        "hotel" => Some("lodging"),
        "atm" => Some("atm"),
        "bank" => Some("bank"),
        "hospital" => Some("hospital"),
        "pharmacy" => Some("pharmacy"),
        "fuel" => Some("gas_station"),
        "parking" => Some("parking"),
        _ => None,
    }
}

pub fn foursquare_category_id(category: &str) -> Option<u32> {
    match category {
        "restaurant" => Some(13065),
        "cafe" => Some(13032),
        "bar" => Some(13003),
        "pub" => Some(13025),
        "fast_food" => Some(13145),
        "hotel" => Some(19014),
        "atm" => Some(11044),
        "bank" => Some(11045),
        "hospital" => Some(15014),
        "pharmacy" => Some(15026),
        "fuel" => Some(19007),
        "parking" => Some(19020),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_categories_have_no_mapping() {
        assert_eq!(osm_amenity("not_a_category"), None);
        assert_eq!(google_place_type("not_a_category"), None);
        assert_eq!(foursquare_category_id("not_a_category"), None);
    }
}
