use serde::{Deserialize, Serialize};

/// Geographic position as delivered by the geocoding service.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// The textual part of an indexed address document.
///
/// Older indexes lack some of the name variants,
/// so every field falls back to its default.
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(default)]
pub struct Address {
    pub country: String,
    pub city: String,
    pub village: String,
    pub town: String,
    pub district: String,
    pub street: String,
    pub housenumber: String,
    pub name: String,
    pub old_name: String,
    pub housename: String,
    pub postcode: String,
    pub local_name: String,
    pub alternative_name: String,
    #[serde(rename = "international")]
    pub international_name: String,
    #[serde(rename = "national")]
    pub national_name: String,
    #[serde(rename = "official")]
    pub official_name: String,
    #[serde(rename = "regional")]
    pub regional_name: String,
    pub short_name: String,
    #[serde(rename = "sorting")]
    pub sorting_name: String,
    #[serde(rename = "translated")]
    pub translated_name: String,
    pub custom: bool,
    pub intersection: bool,
}

/// One hit of a forward search (`GET /search/{address}`).
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SearchResult {
    pub location: Location,
    #[serde(flatten)]
    pub address: Address,
}

/// One address candidate of a reverse lookup (`GET /reverse/{lat}/{lng}`).
pub type ReverseResult = Address;

/// Error body sent by the geocoding service.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{error}"))]
pub struct Error {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_search_result_with_missing_address_fields() {
        let json = r#"{"location":{"lat":10.0,"lon":20.0}}"#;
        let res: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(res.location, Location { lat: 10.0, lon: 20.0 });
        assert_eq!(res.address, Address::default());
    }

    #[test]
    fn deserialize_search_result_with_index_fields() {
        let json = r#"{
            "location": {"lat": 42.87, "lon": 74.59},
            "city": "Bishkek",
            "street": "Chui Avenue",
            "housenumber": "150",
            "international": "Chuy Prospekt",
            "intersection": false,
            "centroid": {"lat": 42.87, "lon": 74.59},
            "geom": null
        }"#;
        let res: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(res.address.city, "Bishkek");
        assert_eq!(res.address.street, "Chui Avenue");
        assert_eq!(res.address.housenumber, "150");
        assert_eq!(res.address.international_name, "Chuy Prospekt");
        assert!(res.address.name.is_empty());
    }

    #[test]
    fn search_result_without_location_is_rejected() {
        let json = r#"{"name":"Cafe"}"#;
        assert!(serde_json::from_str::<SearchResult>(json).is_err());
    }

    #[test]
    fn deserialize_reverse_candidates() {
        let json = r#"[
            {"name":"","street":"Main","housenumber":"5"},
            {"name":"Cafe","street":"","housenumber":""}
        ]"#;
        let res: Vec<ReverseResult> = serde_json::from_str(json).unwrap();
        assert_eq!(res.len(), 2);
        assert_eq!(res[0].street, "Main");
        assert_eq!(res[1].name, "Cafe");
    }

    #[test]
    fn display_api_error() {
        let err: Error = serde_json::from_str(r#"{"error":"no such index"}"#).unwrap();
        assert_eq!(err.to_string(), "no such index");
    }
}
