use ariadna_boundary as json;

const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MAX: f64 = 180.0;

/// A position on the map in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-LAT_DEG_MAX..=LAT_DEG_MAX).contains(&self.lat)
            && (-LNG_DEG_MAX..=LNG_DEG_MAX).contains(&self.lng)
    }

    /// Moves the longitude back into `[-180, 180]`.
    ///
    /// Clicking on a horizontally repeated copy of the world
    /// yields longitudes outside of the valid range.
    #[must_use]
    pub fn wrap_lng(self) -> Self {
        let Self { lat, lng } = self;
        if !lng.is_finite() || (-LNG_DEG_MAX..=LNG_DEG_MAX).contains(&lng) {
            return self;
        }
        let period = 2.0 * LNG_DEG_MAX;
        let lng = (lng + LNG_DEG_MAX).rem_euclid(period) - LNG_DEG_MAX;
        Self { lat, lng }
    }
}

impl From<json::Location> for MapPoint {
    fn from(from: json::Location) -> Self {
        let json::Location { lat, lon } = from;
        Self::from_lat_lng_deg(lat, lon)
    }
}
