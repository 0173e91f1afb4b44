use crate::MapPoint;

const DEFAULT_CENTER: MapPoint = MapPoint::from_lat_lng_deg(42.878983, 74.587555);
const DEFAULT_ZOOM: f64 = 12.0;
const DEFAULT_FOCUS_ZOOM: f64 = 17.0;
const DEFAULT_MAX_ZOOM: f64 = 18.0;
const DEFAULT_TILE_LAYER_URL: &str = "http://tile.openstreetmap.org/{z}/{x}/{y}.png";
const DEFAULT_ATTRIBUTION: &str = "Map data &copy; <a href=\"http://openstreetmap.org\">OpenStreetMap</a> contributors, \
     <a href=\"http://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, \
     Imagery © <a href=\"http://mapbox.com\">Mapbox</a>";

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    /// URL template with `{z}`, `{x}` and `{y}` placeholders.
    pub url: String,
    pub attribution: String,
    pub max_zoom: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Initial center of the view.
    pub center: MapPoint,
    /// Initial zoom level.
    pub zoom: f64,
    /// Zoom level used to show a found address.
    pub focus_zoom: f64,
    pub tile_layer: TileLayer,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url: DEFAULT_TILE_LAYER_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            focus_zoom: DEFAULT_FOCUS_ZOOM,
            tile_layer: TileLayer::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view() {
        let cfg = MapConfig::default();
        assert_eq!(cfg.center, MapPoint::from_lat_lng_deg(42.878983, 74.587555));
        assert_eq!(cfg.zoom, 12.0);
        assert_eq!(cfg.focus_zoom, 17.0);
        assert!(cfg.focus_zoom <= cfg.tile_layer.max_zoom);
    }

    #[test]
    fn default_tile_layer() {
        let layer = TileLayer::default();
        assert!(layer.url.contains("{z}/{x}/{y}"));
        assert!(layer.attribution.contains("OpenStreetMap"));
        assert_eq!(layer.max_zoom, 18.0);
    }
}
