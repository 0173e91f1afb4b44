use std::collections::HashMap;

use leaflet::LatLng;
use leptos::*;
use leptos_leaflet::{MapContainer, MapEvents, Position, TileLayer as TileLayerView};
use wasm_bindgen::JsValue;

use ariadna_core::{MapPoint, MapSurface, MarkerId, TileLayer};

/// Leaflet backed map surface.
///
/// Markers and popups are handled imperatively,
/// the tile layer is rendered by the [`Map`] component.
pub struct LeafletSurface {
    map: leaflet::Map,
    tile_layer: WriteSignal<Option<TileLayer>>,
    markers: HashMap<MarkerId, leaflet::Marker>,
}

impl LeafletSurface {
    #[must_use]
    pub fn new(map: leaflet::Map, tile_layer: WriteSignal<Option<TileLayer>>) -> Self {
        Self {
            map,
            tile_layer,
            markers: HashMap::new(),
        }
    }

    fn with_marker(&self, id: MarkerId, f: impl FnOnce(&leaflet::Marker)) {
        if let Some(marker) = self.markers.get(&id) {
            f(marker);
        } else {
            log::warn!("Unknown {id}");
        }
    }
}

impl MapSurface for LeafletSurface {
    fn set_view(&mut self, center: MapPoint, zoom: f64) {
        self.map.set_view(&LatLng::new(center.lat, center.lng), zoom);
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.tile_layer.set(Some(layer.clone()));
    }

    fn add_marker(&mut self, id: MarkerId, pos: MapPoint) {
        let marker = leaflet::Marker::new(&LatLng::new(pos.lat, pos.lng));
        marker.add_to(&self.map);
        self.markers.insert(id, marker);
    }

    fn remove_marker(&mut self, id: MarkerId) {
        if let Some(marker) = self.markers.remove(&id) {
            self.map.remove_layer(&marker);
        }
    }

    fn bind_popup(&mut self, id: MarkerId, content: &str) {
        self.with_marker(id, |marker| {
            let popup = leaflet::Popup::new(&leaflet::PopupOptions::default(), None);
            popup.set_content(&JsValue::from_str(content));
            marker.bind_popup(&popup);
        });
    }

    fn unbind_popup(&mut self, id: MarkerId) {
        self.with_marker(id, |marker| {
            marker.unbind_popup();
        });
    }

    fn open_popup(&mut self, id: MarkerId) {
        self.with_marker(id, |marker| {
            marker.open_popup();
        });
    }

    fn close_popup(&mut self, id: MarkerId) {
        self.with_marker(id, |marker| {
            marker.close_popup();
        });
    }
}

#[component]
pub fn Map(
    center: MapPoint,
    zoom: f64,
    map: WriteSignal<Option<leaflet::Map>>,
    tile_layer: ReadSignal<Option<TileLayer>>,
    on_click: Callback<MapPoint, ()>,
) -> impl IntoView {
    let events = MapEvents::new();

    events.clone().mouse_click(move |ev| {
        let lat_lng = ev.lat_lng();
        on_click.call(MapPoint::from_lat_lng_deg(lat_lng.lat(), lat_lng.lng()));
    });

    let center = Position::new(center.lat, center.lng);

    view! {
      <div id="map">
        <MapContainer
          class="h-full"
          center
          zoom
          map
          set_view=true
          events
        >
          {move || tile_layer.get().map(|TileLayer { url, attribution, .. }| view! {
            <TileLayerView url attribution />
          })}
        </MapContainer>
      </div>
    }
}
