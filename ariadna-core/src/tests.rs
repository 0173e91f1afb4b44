use std::collections::BTreeMap;

use crate::{MapPoint, MapSurface, MarkerId, TileLayer};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetView(MapPoint, f64),
    AddTileLayer(String),
    AddMarker(MarkerId, MapPoint),
    RemoveMarker(MarkerId),
    BindPopup(MarkerId, String),
    UnbindPopup(MarkerId),
    OpenPopup(MarkerId),
    ClosePopup(MarkerId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MockMarker {
    pub pos: MapPoint,
    pub popup: Option<String>,
    pub popup_open: bool,
}

/// Records every call and keeps track of what would be visible.
#[derive(Debug, Default)]
pub struct MockSurface {
    pub calls: Vec<Call>,
    pub view: Option<(MapPoint, f64)>,
    pub markers: BTreeMap<MarkerId, MockMarker>,
}

impl MockSurface {
    pub fn visible_popup(&self) -> Option<&str> {
        self.markers
            .values()
            .find(|m| m.popup_open)
            .and_then(|m| m.popup.as_deref())
    }
}

impl MapSurface for MockSurface {
    fn set_view(&mut self, center: MapPoint, zoom: f64) {
        self.calls.push(Call::SetView(center, zoom));
        self.view = Some((center, zoom));
    }
    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.calls.push(Call::AddTileLayer(layer.url.clone()));
    }
    fn add_marker(&mut self, id: MarkerId, pos: MapPoint) {
        self.calls.push(Call::AddMarker(id, pos));
        self.markers.insert(
            id,
            MockMarker {
                pos,
                popup: None,
                popup_open: false,
            },
        );
    }
    fn remove_marker(&mut self, id: MarkerId) {
        self.calls.push(Call::RemoveMarker(id));
        self.markers.remove(&id);
    }
    fn bind_popup(&mut self, id: MarkerId, content: &str) {
        self.calls.push(Call::BindPopup(id, content.to_string()));
        if let Some(m) = self.markers.get_mut(&id) {
            m.popup = Some(content.to_string());
        }
    }
    fn unbind_popup(&mut self, id: MarkerId) {
        self.calls.push(Call::UnbindPopup(id));
        if let Some(m) = self.markers.get_mut(&id) {
            m.popup = None;
            m.popup_open = false;
        }
    }
    fn open_popup(&mut self, id: MarkerId) {
        self.calls.push(Call::OpenPopup(id));
        if let Some(m) = self.markers.get_mut(&id) {
            m.popup_open = m.popup.is_some();
        }
    }
    fn close_popup(&mut self, id: MarkerId) {
        self.calls.push(Call::ClosePopup(id));
        if let Some(m) = self.markers.get_mut(&id) {
            m.popup_open = false;
        }
    }
}
