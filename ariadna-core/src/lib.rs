pub mod config;
pub mod controller;
pub mod error;
pub mod geo;
pub mod label;
pub mod marker;
pub mod request;

#[cfg(test)]
mod tests;

pub use self::{
    config::*,
    controller::*,
    error::Error,
    geo::MapPoint,
    marker::{Marker, MarkerId, MarkerList},
    request::{RequestSequence, RequestToken},
};

/// The map rendering surface driven by the [`MapController`].
///
/// Markers are addressed by the id the controller assigns
/// when placing them. Implementations must accept popup calls
/// for markers without a bound popup.
pub trait MapSurface {
    fn set_view(&mut self, center: MapPoint, zoom: f64);
    fn add_tile_layer(&mut self, layer: &TileLayer);
    fn add_marker(&mut self, id: MarkerId, pos: MapPoint);
    fn remove_marker(&mut self, id: MarkerId);
    fn bind_popup(&mut self, id: MarkerId, content: &str);
    fn unbind_popup(&mut self, id: MarkerId);
    fn open_popup(&mut self, id: MarkerId);
    fn close_popup(&mut self, id: MarkerId);
}
