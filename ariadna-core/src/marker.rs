use std::fmt;

use crate::MapPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(u64);

impl MarkerId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub pos: MapPoint,
    pub label: Option<String>,
    pub popup_open: bool,
}

/// Markers currently placed on the map.
///
/// The list itself accepts any number of markers;
/// keeping at most one is up to the controller.
#[derive(Debug, Default)]
pub struct MarkerList {
    markers: Vec<Marker>,
    last_id: u64,
}

impl MarkerList {
    pub fn add(&mut self, pos: MapPoint) -> MarkerId {
        self.last_id += 1;
        let id = MarkerId(self.last_id);
        self.markers.push(Marker {
            id,
            pos,
            label: None,
            popup_open: false,
        });
        id
    }

    pub fn take_all(&mut self) -> Vec<Marker> {
        std::mem::take(&mut self.markers)
    }

    pub fn get_mut(&mut self, id: MarkerId) -> Option<&mut Marker> {
        self.markers.iter_mut().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MarkerId) -> bool {
        self.markers.iter().any(|m| m.id == id)
    }

    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_never_reused() {
        let mut list = MarkerList::default();
        let a = list.add(MapPoint::from_lat_lng_deg(1.0, 2.0));
        list.take_all();
        let b = list.add(MapPoint::from_lat_lng_deg(1.0, 2.0));
        assert_ne!(a, b);
        assert!(!list.contains(a));
        assert!(list.contains(b));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn take_all_empties_the_list() {
        let mut list = MarkerList::default();
        list.add(MapPoint::from_lat_lng_deg(1.0, 2.0));
        list.add(MapPoint::from_lat_lng_deg(3.0, 4.0));
        let taken = list.take_all();
        assert_eq!(taken.len(), 2);
        assert!(list.is_empty());
        assert!(list.take_all().is_empty());
    }

    #[test]
    fn new_marker_has_no_popup() {
        let mut list = MarkerList::default();
        let id = list.add(MapPoint::from_lat_lng_deg(1.0, 2.0));
        let m = list.get_mut(id).unwrap();
        assert!(m.label.is_none());
        assert!(!m.popup_open);
    }
}
