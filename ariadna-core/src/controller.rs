use std::fmt::Display;

use ariadna_boundary::{ReverseResult, SearchResult};

use crate::{
    error::{Error, Result},
    label::address_label,
    MapConfig, MapPoint, MapSurface, Marker, MarkerId, MarkerList, RequestSequence, RequestToken,
};

/// What the user currently sees besides the map itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Searching,
    Resolving,
    Failed(Error),
}

/// Result of feeding a response into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The response belongs to a superseded request.
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub token: RequestToken,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverseRequest {
    pub token: RequestToken,
    /// The marker placed at the clicked position.
    pub marker: MarkerId,
    /// The clicked position with its longitude wrapped into `[-180, 180]`.
    pub pos: MapPoint,
}

/// Keeps at most one marker on the map and
/// places it according to search and reverse lookups.
///
/// Lookups are split into a start and a finish call
/// so that the controller is never borrowed while
/// waiting for the geocoding service.
#[derive(Debug)]
pub struct MapController<S> {
    surface: S,
    config: MapConfig,
    markers: MarkerList,
    requests: RequestSequence,
    status: Status,
}

impl<S> MapController<S>
where
    S: MapSurface,
{
    /// Centers the surface on the configured default view
    /// and attaches the tile layer.
    pub fn new(mut surface: S, config: MapConfig) -> Self {
        log::debug!(
            "Initialize map at ({}, {}) with zoom {}",
            config.center.lat,
            config.center.lng,
            config.zoom
        );
        surface.set_view(config.center, config.zoom.min(config.tile_layer.max_zoom));
        surface.add_tile_layer(&config.tile_layer);
        Self {
            surface,
            config,
            markers: MarkerList::default(),
            requests: RequestSequence::default(),
            status: Status::Idle,
        }
    }

    /// Replaces all markers by one at the location of the search result
    /// and focuses the view on it.
    pub fn add_marker(&mut self, item: &SearchResult) -> Result<MarkerId> {
        let pos = MapPoint::from(item.location);
        if !pos.is_valid() {
            log::warn!("Ignore search result with invalid location {pos:?}");
            return Err(Error::InvalidPosition);
        }
        let id = self.place_marker(pos);
        let zoom = self.config.focus_zoom.min(self.config.tile_layer.max_zoom);
        self.surface.set_view(pos, zoom);
        Ok(id)
    }

    /// Removes all markers including their popups.
    pub fn clear_map(&mut self) {
        for marker in self.markers.take_all() {
            let Marker { id, .. } = marker;
            self.surface.close_popup(id);
            self.surface.unbind_popup(id);
            self.surface.remove_marker(id);
        }
    }

    /// Starts a forward search for the submitted address.
    ///
    /// The returned request has to be passed to the geocoding service
    /// and its response to [`Self::finish_search`].
    pub fn submit_search(&mut self, address: &str) -> Result<SearchRequest> {
        let address = address.trim();
        if address.is_empty() {
            self.status = Status::Failed(Error::EmptyAddress);
            return Err(Error::EmptyAddress);
        }
        let token = self.requests.next_token();
        log::debug!("Search address '{address}' ({token:?})");
        self.status = Status::Searching;
        Ok(SearchRequest {
            token,
            address: address.to_string(),
        })
    }

    /// Shows the first hit of a forward search.
    pub fn finish_search<E>(
        &mut self,
        token: RequestToken,
        response: std::result::Result<Vec<SearchResult>, E>,
    ) -> Result<Outcome>
    where
        E: Display,
    {
        if !self.requests.complete(token) {
            log::debug!("Discard response of superseded search ({token:?})");
            return Ok(Outcome::Discarded);
        }
        let res = response
            .map_err(|err| Error::Lookup(err.to_string()))
            .and_then(|results| results.into_iter().next().ok_or(Error::NotFound))
            .and_then(|first| self.add_marker(&first));
        self.settle(res)
    }

    /// Places a marker at the clicked position right away
    /// and starts resolving its address.
    ///
    /// The marker stays where the user clicked, even on a repeated
    /// copy of the world; only the lookup uses the wrapped position.
    pub fn click(&mut self, clicked: MapPoint) -> Result<ReverseRequest> {
        let pos = clicked.wrap_lng();
        if !pos.is_valid() {
            self.status = Status::Failed(Error::InvalidPosition);
            return Err(Error::InvalidPosition);
        }
        let marker = self.place_marker(clicked);
        let token = self.requests.next_token();
        log::debug!("Resolve address at ({}, {}) ({token:?})", pos.lat, pos.lng);
        self.status = Status::Resolving;
        Ok(ReverseRequest { token, marker, pos })
    }

    /// Labels the marker placed by [`Self::click`] with the
    /// last address candidate that has something to show.
    pub fn finish_reverse<E>(
        &mut self,
        request: ReverseRequest,
        response: std::result::Result<Vec<ReverseResult>, E>,
    ) -> Result<Outcome>
    where
        E: Display,
    {
        let ReverseRequest {
            token, marker: id, ..
        } = request;
        if !self.requests.complete(token) {
            log::debug!("Discard response of superseded reverse lookup ({token:?})");
            return Ok(Outcome::Discarded);
        }
        if !self.markers.contains(id) {
            log::warn!("The clicked {id} has been removed in the meantime");
            self.status = Status::Idle;
            return Ok(Outcome::Discarded);
        }
        let res = response
            .map_err(|err| Error::Lookup(err.to_string()))
            .and_then(|candidates| {
                candidates
                    .iter()
                    .filter_map(address_label)
                    .last()
                    .ok_or(Error::NotFound)
            })
            .map(|label| self.show_popup(id, label));
        self.settle(res)
    }

    pub fn markers(&self) -> &[Marker] {
        self.markers.as_slice()
    }

    pub const fn status(&self) -> &Status {
        &self.status
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    fn place_marker(&mut self, pos: MapPoint) -> MarkerId {
        self.clear_map();
        let id = self.markers.add(pos);
        self.surface.add_marker(id, pos);
        debug_assert_eq!(self.markers.len(), 1);
        id
    }

    fn show_popup(&mut self, id: MarkerId, label: String) {
        self.surface.bind_popup(id, &label);
        self.surface.open_popup(id);
        if let Some(marker) = self.markers.get_mut(id) {
            marker.label = Some(label);
            marker.popup_open = true;
        }
    }

    fn settle<T>(&mut self, res: Result<T>) -> Result<Outcome> {
        match res {
            Ok(_) => {
                self.status = Status::Idle;
                Ok(Outcome::Applied)
            }
            Err(err) => {
                log::error!("Lookup failed: {err}");
                self.status = Status::Failed(err.clone());
                Err(err)
            }
        }
    }
}
