use leptos::*;

use ariadna_core::{MapConfig, MapController, MapPoint, Status, TileLayer};
use ariadna_frontend_api::GeocodingApi;

use super::{LeafletSurface, Map, SearchForm};

type Controller = MapController<LeafletSurface>;

/// Search form, status line and map with a single selected address.
#[component]
pub fn MapWidget<A>(api: A, config: MapConfig) -> impl IntoView
where
    A: GeocodingApi + Clone + 'static,
{
    // -- signals -- //

    let map = RwSignal::<Option<leaflet::Map>>::new(None);
    let tile_layer = RwSignal::<Option<TileLayer>>::new(None);
    let status = RwSignal::new(Status::Idle);
    let controller = StoredValue::new(None::<Controller>);

    // -- actions -- //

    let search_api = api.clone();
    let search = Action::new(move |address: &String| {
        let address = address.clone();
        let api = search_api.clone();
        async move {
            let Some(Ok(request)) =
                update_controller(controller, status, |c| c.submit_search(&address))
            else {
                return;
            };
            let response = api.search(&request.address).await;
            _ = update_controller(controller, status, |c| {
                c.finish_search(request.token, response)
            });
        }
    });

    let reverse = Action::new(move |pos: &MapPoint| {
        let pos = *pos;
        let api = api.clone();
        async move {
            let Some(Ok(request)) = update_controller(controller, status, |c| c.click(pos)) else {
                return;
            };
            let MapPoint { lat, lng } = request.pos;
            let response = api.reverse(lat, lng).await;
            _ = update_controller(controller, status, |c| {
                c.finish_reverse(request, response)
            });
        }
    });

    // -- callbacks -- //

    let on_search = Callback::new(move |address: String| {
        search.dispatch(address);
    });

    let on_click = Callback::new(move |pos: MapPoint| {
        reverse.dispatch(pos);
    });

    // -- effects -- //

    let MapConfig { center, zoom, .. } = config;
    Effect::new(move |_| {
        let Some(leaflet_map) = map.get() else {
            return;
        };
        if controller.with_value(Option::is_some) {
            return;
        }
        log::debug!("Leaflet map is ready");
        let surface = LeafletSurface::new(leaflet_map, tile_layer.write_only());
        controller.set_value(Some(MapController::new(surface, config.clone())));
    });

    view! {
      <SearchForm on_search />
      <StatusLine status = status.into() />
      <Map
        center
        zoom
        map = map.write_only()
        tile_layer = tile_layer.read_only()
        on_click
      />
    }
}

#[component]
fn StatusLine(status: Signal<Status>) -> impl IntoView {
    move || match status.get() {
        Status::Idle => view! { <p class="status"></p> },
        Status::Searching => view! { <p class="status">"Searching..."</p> },
        Status::Resolving => view! { <p class="status">"Resolving address..."</p> },
        Status::Failed(err) => view! { <p class="status error">{ err.to_string() }</p> },
    }
}

/// Runs `f` on the controller and publishes its new status.
///
/// Returns `None` while the leaflet map is not mounted yet.
fn update_controller<T>(
    controller: StoredValue<Option<Controller>>,
    status: RwSignal<Status>,
    f: impl FnOnce(&mut Controller) -> T,
) -> Option<T> {
    let res = controller
        .try_update_value(|c| {
            c.as_mut().map(|c| {
                let res = f(c);
                status.set(c.status().clone());
                res
            })
        })
        .flatten();
    if res.is_none() {
        log::warn!("The map is not ready yet");
    }
    res
}
