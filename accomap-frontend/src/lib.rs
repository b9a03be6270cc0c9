use leptos::*;

use accomap_core::{
    config::{Overrides, WidgetConfig},
    filter::FilterSelection,
    presenter::{DrawOutcome, MapPresenter, PendingDraw},
};
use accomap_frontend_api::AccommodationApi;

mod components;
mod leaflet;

use components::*;

const ATTR_API_URL: &str = "data-api-url";
const ATTR_ORIGIN: &str = "data-origin";
const ATTR_LANGUAGE: &str = "data-language";

/// Reads the configuration overrides from the mount element.
pub fn load_config(mount: &web_sys::Element) -> anyhow::Result<WidgetConfig> {
    let overrides = Overrides {
        api_url: mount.get_attribute(ATTR_API_URL),
        origin: mount.get_attribute(ATTR_ORIGIN),
        language: mount.get_attribute(ATTR_LANGUAGE),
    };
    let config = WidgetConfig::default().with_overrides(overrides)?;
    Ok(config)
}

#[component]
#[must_use]
pub fn MapWidget(config: WidgetConfig) -> impl IntoView {
    // -- signals -- //

    let container = create_node_ref::<html::Div>();
    let selection = create_rw_signal(FilterSelection::new(config.categories.clone()));
    let visible = create_rw_signal(None::<usize>);
    let error = create_rw_signal(None::<String>);

    // -- state -- //

    let api = store_value(AccommodationApi::new(config.api.base_url.clone()));
    let presenter = store_value(MapPresenter::new(
        config,
        LeafletSurface::new(container),
    ));

    // -- actions -- //

    let fetch_and_draw = move |pending: PendingDraw| {
        let api = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let PendingDraw { ticket, query } = pending;
            let response = api.accommodations(&query).await;
            match presenter.try_update_value(|p| p.complete(ticket, response)) {
                Some(DrawOutcome::Drawn { markers, .. }) => {
                    visible.set(Some(markers));
                    error.set(None);
                }
                Some(DrawOutcome::Failed(err)) => {
                    error.set(Some(format!("Unable to load accommodations: {err}")));
                }
                Some(DrawOutcome::Stale) | None => {}
            }
        });
    };

    // -- callbacks -- //

    let on_confirm = move || {
        let pending = selection.with_untracked(|s| {
            presenter
                .try_update_value(|p| p.confirm(s))
                .flatten()
        });
        if let Some(pending) = pending {
            visible.set(None);
            fetch_and_draw(pending);
        }
    };

    let on_reset = move || {
        selection.update(|s| presenter.update_value(|p| p.reset(s)));
        visible.set(None);
        error.set(None);
    };

    // -- init map -- //

    container.on_load(move |_| {
        request_animation_frame(move || {
            log::info!("Initialize map");
            presenter.update_value(MapPresenter::initialize_map);
            if let Some(pending) = presenter.try_update_value(MapPresenter::draw_map) {
                fetch_and_draw(pending);
            }
        });
    });

    view! {
      <div id="map_widget">
        <div class="map-container">
          <Sidebar
            selection
            visible = visible.into()
            error = error.into()
            on_confirm
            on_reset
          />
          <MapView container />
        </div>
      </div>
    }
}
