//! Leaflet map setup and the Leaflet.markercluster plugin binding.
//!
//! Both libraries are expected as globals (`L`) on the host page.

use js_sys::Array;
use leaflet::{
    DivIcon, DivIconOptions, LatLng, MapOptions, Marker, MarkerOptions, Point, Popup,
    PopupOptions, TileLayer, TileLayerOptions,
};
pub use leaflet::Map;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use accomap_core::{
    config::MapViewConfig,
    marker::{cluster_icon_html, Marker as MarkerData, CLUSTER_ICON_SIZE, MARKER_ICON_SIZE},
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = leaflet::FeatureGroup, extends = leaflet::LayerGroup, extends = leaflet::Layer, extends = js_sys::Object)]
    #[derive(Debug, Clone)]
    pub type MarkerClusterGroup;

    #[wasm_bindgen(js_namespace = L, js_name = markerClusterGroup)]
    fn new_marker_cluster_group(options: &js_sys::Object) -> MarkerClusterGroup;

    #[wasm_bindgen(method, js_name = addLayers)]
    fn add_layers(this: &MarkerClusterGroup, layers: &Array) -> MarkerClusterGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &MarkerClusterGroup) -> MarkerClusterGroup;

    #[wasm_bindgen(extends = js_sys::Object)]
    pub type MarkerCluster;

    #[wasm_bindgen(method, js_name = getChildCount)]
    fn get_child_count(this: &MarkerCluster) -> usize;

    #[wasm_bindgen(extends = js_sys::Object)]
    type MarkerClusterGroupOptions;

    #[wasm_bindgen(method, setter, js_name = showCoverageOnHover)]
    fn set_show_coverage_on_hover(this: &MarkerClusterGroupOptions, val: bool);

    #[wasm_bindgen(method, setter, js_name = chunkedLoading)]
    fn set_chunked_loading(this: &MarkerClusterGroupOptions, val: bool);

    #[wasm_bindgen(method, setter, js_name = iconCreateFunction)]
    fn set_icon_create_function(this: &MarkerClusterGroupOptions, val: &JsValue);
}

impl MarkerClusterGroupOptions {
    fn new() -> Self {
        js_sys::Object::new().unchecked_into()
    }
}

fn icon_size(edge: u32) -> Point {
    Point::new(f64::from(edge), f64::from(edge))
}

fn div_icon(html: String, edge: u32) -> DivIcon {
    let options = DivIconOptions::new();
    options.set_html(html);
    options.set_icon_size(icon_size(edge));
    DivIcon::new(&options)
}

/// Creates the map view with its base tile layer.
pub fn create_map(container: &HtmlElement, view: &MapViewConfig) -> Map {
    let options = MapOptions::new();
    options.set_zoom_control(false);
    let map = Map::new_with_element(container, &options);
    map.set_view(
        &LatLng::new(view.center.lat, view.center.lng),
        f64::from(view.zoom),
    );
    let tile_options = TileLayerOptions::new();
    tile_options.set_attribution(view.attribution.clone());
    let tiles = TileLayer::new_options(&view.tile_url, &tile_options);
    map.add_layer(&tiles);
    map
}

fn marker(data: &MarkerData) -> Marker {
    let options = MarkerOptions::new();
    options.set_icon(div_icon(data.icon_html.clone(), MARKER_ICON_SIZE).into());
    let marker = Marker::new_with_options(
        &LatLng::new(data.position.lat, data.position.lng),
        &options,
    );
    let popup = Popup::new(&PopupOptions::new(), None);
    popup.set_content(&JsValue::from_str(&data.popup_html));
    marker.bind_popup(&popup);
    marker
}

/// Groups the markers into a new (detached) clustering layer.
pub fn cluster_group(markers: &[MarkerData]) -> MarkerClusterGroup {
    let create_icon = Closure::<dyn Fn(MarkerCluster) -> JsValue>::new(|cluster: MarkerCluster| {
        let count = cluster.get_child_count();
        JsValue::from(div_icon(cluster_icon_html(count), CLUSTER_ICON_SIZE))
    });
    let options = MarkerClusterGroupOptions::new();
    options.set_show_coverage_on_hover(false);
    options.set_chunked_loading(true);
    options.set_icon_create_function(&create_icon.into_js_value());
    let group = new_marker_cluster_group(&options);
    let layers = markers.iter().map(marker).collect::<Array>();
    group.add_layers(&layers);
    group
}
