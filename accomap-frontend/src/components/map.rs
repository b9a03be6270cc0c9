use leptos::*;

use accomap_core::{config::MapViewConfig, layer::MapSurface, marker::Marker};

use crate::leaflet;

/// Leaflet map rendered into a `<div>` of this component tree.
pub struct LeafletSurface {
    container: NodeRef<html::Div>,
    map: Option<leaflet::Map>,
}

impl LeafletSurface {
    #[must_use]
    pub const fn new(container: NodeRef<html::Div>) -> Self {
        Self {
            container,
            map: None,
        }
    }
}

impl MapSurface for LeafletSurface {
    type Layer = leaflet::MarkerClusterGroup;

    fn init_map(&mut self, view: &MapViewConfig) {
        let container = self
            .container
            .get_untracked()
            .expect("map container element");
        self.map = Some(leaflet::create_map(&container, view));
    }

    fn add_cluster_layer(&mut self, markers: &[Marker]) -> Self::Layer {
        let group = leaflet::cluster_group(markers);
        match &self.map {
            Some(map) => {
                map.add_layer(&group);
            }
            None => log::warn!("No leaflet map found"),
        }
        group
    }

    fn remove_layer(&mut self, layer: Self::Layer) {
        layer.clear_layers();
        if let Some(map) = &self.map {
            map.remove_layer(&layer);
        }
    }
}

#[component]
pub fn MapView(container: NodeRef<html::Div>) -> impl IntoView {
    view! {
      <div id="map" class="map" node_ref=container></div>
    }
}
