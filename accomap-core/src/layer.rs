use thiserror::Error;

use crate::{config::MapViewConfig, marker::Marker};

/// The mapping library as seen by the widget.
pub trait MapSurface {
    /// Handle of an installed clustering layer.
    type Layer;

    /// Creates the map view and attaches the base tile layer.
    fn init_map(&mut self, view: &MapViewConfig);

    /// Groups the markers into a new clustering layer and adds it to the map.
    fn add_cluster_layer(&mut self, markers: &[Marker]) -> Self::Layer;

    /// Removes the layer and all its markers from the map.
    fn remove_layer(&mut self, layer: Self::Layer);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayerError {
    #[error("The map has not been initialized")]
    NotInitialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerState {
    /// No map yet
    Empty,
    /// Map without markers
    Ready,
    /// Map with exactly one marker layer
    Populated,
}

/// Owns the map and its (single) marker layer.
pub struct MapController<S: MapSurface> {
    surface: S,
    initialized: bool,
    layer: Option<S::Layer>,
    marker_count: usize,
}

impl<S: MapSurface> MapController<S> {
    pub const fn new(surface: S) -> Self {
        Self {
            surface,
            initialized: false,
            layer: None,
            marker_count: 0,
        }
    }

    pub fn state(&self) -> LayerState {
        match (self.initialized, &self.layer) {
            (false, _) => LayerState::Empty,
            (true, None) => LayerState::Ready,
            (true, Some(_)) => LayerState::Populated,
        }
    }

    /// Number of markers in the current layer.
    pub const fn marker_count(&self) -> usize {
        self.marker_count
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn initialize_map(&mut self, view: &MapViewConfig) {
        if self.initialized {
            log::warn!("Map is already initialized");
            return;
        }
        log::debug!("Initialize map at {:?} (zoom {})", view.center, view.zoom);
        self.surface.init_map(view);
        self.initialized = true;
    }

    /// Replaces the current marker layer (if any) by a new one.
    pub fn install(&mut self, markers: &[Marker]) -> Result<(), LayerError> {
        if !self.initialized {
            return Err(LayerError::NotInitialized);
        }
        self.clear_markers();
        let layer = self.surface.add_cluster_layer(markers);
        self.layer = Some(layer);
        self.marker_count = markers.len();
        log::debug!("Installed layer with {} markers", markers.len());
        Ok(())
    }

    pub fn clear_markers(&mut self) {
        if let Some(layer) = self.layer.take() {
            self.surface.remove_layer(layer);
            self.marker_count = 0;
            log::debug!("Removed marker layer");
        }
    }
}
