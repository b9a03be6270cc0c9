//! Platform agnostic behavior of the accommodation map widget.
//!
//! Nothing in here touches the DOM or the network:
//! the mapping library is reached through [`layer::MapSurface`]
//! and responses are handed in by the caller.

pub mod config;
pub mod filter;
pub mod layer;
pub mod marker;
pub mod presenter;
pub mod sequence;

pub use accomap_boundary as boundary;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}
