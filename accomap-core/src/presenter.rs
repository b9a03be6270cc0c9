use std::fmt::Display;

use accomap_boundary::{AccommodationList, ListingQuery};

use crate::{
    config::WidgetConfig,
    filter::{FilterDimensions, FilterSelection},
    layer::{LayerState, MapController, MapSurface},
    marker::markers_from_listings,
    sequence::{RequestSequence, Ticket},
};

/// A request the caller has to perform and hand back via
/// [`MapPresenter::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDraw {
    pub ticket: Ticket,
    pub query: ListingQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A new marker layer is on the map.
    Drawn { listings: usize, markers: usize },
    /// A newer request was issued in the meantime.
    Stale,
    /// Nothing was changed on the map.
    Failed(String),
}

/// Orchestrates fetching listings and redrawing the marker layer.
pub struct MapPresenter<S: MapSurface> {
    config: WidgetConfig,
    map: MapController<S>,
    requests: RequestSequence,
}

impl<S: MapSurface> MapPresenter<S> {
    pub const fn new(config: WidgetConfig, surface: S) -> Self {
        Self {
            config,
            map: MapController::new(surface),
            requests: RequestSequence::new(),
        }
    }

    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub const fn map(&self) -> &MapController<S> {
        &self.map
    }

    pub fn state(&self) -> LayerState {
        self.map.state()
    }

    pub fn initialize_map(&mut self) {
        self.map.initialize_map(&self.config.map);
    }

    /// Requests the first page of all listings.
    pub fn draw_map(&mut self) -> PendingDraw {
        let query = ListingQuery::unfiltered(self.config.api.page_size, &self.config.api.origin);
        self.issue(query)
    }

    pub fn draw_map_with_filters(&mut self, filters: FilterDimensions) -> PendingDraw {
        let query = filters.into_query(self.config.api.page_size, &self.config.api.origin);
        self.issue(query)
    }

    fn issue(&mut self, query: ListingQuery) -> PendingDraw {
        let ticket = self.requests.issue();
        log::debug!("Issue request #{} {query:?}", ticket.number());
        PendingDraw { ticket, query }
    }

    /// Applies the response of a pending draw.
    pub fn complete<E>(
        &mut self,
        ticket: Ticket,
        response: Result<AccommodationList, E>,
    ) -> DrawOutcome
    where
        E: Display,
    {
        if !self.requests.is_current(ticket) {
            log::debug!("Discard stale response #{}", ticket.number());
            return DrawOutcome::Stale;
        }
        let list = match response {
            Ok(list) => list,
            Err(err) => {
                log::error!("Unable to draw accommodations: {err}");
                return DrawOutcome::Failed(err.to_string());
            }
        };
        let markers = markers_from_listings(&list, &self.config.markers);
        if let Err(err) = self.map.install(&markers) {
            log::error!("Unable to draw accommodations: {err}");
            return DrawOutcome::Failed(err.to_string());
        }
        log::info!(
            "Showing {} of {} accommodations",
            markers.len(),
            list.items.len()
        );
        DrawOutcome::Drawn {
            listings: list.items.len(),
            markers: markers.len(),
        }
    }

    pub fn clear_markers(&mut self) {
        self.map.clear_markers();
    }

    /// Clears the map and requests the listings matching the sidebar state.
    pub fn confirm(&mut self, selection: &FilterSelection) -> Option<PendingDraw> {
        let config = &self.config;
        let Some(filters) = selection.dimensions(|code| config.is_board_less(code)) else {
            log::info!("No category selected");
            return None;
        };
        log::debug!("Selected filters: {filters:?}");
        self.clear_markers();
        Some(self.draw_map_with_filters(filters))
    }

    /// Restores the default categories and removes all markers
    /// without drawing the unfiltered listings again.
    pub fn reset(&mut self, selection: &mut FilterSelection) {
        selection.reset();
        self.requests.invalidate();
        self.clear_markers();
    }
}
