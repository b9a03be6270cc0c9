use maud::html;

use accomap_boundary::{AccoDetail, Accommodation, AccommodationList};

use crate::{config::MarkerStyle, Coordinate};

/// Edge length of a single marker icon in pixels.
pub const MARKER_ICON_SIZE: u32 = 25;

/// Edge length of a cluster icon in pixels.
pub const CLUSTER_ICON_SIZE: u32 = 36;

/// Everything the mapping library needs to place one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Coordinate,
    pub icon_html: String,
    pub popup_html: String,
}

/// Builds one marker per listing that has a location.
///
/// Listings without a (complete) first GPS entry are skipped.
#[must_use]
pub fn markers_from_listings(list: &AccommodationList, style: &MarkerStyle) -> Vec<Marker> {
    let icon_html = icon_html(&style.color);
    list.items
        .iter()
        .filter_map(|item| {
            let position = position(item)?;
            let popup_html = popup_html(item.detail(&style.popup_language));
            Some(Marker {
                position,
                icon_html: icon_html.clone(),
                popup_html,
            })
        })
        .collect()
}

fn position(item: &Accommodation) -> Option<Coordinate> {
    let gps = item.first_gps_info()?;
    let pos = Coordinate::new(gps.latitude?, gps.longitude?);
    if !pos.is_valid() {
        log::debug!("Skip listing {:?} with invalid position", item.id);
        return None;
    }
    Some(pos)
}

/// Bold name, then "city, street" on the next line.
#[must_use]
pub fn popup_html(detail: Option<&AccoDetail>) -> String {
    let (name, address) = match detail {
        Some(AccoDetail { name, city, street }) => {
            let address = [city, street]
                .into_iter()
                .flatten()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            (name.as_deref().unwrap_or_default(), address)
        }
        None => ("", String::new()),
    };
    html! {
        b { (name) }
        br;
        (address)
    }
    .into_string()
}

#[must_use]
pub fn icon_html(color: &str) -> String {
    html! {
        div class="marker" style=(format!("background-color: {color}")) {}
    }
    .into_string()
}

#[must_use]
pub fn cluster_icon_html(child_count: usize) -> String {
    html! {
        div class="marker_cluster__marker" { (child_count) }
    }
    .into_string()
}
