use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use accomap_boundary::{AccommodationList, ListingQuery};

use crate::{into_json, Result};

const ACCOMMODATION_PATH: &str = "/Accommodation";

/// Public tourism API
#[derive(Debug, Clone)]
pub struct AccommodationApi {
    url: String,
}

impl AccommodationApi {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_string();
        Self { url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn accommodations(&self, query: &ListingQuery) -> Result<AccommodationList> {
        let url = accommodations_url(&self.url, query);
        log::debug!("GET {url}");
        let result = fetch(&url).await;
        if let Err(err) = &result {
            log::error!("Unable to fetch accommodations: {err}");
        }
        result
    }
}

async fn fetch(url: &str) -> Result<AccommodationList> {
    let response = Request::get(url).send().await?;
    into_json(response).await
}

#[must_use]
pub fn accommodations_url(base_url: &str, query: &ListingQuery) -> String {
    let params = query
        .query_pairs()
        .into_iter()
        .map(|(key, value)| {
            let encoded_value = utf8_percent_encode(&value, NON_ALPHANUMERIC);
            format!("{key}={encoded_value}")
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{base_url}{ACCOMMODATION_PATH}?{params}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_url() {
        let query = ListingQuery::unfiltered(300, "webcomp-map");
        assert_eq!(
            accommodations_url("https://api.example.com/v1", &query),
            "https://api.example.com/v1/Accommodation?pagenumber=1&pagesize=300&distinct=true&origin=webcomp%2Dmap"
        );
    }

    #[test]
    fn filtered_url_omits_absent_filters() {
        let query = ListingQuery {
            type_filter: Some("64".to_string()),
            theme_filter: Some("t1".to_string()),
            ..ListingQuery::unfiltered(300, "odh")
        };
        let url = accommodations_url("https://api.example.com/v1", &query);
        assert!(url.contains("typefilter=64"));
        assert!(url.contains("themefilter=t1"));
        assert!(!url.contains("boardfilter"));
        assert!(!url.contains("featurefilter"));
    }

    #[test]
    fn trailing_slash_of_base_url_is_removed() {
        let api = AccommodationApi::new("https://api.example.com/v1/");
        assert_eq!(api.url(), "https://api.example.com/v1");
    }
}
