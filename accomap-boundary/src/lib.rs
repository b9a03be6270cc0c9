use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Response of `GET /Accommodation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccommodationList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u64>,
    pub items: Vec<Accommodation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Accommodation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Entries may be `null`; only the first one is relevant.
    #[serde(default, deserialize_with = "null_as_default")]
    pub gps_info: Vec<Option<GpsInfo>>,
    /// Details per language code, a language may map to `null`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub acco_detail: HashMap<String, Option<AccoDetail>>,
}

impl Accommodation {
    /// The first GPS entry, if the listing has any.
    #[must_use]
    pub fn first_gps_info(&self) -> Option<&GpsInfo> {
        self.gps_info.first().and_then(Option::as_ref)
    }

    #[must_use]
    pub fn detail(&self, lang: &str) -> Option<&AccoDetail> {
        self.acco_detail.get(lang).and_then(Option::as_ref)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GpsInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpstype: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccoDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
}

/// Query parameters of `GET /Accommodation`.
///
/// Filters that are `None` are not sent at all,
/// the server treats them as "no filter" for that dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub page_number: u32,
    pub page_size: u32,
    pub distinct: bool,
    pub origin: String,
    pub type_filter: Option<String>,
    pub board_filter: Option<String>,
    pub feature_filter: Option<String>,
    pub theme_filter: Option<String>,
}

impl ListingQuery {
    /// First page without any filter.
    #[must_use]
    pub fn unfiltered(page_size: u32, origin: impl Into<String>) -> Self {
        Self {
            page_number: 1,
            page_size,
            distinct: true,
            origin: origin.into(),
            type_filter: None,
            board_filter: None,
            feature_filter: None,
            theme_filter: None,
        }
    }

    #[must_use]
    pub fn is_filtered(&self) -> bool {
        let Self {
            type_filter,
            board_filter,
            feature_filter,
            theme_filter,
            ..
        } = self;
        type_filter.is_some()
            || board_filter.is_some()
            || feature_filter.is_some()
            || theme_filter.is_some()
    }

    /// Unencoded key/value pairs in a stable order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let Self {
            page_number,
            page_size,
            distinct,
            origin,
            type_filter,
            board_filter,
            feature_filter,
            theme_filter,
        } = self;
        let mut params = vec![
            ("pagenumber", page_number.to_string()),
            ("pagesize", page_size.to_string()),
        ];
        let filters = [
            ("typefilter", type_filter),
            ("boardfilter", board_filter),
            ("featurefilter", feature_filter),
            ("themefilter", theme_filter),
        ];
        for (key, value) in filters {
            if let Some(value) = value {
                params.push((key, value.clone()));
            }
        }
        params.push(("distinct", distinct.to_string()));
        params.push(("origin", origin.clone()));
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_listing_with_coordinates() {
        let json = r#"{"Items":[{"GpsInfo":[{"Latitude":46.5,"Longitude":11.3}],"AccoDetail":{"en":{"Name":"Hotel A","City":"Bolzano","Street":"Via X"}}}]}"#;
        let list: AccommodationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.items.len(), 1);
        let item = &list.items[0];
        let gps = item.first_gps_info().unwrap();
        assert_eq!(gps.latitude, Some(46.5));
        assert_eq!(gps.longitude, Some(11.3));
        let detail = item.detail("en").unwrap();
        assert_eq!(detail.name.as_deref(), Some("Hotel A"));
        assert_eq!(detail.city.as_deref(), Some("Bolzano"));
        assert_eq!(detail.street.as_deref(), Some("Via X"));
        assert!(item.detail("de").is_none());
    }

    #[test]
    fn deserialize_listing_without_gps_info() {
        let json = r#"{"Items":[{"AccoDetail":{"en":{"Name":"NoCoords"}}}]}"#;
        let list: AccommodationList = serde_json::from_str(json).unwrap();
        assert!(list.items[0].first_gps_info().is_none());
    }

    #[test]
    fn deserialize_null_gps_info_and_paging() {
        let json = r#"{"TotalResults":1,"TotalPages":1,"CurrentPage":1,"Items":[{"Id":"X","GpsInfo":null,"AccoDetail":{}}]}"#;
        let list: AccommodationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.total_results, Some(1));
        assert_eq!(list.items[0].id.as_deref(), Some("X"));
        assert!(list.items[0].first_gps_info().is_none());
    }

    #[test]
    fn deserialize_null_details() {
        let json = r#"{"Items":[
            {"GpsInfo":[{"Latitude":46.5,"Longitude":11.3}],"AccoDetail":null},
            {"GpsInfo":[{"Latitude":46.6,"Longitude":11.4}],"AccoDetail":{"en":null,"de":{"Name":"Hotel B"}}}
        ]}"#;
        let list: AccommodationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.items.len(), 2);
        assert!(list.items[0].detail("en").is_none());
        assert!(list.items[0].first_gps_info().is_some());
        assert!(list.items[1].detail("en").is_none());
        assert_eq!(
            list.items[1].detail("de").unwrap().name.as_deref(),
            Some("Hotel B")
        );
    }

    #[test]
    fn deserialize_null_gps_entries() {
        let json = r#"{"Items":[
            {"GpsInfo":[null],"AccoDetail":{}},
            {"GpsInfo":[null,{"Latitude":46.6,"Longitude":11.4}]}
        ]}"#;
        let list: AccommodationList = serde_json::from_str(json).unwrap();
        assert!(list.items[0].first_gps_info().is_none());
        assert!(list.items[1].first_gps_info().is_none());
        assert_eq!(list.items[1].gps_info.len(), 2);
    }

    #[test]
    fn reject_response_without_items() {
        let json = r#"{"TotalResults":0}"#;
        assert!(serde_json::from_str::<AccommodationList>(json).is_err());
    }

    #[test]
    fn unfiltered_query_pairs() {
        let query = ListingQuery::unfiltered(300, "webcomp");
        assert!(!query.is_filtered());
        assert_eq!(
            query.query_pairs(),
            vec![
                ("pagenumber", "1".to_string()),
                ("pagesize", "300".to_string()),
                ("distinct", "true".to_string()),
                ("origin", "webcomp".to_string()),
            ]
        );
    }

    #[test]
    fn absent_filters_are_omitted() {
        let query = ListingQuery {
            type_filter: Some("64".into()),
            theme_filter: Some("t1".into()),
            ..ListingQuery::unfiltered(300, "webcomp")
        };
        assert!(query.is_filtered());
        let pairs = query.query_pairs();
        let keys: Vec<_> = pairs.iter().map(|(k, _)| *k).collect();
        assert!(keys.contains(&"typefilter"));
        assert!(keys.contains(&"themefilter"));
        assert!(!keys.contains(&"boardfilter"));
        assert!(!keys.contains(&"featurefilter"));
    }
}
