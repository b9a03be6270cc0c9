use std::collections::HashSet;

use thiserror::Error;

use crate::{
    filter::{Category, FilterOption},
    Coordinate,
};

mod raw;

const MAX_ZOOM: u8 = 20;
const TILE_URL_PLACEHOLDERS: [&str; 3] = ["{z}", "{x}", "{y}"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    Parse(String),
    #[error("Missing API base URL")]
    MissingBaseUrl,
    #[error("Missing origin tag")]
    MissingOrigin,
    #[error("Page size must be greater than zero")]
    ZeroPageSize,
    #[error("Invalid map center ({lat}, {lng})")]
    InvalidCenter { lat: String, lng: String },
    #[error("Zoom level {0} is out of range")]
    InvalidZoom(u8),
    #[error("Tile URL '{0}' lacks a {{z}}, {{x}} or {{y}} placeholder")]
    InvalidTileUrl(String),
    #[error("Missing popup language")]
    MissingLanguage,
    #[error("Missing marker color")]
    MissingMarkerColor,
    #[error("No categories defined")]
    NoCategories,
    #[error("Category '{0}' is defined more than once")]
    DuplicateCategory(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub api: ApiConfig,
    pub map: MapViewConfig,
    pub markers: MarkerStyle,
    pub categories: Vec<Category>,
    /// Categories without a board concept.
    pub board_less_categories: HashSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub origin: String,
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapViewConfig {
    pub center: Coordinate,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle {
    /// All popups are rendered in this language.
    pub popup_language: String,
    pub color: String,
}

/// Values taken from the host page that replace configured ones.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub origin: Option<String>,
    pub language: Option<String>,
}

impl WidgetConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let raw: raw::Config = toml::from_str(s).map_err(|err| ConfigError::Parse(err.to_string()))?;
        Self::try_from(raw)
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        let Overrides {
            api_url,
            origin,
            language,
        } = overrides;
        if let Some(url) = api_url {
            log::debug!("Use API URL {url}");
            self.api.base_url = url;
        }
        if let Some(origin) = origin {
            self.api.origin = origin;
        }
        if let Some(lang) = language {
            self.markers.popup_language = lang;
        }
        self.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn is_board_less(&self, category: &str) -> bool {
        self.board_less_categories.contains(category)
    }

    fn validate(&mut self) -> Result<(), ConfigError> {
        let api = &mut self.api;
        api.base_url = api.base_url.trim().trim_end_matches('/').to_string();
        if api.base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if api.origin.trim().is_empty() {
            return Err(ConfigError::MissingOrigin);
        }
        if api.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }

        let MapViewConfig {
            center,
            zoom,
            tile_url,
            ..
        } = &self.map;
        if !center.is_valid() {
            return Err(ConfigError::InvalidCenter {
                lat: center.lat.to_string(),
                lng: center.lng.to_string(),
            });
        }
        if *zoom > MAX_ZOOM {
            return Err(ConfigError::InvalidZoom(*zoom));
        }
        if !TILE_URL_PLACEHOLDERS.iter().all(|p| tile_url.contains(p)) {
            return Err(ConfigError::InvalidTileUrl(tile_url.clone()));
        }

        if self.markers.popup_language.trim().is_empty() {
            return Err(ConfigError::MissingLanguage);
        }
        if self.markers.color.trim().is_empty() {
            return Err(ConfigError::MissingMarkerColor);
        }

        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        let mut codes = HashSet::new();
        for category in &self.categories {
            if !codes.insert(category.code.as_str()) {
                return Err(ConfigError::DuplicateCategory(category.code.clone()));
            }
        }
        for code in &self.board_less_categories {
            if !codes.contains(code.as_str()) {
                log::warn!("Board-less category '{code}' is not a configured category");
            }
        }
        Ok(())
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::try_from(raw::Config::default()).expect("Valid default configuration")
    }
}

impl TryFrom<raw::Config> for WidgetConfig {
    type Error = ConfigError;
    fn try_from(from: raw::Config) -> Result<Self, Self::Error> {
        let raw::Config {
            api,
            map,
            markers,
            filters,
            categories,
        } = from;

        let raw::Api {
            base_url,
            origin,
            page_size,
        } = api.unwrap_or_default();
        let api = ApiConfig {
            base_url,
            origin,
            page_size,
        };

        let raw::Map {
            center: [lat, lng],
            zoom,
            tile_url,
            attribution,
        } = map.unwrap_or_default();
        let map = MapViewConfig {
            center: Coordinate { lat, lng },
            zoom,
            tile_url,
            attribution,
        };

        let raw::Markers {
            popup_language,
            color,
        } = markers.unwrap_or_default();
        let markers = MarkerStyle {
            popup_language,
            color,
        };

        let raw::Filters {
            board_less_categories,
        } = filters.unwrap_or_default();

        let categories = categories
            .unwrap_or_else(raw::default_categories)
            .into_iter()
            .map(|raw::Category {
                 code,
                 label,
                 options,
             }| Category {
                code,
                label,
                options: options
                    .into_iter()
                    .map(|raw::FilterOption { value, text }| FilterOption { value, text })
                    .collect(),
            })
            .collect();

        let mut cfg = Self {
            api,
            map,
            markers,
            categories,
            board_less_categories: board_less_categories.into_iter().collect(),
        };
        cfg.validate()?;
        Ok(cfg)
    }
}
