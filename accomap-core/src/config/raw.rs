use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("widget.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub map: Option<Map>,
    pub markers: Option<Markers>,
    pub filters: Option<Filters>,
    pub categories: Option<Vec<Category>>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub base_url: String,
    pub origin: String,
    pub page_size: u32,
}

impl Default for Api {
    fn default() -> Self {
        Config::default().api.expect("API configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub center: [f64; 2],
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Markers {
    pub popup_language: String,
    pub color: String,
}

impl Default for Markers {
    fn default() -> Self {
        Config::default().markers.expect("Marker configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Filters {
    pub board_less_categories: Vec<String>,
}

impl Default for Filters {
    fn default() -> Self {
        Config::default().filters.expect("Filter configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Category {
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub options: Vec<FilterOption>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FilterOption {
    pub value: String,
    pub text: String,
}

pub fn default_categories() -> Vec<Category> {
    Config::default().categories.expect("Category configuration")
}
