use accomap_boundary::ListingQuery;

/// An accommodation type shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Type filter code sent to the API
    pub code: String,
    pub label: String,
    pub options: Vec<FilterOption>,
}

/// A checkbox of the "More filters" group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub text: String,
}

/// The four independent facets a listing request can be narrowed by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDimensions {
    pub category: Option<String>,
    pub board: Option<String>,
    pub feature: Option<String>,
    pub theme: Option<String>,
}

impl FilterDimensions {
    #[must_use]
    pub fn into_query(self, page_size: u32, origin: &str) -> ListingQuery {
        let Self {
            category,
            board,
            feature,
            theme,
        } = self;
        ListingQuery {
            type_filter: category,
            board_filter: board,
            feature_filter: feature,
            theme_filter: theme,
            ..ListingQuery::unfiltered(page_size, origin)
        }
    }
}

/// State of the filter sidebar.
///
/// The category list is fixed at construction,
/// only the selection and the checkboxes change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    categories: Vec<Category>,
    selected: Option<usize>,
    checked: Vec<bool>,
}

impl FilterSelection {
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            selected: None,
            checked: vec![],
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&Category> {
        self.selected.and_then(|idx| self.categories.get(idx))
    }

    #[must_use]
    pub fn is_selected(&self, code: &str) -> bool {
        self.selected_category().is_some_and(|c| c.code == code)
    }

    /// Selects a category and unchecks all of its options.
    pub fn select(&mut self, code: &str) -> bool {
        let Some(idx) = self.categories.iter().position(|c| c.code == code) else {
            log::warn!("Unknown category '{code}'");
            return false;
        };
        self.selected = Some(idx);
        self.checked = vec![false; self.categories[idx].options.len()];
        true
    }

    /// Options of the selected category.
    #[must_use]
    pub fn options(&self) -> &[FilterOption] {
        self.selected_category()
            .map(|c| c.options.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_checked(&self, idx: usize) -> bool {
        self.checked.get(idx).copied().unwrap_or(false)
    }

    pub fn set_checked(&mut self, idx: usize, checked: bool) {
        match self.checked.get_mut(idx) {
            Some(state) => *state = checked,
            None => log::warn!("No filter option at index {idx}"),
        }
    }

    /// One entry per option: the value if checked, `None` otherwise.
    #[must_use]
    pub fn checked_values(&self) -> Vec<Option<String>> {
        self.options()
            .iter()
            .zip(&self.checked)
            .map(|(opt, checked)| checked.then(|| opt.value.clone()))
            .collect()
    }

    /// Maps the sidebar state onto the filter dimensions.
    ///
    /// Checkboxes are mapped by position: board, feature, theme.
    /// Board-less categories never send a board filter
    /// but keep feature and theme at positions 1 and 2.
    #[must_use]
    pub fn dimensions<F>(&self, is_board_less: F) -> Option<FilterDimensions>
    where
        F: Fn(&str) -> bool,
    {
        let category = self.selected_category()?;
        let values = self.checked_values();
        let at = |idx: usize| values.get(idx).cloned().flatten();
        let board = if is_board_less(&category.code) {
            None
        } else {
            at(0)
        };
        Some(FilterDimensions {
            category: Some(category.code.clone()),
            board,
            feature: at(1),
            theme: at(2),
        })
    }

    /// Deselects the category and drops all checkbox states.
    pub fn reset(&mut self) {
        self.selected = None;
        self.checked.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;

    fn selection() -> (WidgetConfig, FilterSelection) {
        let cfg = WidgetConfig::default();
        let selection = FilterSelection::new(cfg.categories.clone());
        (cfg, selection)
    }

    fn category(code: &str, options: &[&str]) -> Category {
        Category {
            code: code.to_string(),
            label: code.to_string(),
            options: options
                .iter()
                .map(|v| FilterOption {
                    value: (*v).to_string(),
                    text: (*v).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn nothing_selected_yields_no_dimensions() {
        let (cfg, selection) = selection();
        assert!(selection.selected_category().is_none());
        assert!(selection.dimensions(|c| cfg.is_board_less(c)).is_none());
    }

    #[test]
    fn select_unknown_category() {
        let (_, mut selection) = selection();
        assert!(!selection.select("999"));
        assert!(selection.selected_category().is_none());
    }

    #[test]
    fn map_checkboxes_by_position() {
        let (cfg, mut selection) = selection();
        assert!(selection.select("1"));
        selection.set_checked(0, true);
        selection.set_checked(2, true);
        assert_eq!(
            selection.checked_values(),
            vec![Some("16".to_string()), None, Some("1".to_string())]
        );
        let dims = selection.dimensions(|c| cfg.is_board_less(c)).unwrap();
        assert_eq!(
            dims,
            FilterDimensions {
                category: Some("1".to_string()),
                board: Some("16".to_string()),
                feature: None,
                theme: Some("1".to_string()),
            }
        );
    }

    #[test]
    fn board_less_categories_never_send_board() {
        let (cfg, mut selection) = selection();
        for code in ["2", "64"] {
            assert!(selection.select(code));
            selection.set_checked(0, true);
            selection.set_checked(1, true);
            let dims = selection.dimensions(|c| cfg.is_board_less(c)).unwrap();
            assert_eq!(dims.category.as_deref(), Some(code));
            assert_eq!(dims.board, None);
            assert!(dims.feature.is_some());
            assert_eq!(dims.theme, None);
        }
    }

    #[test]
    fn board_less_mapping_keeps_feature_and_theme_positions() {
        let mut selection = FilterSelection::new(vec![category("64", &["f1", "f2", "t1"])]);
        selection.select("64");
        selection.set_checked(0, true);
        selection.set_checked(2, true);
        assert_eq!(
            selection.checked_values(),
            vec![Some("f1".to_string()), None, Some("t1".to_string())]
        );
        let dims = selection.dimensions(|c| c == "2" || c == "64").unwrap();
        assert_eq!(dims.board, None);
        assert_eq!(dims.feature, None);
        assert_eq!(dims.theme.as_deref(), Some("t1"));
    }

    #[test]
    fn selecting_another_category_unchecks_options() {
        let (_, mut selection) = selection();
        selection.select("8");
        selection.set_checked(1, true);
        assert!(selection.is_checked(1));
        selection.select("4");
        assert!(!selection.is_checked(1));
        assert_eq!(selection.options().len(), 3);
    }

    #[test]
    fn out_of_range_checkbox_is_ignored() {
        let (_, mut selection) = selection();
        selection.select("2");
        selection.set_checked(5, true);
        assert_eq!(selection.checked_values(), vec![None, None]);
    }

    #[test]
    fn reset_clears_selection_and_checkboxes() {
        let (cfg, mut selection) = selection();
        let initial = selection.clone();
        selection.select("32");
        selection.set_checked(0, true);
        selection.reset();
        assert_eq!(selection, initial);
        assert!(selection.selected_category().is_none());
        assert!(!selection.is_checked(0));
        assert!(selection.options().is_empty());
        assert_eq!(selection.categories(), cfg.categories.as_slice());
    }

    #[test]
    fn reselect_after_reset_starts_unchecked() {
        let (_, mut selection) = selection();
        selection.select("1");
        selection.set_checked(1, true);
        selection.reset();
        assert!(selection.select("1"));
        assert_eq!(selection.checked_values(), vec![None, None, None]);
    }

    #[test]
    fn dimensions_into_query() {
        let dims = FilterDimensions {
            category: Some("8".to_string()),
            board: None,
            feature: Some("4".to_string()),
            theme: None,
        };
        let query = dims.into_query(300, "odh");
        assert_eq!(query.page_number, 1);
        assert_eq!(query.page_size, 300);
        assert!(query.distinct);
        assert_eq!(query.type_filter.as_deref(), Some("8"));
        assert_eq!(query.board_filter, None);
        assert_eq!(query.feature_filter.as_deref(), Some("4"));
        assert_eq!(query.theme_filter, None);
    }
}
