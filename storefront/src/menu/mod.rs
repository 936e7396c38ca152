//! Menu browsing
//!
//! Category filtering, text search and grouped display over the menu
//! collaborator's records. Pure functions; nothing here mutates items.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MenuCategory, MenuItem};

/// Active menu filter state
///
/// `category: None` means "All". The search term matches name or
/// description, case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub category: Option<MenuCategory>,
    pub search: String,
}

impl MenuFilter {
    /// Show everything
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one category
    pub fn with_category(category: MenuCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    /// Whether an item passes both the category and the search filter
    pub fn matches(&self, item: &MenuItem) -> bool {
        if let Some(category) = self.category {
            if item.category != category {
                return false;
            }
        }
        if self.search.trim().is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        item.name.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle)
    }
}

/// Parse a filter-bar label; "All" clears the category restriction
pub fn parse_category_label(label: &str) -> AppResult<Option<MenuCategory>> {
    if label == "All" {
        return Ok(None);
    }
    MenuCategory::parse(label)
        .map(Some)
        .ok_or_else(|| AppError::new(ErrorCode::CategoryUnknown).with_detail("category", label))
}

/// Items passing the filter, in input order
pub fn filter_items<'a>(items: &'a [MenuItem], filter: &MenuFilter) -> Vec<&'a MenuItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Filtered items grouped per category, in category display order
///
/// Categories whose group comes up empty are kept with an empty list,
/// matching the grouped menu display.
pub fn group_by_category<'a>(
    items: &'a [MenuItem],
    filter: &MenuFilter,
) -> Vec<(MenuCategory, Vec<&'a MenuItem>)> {
    let filtered = filter_items(items, filter);
    MenuCategory::ALL
        .iter()
        .map(|&category| {
            let group: Vec<&MenuItem> = filtered
                .iter()
                .copied()
                .filter(|item| item.category == category)
                .collect();
            (category, group)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, category: MenuCategory, description: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            category,
            price: 10.0,
            description: description.to_string(),
            image_url: String::new(),
            dietary: vec![],
        }
    }

    fn sample() -> Vec<MenuItem> {
        vec![
            item("1", "Bruschetta", MenuCategory::Appetizers, "Grilled bread with tomato"),
            item("2", "Grilled Salmon", MenuCategory::MainCourses, "Atlantic salmon"),
            item("3", "Tiramisu", MenuCategory::Desserts, "Classic Italian dessert"),
            item("4", "Espresso", MenuCategory::Beverages, "Double shot"),
            item("5", "Salmon Tartare", MenuCategory::Appetizers, "Fresh salmon, capers"),
        ]
    }

    #[test]
    fn no_filter_passes_everything() {
        let items = sample();
        assert_eq!(filter_items(&items, &MenuFilter::all()).len(), items.len());
    }

    #[test]
    fn category_filter_restricts() {
        let items = sample();
        let filtered = filter_items(&items, &MenuFilter::with_category(MenuCategory::Appetizers));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|i| i.category == MenuCategory::Appetizers));
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let items = sample();
        let filter = MenuFilter {
            category: None,
            search: "SALMON".to_string(),
        };
        // "Grilled Salmon" (name), "Salmon Tartare" (name), and the
        // salmon description of item 2 collapse to two matches
        let filtered = filter_items(&items, &filter);
        assert_eq!(filtered.len(), 2);

        let filter = MenuFilter {
            category: None,
            search: "italian".to_string(),
        };
        let filtered = filter_items(&items, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "3");
    }

    #[test]
    fn search_and_category_combine() {
        let items = sample();
        let filter = MenuFilter {
            category: Some(MenuCategory::MainCourses),
            search: "salmon".to_string(),
        };
        let filtered = filter_items(&items, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn grouping_keeps_display_order_and_empty_groups() {
        let items = sample();
        let filter = MenuFilter {
            category: None,
            search: "salmon".to_string(),
        };
        let groups = group_by_category(&items, &filter);
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].0, MenuCategory::Appetizers);
        assert_eq!(groups[0].1.len(), 1);
        assert_eq!(groups[1].0, MenuCategory::MainCourses);
        assert_eq!(groups[1].1.len(), 1);
        assert!(groups[2].1.is_empty());
        assert!(groups[3].1.is_empty());
    }

    #[test]
    fn all_label_clears_the_category() {
        assert_eq!(parse_category_label("All").unwrap(), None);
        assert_eq!(
            parse_category_label("Main Courses").unwrap(),
            Some(MenuCategory::MainCourses)
        );
        let err = parse_category_label("Sides").unwrap_err();
        assert_eq!(err.code, ErrorCode::CategoryUnknown);
    }
}
