//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu category
///
/// Fixed set used for filtering and for the grouped menu display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    Appetizers,
    #[serde(rename = "Main Courses")]
    MainCourses,
    Desserts,
    Beverages,
}

impl MenuCategory {
    /// All categories in display order
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Appetizers,
        MenuCategory::MainCourses,
        MenuCategory::Desserts,
        MenuCategory::Beverages,
    ];

    /// Display label (matches the fixture spelling)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Appetizers => "Appetizers",
            Self::MainCourses => "Main Courses",
            Self::Desserts => "Desserts",
            Self::Beverages => "Beverages",
        }
    }

    /// Parse a display label back into a category
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == label)
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Menu item entity
///
/// Read-only from the flows' perspective; only the menu collaborator's
/// create/update calls mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: MenuCategory,
    pub price: f64,
    pub description: String,
    pub image_url: String,
    /// Dietary tags, e.g. "Vegetarian", "Gluten-Free"
    #[serde(default)]
    pub dietary: Vec<String>,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    pub category: MenuCategory,
    pub price: f64,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub dietary: Vec<String>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub category: Option<MenuCategory>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub dietary: Option<Vec<String>>,
}
