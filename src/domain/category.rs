//! Domain types representing spending categories.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::CategoryId;

/// Categorises expenses for summary and reporting.
///
/// Categories are configuration data edited by a settings surface outside
/// this core; aggregation treats them as read-only context. Hidden
/// categories are not offered for new expenses but keep resolving for
/// records that already reference them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub visible: bool,
}

impl Category {
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            visible: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

const FALLBACK_ICON: &str = "tag";
const FALLBACK_COLOR: &str = "#9e9e9e";

static ICONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("food", "utensils"),
        ("daily", "cart"),
        ("transport", "train"),
        ("social", "users"),
        ("hobby", "gamepad"),
        ("clothing", "shirt"),
        ("medical", "heart-pulse"),
        ("utility", "plug"),
        ("housing", "home"),
        ("other", "tag"),
    ])
});

static COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("food", "#e53935"),
        ("daily", "#fb8c00"),
        ("transport", "#1e88e5"),
        ("social", "#43a047"),
        ("hobby", "#8e24aa"),
        ("clothing", "#d81b60"),
        ("medical", "#00acc1"),
        ("utility", "#fdd835"),
        ("housing", "#6d4c41"),
        ("other", "#9e9e9e"),
    ])
});

/// Resolves a category's icon tag to a concrete glyph name. Unknown tags
/// fall back to a neutral default.
pub fn category_icon(tag: &str) -> &'static str {
    ICONS.get(tag).copied().unwrap_or(FALLBACK_ICON)
}

/// Resolves a category's color tag to a concrete color value. Unknown tags
/// fall back to a neutral default.
pub fn category_color(tag: &str) -> &'static str {
    COLORS.get(tag).copied().unwrap_or(FALLBACK_COLOR)
}
