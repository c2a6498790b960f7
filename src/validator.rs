//! Cross-reference validation of layouts against themes and icon sets.
//!
//! Checks that every `theme_color` a category declares exists as a color
//! variant of the resolved theme, and every `icon_name` exists in the icon
//! set. All violations are collected in one pass so the user sees the full
//! list at once.

use crate::icons::IconSet;
use crate::models::Layout;
use crate::theme::Theme;

/// A single broken reference found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceViolation {
    /// A category names a color variant the theme does not define
    UnknownThemeColor {
        /// Category declaring the reference
        category: String,
        /// The color variant it asked for
        color: String,
        /// Display name of the theme that lacks it
        theme: String,
        /// Color variants the theme does define, sorted
        valid_colors: Vec<String>,
    },
    /// A category names an icon the icon set does not contain
    UnknownIcon {
        /// Category declaring the reference
        category: String,
        /// The icon it asked for
        icon: String,
        /// Icons the set does contain, sorted
        valid_icons: Vec<String>,
    },
}

impl std::fmt::Display for ReferenceViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownThemeColor {
                category,
                color,
                theme,
                valid_colors,
            } => write!(
                f,
                "Category '{category}' references theme color '{color}' which is not defined by theme '{theme}'. Valid colors: {}",
                join_or_none(valid_colors)
            ),
            Self::UnknownIcon {
                category,
                icon,
                valid_icons,
            } => write!(
                f,
                "Category '{category}' references icon '{icon}' which is not in the icon set. Valid icons: {}",
                join_or_none(valid_icons)
            ),
        }
    }
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

/// Outcome of a reference validation pass.
#[derive(Debug, Clone, Default)]
pub struct ReferenceReport {
    violations: Vec<ReferenceViolation>,
}

impl ReferenceReport {
    /// True when no violations were found.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The collected violations, in category order.
    #[must_use]
    pub fn violations(&self) -> &[ReferenceViolation] {
        &self.violations
    }

    /// All violation messages joined into one report, or `None` when valid.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        if self.violations.is_empty() {
            return None;
        }
        let lines: Vec<String> = self.violations.iter().map(ToString::to_string).collect();
        Some(lines.join("\n"))
    }
}

/// Validates every category reference of `layout` against `theme` and `icons`.
///
/// Categories without a `theme_color` or `icon_name` are fine; the fields are
/// optional. A theme without color variants makes every color reference a
/// violation. The pass never short-circuits, so the report lists every broken
/// reference.
#[must_use]
pub fn validate_references(layout: &Layout, theme: &Theme, icons: &IconSet) -> ReferenceReport {
    let theme_name = theme.name().unwrap_or("unknown").to_string();
    let valid_colors = theme.variant_names();
    let valid_icons = icons.names();

    let mut violations = Vec::new();

    for category in &layout.categories {
        if let Some(color) = &category.theme_color {
            if !valid_colors.iter().any(|valid| valid == color) {
                violations.push(ReferenceViolation::UnknownThemeColor {
                    category: category.name.clone(),
                    color: color.clone(),
                    theme: theme_name.clone(),
                    valid_colors: valid_colors.clone(),
                });
            }
        }

        if let Some(icon) = &category.icon_name {
            if !icons.contains(icon) {
                violations.push(ReferenceViolation::UnknownIcon {
                    category: category.name.clone(),
                    icon: icon.clone(),
                    valid_icons: valid_icons.clone(),
                });
            }
        }
    }

    ReferenceReport { violations }
}
