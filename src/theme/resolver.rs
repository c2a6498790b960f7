//! Theme inheritance resolution.

use super::value::{ThemeMap, ThemeValue};
use super::Theme;
use crate::constants::{COLOR_VARIANTS_KEY, INHERITS_FROM_KEY};

/// A theme could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A referenced theme does not exist in the registry
    NotFound(String),
    /// The inheritance chain loops back on itself; holds the chain in
    /// traversal order, ending with the repeated name
    CircularInheritance(Vec<String>),
    /// A theme exists but could not be read or parsed
    Invalid {
        /// Name of the offending theme
        name: String,
        /// What was wrong with it
        reason: String,
    },
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "Theme '{name}' not found"),
            Self::CircularInheritance(chain) => {
                write!(
                    f,
                    "Circular theme inheritance detected: {}",
                    chain.join(" -> ")
                )
            }
            Self::Invalid { name, reason } => {
                write!(f, "Theme '{name}' is invalid: {reason}")
            }
        }
    }
}

impl std::error::Error for ThemeError {}

/// Lookup seam for raw (unresolved) themes.
///
/// The resolver only needs name-to-theme lookup; [`ThemeLibrary`] implements
/// this over builtin and on-disk themes, tests over in-memory maps.
///
/// [`ThemeLibrary`]: super::ThemeLibrary
pub trait ThemeRegistry {
    /// Loads the raw theme stored under `name`.
    ///
    /// # Errors
    ///
    /// [`ThemeError::NotFound`] when no such theme exists, or
    /// [`ThemeError::Invalid`] when it exists but cannot be produced.
    fn load(&self, name: &str) -> Result<Theme, ThemeError>;
}

/// Resolves a theme's full inheritance chain into one self-contained theme.
///
/// Walks `inherits_from` links parent-first, deep-merging each theme over its
/// resolved parent so child values win. The result never contains an
/// `inherits_from` key. Each resolution starts fresh, so two themes sharing a
/// common ancestor are both resolvable.
///
/// # Errors
///
/// Fails with [`ThemeError::NotFound`] for a dangling parent reference, or
/// [`ThemeError::CircularInheritance`] when the chain revisits a name.
pub fn resolve_theme(name: &str, registry: &impl ThemeRegistry) -> Result<Theme, ThemeError> {
    resolve_chain(name, registry, Vec::new())
}

fn resolve_chain(
    name: &str,
    registry: &impl ThemeRegistry,
    mut visited: Vec<String>,
) -> Result<Theme, ThemeError> {
    if visited.iter().any(|seen| seen == name) {
        visited.push(name.to_string());
        return Err(ThemeError::CircularInheritance(visited));
    }
    visited.push(name.to_string());

    let theme = registry.load(name)?;

    match theme.inherits_from().map(str::to_string) {
        Some(parent) => {
            let base = resolve_chain(&parent, registry, visited)?;
            Ok(Theme::from_map(deep_merge(base.as_map(), theme.as_map())))
        }
        None => {
            // A non-string inherits_from value lands here; drop the key so
            // resolved themes never carry it.
            let mut map = theme.into_map();
            map.remove(INHERITS_FROM_KEY);
            Ok(Theme::from_map(map))
        }
    }
}

/// Merges `overlay` over `base`, recursing into matching sections.
///
/// Scalar-over-anything and anything-over-scalar replace wholesale. The
/// `inherits_from` key is never carried into the result, and `color_variants`
/// sections merge one level deep via [`merge_color_variants`] instead of
/// recursing fully.
fn deep_merge(base: &ThemeMap, overlay: &ThemeMap) -> ThemeMap {
    let mut merged = base.clone();

    for (key, value) in overlay {
        if key == INHERITS_FROM_KEY {
            continue;
        }

        let combined = match (merged.get(key), value) {
            (Some(ThemeValue::Section(below)), ThemeValue::Section(above))
                if key == COLOR_VARIANTS_KEY =>
            {
                ThemeValue::Section(merge_color_variants(below, above))
            }
            (Some(ThemeValue::Section(below)), ThemeValue::Section(above)) => {
                ThemeValue::Section(deep_merge(below, above))
            }
            _ => value.clone(),
        };
        merged.insert(key.clone(), combined);
    }

    merged
}

/// Merges color variants one level deep.
///
/// A variant present in both maps merges per key, the overlay's entries
/// overwriting the base's wholesale, so a variant override keeps the base's
/// untouched siblings. An overlay variant that is not a section replaces the
/// base variant entirely.
fn merge_color_variants(base: &ThemeMap, overlay: &ThemeMap) -> ThemeMap {
    let mut merged = base.clone();

    for (name, value) in overlay {
        let combined = match (merged.get(name), value) {
            (Some(ThemeValue::Section(below)), ThemeValue::Section(above)) => {
                let mut variant = below.clone();
                for (key, entry) in above {
                    variant.insert(key.clone(), entry.clone());
                }
                ThemeValue::Section(variant)
            }
            _ => value.clone(),
        };
        merged.insert(name.clone(), combined);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory registry of raw theme JSON.
    struct MapRegistry {
        themes: HashMap<String, Theme>,
    }

    impl MapRegistry {
        fn new(entries: &[(&str, &str)]) -> Self {
            let themes = entries
                .iter()
                .map(|(name, json)| ((*name).to_string(), serde_json::from_str(json).unwrap()))
                .collect();
            Self { themes }
        }
    }

    impl ThemeRegistry for MapRegistry {
        fn load(&self, name: &str) -> Result<Theme, ThemeError> {
            self.themes
                .get(name)
                .cloned()
                .ok_or_else(|| ThemeError::NotFound(name.to_string()))
        }
    }

    fn text_at<'a>(theme: &'a Theme, section: &str, key: &str) -> Option<&'a str> {
        theme
            .get(section)?
            .as_section()?
            .get(key)?
            .as_text()
    }

    fn variant_text<'a>(theme: &'a Theme, variant: &str, key: &str) -> Option<&'a str> {
        theme
            .color_variants()?
            .get(variant)?
            .as_section()?
            .get(key)?
            .as_text()
    }

    #[test]
    fn test_theme_without_inheritance_resolves_to_itself() {
        let registry = MapRegistry::new(&[(
            "default",
            r#"{"name": "Default", "base_styles": {"body": "bg-gray-50"}}"#,
        )]);

        let resolved = resolve_theme("default", &registry).unwrap();
        assert_eq!(resolved.name(), Some("Default"));
        assert_eq!(text_at(&resolved, "base_styles", "body"), Some("bg-gray-50"));
        assert!(resolved.get(INHERITS_FROM_KEY).is_none());
    }

    #[test]
    fn test_child_overrides_win_and_gaps_inherit() {
        let registry = MapRegistry::new(&[
            (
                "default",
                r#"{
                    "name": "Default",
                    "base_styles": {
                        "body": "bg-gray-50 text-gray-900",
                        "container": "mx-auto p-4 sm:p-6 lg:p-8"
                    },
                    "card_styles": {"card": "bg-white rounded-lg shadow"}
                }"#,
            ),
            (
                "forest",
                r#"{
                    "name": "Forest",
                    "inherits_from": "default",
                    "base_styles": {"body": "bg-green-50 text-green-800 font-inter"}
                }"#,
            ),
        ]);

        let resolved = resolve_theme("forest", &registry).unwrap();
        assert_eq!(resolved.name(), Some("Forest"));
        assert_eq!(
            text_at(&resolved, "base_styles", "body"),
            Some("bg-green-50 text-green-800 font-inter")
        );
        assert_eq!(
            text_at(&resolved, "base_styles", "container"),
            Some("mx-auto p-4 sm:p-6 lg:p-8")
        );
        assert_eq!(
            text_at(&resolved, "card_styles", "card"),
            Some("bg-white rounded-lg shadow")
        );
        assert!(resolved.get(INHERITS_FROM_KEY).is_none());
    }

    #[test]
    fn test_child_sections_unknown_to_parent_are_kept() {
        let registry = MapRegistry::new(&[
            ("base", r#"{"base_styles": {"body": "dark"}}"#),
            (
                "extended",
                r#"{"inherits_from": "base", "extra_section": {"anything": "goes"}}"#,
            ),
        ]);

        let resolved = resolve_theme("extended", &registry).unwrap();
        assert_eq!(text_at(&resolved, "extra_section", "anything"), Some("goes"));
        assert_eq!(text_at(&resolved, "base_styles", "body"), Some("dark"));
    }

    #[test]
    fn test_color_variants_merge_one_level_deep() {
        let registry = MapRegistry::new(&[
            (
                "default",
                r#"{
                    "color_variants": {
                        "blue": {"header": "bg-blue-50", "accent": "text-blue-600"},
                        "purple": {"header": "bg-purple-50", "accent": "text-purple-600"}
                    }
                }"#,
            ),
            (
                "custom",
                r#"{
                    "inherits_from": "default",
                    "color_variants": {
                        "blue": {"header": "bg-green-100"},
                        "green": {"header": "bg-emerald-50", "accent": "text-emerald-600"}
                    }
                }"#,
            ),
        ]);

        let resolved = resolve_theme("custom", &registry).unwrap();
        // Overridden key wins, sibling key survives
        assert_eq!(variant_text(&resolved, "blue", "header"), Some("bg-green-100"));
        assert_eq!(variant_text(&resolved, "blue", "accent"), Some("text-blue-600"));
        // Untouched variant inherits entirely
        assert_eq!(variant_text(&resolved, "purple", "header"), Some("bg-purple-50"));
        // New variant appears
        assert_eq!(variant_text(&resolved, "green", "accent"), Some("text-emerald-600"));
    }

    #[test]
    fn test_non_section_variant_override_replaces_wholesale() {
        let registry = MapRegistry::new(&[
            (
                "base",
                r#"{"color_variants": {"purple": {"header": "bg-purple-50"}}}"#,
            ),
            (
                "flat",
                r#"{"inherits_from": "base", "color_variants": {"purple": "just-a-string"}}"#,
            ),
        ]);

        let resolved = resolve_theme("flat", &registry).unwrap();
        let purple = resolved.color_variants().unwrap().get("purple").unwrap();
        assert_eq!(purple.as_text(), Some("just-a-string"));
    }

    #[test]
    fn test_three_level_chain_merges_bottom_up() {
        let registry = MapRegistry::new(&[
            (
                "level1",
                r#"{
                    "name": "Level 1",
                    "base_styles": {"body": "level1-body", "container": "level1-container"},
                    "color_variants": {"blue": {"header": "level1-blue"}}
                }"#,
            ),
            (
                "level2",
                r#"{
                    "name": "Level 2",
                    "inherits_from": "level1",
                    "base_styles": {"body": "level2-body"},
                    "color_variants": {
                        "blue": {"accent": "level2-blue-accent"},
                        "red": {"header": "level2-red"}
                    }
                }"#,
            ),
            (
                "level3",
                r#"{
                    "name": "Level 3",
                    "inherits_from": "level2",
                    "color_variants": {"green": {"header": "level3-green"}}
                }"#,
            ),
        ]);

        let resolved = resolve_theme("level3", &registry).unwrap();
        assert_eq!(resolved.name(), Some("Level 3"));
        assert_eq!(text_at(&resolved, "base_styles", "body"), Some("level2-body"));
        assert_eq!(
            text_at(&resolved, "base_styles", "container"),
            Some("level1-container")
        );
        assert_eq!(variant_text(&resolved, "blue", "header"), Some("level1-blue"));
        assert_eq!(
            variant_text(&resolved, "blue", "accent"),
            Some("level2-blue-accent")
        );
        assert_eq!(variant_text(&resolved, "red", "header"), Some("level2-red"));
        assert_eq!(variant_text(&resolved, "green", "header"), Some("level3-green"));
    }

    #[test]
    fn test_missing_parent_reports_its_name() {
        let registry = MapRegistry::new(&[(
            "orphan",
            r#"{"inherits_from": "nonexistent_theme", "base_styles": {"body": "x"}}"#,
        )]);

        let err = resolve_theme("orphan", &registry).unwrap_err();
        assert_eq!(err, ThemeError::NotFound("nonexistent_theme".to_string()));
        assert_eq!(err.to_string(), "Theme 'nonexistent_theme' not found");
    }

    #[test]
    fn test_missing_theme_itself() {
        let registry = MapRegistry::new(&[]);
        let err = resolve_theme("ghost", &registry).unwrap_err();
        assert_eq!(err, ThemeError::NotFound("ghost".to_string()));
    }

    #[test]
    fn test_two_cycle_detected_with_chain() {
        let registry = MapRegistry::new(&[
            ("a", r#"{"inherits_from": "b"}"#),
            ("b", r#"{"inherits_from": "a"}"#),
        ]);

        let err = resolve_theme("a", &registry).unwrap_err();
        let ThemeError::CircularInheritance(chain) = &err else {
            panic!("expected circular inheritance, got {err:?}");
        };
        assert_eq!(chain, &["a", "b", "a"]);
        assert!(err.to_string().contains("Circular theme inheritance detected"));
        assert!(err.to_string().contains("a -> b -> a"));
    }

    #[test]
    fn test_self_cycle_detected() {
        let registry = MapRegistry::new(&[("selfie", r#"{"inherits_from": "selfie"}"#)]);

        let err = resolve_theme("selfie", &registry).unwrap_err();
        let ThemeError::CircularInheritance(chain) = err else {
            panic!("expected circular inheritance");
        };
        assert_eq!(chain, ["selfie", "selfie"]);
    }

    #[test]
    fn test_three_cycle_detected() {
        let registry = MapRegistry::new(&[
            ("a", r#"{"inherits_from": "b"}"#),
            ("b", r#"{"inherits_from": "c"}"#),
            ("c", r#"{"inherits_from": "a"}"#),
        ]);

        let err = resolve_theme("a", &registry).unwrap_err();
        let ThemeError::CircularInheritance(chain) = err else {
            panic!("expected circular inheritance");
        };
        assert_eq!(chain, ["a", "b", "c", "a"]);
    }

    #[test]
    fn test_shared_ancestor_is_not_a_cycle() {
        let registry = MapRegistry::new(&[
            ("root", r#"{"base_styles": {"body": "root"}}"#),
            ("left", r#"{"inherits_from": "root", "base_styles": {"body": "left"}}"#),
            ("right", r#"{"inherits_from": "root"}"#),
        ]);

        // Both children resolve; visiting root twice across separate
        // resolutions is fine.
        assert!(resolve_theme("left", &registry).is_ok());
        let right = resolve_theme("right", &registry).unwrap();
        assert_eq!(text_at(&right, "base_styles", "body"), Some("root"));
    }

    #[test]
    fn test_resolution_does_not_mutate_registry_themes() {
        let registry = MapRegistry::new(&[
            ("base", r#"{"base_styles": {"body": "base"}}"#),
            ("child", r#"{"inherits_from": "base", "base_styles": {"body": "child"}}"#),
        ]);

        let before = registry.load("base").unwrap();
        let _ = resolve_theme("child", &registry).unwrap();
        assert_eq!(registry.load("base").unwrap(), before);
    }
}
