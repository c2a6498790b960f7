//! Category resolution: fold source documents and inline keybinds into one list.

use super::merge::merge_keybinds;
use crate::models::{Category, CategoryPick, Keybind, KeybindDocument};
use crate::sources::{SourceLoader, SourceUnavailable};

/// Resolves a category's sources and inline keybinds into a single list.
///
/// Sources fold in declaration order, each merged over the accumulated result,
/// and the inline keybinds fold last so they win every conflict. The returned
/// category carries the merged list and no source references.
///
/// # Errors
///
/// Returns [`SourceUnavailable`] if any referenced document fails to load.
/// Resolution is all-or-nothing; no partial category is produced.
pub fn resolve_category(
    category: &Category,
    loader: &impl SourceLoader,
) -> Result<Category, SourceUnavailable> {
    let mut keybinds: Vec<Keybind> = Vec::new();

    for source in &category.sources {
        let document = loader.load(&source.file)?;
        let extracted = extract_keybinds(&document, source.pick_category.as_ref());
        keybinds = merge_keybinds(&keybinds, &extracted);
    }

    keybinds = merge_keybinds(&keybinds, &category.keybinds);

    Ok(Category {
        name: category.name.clone(),
        theme_color: category.theme_color.clone(),
        icon_name: category.icon_name.clone(),
        sources: Vec::new(),
        keybinds,
    })
}

/// Extracts keybinds from a document, honoring a category pick.
///
/// Without a pick, every category contributes in document order. With one,
/// only categories whose name matches; a pick that matches nothing yields an
/// empty list rather than an error.
fn extract_keybinds(document: &KeybindDocument, pick: Option<&CategoryPick>) -> Vec<Keybind> {
    document
        .categories
        .iter()
        .filter(|category| pick.is_none_or(|p| p.matches(&category.name)))
        .flat_map(|category| category.keybinds.iter().cloned())
        .collect()
}
