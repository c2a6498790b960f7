//! Whole-layout resolution.

use super::category::resolve_category;
use crate::models::Layout;
use crate::sources::{SourceLoader, SourceUnavailable};

/// Resolves every category of a layout through the given loader.
///
/// Categories resolve independently and keep their order; the layout's own
/// fields pass through unchanged. After resolution no category carries source
/// references, so the layout renders without further I/O.
///
/// # Errors
///
/// Returns the first [`SourceUnavailable`] encountered. The input layout is
/// untouched either way.
pub fn resolve_layout(
    layout: &Layout,
    loader: &impl SourceLoader,
) -> Result<Layout, SourceUnavailable> {
    let categories = layout
        .categories
        .iter()
        .map(|category| resolve_category(category, loader))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Layout {
        title: layout.title.clone(),
        template: layout.template.clone(),
        theme: layout.theme.clone(),
        output_name: layout.output_name.clone(),
        categories,
    })
}
