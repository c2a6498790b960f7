//! Layout resolution.
//!
//! Turns a layout with external source references into a self-contained one:
//! each category's sources load through a [`SourceLoader`](crate::sources::SourceLoader),
//! fold together in priority order, and the inline keybinds win last. The
//! merge rule is override-by-action; see [`merge_keybinds`].

mod category;
mod layout;
mod merge;

pub use category::resolve_category;
pub use layout::resolve_layout;
pub use merge::merge_keybinds;
