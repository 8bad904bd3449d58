//! A paged list view with a single highlighted selection.
//!
//! This module exposes a generic `ListView<I: Labeled, S: Surface>` plus its
//! supporting pieces:
//! - `Labeled`: implement for your item type; returns an id and a label
//! - `Selection`: the page/row state, produced only by navigation
//! - Submodules: `keys` and `style`
//!
//! ## Paging model
//!
//! The list shows exactly one page at a time and the page size is the height
//! of the surface it draws on. The selection moves one row at a time:
//!
//! - Down from the last row of a page turns to the next page and selects its
//!   first row.
//! - Up from the first row of a page turns to the previous page and selects
//!   its last row.
//! - At the first item of the first page and the last item of the last page
//!   the move is ignored.
//!
//! ## Redraws
//!
//! A page turn clears the surface and draws the whole new page. A move
//! within a page rewrites only the row losing the highlight and the row
//! gaining it. Nothing reaches the display until `refresh` flushes the
//! surface.

/// Key bindings for list navigation.
pub mod keys;

/// Styles for the text rendering of a page.
pub mod style;

mod model;
mod rendering;
mod selection;
mod types;

#[cfg(test)]
mod tests;

pub use keys::ListKeyMap;
pub use model::ListView;
pub use selection::Selection;
pub use style::ListStyles;
pub use types::{DisplayItem, Labeled};
