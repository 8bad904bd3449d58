//! # bibliognost
//!
//! Browse a catalog of written works and the collections they were
//! published in, one screen-sized page at a time.
//!
//! ## Overview
//!
//! The heart of the crate is [`list::ListView`]: a fixed-height list over
//! labeled items with a single highlighted selection. It draws onto any
//! [`surface::Surface`], pages automatically when the selection runs off
//! either end of the screen, and repaints only the rows that changed when
//! the selection moves within a page.
//!
//! Around it sit the pieces that make it an application:
//!
//! - **Paging**: [`paginator::Pager`] splits the items into screen-sized pages
//! - **Surfaces**: [`canvas::Canvas`] in memory, [`terminal::TerminalSurface`]
//!   on a real terminal
//! - **Catalog lists**: [`catalog::WorkList`] and [`catalog::CollectionList`],
//!   both driven through [`catalog::Navigable`]
//! - **Storage**: [`library::Library`], a SQLite file of works and collections
//! - **Browser**: [`app::App`] maps key messages onto the active list
//!
//! ## Example
//!
//! ```rust
//! use bibliognost::prelude::*;
//!
//! let items = ["Ficciones", "Labyrinths", "The Aleph"]
//!     .iter()
//!     .enumerate()
//!     .map(|(id, title)| DisplayItem::new(id as i64, *title))
//!     .collect();
//!
//! // Two rows tall, so the third title lands on a second page.
//! let mut list = ListView::new(items, Canvas::new(2, 20)).unwrap();
//! list.advance();
//! list.advance();
//!
//! assert_eq!(list.page(), 1);
//! assert_eq!(list.surface().line(0), "The Aleph");
//! assert_eq!(list.pager().view(), "2/2");
//! ```

pub mod app;
pub mod canvas;
pub mod catalog;
pub mod config;
pub mod error;
pub mod key;
pub mod library;
pub mod list;
pub mod paginator;
pub mod surface;
pub mod terminal;

pub use error::{Error, Result};

/// Commonly used types in one import.
///
/// ```rust
/// use bibliognost::prelude::*;
///
/// let list = WorkList::new(Vec::new(), Canvas::new(3, 10)).unwrap();
/// assert!(!list.has_next());
/// ```
pub mod prelude {
    pub use crate::app::{Action, App, Catalog, ListKind};
    pub use crate::canvas::Canvas;
    pub use crate::catalog::{CollectionItem, CollectionList, Navigable, WorkItem, WorkList};
    pub use crate::error::{Error, Result};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::library::{Library, NewCollection, NewWork};
    pub use crate::list::{DisplayItem, Labeled, ListView, Selection};
    pub use crate::paginator::Pager;
    pub use crate::surface::{Geometry, Surface};
    pub use crate::terminal::TerminalSurface;
}
