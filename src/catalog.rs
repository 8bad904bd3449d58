//! Work and collection lists built on the shared list view.
//!
//! [`WorkList`] and [`CollectionList`] differ only in the record type they
//! show. Both delegate every call to a [`ListView`] and implement
//! [`Navigable`], so the application can drive whichever list is active
//! without knowing which one it is.

use crate::error::Result;
use crate::list::{Labeled, ListKeyMap, ListView};
use crate::surface::Surface;
use bubbletea_rs::Msg;
use std::io;

/// A written work as shown in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub id: i64,
    pub title: String,
}

/// A collection (anthology, periodical, ...) as shown in a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionItem {
    pub id: i64,
    pub title: String,
}

impl Labeled for WorkItem {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Labeled for CollectionItem {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

/// The navigation surface shared by every catalog list.
pub trait Navigable {
    /// Returns true if [`Navigable::next`] would move the selection.
    fn has_next(&self) -> bool;
    /// Returns true if [`Navigable::previous`] would move the selection.
    fn has_previous(&self) -> bool;
    /// Moves the selection down one item; a no-op at the last item.
    fn next(&mut self) -> bool;
    /// Moves the selection up one item; a no-op at the first item.
    fn previous(&mut self) -> bool;
    /// Applies a key message through the list's bindings. Returns whether
    /// the selection moved.
    fn update(&mut self, msg: &Msg) -> bool;
    /// Flushes the list's drawing to the display.
    fn refresh(&mut self) -> io::Result<()>;
    /// The selected row within the current page.
    fn current(&self) -> usize;
    /// The zero-based current page.
    fn page(&self) -> usize;
    /// The page indicator for a status line, e.g. "2/5".
    fn page_indicator(&self) -> String;
    /// The id of the selected record, if any.
    fn selected_id(&self) -> Option<i64>;
}

macro_rules! catalog_list {
    ($(#[$meta:meta])* $name:ident, $item:ty) => {
        $(#[$meta])*
        pub struct $name<S: Surface> {
            view: ListView<$item, S>,
        }

        impl<S: Surface> $name<S> {
            /// Builds the list and paints its first page onto `surface`.
            pub fn new(items: Vec<$item>, surface: S) -> Result<Self> {
                Ok(Self {
                    view: ListView::new(items, surface)?,
                })
            }

            /// Replaces the navigation keys (builder pattern).
            pub fn with_keymap(self, keymap: ListKeyMap) -> Self {
                Self {
                    view: self.view.with_keymap(keymap),
                }
            }

            /// The selected record, if any.
            pub fn selected(&self) -> Option<&$item> {
                self.view.selected()
            }

            /// The underlying list view.
            pub fn view(&self) -> &ListView<$item, S> {
                &self.view
            }

            /// Consumes the list and hands back its surface.
            pub fn into_surface(self) -> S {
                self.view.into_surface()
            }
        }

        impl<S: Surface> Navigable for $name<S> {
            fn has_next(&self) -> bool {
                self.view.has_next()
            }

            fn has_previous(&self) -> bool {
                self.view.has_previous()
            }

            fn next(&mut self) -> bool {
                self.view.advance()
            }

            fn previous(&mut self) -> bool {
                self.view.retreat()
            }

            fn update(&mut self, msg: &Msg) -> bool {
                self.view.update(msg)
            }

            fn refresh(&mut self) -> io::Result<()> {
                self.view.refresh()
            }

            fn current(&self) -> usize {
                self.view.current()
            }

            fn page(&self) -> usize {
                self.view.page()
            }

            fn page_indicator(&self) -> String {
                self.view.pager().view()
            }

            fn selected_id(&self) -> Option<i64> {
                self.view.selected().map(Labeled::id)
            }
        }
    };
}

catalog_list!(
    /// The list of works, alphabetical by title as supplied by the library.
    WorkList,
    WorkItem
);

catalog_list!(
    /// The list of collections, alphabetical by title as supplied by the
    /// library.
    CollectionList,
    CollectionItem
);
