//! The list view: a pager, a selection, and the surface they are drawn on.

use super::keys::ListKeyMap;
use super::selection::Selection;
use super::style::ListStyles;
use super::types::Labeled;
use crate::error::Result;
use crate::paginator::Pager;
use crate::surface::Surface;
use bubbletea_rs::{KeyMsg, Msg};
use std::io;
use std::num::NonZeroUsize;
use tracing::{debug, trace};

/// A paged list of labelled items drawn into a fixed-size surface.
///
/// The surface's row count is the page size. One page of labels is drawn at
/// a time, one per row from row 0, and the selected row carries the
/// highlight. Moving within a page rewrites only the two rows involved;
/// moving past either edge of a page repaints the whole surface with the
/// neighbouring page.
///
/// Navigation past the first or last item is a silent no-op. Use
/// [`ListView::has_next`] and [`ListView::has_previous`] to find out whether
/// a move is possible.
///
/// # Examples
///
/// ```
/// use bibliognost::canvas::Canvas;
/// use bibliognost::list::{DisplayItem, ListView};
///
/// let items = ["A", "B", "C", "D", "E", "F", "G"]
///     .iter()
///     .enumerate()
///     .map(|(id, label)| DisplayItem::new(id as i64, *label))
///     .collect();
/// let mut list = ListView::new(items, Canvas::new(3, 20)).unwrap();
///
/// list.advance();
/// list.advance();
/// list.advance(); // crosses onto the second page
///
/// assert_eq!(list.page(), 1);
/// assert_eq!(list.current(), 0);
/// assert_eq!(list.surface().lines(), vec!["D", "E", "F"]);
/// assert_eq!(list.surface().highlighted_rows(), vec![0]);
/// ```
pub struct ListView<I: Labeled, S: Surface> {
    // `pager.page` mirrors `selection.page` so the pager can slice the
    // current page. Only `move_to` turns pages.
    pub(super) pager: Pager<I>,
    pub(super) selection: Option<Selection>,
    pub(super) surface: S,
    pub(super) keymap: ListKeyMap,
    pub(super) styles: ListStyles,
}

impl<I: Labeled, S: Surface> ListView<I, S> {
    /// Creates a list over `items` and paints the first page onto `surface`.
    ///
    /// The page size is the surface's row count. A surface with no rows or no
    /// columns is rejected with [`crate::Error::InvalidViewport`].
    pub fn new(items: Vec<I>, surface: S) -> Result<Self> {
        let geometry = surface.geometry().validate()?;
        let page_size = NonZeroUsize::new(geometry.rows as usize)
            .ok_or(crate::Error::InvalidViewport {
                rows: geometry.rows,
                cols: geometry.cols,
            })?;
        let pager = Pager::with_page_size(items, page_size);
        let selection = Selection::first(&pager);
        debug!(
            items = pager.len(),
            pages = pager.total_pages(),
            page_size = pager.page_size(),
            "list view created"
        );

        let mut view = Self {
            pager,
            selection,
            surface,
            keymap: ListKeyMap::default(),
            styles: ListStyles::default(),
        };
        view.paint_page();
        Ok(view)
    }

    /// Replaces the key bindings used by [`ListView::update`] (builder pattern).
    pub fn with_keymap(mut self, keymap: ListKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Returns true if [`ListView::advance`] would move the selection.
    pub fn has_next(&self) -> bool {
        self.selection
            .is_some_and(|sel| sel.advance(&self.pager).is_some())
    }

    /// Returns true if [`ListView::retreat`] would move the selection.
    pub fn has_previous(&self) -> bool {
        self.selection
            .is_some_and(|sel| sel.retreat(&self.pager).is_some())
    }

    /// Moves the selection down one item. Returns whether it moved.
    pub fn advance(&mut self) -> bool {
        match self.selection.and_then(|sel| sel.advance(&self.pager)) {
            Some(next) => {
                self.move_to(next);
                true
            }
            None => false,
        }
    }

    /// Moves the selection up one item. Returns whether it moved.
    pub fn retreat(&mut self) -> bool {
        match self.selection.and_then(|sel| sel.retreat(&self.pager)) {
            Some(prev) => {
                self.move_to(prev);
                true
            }
            None => false,
        }
    }

    /// Flushes everything drawn so far to the display.
    pub fn refresh(&mut self) -> io::Result<()> {
        self.surface.flush()
    }

    /// Repaints the current page from scratch without moving the selection.
    pub fn redraw(&mut self) {
        self.paint_page();
    }

    /// The selected row within the current page; 0 for an empty list.
    pub fn current(&self) -> usize {
        self.selection.map_or(0, |sel| sel.row())
    }

    /// The zero-based index of the current page.
    pub fn page(&self) -> usize {
        self.selection.map_or(0, |sel| sel.page())
    }

    /// The current page/row pair, or `None` for an empty list.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The selected item, or `None` for an empty list.
    pub fn selected(&self) -> Option<&I> {
        let sel = self.selection?;
        self.pager.items().get(sel.index(&self.pager))
    }

    /// The pager holding the items.
    pub fn pager(&self) -> &Pager<I> {
        &self.pager
    }

    /// The surface the list draws on.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for callers that decorate around the
    /// list. Writes inside the list's rows are overwritten on the next paint.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the list and hands back its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Handles a key message: the down binding advances, the up binding
    /// retreats. Returns whether the selection moved.
    pub fn update(&mut self, msg: &Msg) -> bool {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.cursor_down.matches(key_msg) {
                return self.advance();
            } else if self.keymap.cursor_up.matches(key_msg) {
                return self.retreat();
            }
        }
        false
    }

    fn move_to(&mut self, next: Selection) {
        let Some(prev) = self.selection.replace(next) else {
            return;
        };
        if prev.page() == next.page() {
            trace!(from = prev.row(), to = next.row(), "selection moved");
            self.paint_row(prev.row(), false);
            self.paint_row(next.row(), true);
        } else {
            debug!(from = prev.page(), to = next.page(), "page turned");
            self.pager.set_page(next.page());
            debug_assert_eq!(self.pager.page(), next.page());
            self.paint_page();
        }
    }
}
