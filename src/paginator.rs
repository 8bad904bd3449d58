//! A pager that splits an ordered sequence of items into fixed-size pages.
//!
//! The pager is purely a model: it owns the items and the current page index
//! and answers questions about page boundaries. It never renders items; the
//! list view does that. It can render a compact "2/5" page indicator for a
//! status line.

use crate::error::{Error, Result};
use std::num::NonZeroUsize;

/// A pager over an owned, ordered sequence of items.
///
/// The current page always lies in `[0, max(total_pages - 1, 0)]`. Requests
/// for a page outside that range are ignored rather than clamped.
///
/// # Examples
///
/// ```rust
/// use bibliognost::paginator::Pager;
///
/// let mut pager = Pager::new(vec!['A', 'B', 'C', 'D', 'E'], 2).unwrap();
///
/// assert_eq!(pager.total_pages(), 3);
/// assert_eq!(pager.current_items(), &['A', 'B']);
///
/// pager.set_page(2);
/// assert_eq!(pager.current_items(), &['E']);
/// assert!(!pager.has_next_page());
///
/// // Out of range requests do nothing.
/// pager.set_page(7);
/// assert_eq!(pager.page(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Pager<I> {
    items: Vec<I>,
    page_size: NonZeroUsize,
    page: usize,
}

impl<I> Pager<I> {
    /// Creates a pager positioned on the first page.
    ///
    /// A page size of zero leaves pagination undefined and is rejected with
    /// [`Error::ZeroPageSize`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliognost::paginator::Pager;
    ///
    /// assert!(Pager::new(vec![1, 2, 3], 0).is_err());
    ///
    /// let pager = Pager::new(vec![1, 2, 3], 10).unwrap();
    /// assert_eq!(pager.total_pages(), 1);
    /// assert_eq!(pager.page(), 0);
    /// ```
    pub fn new(items: Vec<I>, page_size: usize) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size).ok_or(Error::ZeroPageSize)?;
        Ok(Self::with_page_size(items, page_size))
    }

    /// Creates a pager from an already validated page size.
    pub fn with_page_size(items: Vec<I>, page_size: NonZeroUsize) -> Self {
        Self {
            items,
            page_size,
            page: 0,
        }
    }

    /// Returns the number of pages, `ceil(len / page_size)`.
    ///
    /// An empty pager has zero pages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliognost::paginator::Pager;
    ///
    /// assert_eq!(Pager::new(Vec::<u8>::new(), 4).unwrap().total_pages(), 0);
    /// assert_eq!(Pager::new(vec![0u8; 8], 4).unwrap().total_pages(), 2);
    /// assert_eq!(Pager::new(vec![0u8; 9], 4).unwrap().total_pages(), 3);
    /// ```
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size.get())
    }

    /// Returns the items on the current page.
    ///
    /// The last page may hold fewer than `page_size` items. An empty pager
    /// returns an empty slice.
    pub fn current_items(&self) -> &[I] {
        let (start, end) = self.slice_bounds();
        &self.items[start..end]
    }

    /// Moves to page `n` if it exists; otherwise does nothing.
    pub fn set_page(&mut self, n: usize) {
        if n < self.total_pages() {
            self.page = n;
        }
    }

    /// Returns true if a page follows the current one.
    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    /// Returns true if a page precedes the current one.
    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    /// The zero-based index of the current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The number of items per page.
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// The total number of items across all pages.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, in order.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Returns the number of items on the current page.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliognost::paginator::Pager;
    ///
    /// let mut pager = Pager::new((0..95).collect(), 10).unwrap();
    /// assert_eq!(pager.items_on_page(), 10);
    ///
    /// pager.set_page(9);
    /// assert_eq!(pager.items_on_page(), 5);
    /// ```
    pub fn items_on_page(&self) -> usize {
        let (start, end) = self.slice_bounds();
        end - start
    }

    /// Calculates the `(start, end)` bounds of the current page within
    /// [`Pager::items`]. `end` is exclusive.
    pub fn slice_bounds(&self) -> (usize, usize) {
        let len = self.items.len();
        let start = (self.page * self.page_size.get()).min(len);
        let end = (start + self.page_size.get()).min(len);
        (start, end)
    }

    /// Renders the page indicator as `page/total`, counting from 1.
    ///
    /// An empty pager renders nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliognost::paginator::Pager;
    ///
    /// let mut pager = Pager::new((0..50).collect::<Vec<_>>(), 10).unwrap();
    /// assert_eq!(pager.view(), "1/5");
    ///
    /// pager.set_page(2);
    /// assert_eq!(pager.view(), "3/5");
    /// ```
    pub fn view(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("{}/{}", self.page + 1, self.total_pages())
    }
}
