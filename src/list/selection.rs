//! The page/row state of a list view.
//!
//! A [`Selection`] is only ever produced by [`Selection::first`] and the
//! [`Selection::advance`] / [`Selection::retreat`] transitions, each of which
//! checks the pager's geometry. A selection therefore always points at an
//! occupied row of an existing page.

use crate::paginator::Pager;

/// The highlighted position: a page and a row within that page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    page: usize,
    row: usize,
}

impl Selection {
    /// The first row of the first page, or `None` for an empty pager.
    pub fn first<I>(pager: &Pager<I>) -> Option<Self> {
        if pager.is_empty() {
            None
        } else {
            Some(Self { page: 0, row: 0 })
        }
    }

    /// The zero-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The row within the page.
    pub fn row(&self) -> usize {
        self.row
    }

    /// The index of the selected item in the full sequence.
    pub fn index<I>(&self, pager: &Pager<I>) -> usize {
        self.page * pager.page_size() + self.row
    }

    /// The selection one item further down, crossing into the next page from
    /// the last row of a full page. `None` at the very last item.
    pub fn advance<I>(self, pager: &Pager<I>) -> Option<Self> {
        if self.row + 1 < rows_on(pager, self.page) {
            Some(Self {
                row: self.row + 1,
                ..self
            })
        } else if self.page + 1 < pager.total_pages() {
            Some(Self {
                page: self.page + 1,
                row: 0,
            })
        } else {
            None
        }
    }

    /// The selection one item further up, crossing onto the last row of the
    /// previous page from row 0. `None` at the very first item.
    pub fn retreat<I>(self, pager: &Pager<I>) -> Option<Self> {
        if self.row > 0 {
            Some(Self {
                row: self.row - 1,
                ..self
            })
        } else if self.page > 0 {
            let page = self.page - 1;
            // Only the final page can be partial, so this is page_size - 1.
            let row = rows_on(pager, page).saturating_sub(1);
            Some(Self { page, row })
        } else {
            None
        }
    }
}

/// Number of occupied rows on `page`.
fn rows_on<I>(pager: &Pager<I>, page: usize) -> usize {
    let start = page.saturating_mul(pager.page_size());
    pager.len().saturating_sub(start).min(pager.page_size())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(len: usize, page_size: usize) -> Pager<usize> {
        Pager::new((0..len).collect(), page_size).unwrap()
    }

    #[test]
    fn test_empty_pager_has_no_selection() {
        assert_eq!(Selection::first(&pager(0, 3)), None);
    }

    #[test]
    fn test_advance_within_then_across_pages() {
        let p = pager(7, 3);
        let mut sel = Selection::first(&p).unwrap();
        let mut visited = vec![(sel.page(), sel.row())];
        while let Some(next) = sel.advance(&p) {
            sel = next;
            visited.push((sel.page(), sel.row()));
        }
        assert_eq!(
            visited,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0)]
        );
    }

    #[test]
    fn test_retreat_lands_on_last_row_of_previous_page() {
        let p = pager(7, 3);
        let sel = Selection { page: 2, row: 0 };
        assert_eq!(sel.retreat(&p), Some(Selection { page: 1, row: 2 }));
        assert_eq!(Selection { page: 0, row: 0 }.retreat(&p), None);
    }

    #[test]
    fn test_index_counts_full_pages() {
        let p = pager(7, 3);
        assert_eq!(Selection { page: 2, row: 0 }.index(&p), 6);
    }

    #[test]
    fn test_single_page_list_stops_at_last_item() {
        let p = pager(2, 5);
        let sel = Selection::first(&p).unwrap().advance(&p).unwrap();
        assert_eq!(sel.row(), 1);
        assert_eq!(sel.advance(&p), None);
    }
}
