//! Drawing the current page onto the surface.

use super::model::ListView;
use super::types::Labeled;
use crate::surface::{fit_width, Surface};

impl<I: Labeled, S: Surface> ListView<I, S> {
    /// Clears the surface and draws every label on the current page, the
    /// selected one highlighted.
    pub(super) fn paint_page(&mut self) {
        let cols = self.surface.geometry().cols as usize;
        let selected = self.selection.map(|sel| sel.row());
        self.surface.clear();
        for (row, item) in self.pager.current_items().iter().enumerate() {
            let label = fit_width(item.label(), cols);
            if selected == Some(row) {
                self.surface.put_highlighted(row as u16, 0, &label);
            } else {
                self.surface.put(row as u16, 0, &label);
            }
        }
    }

    /// Rewrites a single row of the current page, with or without the
    /// highlight. Rows past the end of the page are left alone.
    pub(super) fn paint_row(&mut self, row: usize, highlighted: bool) {
        let cols = self.surface.geometry().cols as usize;
        let Some(item) = self.pager.current_items().get(row) else {
            return;
        };
        let label = fit_width(item.label(), cols);
        if highlighted {
            self.surface.put_highlighted(row as u16, 0, &label);
        } else {
            self.surface.put(row as u16, 0, &label);
        }
    }

    /// Renders the current page as text, one label per line, with the
    /// selected label styled by [`ListStyles::selected`](super::ListStyles).
    ///
    /// An empty list renders an empty string.
    pub fn view(&self) -> String {
        let cols = self.surface.geometry().cols as usize;
        let selected = self.selection.map(|sel| sel.row());
        self.pager
            .current_items()
            .iter()
            .enumerate()
            .map(|(row, item)| {
                let label = fit_width(item.label(), cols);
                let style = if selected == Some(row) {
                    &self.styles.selected
                } else {
                    &self.styles.normal
                };
                style.clone().inline(true).render(&label)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
