//! Styles for the string rendering of a list page.
//!
//! Surfaces draw highlights with their own attribute; these styles only
//! apply to [`ListView::view`](super::ListView::view), which renders the
//! current page as a block of text.

use lipgloss_extras::prelude::*;

/// Styling for plain and selected rows.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Style for rows that are not selected.
    pub normal: Style,
    /// Style for the selected row. Reverse video by default.
    pub selected: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        Self {
            normal: Style::new(),
            selected: Style::new().reverse(true),
        }
    }
}
