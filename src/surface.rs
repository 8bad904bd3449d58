//! The rendering capability a list view draws through.
//!
//! A [`Surface`] is a fixed rectangle of character cells. Views only need to
//! clear it, write text at a cell (optionally highlighted), and flush the
//! result to the display. [`crate::canvas::Canvas`] keeps everything in
//! memory; [`crate::terminal::TerminalSurface`] writes to a real terminal.

use crate::error::{Error, Result};
use std::borrow::Cow;
use std::io;
use unicode_width::UnicodeWidthChar;

/// The extents of a surface, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Number of rows.
    pub rows: u16,
    /// Number of columns.
    pub cols: u16,
}

impl Geometry {
    /// Creates a geometry of `rows` by `cols` cells.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    /// Rejects geometries with no rows or no columns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bibliognost::surface::Geometry;
    ///
    /// assert!(Geometry::new(3, 20).validate().is_ok());
    /// assert!(Geometry::new(0, 20).validate().is_err());
    /// ```
    pub fn validate(self) -> Result<Self> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidViewport {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self)
    }

    /// Returns true if `row` lies inside the surface.
    pub fn contains_row(&self, row: u16) -> bool {
        row < self.rows
    }
}

/// A rectangular region that text can be drawn into.
///
/// Writes that fall outside [`Surface::geometry`] are clipped. Implementations
/// must never panic on an out-of-range row or column.
pub trait Surface {
    /// The fixed extents of this surface.
    fn geometry(&self) -> Geometry;

    /// Blanks every cell and drops any highlight.
    fn clear(&mut self);

    /// Writes `text` starting at `(row, col)` with normal styling.
    fn put(&mut self, row: u16, col: u16, text: &str);

    /// Writes `text` starting at `(row, col)` with the highlight attribute.
    fn put_highlighted(&mut self, row: u16, col: u16, text: &str);

    /// Pushes everything written so far to the display.
    fn flush(&mut self) -> io::Result<()>;
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn geometry(&self) -> Geometry {
        (**self).geometry()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn put(&mut self, row: u16, col: u16, text: &str) {
        (**self).put(row, col, text)
    }

    fn put_highlighted(&mut self, row: u16, col: u16, text: &str) {
        (**self).put_highlighted(row, col, text)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Prepares `text` for a single row: control characters are dropped and the
/// rest is truncated to at most `width` terminal columns.
///
/// Wide characters that would straddle the limit are dropped. Text without
/// control characters is borrowed as is.
///
/// # Examples
///
/// ```rust
/// use bibliognost::surface::fit_width;
///
/// assert_eq!(fit_width("Dune", 10), "Dune");
/// assert_eq!(fit_width("The Left Hand of Darkness", 8), "The Left");
/// assert_eq!(fit_width("日本語", 5), "日本");
/// assert_eq!(fit_width("Ab\nc\td", 10), "Abcd");
/// ```
pub fn fit_width(text: &str, width: usize) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(truncate(text, width));
    }
    let printable: String = text.chars().filter(|ch| !ch.is_control()).collect();
    Cow::Owned(truncate(&printable, width).to_string())
}

fn truncate(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}
