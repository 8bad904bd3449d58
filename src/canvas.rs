//! An in-memory [`Surface`] for tests, snapshots and headless use.
//!
//! The canvas keeps a grid of cells with a highlight flag per cell, counts
//! flushes, and records every draw operation so callers can check exactly
//! which rows a view touched.

use crate::surface::{Geometry, Surface};
use lipgloss_extras::prelude::*;
use std::io;
use unicode_width::UnicodeWidthChar;

/// A single drawing operation recorded by a [`Canvas`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// The whole canvas was cleared.
    Clear,
    /// Text was written on `row`, highlighted or not.
    Put {
        /// The row written to.
        row: u16,
        /// Whether the write carried the highlight attribute.
        highlighted: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    highlighted: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            highlighted: false,
        }
    }
}

/// A fixed-size grid of character cells held in memory.
///
/// # Examples
///
/// ```rust
/// use bibliognost::canvas::Canvas;
/// use bibliognost::surface::Surface;
///
/// let mut canvas = Canvas::new(2, 10);
/// canvas.put(0, 0, "Solaris");
/// canvas.put_highlighted(1, 0, "Ubik");
///
/// assert_eq!(canvas.line(0), "Solaris");
/// assert_eq!(canvas.highlighted_rows(), vec![1]);
/// ```
#[derive(Debug, Clone)]
pub struct Canvas {
    geometry: Geometry,
    cells: Vec<Vec<Cell>>,
    ops: Vec<Op>,
    flushes: usize,
    /// Style applied to highlighted runs by [`Canvas::view`].
    pub highlight_style: Style,
}

impl Canvas {
    /// Creates a blank canvas of `rows` by `cols` cells.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            geometry: Geometry::new(rows, cols),
            cells: vec![vec![Cell::default(); cols as usize]; rows as usize],
            ops: Vec::new(),
            flushes: 0,
            highlight_style: Style::new().reverse(true),
        }
    }

    /// Returns the text on `row` with trailing blanks removed.
    ///
    /// Rows outside the canvas read as empty.
    pub fn line(&self, row: u16) -> String {
        self.cells
            .get(row as usize)
            .map(|cells| {
                let text: String = cells.iter().map(|c| c.ch).collect();
                text.trim_end().to_string()
            })
            .unwrap_or_default()
    }

    /// Returns every row's text, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        (0..self.geometry.rows).map(|row| self.line(row)).collect()
    }

    /// Returns the rows that contain at least one highlighted cell.
    pub fn highlighted_rows(&self) -> Vec<u16> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cells)| cells.iter().any(|c| c.highlighted))
            .map(|(row, _)| row as u16)
            .collect()
    }

    /// How many times [`Surface::flush`] has been called.
    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Returns the operations recorded since the last call, oldest first.
    pub fn take_ops(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }

    /// Renders the canvas as text, one line per row, with highlighted runs
    /// passed through [`Canvas::highlight_style`].
    pub fn view(&self) -> String {
        let mut lines = Vec::with_capacity(self.cells.len());
        for cells in &self.cells {
            let mut line = String::new();
            let mut run = String::new();
            let mut run_highlighted = false;
            for cell in cells {
                if cell.highlighted != run_highlighted && !run.is_empty() {
                    line.push_str(&self.render_run(&run, run_highlighted));
                    run.clear();
                }
                run_highlighted = cell.highlighted;
                run.push(cell.ch);
            }
            if run_highlighted {
                line.push_str(&self.render_run(&run, true));
            } else {
                line.push_str(run.trim_end());
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    fn render_run(&self, run: &str, highlighted: bool) -> String {
        if highlighted {
            self.highlight_style.clone().inline(true).render(run)
        } else {
            run.to_string()
        }
    }

    fn write(&mut self, row: u16, col: u16, text: &str, highlighted: bool) {
        self.ops.push(Op::Put { row, highlighted });
        let Some(cells) = self.cells.get_mut(row as usize) else {
            return;
        };
        let mut x = col as usize;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if x + w > cells.len() {
                break;
            }
            cells[x] = Cell { ch, highlighted };
            // The trailing half of a wide character stays blank.
            for cell in cells.iter_mut().skip(x + 1).take(w - 1) {
                *cell = Cell {
                    ch: ' ',
                    highlighted,
                };
            }
            x += w;
        }
    }
}

impl Surface for Canvas {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
        for cells in &mut self.cells {
            cells.fill(Cell::default());
        }
    }

    fn put(&mut self, row: u16, col: u16, text: &str) {
        self.write(row, col, text, false);
    }

    fn put_highlighted(&mut self, row: u16, col: u16, text: &str) {
        self.write(row, col, text, true);
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_are_clipped() {
        let mut canvas = Canvas::new(2, 4);
        canvas.put(0, 2, "abcdef");
        canvas.put(5, 0, "ignored");
        assert_eq!(canvas.lines(), vec!["  ab".to_string(), String::new()]);
    }

    #[test]
    fn test_rewrite_plain_drops_highlight() {
        let mut canvas = Canvas::new(1, 8);
        canvas.put_highlighted(0, 0, "Emma");
        assert_eq!(canvas.highlighted_rows(), vec![0]);
        canvas.put(0, 0, "Emma");
        assert!(canvas.highlighted_rows().is_empty());
    }

    #[test]
    fn test_clear_resets_cells_and_records_op() {
        let mut canvas = Canvas::new(2, 8);
        canvas.put_highlighted(1, 0, "Beloved");
        canvas.clear();
        assert!(canvas.highlighted_rows().is_empty());
        assert_eq!(canvas.line(1), "");
        assert_eq!(
            canvas.take_ops(),
            vec![
                Op::Put {
                    row: 1,
                    highlighted: true
                },
                Op::Clear
            ]
        );
        assert!(canvas.take_ops().is_empty());
    }

    #[test]
    fn test_wide_characters_occupy_two_cells() {
        let mut canvas = Canvas::new(1, 3);
        canvas.put(0, 0, "日本");
        assert_eq!(canvas.line(0), "日");
    }

    #[test]
    fn test_view_keeps_plain_rows_plain() {
        let mut canvas = Canvas::new(2, 6);
        canvas.put(0, 0, "Kindred");
        canvas.put_highlighted(1, 0, "Ubik");
        let view = canvas.view();
        let first = view.lines().next().unwrap_or_default();
        assert_eq!(first, "Kindre");
        assert!(view.contains("Ubik"));
    }

    #[test]
    fn test_flush_counts() {
        let mut canvas = Canvas::new(1, 1);
        canvas.flush().unwrap();
        canvas.flush().unwrap();
        assert_eq!(canvas.flushes(), 2);
    }
}
