//! A [`Surface`] backed by a crossterm-driven terminal.
//!
//! The surface covers a rectangle of the screen starting at an origin cell,
//! typically the inside of a bordered frame. Draw calls are queued on the
//! writer and only reach the terminal on [`Surface::flush`].

use crate::surface::{fit_width, Geometry, Surface};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
};
use std::io::{self, Write};

/// A rectangular region of a terminal screen.
pub struct TerminalSurface<W: Write> {
    out: W,
    origin: (u16, u16),
    geometry: Geometry,
    // Draw calls cannot fail individually; the first queueing error is kept
    // and reported by the next flush.
    deferred: Option<io::Error>,
}

impl<W: Write> TerminalSurface<W> {
    /// Creates a surface of `geometry` whose top-left cell is at
    /// `(column, row)` = `origin` on the screen.
    pub fn new(out: W, origin: (u16, u16), geometry: Geometry) -> Self {
        Self {
            out,
            origin,
            geometry,
            deferred: None,
        }
    }

    /// Consumes the surface and returns its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.deferred.get_or_insert(err);
        }
    }

    fn write(&mut self, row: u16, col: u16, text: &str, highlighted: bool) {
        if !self.geometry.contains_row(row) || col >= self.geometry.cols {
            return;
        }
        let text = fit_width(text, (self.geometry.cols - col) as usize);
        let (x, y) = self.origin;
        let result = if highlighted {
            queue!(
                self.out,
                MoveTo(x + col, y + row),
                SetAttribute(Attribute::Reverse),
                Print(&*text),
                SetAttribute(Attribute::Reset)
            )
        } else {
            queue!(self.out, MoveTo(x + col, y + row), Print(&*text))
        };
        self.record(result);
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn clear(&mut self) {
        let blank = " ".repeat(self.geometry.cols as usize);
        let (x, y) = self.origin;
        for row in 0..self.geometry.rows {
            let result = queue!(self.out, MoveTo(x, y + row), Print(&blank));
            self.record(result);
        }
    }

    fn put(&mut self, row: u16, col: u16, text: &str) {
        self.write(row, col, text, false);
    }

    fn put_highlighted(&mut self, row: u16, col: u16, text: &str) {
        self.write(row, col, text, true);
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(err) = self.deferred.take() {
            return Err(err);
        }
        self.out.flush()
    }
}
