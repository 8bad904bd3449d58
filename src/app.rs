//! The interactive browser: one list on screen, one key at a time.
//!
//! [`App`] holds the pre-fetched catalog and the active list, and turns key
//! messages into list moves, list switches and quitting. It is generic over
//! the surface so the same logic runs against a [`crate::canvas::Canvas`] in
//! tests. [`run`] wires it to a real terminal.

use crate::catalog::{CollectionItem, CollectionList, Navigable, WorkItem, WorkList};
use crate::error::Result;
use crate::key::{self, Binding, KeyPress};
use crate::library::Library;
use crate::list::ListKeyMap;
use crate::surface::{fit_width, Geometry, Surface};
use crate::terminal::TerminalSurface;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

/// Which list is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    #[default]
    Collections,
    Works,
}

impl ListKind {
    /// The other list.
    pub fn toggled(self) -> Self {
        match self {
            ListKind::Collections => ListKind::Works,
            ListKind::Works => ListKind::Collections,
        }
    }

    /// The heading drawn above the list.
    pub fn title(self) -> &'static str {
        match self {
            ListKind::Collections => "Collections",
            ListKind::Works => "Works",
        }
    }
}

/// What handling a message did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The message was not bound to anything, or the move was not possible.
    Ignored,
    /// The selection moved.
    Moved,
    /// The other list replaced the active one.
    Switched,
    /// The user asked to leave.
    Quit,
}

/// Everything the browser shows, fetched once up front.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub works: Vec<WorkItem>,
    pub collections: Vec<CollectionItem>,
}

impl Catalog {
    /// Reads both lists, ordered by title, from `library`.
    pub fn load(library: &Library) -> Result<Self> {
        Ok(Self {
            works: library.works()?,
            collections: library.collections()?,
        })
    }
}

/// Key bindings for the browser.
#[derive(Debug, Clone)]
pub struct AppKeyMap {
    pub list: ListKeyMap,
    pub switch: Binding,
    pub quit: Binding,
}

impl Default for AppKeyMap {
    fn default() -> Self {
        Self {
            list: ListKeyMap::default(),
            switch: Binding::new(vec![KeyCode::Tab]).with_help("tab", "switch list"),
            quit: Binding::new(vec![
                KeyPress::from(KeyCode::Char('q')),
                KeyPress::from(KeyCode::Esc),
                KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ])
            .with_help("q", "quit"),
        }
    }
}

impl key::KeyMap for AppKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.list.cursor_down,
            &self.list.cursor_up,
            &self.switch,
            &self.quit,
        ]
    }
}

enum Active<S: Surface> {
    Works(WorkList<S>),
    Collections(CollectionList<S>),
}

impl<S: Surface> Active<S> {
    fn kind(&self) -> ListKind {
        match self {
            Active::Works(_) => ListKind::Works,
            Active::Collections(_) => ListKind::Collections,
        }
    }

    fn list(&self) -> &dyn Navigable {
        match self {
            Active::Works(list) => list,
            Active::Collections(list) => list,
        }
    }

    fn list_mut(&mut self) -> &mut dyn Navigable {
        match self {
            Active::Works(list) => list,
            Active::Collections(list) => list,
        }
    }

    fn into_surface(self) -> S {
        match self {
            Active::Works(list) => list.into_surface(),
            Active::Collections(list) => list.into_surface(),
        }
    }
}

/// The browser state: the catalog plus whichever list currently owns the
/// surface.
pub struct App<S: Surface> {
    catalog: Catalog,
    // Only empty while a switch is handing the surface over.
    active: Option<Active<S>>,
    keymap: AppKeyMap,
}

impl<S: Surface> App<S> {
    /// Opens the `start` list on `surface`.
    pub fn new(catalog: Catalog, start: ListKind, surface: S) -> Result<Self> {
        let keymap = AppKeyMap::default();
        let active = open(&catalog, &keymap.list, start, surface)?;
        Ok(Self {
            catalog,
            active: Some(active),
            keymap,
        })
    }

    /// Which list is on screen.
    pub fn kind(&self) -> ListKind {
        self.active
            .as_ref()
            .map_or(ListKind::default(), Active::kind)
    }

    /// The list on screen.
    pub fn list(&self) -> Option<&dyn Navigable> {
        self.active.as_ref().map(Active::list)
    }

    pub fn keymap(&self) -> &AppKeyMap {
        &self.keymap
    }

    /// The page indicator of the active list, e.g. "1/4".
    pub fn status(&self) -> String {
        self.list().map(|l| l.page_indicator()).unwrap_or_default()
    }

    /// Handles one message.
    pub fn handle(&mut self, msg: &Msg) -> Result<Action> {
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return Ok(Action::Ignored);
        };

        if self.keymap.quit.matches(key_msg) {
            return Ok(Action::Quit);
        }
        if self.keymap.switch.matches(key_msg) {
            self.switch()?;
            return Ok(Action::Switched);
        }

        let moved = self
            .active
            .as_mut()
            .is_some_and(|active| active.list_mut().update(msg));
        Ok(if moved { Action::Moved } else { Action::Ignored })
    }

    /// Flushes the active list to the display.
    pub fn refresh(&mut self) -> io::Result<()> {
        match self.active.as_mut() {
            Some(active) => active.list_mut().refresh(),
            None => Ok(()),
        }
    }

    /// Replaces the active list with the other one on the same surface.
    pub fn switch(&mut self) -> Result<()> {
        let Some(active) = self.active.take() else {
            return Ok(());
        };
        let kind = active.kind().toggled();
        let surface = active.into_surface();
        self.active = Some(open(&self.catalog, &self.keymap.list, kind, surface)?);
        debug!(list = kind.title(), "switched list");
        Ok(())
    }

    /// Consumes the app and hands back its surface.
    pub fn into_surface(self) -> Option<S> {
        self.active.map(Active::into_surface)
    }
}

fn open<S: Surface>(
    catalog: &Catalog,
    keys: &ListKeyMap,
    kind: ListKind,
    surface: S,
) -> Result<Active<S>> {
    Ok(match kind {
        ListKind::Works => Active::Works(
            WorkList::new(catalog.works.clone(), surface)?.with_keymap(keys.clone()),
        ),
        ListKind::Collections => Active::Collections(
            CollectionList::new(catalog.collections.clone(), surface)?.with_keymap(keys.clone()),
        ),
    })
}

/// Restores the terminal when dropped, even if the browser bails out early.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Draws the box around the list, with `title` in the top edge and
/// `status` in the bottom edge. `size` is the whole screen as
/// `(columns, rows)`.
pub fn draw_frame<W: Write>(out: &mut W, size: (u16, u16), title: &str, status: &str) -> io::Result<()> {
    let (cols, rows) = size;
    if cols < 2 || rows < 2 {
        return Ok(());
    }
    let inner = (cols - 2) as usize;
    queue!(out, MoveTo(0, 0), Print(edge('┌', '┐', title, inner)))?;
    for row in 1..rows - 1 {
        queue!(
            out,
            MoveTo(0, row),
            Print('│'),
            MoveTo(cols - 1, row),
            Print('│')
        )?;
    }
    queue!(out, MoveTo(0, rows - 1), Print(edge('└', '┘', status, inner)))?;
    Ok(())
}

fn edge(left: char, right: char, label: &str, inner: usize) -> String {
    let mut line = String::with_capacity(inner + 8);
    line.push(left);
    let label = if label.is_empty() {
        String::new()
    } else {
        format!("─ {} ", label)
    };
    let label = fit_width(&label, inner);
    line.push_str(&label);
    let used = UnicodeWidthStr::width(&*label);
    line.extend(std::iter::repeat('─').take(inner.saturating_sub(used)));
    line.push(right);
    line
}

/// Joins the page indicator and the help line for the bottom border. An
/// empty list has no indicator, so only the help is shown.
fn status_line(indicator: &str, help: &str) -> String {
    if indicator.is_empty() {
        help.to_string()
    } else {
        format!("{} │ {}", indicator, help)
    }
}

/// Runs the browser on the controlling terminal until the user quits.
pub fn run(catalog: Catalog, start: ListKind) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let geometry = Geometry::new(rows.saturating_sub(2), cols.saturating_sub(2)).validate()?;

    let _guard = TerminalGuard::enter()?;
    info!(rows = geometry.rows, cols = geometry.cols, "browser started");

    let surface = TerminalSurface::new(io::stdout(), (1, 1), geometry);
    let mut app = App::new(catalog, start, surface)?;
    let help = key::help_line(app.keymap());

    loop {
        let status = status_line(&app.status(), &help);
        draw_frame(&mut io::stdout(), (cols, rows), app.kind().title(), &status)?;
        app.refresh()?;

        let Event::Key(event) = event::read()? else {
            continue;
        };
        if event.kind != KeyEventKind::Press {
            continue;
        }
        let msg: Msg = Box::new(KeyMsg {
            key: event.code,
            modifiers: event.modifiers,
        });
        if app.handle(&msg)? == Action::Quit {
            break;
        }
    }

    info!("browser stopped");
    Ok(())
}
