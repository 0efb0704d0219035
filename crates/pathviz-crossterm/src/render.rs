use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use pathviz_core::{Cell, Coord, Grid, GridSize};
use pathviz_paths::{Tick, TraversalEvent};
use pathviz_session::Renderer;

use crate::input::Layout;

/// Search overlay of one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    None,
    Visited,
    Path,
}

/// Background colour and two-column glyph for a cell.
pub fn cell_style(cell: Cell, mark: Mark) -> (Color, &'static str) {
    match (cell, mark) {
        (Cell::Start, _) => (Color::Green, ">>"),
        (Cell::End, _) => (Color::Red, "()"),
        (Cell::Wall, _) => (Color::DarkGrey, "  "),
        (Cell::Empty, Mark::Path) => (Color::Yellow, "  "),
        (Cell::Empty, Mark::Visited) => (Color::DarkCyan, "  "),
        (Cell::Empty, Mark::None) => (Color::Reset, " ."),
    }
}

/// Full-redraw terminal renderer.
///
/// Keeps the visited/path overlay of the current run and repaints the whole
/// screen on every [`draw`](Self::draw).
pub struct TerminalRenderer<W: Write> {
    out: W,
    layout: Layout,
    size: GridSize,
    marks: Vec<Mark>,
    cursor: Option<Coord>,
    title: String,
    status: String,
    help: String,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, size: GridSize) -> Self {
        Self {
            out,
            layout: Layout::DEFAULT,
            size,
            marks: vec![Mark::None; size.len()],
            cursor: None,
            title: String::new(),
            status: String::new(),
            help: String::new(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Drop the overlay, resizing it to `size`.
    pub fn reset_overlay(&mut self, size: GridSize) {
        self.size = size;
        self.marks.clear();
        self.marks.resize(size.len(), Mark::None);
    }

    pub fn mark(&self, c: Coord) -> Mark {
        self.size
            .index(c)
            .and_then(|i| self.marks.get(i).copied())
            .unwrap_or_default()
    }

    /// Highlighted cell, `None` to hide the cursor.
    pub fn set_cursor(&mut self, cursor: Option<Coord>) {
        self.cursor = cursor;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Line printed under the grid.
    pub fn set_help(&mut self, help: impl Into<String>) {
        self.help = help.into();
    }

    /// Fold the events of `tick` into the overlay.
    pub fn apply(&mut self, tick: &Tick) {
        for ev in &tick.events {
            let (c, mark) = match *ev {
                TraversalEvent::Visited(c) => (c, Mark::Visited),
                TraversalEvent::PathCell(c) => (c, Mark::Path),
                TraversalEvent::NotFound => {
                    self.status = "no path found".to_string();
                    continue;
                }
                TraversalEvent::Done => continue,
            };
            if let Some(i) = self.size.index(c) {
                self.marks[i] = mark;
            }
        }
    }

    /// Repaint everything.
    pub fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        if grid.size() != self.size {
            self.reset_overlay(grid.size());
        }
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            terminal::Clear(ClearType::All),
            SetAttribute(Attribute::Bold),
            Print(&self.title),
            SetAttribute(Attribute::Reset),
            cursor::MoveTo(0, 1),
            Print(&self.status),
        )?;

        for row in 0..grid.rows() {
            let (x, y) = self.layout.to_screen(Coord::new(row, 0));
            queue!(self.out, cursor::MoveTo(x, y))?;
            for col in 0..grid.cols() {
                let c = Coord::new(row, col);
                let cell = grid.cell_at(c).unwrap_or_default();
                let (bg, glyph) = cell_style(cell, self.mark(c));
                if self.cursor == Some(c) {
                    queue!(self.out, SetAttribute(Attribute::Reverse))?;
                }
                queue!(
                    self.out,
                    SetForegroundColor(Color::White),
                    SetBackgroundColor(bg),
                    Print(glyph),
                    ResetColor,
                )?;
                if self.cursor == Some(c) {
                    queue!(self.out, SetAttribute(Attribute::Reset))?;
                }
            }
        }

        let bottom = self.layout.bottom(grid.size());
        queue!(self.out, cursor::MoveTo(0, bottom.saturating_add(1)), Print(&self.help))?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, grid: &Grid, tick: &Tick) -> Result<(), Box<dyn std::error::Error>> {
        self.apply(tick);
        self.draw(grid)?;
        Ok(())
    }
}
