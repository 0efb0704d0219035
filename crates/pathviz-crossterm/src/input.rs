use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use pathviz_core::{Coord, GridSize};
use pathviz_paths::Algorithm;

/// Where the grid sits on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Screen row of grid row 0.
    pub top: u16,
    /// Screen column of grid column 0.
    pub left: u16,
    /// Terminal columns per grid cell.
    pub cell_width: u16,
}

impl Layout {
    /// Two header lines, cells two columns wide so they come out square.
    pub const DEFAULT: Self = Self {
        top: 2,
        left: 0,
        cell_width: 2,
    };

    /// Grid coordinate under the screen position `(column, row)`.
    pub fn to_grid(&self, column: u16, row: u16, size: GridSize) -> Option<Coord> {
        if column < self.left || row < self.top || self.cell_width == 0 {
            return None;
        }
        let c = Coord::new(
            i32::from(row - self.top),
            i32::from((column - self.left) / self.cell_width),
        );
        size.contains(c).then_some(c)
    }

    /// Screen position `(column, row)` of the first terminal column of `c`.
    pub fn to_screen(&self, c: Coord) -> (u16, u16) {
        let col = self.left as i32 + c.col * self.cell_width as i32;
        let row = self.top as i32 + c.row;
        (
            col.clamp(0, u16::MAX as i32) as u16,
            row.clamp(0, u16::MAX as i32) as u16,
        )
    }

    /// First screen row below the grid.
    pub fn bottom(&self, size: GridSize) -> u16 {
        self.top.saturating_add(size.rows.clamp(0, u16::MAX as i32) as u16)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Cursor movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub fn apply(self, c: Coord, size: GridSize) -> Coord {
        let next = match self {
            Move::Up => c.shift(-1, 0),
            Move::Down => c.shift(1, 0),
            Move::Left => c.shift(0, -1),
            Move::Right => c.shift(0, 1),
        };
        if size.contains(next) { next } else { c }
    }
}

/// A user command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Cursor(Move),
    /// Toggle the cell under the cursor.
    Toggle,
    /// Toggle the clicked cell.
    Click(Coord),
    Select(Algorithm),
    Run,
    Randomize,
    Clear,
    Faster,
    Slower,
    Resize,
    Quit,
}

/// Map a terminal event to a command. Unbound keys and clicks outside the
/// grid map to `None`.
pub fn to_input(ev: &Event, layout: &Layout, size: GridSize) -> Option<Input> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if *kind == KeyEventKind::Release {
                return None;
            }
            key_input(*code, *modifiers)
        }
        Event::Mouse(me) => match me.kind {
            MouseEventKind::Down(MouseButton::Left) => layout
                .to_grid(me.column, me.row, size)
                .map(Input::Click),
            _ => None,
        },
        Event::Resize(..) => Some(Input::Resize),
        _ => None,
    }
}

fn key_input(code: KeyCode, mods: KeyModifiers) -> Option<Input> {
    if mods.contains(KeyModifiers::CONTROL) {
        return matches!(code, KeyCode::Char('c')).then_some(Input::Quit);
    }
    let input = match code {
        KeyCode::Up | KeyCode::Char('k') => Input::Cursor(Move::Up),
        KeyCode::Down | KeyCode::Char('j') => Input::Cursor(Move::Down),
        KeyCode::Left | KeyCode::Char('h') => Input::Cursor(Move::Left),
        KeyCode::Right | KeyCode::Char('l') => Input::Cursor(Move::Right),
        KeyCode::Char(' ') => Input::Toggle,
        KeyCode::Enter => Input::Run,
        KeyCode::Char(d @ '1'..='4') => {
            let i = d as usize - '1' as usize;
            Input::Select(Algorithm::ALL[i])
        }
        KeyCode::Char('r') => Input::Randomize,
        KeyCode::Char('c') => Input::Clear,
        KeyCode::Char('+') | KeyCode::Char('=') => Input::Faster,
        KeyCode::Char('-') => Input::Slower,
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        _ => return None,
    };
    Some(input)
}

/// Wait up to `timeout` for one event and map it.
///
/// Returns `Ok(None)` on timeout or for events without a binding.
pub fn read_input(timeout: Duration, layout: &Layout, size: GridSize) -> io::Result<Option<Input>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let ev = event::read()?;
    Ok(to_input(&ev, layout, size))
}
