//! The [`Cell`] type: what occupies one grid position.

/// Kind of a grid cell. A position holds exactly one kind at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Start,
    End,
    Wall,
}

impl Cell {
    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// Whether this cell is a search endpoint.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Cell::Start | Cell::End)
    }
}
