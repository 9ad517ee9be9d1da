use rand::Rng;
use ratatui::layout::Position;
use std::ops::Neg;

/// A location on the board.  Both coordinates are multiples of the board's
/// unit while the location is on the board; the snake's head may step off of
/// it, possibly into negative coordinates.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Return the cell reached by moving from `self` by `velocity`
    pub(crate) fn offset(self, velocity: Velocity) -> Cell {
        Cell {
            x: self.x + velocity.dx,
            y: self.y + velocity.dy,
        }
    }
}

/// Per-tick displacement of the snake.  Exactly one component is plus or
/// minus the board unit and the other is zero.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Velocity {
    pub(crate) dx: i32,
    pub(crate) dy: i32,
}

impl Velocity {
    pub(crate) const fn new(dx: i32, dy: i32) -> Velocity {
        Velocity { dx, dy }
    }
}

impl Neg for Velocity {
    type Output = Velocity;

    fn neg(self) -> Velocity {
        Velocity {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

/// Dimensions of the playing area in board coordinates
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    width: i32,
    height: i32,
    unit: i32,
}

impl Board {
    /// Create a board `width` × `height` in size with cells `unit` on a side.
    ///
    /// The dimensions must be positive multiples of `unit`; use
    /// [`Settings::new()`][crate::settings::Settings::new] to construct a
    /// checked board from untrusted values.
    pub(crate) const fn new(width: i32, height: i32, unit: i32) -> Board {
        Board {
            width,
            height,
            unit,
        }
    }

    pub(crate) fn unit(self) -> i32 {
        self.unit
    }

    /// Number of cells in each row
    pub(crate) fn columns(self) -> i32 {
        self.width / self.unit
    }

    /// Number of cells in each column
    pub(crate) fn rows(self) -> i32 {
        self.height / self.unit
    }

    /// Test whether `cell` lies on the board
    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Pick a uniformly random unit-aligned cell on the board
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Cell {
        Cell {
            x: rng.random_range(0..self.columns()) * self.unit,
            y: rng.random_range(0..self.rows()) * self.unit,
        }
    }

    /// Convert `cell` to a column & row on a display grid whose cells are one
    /// terminal row tall and `cell_width` columns wide.  Returns `None` if
    /// the cell is not on the board.
    pub(crate) fn display_position(self, cell: Cell, cell_width: u16) -> Option<Position> {
        if !self.contains(cell) {
            return None;
        }
        let column = u16::try_from(cell.x / self.unit).ok()?;
        let row = u16::try_from(cell.y / self.unit).ok()?;
        Some(Position::new(column.checked_mul(cell_width)?, row))
    }

    /// Size of the board on a display grid as used by
    /// [`Board::display_position()`]
    pub(crate) fn display_width(self, cell_width: u16) -> u16 {
        u16::try_from(self.columns())
            .unwrap_or(u16::MAX)
            .saturating_mul(cell_width)
    }

    pub(crate) fn display_height(self) -> u16 {
        u16::try_from(self.rows()).unwrap_or(u16::MAX)
    }
}
