use crate::consts;
use crate::game::grid::Board;
use crate::game::obstacles::WallSpec;
use thiserror::Error;

/// Everything needed to lay out a new game.
///
/// A `Settings` value can only be obtained from [`Settings::new()`], which
/// checks it, or from [`Settings::default()`], which uses the compiled-in
/// constants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Settings {
    board: Board,
    walls: WallSpec,
}

impl Settings {
    /// Validate a board of `width` × `height` with cells `unit` on a side and
    /// the obstacle parameters `walls`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the unit is not positive, if either dimension is not a
    /// positive multiple of the unit, if the board is too small to hold the
    /// starting snake, or if the obstacle length bounds are empty.
    pub(crate) fn new(
        width: i32,
        height: i32,
        unit: i32,
        walls: WallSpec,
    ) -> Result<Settings, SettingsError> {
        if unit <= 0 {
            return Err(SettingsError::Unit(unit));
        }
        for (dimension, value) in [("width", width), ("height", height)] {
            if value <= 0 || value % unit != 0 {
                return Err(SettingsError::Misaligned {
                    dimension,
                    value,
                    unit,
                });
            }
        }
        let board = Board::new(width, height, unit);
        if board.columns() < i32::from(consts::INITIAL_SNAKE_LENGTH) || board.rows() < 2 {
            return Err(SettingsError::TooSmall {
                columns: board.columns(),
                rows: board.rows(),
            });
        }
        if walls.min_len == 0 || walls.min_len > walls.max_len {
            return Err(SettingsError::WallLength {
                min: walls.min_len,
                max: walls.max_len,
            });
        }
        Ok(Settings { board, walls })
    }

    pub(crate) fn board(&self) -> Board {
        self.board
    }

    pub(crate) fn walls(&self) -> WallSpec {
        self.walls
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            board: Board::new(consts::BOARD_WIDTH, consts::BOARD_HEIGHT, consts::UNIT),
            walls: WallSpec::default(),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum SettingsError {
    #[error("grid unit must be positive, got {0}")]
    Unit(i32),
    #[error("board {dimension} {value} is not a positive multiple of the grid unit {unit}")]
    Misaligned {
        dimension: &'static str,
        value: i32,
        unit: i32,
    },
    #[error("a {columns}x{rows} board cannot hold the starting snake")]
    TooSmall { columns: i32, rows: i32 },
    #[error("obstacle lengths must satisfy 1 <= min <= max, got min {min} and max {max}")]
    WallLength { min: u16, max: u16 },
}
