use super::grid::{Board, Cell, Velocity};
use super::snake::Snake;
use crate::consts;
use rand::Rng;
use thiserror::Error;

/// Which way an obstacle extends from its origin
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Orientation {
    /// Rightwards along a row
    Horizontal,
    /// Downwards along a column
    Vertical,
}

/// A straight wall occupying `length` contiguous cells starting at `origin`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Obstacle {
    pub(crate) origin: Cell,
    pub(crate) length: u16,
    pub(crate) orientation: Orientation,
}

impl Obstacle {
    /// Iterate over the cells the obstacle covers on a board with the given
    /// `unit`, starting at the origin.  Cells past the board's edge are
    /// included.
    pub(crate) fn cells(self, unit: i32) -> impl Iterator<Item = Cell> {
        let step = match self.orientation {
            Orientation::Horizontal => Velocity::new(unit, 0),
            Orientation::Vertical => Velocity::new(0, unit),
        };
        std::iter::successors(Some(self.origin), move |&c| Some(c.offset(step)))
            .take(usize::from(self.length))
    }

    /// Test whether the obstacle covers `cell`
    pub(crate) fn occupies(self, cell: Cell, unit: i32) -> bool {
        self.cells(unit).any(|c| c == cell)
    }

    /// Generate a candidate obstacle: an origin anywhere on `board`, a length
    /// in `spec`'s bounds, and a coin-flip orientation
    fn random<R: Rng>(rng: &mut R, board: Board, spec: WallSpec) -> Obstacle {
        let origin = board.random_cell(rng);
        let length = rng.random_range(spec.min_len..=spec.max_len);
        let orientation = if rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Obstacle {
            origin,
            length,
            orientation,
        }
    }
}

/// How many obstacles to place and how long they may be
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct WallSpec {
    pub(crate) count: usize,
    pub(crate) min_len: u16,
    pub(crate) max_len: u16,
}

impl Default for WallSpec {
    fn default() -> WallSpec {
        WallSpec {
            count: consts::OBSTACLE_COUNT,
            min_len: consts::MIN_OBSTACLE_LENGTH,
            max_len: consts::MAX_OBSTACLE_LENGTH,
        }
    }
}

/// Place `spec.count` obstacles on `board` by rejection sampling.  A
/// candidate is rejected if any of its cells is part of `snake` or is `food`.
///
/// Obstacles are not checked against each other and may overlap or hang off
/// the right or bottom edge of the board.
///
/// # Errors
///
/// Returns `Err` if some obstacle could not be placed within
/// [`MAX_PLACEMENT_ATTEMPTS`][consts::MAX_PLACEMENT_ATTEMPTS] candidates.
pub(crate) fn create_walls<R: Rng>(
    rng: &mut R,
    board: Board,
    spec: WallSpec,
    snake: &Snake,
    food: Cell,
) -> Result<Vec<Obstacle>, PlacementError> {
    let unit = board.unit();
    let mut walls = Vec::with_capacity(spec.count);
    for index in 0..spec.count {
        let mut attempts = 0;
        let wall = loop {
            if attempts == consts::MAX_PLACEMENT_ATTEMPTS {
                return Err(PlacementError { index, attempts });
            }
            attempts += 1;
            let candidate = Obstacle::random(rng, board, spec);
            if !candidate
                .cells(unit)
                .any(|c| c == food || snake.contains(c))
            {
                break candidate;
            }
        };
        log::debug!("Placed obstacle #{index} at {wall:?} after {attempts} attempt(s)");
        walls.push(wall);
    }
    Ok(walls)
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("could not place obstacle #{index} clear of the snake and food after {attempts} attempts")]
pub(crate) struct PlacementError {
    pub(crate) index: usize,
    pub(crate) attempts: u32,
}
