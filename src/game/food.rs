use super::grid::{Board, Cell};
use rand::Rng;

/// Choose where the next piece of food goes: any cell on the board, picked
/// uniformly at random.
///
/// The snake and the obstacles are not consulted, so food can land under
/// either of them.
pub(crate) fn create_food<R: Rng>(rng: &mut R, board: Board) -> Cell {
    board.random_cell(rng)
}
