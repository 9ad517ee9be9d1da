use super::grid::{Cell, Velocity};
use std::collections::VecDeque;

/// The cells making up the snake, head first.
///
/// The snake always has a head; the body may be empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    head: Cell,

    /// The positions of the remaining cells, nearest the head first and the
    /// tail last
    body: VecDeque<Cell>,
}

impl Snake {
    /// Create a snake whose cells are `cells`, head first.  Returns `None` if
    /// `cells` is empty.
    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Option<Snake> {
        let mut iter = cells.into_iter();
        let head = iter.next()?;
        Some(Snake {
            head,
            body: iter.collect(),
        })
    }

    /// Create a snake of `len` cells (at least one) lying along the top row of
    /// the board with its tail in the top-left corner and its head pointing
    /// east
    pub(crate) fn along_top_edge(len: u16, unit: i32) -> Snake {
        let head = Cell::new(i32::from(len.saturating_sub(1)) * unit, 0);
        let body = (0..len.saturating_sub(1))
            .rev()
            .map(|i| Cell::new(i32::from(i) * unit, 0))
            .collect();
        Snake { head, body }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        self.head
    }

    /// Return the positions of the cells behind the head, nearest first
    pub(crate) fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Iterate over all of the snake's cells, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Test whether any part of the snake, head included, is at `cell`
    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.cells().any(|c| c == cell)
    }

    /// Test whether the head shares a cell with some part of the body
    pub(crate) fn bites_itself(&self) -> bool {
        self.body.contains(&self.head)
    }

    /// Put a new head one step away along `velocity`, keeping every existing
    /// cell.  Returns the new head.
    pub(crate) fn advance(&mut self, velocity: Velocity) -> Cell {
        let head = self.head.offset(velocity);
        self.body.push_front(self.head);
        self.head = head;
        head
    }

    /// Remove the last cell of the tail.  A lone head is left in place.
    pub(crate) fn retract(&mut self) {
        let _ = self.body.pop_back();
    }
}
