use super::grid::Velocity;
use enum_map::{enum_map, Enum, EnumMap};

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Build the table mapping each direction to the velocity that moves the
    /// snake one `unit` that way
    pub(crate) fn steering(unit: i32) -> EnumMap<Direction, Velocity> {
        enum_map! {
            Direction::North => Velocity::new(0, -unit),
            Direction::East => Velocity::new(unit, 0),
            Direction::South => Velocity::new(0, unit),
            Direction::West => Velocity::new(-unit, 0),
        }
    }

    /// Determine which way `velocity` points.  Returns `None` for a zero
    /// velocity.
    pub(crate) fn of(velocity: Velocity) -> Option<Direction> {
        match (velocity.dx.signum(), velocity.dy.signum()) {
            (0, -1) => Some(Direction::North),
            (1, 0) => Some(Direction::East),
            (0, 1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }
}
