//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Side length of one grid cell in board coordinates.  Every position on the
/// board is a multiple of this.
pub(crate) const UNIT: i32 = 25;

/// Width of the board in board coordinates (38 cells)
pub(crate) const BOARD_WIDTH: i32 = 950;

/// Height of the board in board coordinates (18 cells)
pub(crate) const BOARD_HEIGHT: i32 = 450;

/// Number of cells in the snake at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: u16 = 5;

/// Number of obstacles placed at the start of a game
pub(crate) const OBSTACLE_COUNT: usize = 15;

/// Minimum length of an obstacle, in cells
pub(crate) const MIN_OBSTACLE_LENGTH: u16 = 2;

/// Maximum length of an obstacle, in cells
pub(crate) const MAX_OBSTACLE_LENGTH: u16 = 7;

/// How many random candidates to try for a single obstacle before giving up
pub(crate) const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Each grid cell is drawn this many terminal columns wide so that cells
/// look roughly square.
pub(crate) const CELL_WIDTH: u16 = 2;

/// Glyphs for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: &str = "^^";

/// Glyphs for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: &str = "vv";

/// Glyphs for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: &str = ">>";

/// Glyphs for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: &str = "<<";

/// Glyphs for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyphs for the food
pub(crate) const FOOD_SYMBOL: &str = "()";

/// Glyphs for obstacles
pub(crate) const OBSTACLE_SYMBOL: &str = "▓▓";

/// Glyphs for the snake's head when it's collided with something
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for obstacles
pub(crate) const OBSTACLE_STYLE: Style = Style::new().fg(Color::Blue);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
