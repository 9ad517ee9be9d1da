use super::direction::Direction;
use super::food::create_food;
use super::grid::{Board, Cell, Velocity};
use super::obstacles::{create_walls, Obstacle, PlacementError};
use super::snake::Snake;
use crate::consts;
use crate::settings::Settings;
use enum_map::EnumMap;
use rand::Rng;

/// The state of one game from start until the snake crashes.
///
/// A session is never revived: once it is [terminated][SessionState], it
/// ignores further steps and steering, and a new game needs a new session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameSession {
    board: Board,
    snake: Snake,
    velocity: Velocity,
    steering: EnumMap<Direction, Velocity>,
    food: Cell,
    obstacles: Vec<Obstacle>,
    score: u32,
    state: SessionState,
}

impl GameSession {
    /// Start a new game: the snake lies along the top edge heading east, food
    /// is placed, and then obstacles are placed clear of the snake & food.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the obstacles could not be placed.
    pub(crate) fn new<R: Rng>(
        settings: &Settings,
        rng: &mut R,
    ) -> Result<GameSession, PlacementError> {
        let board = settings.board();
        let snake = Snake::along_top_edge(consts::INITIAL_SNAKE_LENGTH, board.unit());
        let food = create_food(rng, board);
        let obstacles = create_walls(rng, board, settings.walls(), &snake, food)?;
        log::info!(
            "Starting new game on a {}x{} board with {} obstacles",
            board.columns(),
            board.rows(),
            obstacles.len()
        );
        Ok(GameSession::with_layout(board, snake, food, obstacles))
    }

    /// Start a game from an explicit layout, with the snake heading east
    pub(crate) fn with_layout(
        board: Board,
        snake: Snake,
        food: Cell,
        obstacles: Vec<Obstacle>,
    ) -> GameSession {
        let steering = Direction::steering(board.unit());
        GameSession {
            board,
            snake,
            velocity: steering[Direction::East],
            steering,
            food,
            obstacles,
            score: 0,
            state: SessionState::Running,
        }
    }

    pub(crate) fn board(&self) -> Board {
        self.board
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub(crate) fn food(&self) -> Cell {
        self.food
    }

    pub(crate) fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn state(&self) -> SessionState {
        self.state
    }

    pub(crate) fn running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Steer the snake towards `direction`.  Turning straight back the way
    /// the snake is moving is ignored, as is anything after the game ends.
    pub(crate) fn change_direction(&mut self, direction: Direction) {
        if !self.running() {
            return;
        }
        let velocity = self.steering[direction];
        if velocity != -self.velocity {
            self.velocity = velocity;
        }
    }

    /// Move the snake one cell along its velocity.  If the new head lands on
    /// the food, the score goes up, new food is placed, and the tail stays
    /// put so that the snake grows by one; otherwise the tail is dropped.
    ///
    /// Collisions are not checked here; see [`GameSession::collision()`].
    pub(crate) fn step<R: Rng>(&mut self, rng: &mut R) {
        if !self.running() {
            return;
        }
        let head = self.snake.advance(self.velocity);
        if head == self.food {
            self.score += 1;
            self.food = create_food(rng, self.board);
            log::debug!(
                "Ate food at {head:?}; score is now {}, next food at {:?}",
                self.score,
                self.food
            );
        } else {
            self.snake.retract();
        }
    }

    /// Report what, if anything, the snake's head has run into.  Obstacles
    /// are checked first, then the snake's own body, then the board's edges.
    pub(crate) fn collision(&self) -> Option<Collision> {
        let head = self.snake.head();
        let unit = self.board.unit();
        if self.obstacles.iter().any(|w| w.occupies(head, unit)) {
            Some(Collision::Obstacle)
        } else if self.snake.bites_itself() {
            Some(Collision::Body)
        } else if !self.board.contains(head) {
            Some(Collision::Boundary)
        } else {
            None
        }
    }

    /// Advance the game by one tick: [step][GameSession::step] and then end
    /// the game if the snake crashed.  Returns the crash, if there was one
    /// this tick.
    pub(crate) fn tick<R: Rng>(&mut self, rng: &mut R) -> Option<Collision> {
        if !self.running() {
            return None;
        }
        self.step(rng);
        let collision = self.collision()?;
        log::info!(
            "Game over: {collision:?} collision at {:?} with score {} and length {}",
            self.snake.head(),
            self.score,
            self.snake.len()
        );
        self.state = SessionState::Terminated(collision);
        Some(collision)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SessionState {
    Running,
    Terminated(Collision),
}

/// What the snake ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    /// One of the obstacles
    Obstacle,
    /// Its own body
    Body,
    /// The edge of the board
    Boundary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::obstacles::Orientation;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    const BOARD: Board = Board::new(500, 500, 25);

    fn rng() -> ChaCha12Rng {
        ChaCha12Rng::seed_from_u64(RNG_SEED)
    }

    fn cells(session: &GameSession) -> Vec<Cell> {
        session.snake().cells().collect()
    }

    fn starting_session(food: Cell) -> GameSession {
        GameSession::with_layout(BOARD, Snake::along_top_edge(5, 25), food, Vec::new())
    }

    #[test]
    fn new_session() {
        let settings = Settings::default();
        let session = GameSession::new(&settings, &mut rng()).expect("layout should succeed");
        assert_eq!(session.score(), 0);
        assert!(session.running());
        assert_eq!(session.velocity(), Velocity::new(25, 0));
        assert_eq!(
            cells(&session),
            [
                Cell::new(100, 0),
                Cell::new(75, 0),
                Cell::new(50, 0),
                Cell::new(25, 0),
                Cell::new(0, 0),
            ]
        );
        assert!(session.board().contains(session.food()));
        assert_eq!(session.obstacles().len(), consts::OBSTACLE_COUNT);
        for wall in session.obstacles() {
            for c in wall.cells(consts::UNIT) {
                assert!(!session.snake().contains(c), "{wall:?} overlaps the snake");
                assert_ne!(c, session.food(), "{wall:?} overlaps the food");
            }
        }
    }

    #[test]
    fn step_without_food() {
        let mut session = starting_session(Cell::new(250, 250));
        session.step(&mut rng());
        assert_eq!(
            cells(&session),
            [
                Cell::new(125, 0),
                Cell::new(100, 0),
                Cell::new(75, 0),
                Cell::new(50, 0),
                Cell::new(25, 0),
            ]
        );
        assert_eq!(session.score(), 0);
        assert_eq!(session.food(), Cell::new(250, 250));
    }

    #[test]
    fn step_onto_food() {
        let mut session = starting_session(Cell::new(125, 0));
        session.step(&mut rng());
        assert_eq!(session.score(), 1);
        assert_eq!(session.snake().len(), 6);
        assert_eq!(session.snake().head(), Cell::new(125, 0));
        assert_eq!(session.snake().body().back(), Some(&Cell::new(0, 0)));
        assert!(BOARD.contains(session.food()));
    }

    #[test]
    fn new_food_may_land_on_snake() {
        // After eating, the snake fills the whole board.
        let board = Board::new(50, 25, 25);
        let snake = Snake::from_cells([Cell::new(0, 0)]).expect("cells should be nonempty");
        let mut session = GameSession::with_layout(board, snake, Cell::new(25, 0), Vec::new());
        session.step(&mut rng());
        assert_eq!(session.score(), 1);
        assert_eq!(cells(&session), [Cell::new(25, 0), Cell::new(0, 0)]);
        assert!(session.snake().contains(session.food()));
    }

    #[test]
    fn new_food_may_land_on_obstacle() {
        // After eating, every free cell is a wall cell.
        let board = Board::new(125, 25, 25);
        let snake = Snake::from_cells([Cell::new(25, 0), Cell::new(0, 0)])
            .expect("cells should be nonempty");
        let wall = Obstacle {
            origin: Cell::new(75, 0),
            length: 2,
            orientation: Orientation::Horizontal,
        };
        let mut session = GameSession::with_layout(board, snake, Cell::new(50, 0), vec![wall]);
        let mut rng = rng();
        let mut on_wall = false;
        for _ in 0..20 {
            let mut s = session.clone();
            s.step(&mut rng);
            assert_eq!(s.score(), 1);
            let food = s.food();
            assert!(s.snake().contains(food) || wall.occupies(food, 25));
            on_wall |= wall.occupies(food, 25);
        }
        assert!(on_wall, "food never landed on the wall");
        session.step(&mut rng);
        assert_eq!(session.collision(), None);
    }

    #[test]
    fn translation_follows_velocity() {
        let mut session = starting_session(Cell::new(475, 475));
        let mut rng = rng();
        session.change_direction(Direction::South);
        for _ in 0..3 {
            let before = cells(&session);
            session.step(&mut rng);
            let after = cells(&session);
            assert_eq!(after.len(), before.len());
            assert_eq!(after[0], before[0].offset(Velocity::new(0, 25)));
            assert_eq!(after[1..], before[..before.len() - 1]);
        }
    }

    #[test]
    fn reversal_is_ignored() {
        let mut session = starting_session(Cell::new(250, 250));
        session.change_direction(Direction::West);
        assert_eq!(session.velocity(), Velocity::new(25, 0));
        session.change_direction(Direction::East);
        assert_eq!(session.velocity(), Velocity::new(25, 0));
        session.change_direction(Direction::North);
        assert_eq!(session.velocity(), Velocity::new(0, -25));
        session.change_direction(Direction::South);
        assert_eq!(session.velocity(), Velocity::new(0, -25));
        session.change_direction(Direction::West);
        assert_eq!(session.velocity(), Velocity::new(-25, 0));
    }

    #[test]
    fn velocity_never_reverses() {
        let mut session = starting_session(Cell::new(250, 250));
        let seq = [
            Direction::West,
            Direction::South,
            Direction::North,
            Direction::East,
            Direction::West,
            Direction::North,
            Direction::North,
            Direction::South,
            Direction::West,
            Direction::East,
        ];
        for d in seq {
            let before = session.velocity();
            session.change_direction(d);
            assert_ne!(session.velocity(), -before);
        }
    }

    #[test]
    fn off_right_edge() {
        let snake = Snake::along_top_edge(5, 25);
        let mut session = GameSession::with_layout(
            BOARD,
            Snake::from_cells(snake.cells().map(|c| Cell::new(c.x + 375, c.y)))
                .expect("cells should be nonempty"),
            Cell::new(250, 250),
            Vec::new(),
        );
        assert_eq!(session.snake().head(), Cell::new(475, 0));
        assert_eq!(session.tick(&mut rng()), Some(Collision::Boundary));
        assert_eq!(session.snake().head(), Cell::new(500, 0));
        assert!(!session.running());
        assert_eq!(
            session.state(),
            SessionState::Terminated(Collision::Boundary)
        );
    }

    #[rstest]
    #[case(Direction::North, Cell::new(100, -25))]
    fn off_top_edge(#[case] direction: Direction, #[case] head: Cell) {
        let mut session = starting_session(Cell::new(250, 250));
        session.change_direction(direction);
        assert_eq!(session.tick(&mut rng()), Some(Collision::Boundary));
        assert_eq!(session.snake().head(), head);
    }

    #[test]
    fn into_obstacle() {
        let wall = Obstacle {
            origin: Cell::new(125, 0),
            length: 3,
            orientation: Orientation::Vertical,
        };
        let mut session = GameSession::with_layout(
            BOARD,
            Snake::along_top_edge(5, 25),
            Cell::new(250, 250),
            vec![wall],
        );
        assert_eq!(session.tick(&mut rng()), Some(Collision::Obstacle));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn into_self() {
        let mut session = GameSession::with_layout(
            BOARD,
            Snake::from_cells([
                Cell::new(50, 50),
                Cell::new(75, 50),
                Cell::new(75, 75),
                Cell::new(50, 75),
                Cell::new(25, 75),
            ])
            .expect("cells should be nonempty"),
            Cell::new(250, 250),
            Vec::new(),
        );
        session.change_direction(Direction::South);
        assert_eq!(session.tick(&mut rng()), Some(Collision::Body));
    }

    #[test]
    fn chasing_the_tail_is_safe() {
        // A 2x2 loop: the tail moves out of the way as the head moves in.
        let mut session = GameSession::with_layout(
            BOARD,
            Snake::from_cells([
                Cell::new(50, 50),
                Cell::new(75, 50),
                Cell::new(75, 75),
                Cell::new(50, 75),
            ])
            .expect("cells should be nonempty"),
            Cell::new(250, 250),
            Vec::new(),
        );
        session.change_direction(Direction::South);
        assert_eq!(session.tick(&mut rng()), None);
        assert!(session.running());
    }

    #[test]
    fn food_inside_obstacle_scores_then_ends() {
        let wall = Obstacle {
            origin: Cell::new(125, 0),
            length: 2,
            orientation: Orientation::Horizontal,
        };
        let mut session = GameSession::with_layout(
            BOARD,
            Snake::along_top_edge(5, 25),
            Cell::new(125, 0),
            vec![wall],
        );
        assert_eq!(session.tick(&mut rng()), Some(Collision::Obstacle));
        assert_eq!(session.score(), 1);
        assert_eq!(session.snake().len(), 6);
    }

    #[test]
    fn terminated_session_is_frozen() {
        let mut session = starting_session(Cell::new(250, 250));
        session.change_direction(Direction::North);
        let mut rng = rng();
        assert_eq!(session.tick(&mut rng), Some(Collision::Boundary));
        let frozen = session.clone();
        assert_eq!(session.tick(&mut rng), None);
        session.step(&mut rng);
        session.change_direction(Direction::East);
        assert_eq!(session, frozen);
    }

    #[test]
    fn long_run_keeps_invariants() {
        let settings = Settings::default();
        let mut rng = rng();
        let mut session = GameSession::new(&settings, &mut rng).expect("layout should succeed");
        let turns = [
            Direction::South,
            Direction::East,
            Direction::North,
            Direction::East,
        ];
        for (i, &d) in turns.iter().cycle().take(200).enumerate() {
            if i % 3 == 0 {
                session.change_direction(d);
            }
            let len = session.snake().len();
            let score = session.score();
            if session.tick(&mut rng).is_some() {
                break;
            }
            let grew = session.score() - score;
            assert!(grew <= 1, "score jumped by {grew}");
            assert_eq!(session.snake().len(), len + usize::try_from(grew).unwrap_or(0));
        }
    }
}
