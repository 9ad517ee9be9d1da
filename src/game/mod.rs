mod direction;
mod food;
pub(crate) mod grid;
pub(crate) mod obstacles;
mod session;
mod snake;
use self::direction::Direction;
use self::grid::{Board, Cell, Velocity};
use self::obstacles::PlacementError;
use self::session::{GameSession, SessionState};
use crate::app::{AppError, Screen};
use crate::command::Command;
use crate::consts;
use crate::settings::Settings;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::time::Instant;

/// A game in progress along with what it takes to restart it: the settings
/// & random number generator used to lay out each new session, and the time
/// of the next tick
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::StdRng> {
    rng: R,
    settings: Settings,
    session: GameSession,
    next_tick: Option<Instant>,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(settings: Settings, mut rng: R) -> Result<Game<R>, PlacementError> {
        let session = GameSession::new(&settings, &mut rng)?;
        Ok(Game {
            rng,
            settings,
            session,
            next_tick: None,
        })
    }

    /// Wait for either the next input event or the next tick, whichever comes
    /// first, and handle it.  Once the game is over, nothing more happens
    /// until a key is pressed.
    pub(crate) fn process_input(&mut self) -> Result<Option<Screen>, AppError> {
        if self.session.running() {
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + consts::TICK_PERIOD);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                return Ok(None);
            }
        }
        Ok(self.handle_event(read()?)?)
    }

    fn advance(&mut self) {
        self.session.tick(&mut self.rng);
        self.next_tick = None;
    }

    fn handle_event(&mut self, event: Event) -> Result<Option<Screen>, PlacementError> {
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return Ok(None);
        };
        match cmd {
            Command::Quit | Command::Q => return Ok(Some(Screen::Quit)),
            Command::R => self.reset()?,
            Command::Up => self.session.change_direction(Direction::North),
            Command::Left => self.session.change_direction(Direction::West),
            Command::Down => self.session.change_direction(Direction::South),
            Command::Right => self.session.change_direction(Direction::East),
        }
        Ok(None)
    }

    /// Throw away the current session and start a new one
    fn reset(&mut self) -> Result<(), PlacementError> {
        log::info!("Restarting; previous score was {}", self.session.score());
        self.session = GameSession::new(&self.settings, &mut self.rng)?;
        self.next_tick = None;
        Ok(())
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        let session = &self.session;
        Line::styled(format!(" Score: {}", session.score()), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let board = session.board();
        let block_size = Size {
            width: board.display_width(consts::CELL_WIDTH).saturating_add(2),
            height: board.display_height().saturating_add(2),
        };
        let block_area = center_rect(block_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut level = Canvas {
            board,
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        level.draw_cell(session.food(), consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        let snake = session.snake();
        for &c in snake.body() {
            level.draw_cell(c, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        level.draw_cell(
            snake.head(),
            head_symbol(session.velocity()),
            consts::SNAKE_STYLE,
        );
        for wall in session.obstacles() {
            for c in wall.cells(board.unit()) {
                level.draw_cell(c, consts::OBSTACLE_SYMBOL, consts::OBSTACLE_STYLE);
            }
        }

        if let SessionState::Terminated(_) = session.state() {
            // Draw the head last so that we overwrite whatever it hit
            level.draw_cell(
                snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
            Span::from(format!(" Game Over Score: {}", session.score())).render(msg1_area, buf);
        }
        Line::from_iter([
            Span::raw(" Restart ("),
            Span::styled("r", consts::KEY_STYLE),
            Span::raw(") — Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .render(msg2_area, buf);
    }
}

/// Return the glyphs for the snake's head, pointing the way it's going
fn head_symbol(velocity: Velocity) -> &'static str {
    match Direction::of(velocity) {
        Some(Direction::North) => consts::SNAKE_HEAD_NORTH_SYMBOL,
        Some(Direction::South) => consts::SNAKE_HEAD_SOUTH_SYMBOL,
        Some(Direction::West) => consts::SNAKE_HEAD_WEST_SYMBOL,
        // A session never stands still, but a zero velocity is drawn facing
        // east like a fresh snake.
        Some(Direction::East) | None => consts::SNAKE_HEAD_EAST_SYMBOL,
    }
}

/// The interior of the board's border, addressed by board cell
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    board: Board,
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` across the terminal cells for `cell`.  Cells off of the
    /// board are skipped.
    fn draw_cell(&mut self, cell: Cell, symbol: &str, style: Style) {
        let Some(pos) = self.board.display_position(cell, consts::CELL_WIDTH) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        for (dx, ch) in (pos.x..).zip(symbol.chars()) {
            let Some(x) = self.area.x.checked_add(dx) else {
                return;
            };
            if let Some(tc) = self.buf.cell_mut((x, y)) {
                tc.set_char(ch);
                tc.set_style(Style::reset().patch(style));
            }
        }
    }
}
