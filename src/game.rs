use std::time::Duration;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GameConfig, GridSize, INITIAL_SNAKE_LEN};
use crate::difficulty::Difficulty;
use crate::error::Result;
use crate::food::spawn_position;
use crate::input::{Direction, GameInput};
use crate::obstacles::Obstacles;
use crate::scheduler::TickTimer;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverReason {
    Obstacle,
    SelfCollision,
    /// The snake grew until no cell was left for food.
    BoardFull,
}

/// Result of one call to [`GameState::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The session is over; nothing changed.
    Idle,
    Moved,
    Ate,
    GameOver(GameOverReason),
}

/// Complete mutable game state for one session, plus the timer driving it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub obstacles: Obstacles,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub game_over_reason: Option<GameOverReason>,
    difficulty: Difficulty,
    timer: TickTimer,
    bounds: GridSize,
    obstacle_count: usize,
    rng: StdRng,
}

impl GameState {
    /// Validates `config` and starts a fresh running session.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let bounds = config.bounds;
        let snake = Snake::new(Position { x: 0, y: 0 }, Direction::Right);

        let mut state = Self {
            snake,
            food: Position { x: 0, y: 0 },
            obstacles: Obstacles::default(),
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            game_over_reason: None,
            difficulty: config.difficulty,
            timer: TickTimer::new(),
            bounds,
            obstacle_count: config.obstacle_count,
            rng,
        };
        state.reset();
        Ok(state)
    }

    /// Creates a deterministic session for tests and reproducible simulations.
    pub fn new_with_seed(bounds: GridSize, obstacle_count: usize, seed: u64) -> Result<Self> {
        Self::new(GameConfig {
            bounds,
            obstacle_count,
            difficulty: Difficulty::default(),
            seed: Some(seed),
        })
    }

    /// Starts a new session: fresh snake, obstacles, food and score, timer
    /// restarted at the current difficulty. Difficulty itself is kept.
    pub fn reset(&mut self) {
        let head = Position {
            x: i32::from(self.bounds.width / 2) - 1,
            y: i32::from(self.bounds.height / 2) - 1,
        };
        self.snake = Snake::straight(head, Direction::Right, INITIAL_SNAKE_LEN, self.bounds);
        self.obstacles =
            Obstacles::place(&mut self.rng, self.bounds, &self.snake, self.obstacle_count);
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        self.game_over_reason = None;

        match spawn_position(&mut self.rng, self.bounds, &self.snake, &self.obstacles) {
            Some(food) => self.food = food,
            None => {
                self.end(GameOverReason::BoardFull);
            }
        }

        if self.is_running() {
            self.timer.start(self.difficulty.tick_rate());
        }
        info!(
            "session reset: difficulty={}, obstacles={}",
            self.difficulty,
            self.obstacles.len()
        );
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;
        let head = self.snake.next_head_position(self.bounds);

        if self.obstacles.contains(head) {
            return self.end(GameOverReason::Obstacle);
        }

        // Checked against the pre-move body, so the current tail cell counts.
        if self.snake.occupies(head) {
            return self.end(GameOverReason::SelfCollision);
        }

        let ate = head == self.food;
        self.snake.advance_to(head, ate);
        if !ate {
            return TickOutcome::Moved;
        }

        self.score += 1;
        debug!("food eaten at ({}, {}), score={}", head.x, head.y, self.score);
        match spawn_position(&mut self.rng, self.bounds, &self.snake, &self.obstacles) {
            Some(food) => {
                self.food = food;
                TickOutcome::Ate
            }
            None => self.end(GameOverReason::BoardFull),
        }
    }

    /// Feeds elapsed wall-clock time to the timer and runs every tick that
    /// became due. Returns the number of ticks executed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let due = self.timer.advance(elapsed);
        let mut executed = 0;
        for _ in 0..due {
            if self.tick() == TickOutcome::Idle {
                break;
            }
            executed += 1;
        }
        executed
    }

    /// Applies one external input event. `Quit` is handled by the caller.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                self.change_direction(direction);
            }
            GameInput::SetDifficulty(level) => self.set_difficulty(level),
            GameInput::NextDifficulty => self.set_difficulty(self.difficulty.next()),
            GameInput::PreviousDifficulty => self.set_difficulty(self.difficulty.previous()),
            GameInput::Restart => self.reset(),
            GameInput::Quit => {}
        }
    }

    /// Changes the heading for the next tick; see [`Snake::change_direction`].
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        self.snake.change_direction(direction)
    }

    /// Switches level. A running session keeps its board and restarts the
    /// timer at the new rate; a finished one just remembers the level.
    pub fn set_difficulty(&mut self, level: Difficulty) {
        self.difficulty = level;
        if self.is_running() {
            self.timer.set_rate(level.tick_rate());
        }
        info!(
            "difficulty set to {level} ({} ticks/s)",
            level.tick_rate().ticks_per_second()
        );
    }

    /// Switches level by its lower-case name. Unknown names change nothing.
    pub fn set_difficulty_by_name(&mut self, name: &str) -> bool {
        match name.parse::<Difficulty>() {
            Ok(level) => {
                self.set_difficulty(level);
                true
            }
            Err(error) => {
                warn!("ignoring difficulty change: {error}");
                false
            }
        }
    }

    /// Text for the score display.
    #[must_use]
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    fn end(&mut self, reason: GameOverReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.game_over_reason = Some(reason);
        self.timer.stop();
        info!("game over: {reason:?}, score={}", self.score);
        TickOutcome::GameOver(reason)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{GameOverReason, GameState, GameStatus, TickOutcome};
    use crate::config::GridSize;
    use crate::difficulty::Difficulty;
    use crate::input::{Direction, GameInput};
    use crate::obstacles::Obstacles;
    use crate::snake::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 20,
        height: 20,
    };

    fn fresh(seed: u64) -> GameState {
        GameState::new_with_seed(BOUNDS, 10, seed).expect("default board is valid")
    }

    /// Clears obstacles and parks the food away from row 9.
    fn open_board(seed: u64) -> GameState {
        let mut state = fresh(seed);
        state.obstacles = Obstacles::default();
        state.food = Position { x: 0, y: 0 };
        state
    }

    #[test]
    fn reset_builds_initial_session() {
        let state = fresh(1);

        let segments: Vec<_> = state.snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position { x: 9, y: 9 },
                Position { x: 8, y: 9 },
                Position { x: 7, y: 9 },
            ]
        );
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.obstacles.len(), 10);
        assert!(!state.snake.occupies(state.food));
        assert!(!state.obstacles.contains(state.food));
        assert_eq!(state.score_text(), "Score: 0");
        assert!(state.is_running());
        assert!(state.timer().is_active());
    }

    #[test]
    fn tick_moves_head_and_drops_tail() {
        let mut state = open_board(2);

        assert_eq!(state.tick(), TickOutcome::Moved);

        let segments: Vec<_> = state.snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position { x: 10, y: 9 },
                Position { x: 9, y: 9 },
                Position { x: 8, y: 9 },
            ]
        );
        assert_eq!(state.score, 0);
    }

    #[test]
    fn eating_grows_snake_and_scores() {
        let mut state = open_board(3);
        state.food = Position { x: 10, y: 9 };

        assert_eq!(state.tick(), TickOutcome::Ate);

        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score_text(), "Score: 1");
        assert!(!state.snake.occupies(state.food));
        assert!(!state.obstacles.contains(state.food));
    }

    #[test]
    fn obstacle_ends_session_without_moving() {
        let mut state = open_board(4);
        state.obstacles = Obstacles::from_cells([Position { x: 10, y: 9 }]);

        assert_eq!(
            state.tick(),
            TickOutcome::GameOver(GameOverReason::Obstacle)
        );

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.snake.head(), Position { x: 9, y: 9 });
        assert!(!state.timer().is_active());
    }

    #[test]
    fn finished_session_ignores_ticks() {
        let mut state = open_board(5);
        state.obstacles = Obstacles::from_cells([Position { x: 10, y: 9 }]);
        state.tick();
        let segments: Vec<_> = state.snake.segments().copied().collect();

        assert_eq!(state.tick(), TickOutcome::Idle);
        assert_eq!(state.advance(Duration::from_secs(10)), 0);

        let after: Vec<_> = state.snake.segments().copied().collect();
        assert_eq!(segments, after);
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn self_collision_ends_session() {
        let mut state = open_board(6);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 3, y: 3 },
                Position { x: 3, y: 2 },
            ],
            Direction::Down,
        );

        assert_eq!(
            state.tick(),
            TickOutcome::GameOver(GameOverReason::SelfCollision)
        );
    }

    #[test]
    fn moving_into_current_tail_counts_as_collision() {
        let mut state = open_board(7);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 5, y: 5 },
                Position { x: 6, y: 5 },
                Position { x: 6, y: 6 },
                Position { x: 5, y: 6 },
            ],
            Direction::Down,
        );

        assert_eq!(
            state.tick(),
            TickOutcome::GameOver(GameOverReason::SelfCollision)
        );
    }

    #[test]
    fn head_wraps_at_right_edge() {
        let mut state = open_board(8);
        state.snake = Snake::straight(Position { x: 19, y: 4 }, Direction::Right, 3, BOUNDS);

        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.snake.head(), Position { x: 0, y: 4 });
    }

    #[test]
    fn reverse_input_is_ignored_for_long_snake() {
        let mut state = open_board(9);

        state.apply_input(GameInput::Direction(Direction::Left));
        state.tick();

        assert_eq!(state.snake.head(), Position { x: 10, y: 9 });
    }

    #[test]
    fn turn_takes_effect_on_next_tick() {
        let mut state = open_board(10);

        state.apply_input(GameInput::Direction(Direction::Up));
        state.tick();

        assert_eq!(state.snake.head(), Position { x: 9, y: 8 });
    }

    #[test]
    fn difficulty_change_keeps_board_and_restarts_timer() {
        let mut state = fresh(11);
        let obstacles = state.obstacles.clone();
        let food = state.food;
        state.advance(Duration::from_millis(60));

        state.apply_input(GameInput::SetDifficulty(Difficulty::Novice));

        assert_eq!(state.difficulty(), Difficulty::Novice);
        assert_eq!(state.timer().period(), Some(Duration::from_nanos(166_666_666)));
        assert_eq!(state.obstacles, obstacles);
        assert_eq!(state.food, food);
        assert_eq!(state.tick_count, 0);
        // Phase restarted: the 60ms already elapsed do not count.
        assert_eq!(state.advance(Duration::from_millis(120)), 0);
    }

    #[test]
    fn unknown_difficulty_name_changes_nothing() {
        let mut state = fresh(12);
        let period = state.timer().period();

        assert!(!state.set_difficulty_by_name("impossible"));

        assert_eq!(state.difficulty(), Difficulty::Intermediate);
        assert_eq!(state.timer().period(), period);
    }

    #[test]
    fn difficulty_after_game_over_is_kept_for_next_session() {
        let mut state = open_board(13);
        state.obstacles = Obstacles::from_cells([Position { x: 10, y: 9 }]);
        state.tick();

        assert!(state.set_difficulty_by_name("expert"));
        assert!(!state.timer().is_active());

        state.apply_input(GameInput::Restart);
        assert_eq!(
            state.timer().period(),
            Some(Difficulty::Expert.tick_rate().period())
        );
    }

    #[test]
    fn restart_resets_score_and_status() {
        let mut state = open_board(14);
        state.food = Position { x: 10, y: 9 };
        state.tick();
        state.obstacles = Obstacles::from_cells([Position { x: 11, y: 9 }]);
        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);

        state.apply_input(GameInput::Restart);

        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
        assert!(state.is_running());
        assert_eq!(state.game_over_reason, None);
    }

    #[test]
    fn advance_runs_due_ticks() {
        let mut state = open_board(15);

        assert_eq!(state.advance(Duration::from_millis(250)), 2);
        assert_eq!(state.snake.head(), Position { x: 11, y: 9 });
    }

    #[test]
    fn filling_the_board_ends_session() {
        let bounds = GridSize {
            width: 5,
            height: 1,
        };
        let mut state = GameState::new_with_seed(bounds, 0, 16).expect("board fits");
        state.snake = Snake::from_segments(
            vec![
                Position { x: 3, y: 0 },
                Position { x: 2, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 0, y: 0 },
            ],
            Direction::Right,
        );
        state.food = Position { x: 4, y: 0 };

        assert_eq!(
            state.tick(),
            TickOutcome::GameOver(GameOverReason::BoardFull)
        );
        assert_eq!(state.score, 1);
    }
}
