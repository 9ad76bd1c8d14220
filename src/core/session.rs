//! The game session: tick sequencing, input handling, and lifecycle.

use crate::config::SessionConfig;
use crate::core::collision::classify;
use crate::core::fruit::FruitSpawner;
use crate::core::grid::Grid;
use crate::core::snake::SnakeBody;
use crate::core::walls::WallLayout;
use crate::io::{AudioSink, ScoreStore};
use crate::types::{Cell, Collision, Direction, InputEvent, SessionState, FRUIT_REWARD};

/// Direction the snake faces at the start of every run.
const START_DIRECTION: Direction = Direction::Right;

/// One play-through of the game, from the first tick to game over and back
/// through restarts.
///
/// The session exclusively owns the snake, the fruit, the score counters,
/// and the lifecycle state. Persistence and audio are reached through
/// injected capability traits; rendering reads the session through the
/// accessor methods between ticks.
pub struct GameSession {
    config: SessionConfig,
    grid: Grid,
    walls: Option<WallLayout>,
    snake: SnakeBody,
    spawner: FruitSpawner,
    fruit: Option<Cell>,
    current_direction: Direction,
    pending_direction: Option<Direction>,
    score: u64,
    fruits_eaten: u64,
    highest_score: u64,
    state: SessionState,
    score_store: Box<dyn ScoreStore>,
    audio: Box<dyn AudioSink>,
}

impl GameSession {
    /// Create a session in the `Playing` state with a freshly placed snake
    /// and fruit. The prior best score is loaded from the store up front.
    pub fn new(
        config: SessionConfig,
        seed: u32,
        mut score_store: Box<dyn ScoreStore>,
        audio: Box<dyn AudioSink>,
    ) -> Self {
        let grid = Grid::new(config.grid_width, config.grid_height);
        let walls = config.walls_enabled.then(|| WallLayout::perimeter(grid));
        let snake = SnakeBody::new(grid.center(), START_DIRECTION, config.initial_length);
        let mut spawner = FruitSpawner::new(seed);
        let fruit = spawner.spawn(grid, config.fruit_avoids_snake.then_some(&snake));
        let highest_score = score_store.load();

        Self {
            config,
            grid,
            walls,
            snake,
            spawner,
            fruit,
            current_direction: START_DIRECTION,
            pending_direction: None,
            score: 0,
            fruits_eaten: 0,
            highest_score,
            state: SessionState::Playing,
            score_store,
            audio,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn walls(&self) -> Option<&WallLayout> {
        self.walls.as_ref()
    }

    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub fn fruit(&self) -> Option<Cell> {
        self.fruit
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn fruits_eaten(&self) -> u64 {
        self.fruits_eaten
    }

    pub fn highest_score(&self) -> u64 {
        self.highest_score
    }

    pub fn direction(&self) -> Direction {
        self.current_direction
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Advance the simulation by one step.
    ///
    /// Commits the buffered direction, moves the head, classifies the
    /// outcome, and applies growth/scoring or the game-over transition.
    /// Does nothing outside the `Playing` state.
    pub fn tick(&mut self) -> Collision {
        if self.state != SessionState::Playing {
            return Collision::None;
        }

        self.commit_direction();

        let next_head = self.snake.head().step(self.current_direction);
        let outcome = classify(
            self.grid,
            self.walls.as_ref(),
            &self.snake,
            self.fruit,
            next_head,
        );

        match outcome {
            Collision::None => {
                self.snake.advance(next_head, false);
            }
            Collision::Fruit => {
                self.snake.advance(next_head, true);
                self.score += FRUIT_REWARD;
                self.fruits_eaten += 1;
                self.audio.play_eat();
                self.fruit = self.spawner.spawn(
                    self.grid,
                    self.config.fruit_avoids_snake.then_some(&self.snake),
                );
                if self.fruit.is_none() {
                    // The snake fills the arena: the run is complete.
                    self.finish_run();
                }
            }
            Collision::Wall | Collision::OutOfBounds | Collision::Body => {
                self.finish_run();
            }
        }

        outcome
    }

    /// Feed one input event to the session. Returns `true` when the host
    /// should exit its loop.
    pub fn apply_event(&mut self, event: InputEvent) -> bool {
        match (self.state, event) {
            (SessionState::Playing, InputEvent::Turn(direction)) => {
                self.request_turn(direction);
                false
            }
            (SessionState::Playing, InputEvent::Quit) => {
                // Manual quit intent ends the run without a collision. The
                // minimal build skipped the best-score comparison here.
                if self.config.save_on_manual_quit {
                    self.finish_run();
                } else {
                    self.state = SessionState::GameOver;
                }
                false
            }
            (SessionState::GameOver, InputEvent::Restart) => {
                self.restart();
                false
            }
            (SessionState::GameOver, InputEvent::Quit) => {
                self.score_store.save(self.highest_score);
                true
            }
            (_, InputEvent::CloseRequested) => {
                // Always persist before final exit, whatever the state.
                self.score_store.save(self.highest_score);
                true
            }
            _ => false,
        }
    }

    /// Buffer a direction change for the next tick.
    ///
    /// Reversals into the neck are dropped here, and a later request within
    /// the same tick replaces an earlier one.
    fn request_turn(&mut self, direction: Direction) {
        if !direction.is_opposite(self.current_direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Apply the buffered direction, refusing a reversal even if one slipped
    /// past the input layer.
    fn commit_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            if !direction.is_opposite(self.current_direction) {
                self.current_direction = direction;
            }
        }
    }

    /// End the current run: transition to game over and push a new best
    /// score to the store if this run set one.
    fn finish_run(&mut self) {
        self.state = SessionState::GameOver;
        if self.score > self.highest_score {
            self.highest_score = self.score;
            self.score_store.save(self.highest_score);
        }
    }

    /// Reset to a fresh `Playing` state. Wall geometry is regenerated from
    /// the grid (idempotent); the best score carries over.
    fn restart(&mut self) {
        self.walls = self
            .config
            .walls_enabled
            .then(|| WallLayout::perimeter(self.grid));
        self.snake = SnakeBody::new(
            self.grid.center(),
            START_DIRECTION,
            self.config.initial_length,
        );
        self.fruit = self.spawner.spawn(
            self.grid,
            self.config.fruit_avoids_snake.then_some(&self.snake),
        );
        self.current_direction = START_DIRECTION;
        self.pending_direction = None;
        self.score = 0;
        self.fruits_eaten = 0;
        self.state = SessionState::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{MemoryScoreStore, NullAudio};
    use std::cell::{Cell as StdCell, RefCell};
    use std::rc::Rc;

    /// Store handle that stays observable after the session takes ownership.
    struct SharedStore(Rc<RefCell<MemoryScoreStore>>);

    impl ScoreStore for SharedStore {
        fn load(&mut self) -> u64 {
            self.0.borrow_mut().load()
        }
        fn save(&mut self, value: u64) {
            self.0.borrow_mut().save(value)
        }
    }

    struct CountingAudio(Rc<StdCell<u32>>);

    impl AudioSink for CountingAudio {
        fn play_eat(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn session(config: SessionConfig) -> GameSession {
        GameSession::new(
            config,
            1,
            Box::new(MemoryScoreStore::default()),
            Box::new(NullAudio),
        )
    }

    fn classic_config() -> SessionConfig {
        SessionConfig::classic()
    }

    #[test]
    fn plain_tick_moves_the_head_right() {
        // Grid 40x30, snake at (20,15) length 1 moving right.
        let mut s = session(classic_config());
        s.fruit = None;
        let outcome = s.tick();
        assert_eq!(outcome, Collision::None);
        assert_eq!(s.snake.head(), Cell::new(21, 15));
        assert_eq!(s.snake.len(), 1);
        assert_eq!(s.state(), SessionState::Playing);
    }

    #[test]
    fn eating_scores_grows_and_respawns() {
        let eat_count = Rc::new(StdCell::new(0));
        let mut s = GameSession::new(
            classic_config(),
            1,
            Box::new(MemoryScoreStore::default()),
            Box::new(CountingAudio(Rc::clone(&eat_count))),
        );
        s.fruit = Some(Cell::new(21, 15));

        let outcome = s.tick();

        assert_eq!(outcome, Collision::Fruit);
        assert_eq!(s.score(), 10);
        assert_eq!(s.fruits_eaten(), 1);
        assert_eq!(s.snake.len(), 2);
        assert_eq!(eat_count.get(), 1);
        let fruit = s.fruit().expect("a new fruit was spawned");
        assert!(!s.snake.contains(fruit));
    }

    #[test]
    fn boundary_hit_ends_the_session() {
        let mut s = session(classic_config());
        s.snake = SnakeBody::new(Cell::new(39, 15), Direction::Right, 1);
        s.fruit = None;
        let outcome = s.tick();
        assert_eq!(outcome, Collision::OutOfBounds);
        assert_eq!(s.state(), SessionState::GameOver);
    }

    #[test]
    fn wall_hit_ends_the_session_in_the_walled_variant() {
        let mut s = session(SessionConfig::walled());
        // March right until the perimeter wall at x = 38 is next.
        s.snake = SnakeBody::new(Cell::new(38, 15), Direction::Right, 2);
        s.fruit = None;
        assert_eq!(s.tick(), Collision::Wall);
        assert_eq!(s.state(), SessionState::GameOver);
    }

    #[test]
    fn ticks_do_nothing_while_game_over() {
        let mut s = session(classic_config());
        s.state = SessionState::GameOver;
        let head = s.snake.head();
        assert_eq!(s.tick(), Collision::None);
        assert_eq!(s.snake.head(), head);
    }

    #[test]
    fn reversal_requests_are_dropped() {
        let mut s = session(classic_config());
        s.fruit = None;
        // Moving right; an immediate left request must not commit.
        assert!(!s.apply_event(InputEvent::Turn(Direction::Left)));
        s.tick();
        assert_eq!(s.direction(), Direction::Right);

        // A perpendicular turn commits normally.
        s.apply_event(InputEvent::Turn(Direction::Down));
        s.tick();
        assert_eq!(s.direction(), Direction::Down);
    }

    #[test]
    fn later_turn_request_in_the_same_tick_wins() {
        let mut s = session(classic_config());
        s.fruit = None;
        s.apply_event(InputEvent::Turn(Direction::Down));
        s.apply_event(InputEvent::Turn(Direction::Up));
        s.tick();
        assert_eq!(s.direction(), Direction::Up);
    }

    #[test]
    fn commit_defends_against_a_buffered_reversal() {
        let mut s = session(classic_config());
        s.fruit = None;
        // Force an illegal pending value past the input-side guard.
        s.pending_direction = Some(Direction::Left);
        s.tick();
        assert_eq!(s.direction(), Direction::Right);
    }

    #[test]
    fn length_tracks_fruits_eaten() {
        let mut s = session(classic_config());
        let initial = s.config.initial_length as u64;
        for _ in 0..100 {
            if s.state() != SessionState::Playing {
                break;
            }
            s.tick();
            assert_eq!(s.snake.len() as u64, initial + s.fruits_eaten());
        }
    }

    #[test]
    fn self_collision_ends_the_session() {
        let mut s = session(classic_config());
        s.snake = SnakeBody::new(Cell::new(5, 5), Direction::Right, 5);
        s.fruit = None;
        // Curl back into the body: down, left, up lands on (5,5)'s old
        // segment chain.
        s.apply_event(InputEvent::Turn(Direction::Down));
        assert_eq!(s.tick(), Collision::None);
        s.apply_event(InputEvent::Turn(Direction::Left));
        assert_eq!(s.tick(), Collision::None);
        s.apply_event(InputEvent::Turn(Direction::Up));
        assert_eq!(s.tick(), Collision::Body);
        assert_eq!(s.state(), SessionState::GameOver);
    }

    #[test]
    fn fatal_outcome_records_a_new_best() {
        let store = Rc::new(RefCell::new(MemoryScoreStore::with_value(5)));
        let mut s = GameSession::new(
            classic_config(),
            1,
            Box::new(SharedStore(Rc::clone(&store))),
            Box::new(NullAudio),
        );
        s.score = 30;
        s.snake = SnakeBody::new(Cell::new(39, 15), Direction::Right, 1);
        s.fruit = None;
        s.tick();
        assert_eq!(s.highest_score(), 30);
        assert_eq!(store.borrow().value(), 30);
    }

    #[test]
    fn lower_score_leaves_the_best_alone() {
        let store = Rc::new(RefCell::new(MemoryScoreStore::with_value(90)));
        let mut s = GameSession::new(
            classic_config(),
            1,
            Box::new(SharedStore(Rc::clone(&store))),
            Box::new(NullAudio),
        );
        s.score = 30;
        s.snake = SnakeBody::new(Cell::new(39, 15), Direction::Right, 1);
        s.fruit = None;
        s.tick();
        assert_eq!(s.highest_score(), 90);
        assert_eq!(store.borrow().saves(), 0);
    }

    #[test]
    fn manual_quit_skips_the_best_comparison_in_classic() {
        let store = Rc::new(RefCell::new(MemoryScoreStore::default()));
        let mut s = GameSession::new(
            classic_config(),
            1,
            Box::new(SharedStore(Rc::clone(&store))),
            Box::new(NullAudio),
        );
        s.score = 40;
        assert!(!s.apply_event(InputEvent::Quit));
        assert_eq!(s.state(), SessionState::GameOver);
        assert_eq!(s.highest_score(), 0);
        assert_eq!(store.borrow().saves(), 0);
    }

    #[test]
    fn manual_quit_records_the_best_in_walled() {
        let store = Rc::new(RefCell::new(MemoryScoreStore::default()));
        let mut s = GameSession::new(
            SessionConfig::walled(),
            1,
            Box::new(SharedStore(Rc::clone(&store))),
            Box::new(NullAudio),
        );
        s.score = 40;
        assert!(!s.apply_event(InputEvent::Quit));
        assert_eq!(s.state(), SessionState::GameOver);
        assert_eq!(s.highest_score(), 40);
        assert_eq!(store.borrow().value(), 40);
    }

    #[test]
    fn quit_while_over_persists_and_exits() {
        let store = Rc::new(RefCell::new(MemoryScoreStore::with_value(70)));
        let mut s = GameSession::new(
            classic_config(),
            1,
            Box::new(SharedStore(Rc::clone(&store))),
            Box::new(NullAudio),
        );
        s.state = SessionState::GameOver;
        assert!(s.apply_event(InputEvent::Quit));
        assert_eq!(store.borrow().saves(), 1);
        assert_eq!(store.borrow().value(), 70);
    }

    #[test]
    fn close_request_persists_in_any_state() {
        let store = Rc::new(RefCell::new(MemoryScoreStore::default()));
        let mut s = GameSession::new(
            classic_config(),
            1,
            Box::new(SharedStore(Rc::clone(&store))),
            Box::new(NullAudio),
        );
        assert!(s.apply_event(InputEvent::CloseRequested));
        assert_eq!(store.borrow().saves(), 1);
    }

    #[test]
    fn restart_resets_the_run_but_keeps_the_best() {
        let mut s = session(classic_config());
        s.score = 50;
        s.fruits_eaten = 5;
        s.snake = SnakeBody::new(Cell::new(39, 15), Direction::Right, 1);
        s.fruit = None;
        s.tick();
        assert_eq!(s.state(), SessionState::GameOver);
        let best = s.highest_score();

        s.apply_event(InputEvent::Restart);

        assert_eq!(s.state(), SessionState::Playing);
        assert_eq!(s.score(), 0);
        assert_eq!(s.fruits_eaten(), 0);
        assert_eq!(s.snake.len(), s.config.initial_length);
        assert_eq!(s.snake.head(), Cell::new(20, 15));
        assert_eq!(s.direction(), Direction::Right);
        assert_eq!(s.highest_score(), best);
        assert!(s.fruit().is_some());
    }

    #[test]
    fn filling_the_arena_completes_the_run() {
        // 2x1 arena: one fruit away from a full board.
        let config = SessionConfig::classic().with_grid(2, 1);
        let mut s = session(config);
        // Snake starts at the center (1,0); the only free cell is (0,0).
        assert_eq!(s.fruit(), Some(Cell::new(0, 0)));
        s.snake = SnakeBody::new(Cell::new(0, 0), Direction::Right, 1);
        s.fruit = Some(Cell::new(1, 0));
        assert_eq!(s.tick(), Collision::Fruit);
        assert_eq!(s.fruit(), None);
        assert_eq!(s.state(), SessionState::GameOver);
        assert_eq!(s.score(), 10);
    }

    #[test]
    fn walled_fruit_placement_ignores_the_snake() {
        // Unchecked placement on a tiny walled grid will eventually pick an
        // occupied cell; all that matters here is it always lands in bounds.
        let config = SessionConfig::walled().with_grid(5, 5);
        let s = session(config);
        let fruit = s.fruit().unwrap();
        assert!(s.grid().in_bounds(fruit));
    }
}
