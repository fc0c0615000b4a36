use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::TICK_INTERVAL_MS;
use crate::game::GameState;
use crate::input::{Direction, GestureTracker, Point};
use crate::scheduler::TickScheduler;

/// The single live game owned by the host loop.
///
/// Bundles the state with everything that mutates it: the food RNG, the
/// gesture tracker and the tick scheduler.
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    rng: StdRng,
    gesture: GestureTracker,
    scheduler: TickScheduler,
}

impl GameSession {
    /// Starts a session with entropy-seeded food placement.
    #[must_use]
    pub fn start(now: Instant) -> Self {
        Self::with_rng(StdRng::from_entropy(), now)
    }

    /// Starts a session whose food placement is reproducible.
    #[must_use]
    pub fn start_with_seed(seed: u64, now: Instant) -> Self {
        info!("food placement seeded with {seed}");
        Self::with_rng(StdRng::seed_from_u64(seed), now)
    }

    fn with_rng(rng: StdRng, now: Instant) -> Self {
        Self {
            state: GameState::new(),
            rng,
            gesture: GestureTracker::default(),
            scheduler: TickScheduler::start(Duration::from_millis(TICK_INTERVAL_MS), now),
        }
    }

    /// Read-only view of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    /// Feeds a keyboard direction into the game. Returns whether it was staged.
    pub fn handle_directional_input(&mut self, direction: Direction) -> bool {
        self.state.apply_direction(direction)
    }

    pub fn handle_gesture_start(&mut self, point: Point) {
        self.gesture.start(point);
    }

    /// Finishes a swipe and feeds its direction into the game.
    ///
    /// Returns whether a direction was staged.
    pub fn handle_gesture_end(&mut self, point: Point) -> bool {
        match self.gesture.end(point) {
            Some(direction) => self.state.apply_direction(direction),
            None => {
                debug!("gesture ended without a direction");
                false
            }
        }
    }

    /// Starts a new game. Scheduling is not affected.
    pub fn reset(&mut self) {
        self.state.reset(&mut self.rng);
    }

    /// Runs one tick if the scheduler says one is due. Returns whether it ran.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.scheduler.poll(now) {
            return false;
        }

        self.state.tick(&mut self.rng);
        true
    }

    /// Returns how long the host may block before the next tick is due.
    #[must_use]
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_next(now)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Stops ticking and hands back the final state.
    #[must_use]
    pub fn teardown(mut self) -> GameState {
        self.scheduler.stop();
        info!(
            "session torn down with score {} (over: {})",
            self.state.score, self.state.over
        );
        // The scheduler is already stopped, so its drop is a no-op.
        std::mem::take(&mut self.state)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::config::{FOOD_REWARD, TICK_INTERVAL_MS};
    use crate::food::Food;
    use crate::input::{Direction, Point};
    use crate::snake::Position;

    use super::GameSession;

    fn after_ticks(start: Instant, ticks: u64) -> Instant {
        start + Duration::from_millis(TICK_INTERVAL_MS * ticks)
    }

    #[test]
    fn update_runs_tick_only_when_due() {
        let start = Instant::now();
        let mut session = GameSession::start_with_seed(1, start);

        assert!(!session.update(start + Duration::from_millis(10)));
        assert_eq!(session.snapshot().snake.head(), Position { x: 10, y: 10 });

        assert!(session.update(after_ticks(start, 1)));
        assert_eq!(session.snapshot().snake.head(), Position { x: 11, y: 10 });
    }

    #[test]
    fn swipe_turns_the_snake() {
        let start = Instant::now();
        let mut session = GameSession::start_with_seed(2, start);

        session.handle_gesture_start(Point { x: 40, y: 40 });
        assert!(session.handle_gesture_end(Point { x: 42, y: 10 }));
        session.update(after_ticks(start, 1));

        assert_eq!(session.snapshot().direction, Direction::Up);
        assert_eq!(session.snapshot().snake.head(), Position { x: 10, y: 9 });
    }

    #[test]
    fn zero_length_swipe_changes_nothing() {
        let start = Instant::now();
        let mut session = GameSession::start_with_seed(3, start);

        session.handle_gesture_start(Point { x: 5, y: 5 });
        assert!(!session.handle_gesture_end(Point { x: 5, y: 5 }));
        assert_eq!(session.snapshot().pending_direction, Direction::Right);
    }

    #[test]
    fn swipe_between_extreme_points_is_handled() {
        let start = Instant::now();
        let mut session = GameSession::start_with_seed(9, start);

        session.handle_gesture_start(Point { x: i32::MAX, y: 0 });
        assert!(!session.handle_gesture_end(Point { x: -10, y: 0 }));

        session.handle_gesture_start(Point { x: 0, y: i32::MIN });
        assert!(session.handle_gesture_end(Point { x: 0, y: i32::MAX }));
        assert_eq!(session.snapshot().pending_direction, Direction::Down);
    }

    #[test]
    fn keyboard_reversal_is_rejected() {
        let start = Instant::now();
        let mut session = GameSession::start_with_seed(4, start);

        assert!(!session.handle_directional_input(Direction::Left));
        assert_eq!(session.snapshot().pending_direction, Direction::Right);
    }

    #[test]
    fn game_over_keeps_scheduler_running() {
        let start = Instant::now();
        let mut session = GameSession::start_with_seed(5, start);

        // Nine cells to the right wall, then one more tick to hit it.
        for tick in 1..=10 {
            session.update(after_ticks(start, tick));
        }

        assert!(session.snapshot().over);
        assert!(session.is_running());
        let frozen = session.snapshot().clone();
        assert!(session.update(after_ticks(start, 11)));
        assert_eq!(session.snapshot(), &frozen);
    }

    #[test]
    fn reset_after_game_over_starts_again() {
        let start = Instant::now();
        let mut session = GameSession::start_with_seed(6, start);
        for tick in 1..=10 {
            session.update(after_ticks(start, tick));
        }
        assert!(session.snapshot().over);

        session.reset();

        let state = session.snapshot();
        assert!(!state.over);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position { x: 10, y: 10 });
    }

    #[test]
    fn eating_scores_through_session() {
        let start = Instant::now();
        let mut session = GameSession::start_with_seed(7, start);
        session.state.food = Food::new(Position { x: 11, y: 10 });

        session.update(after_ticks(start, 1));

        assert_eq!(session.snapshot().score, FOOD_REWARD);
        assert_eq!(session.snapshot().snake.len(), 2);
    }

    #[test]
    fn teardown_returns_final_state() {
        let start = Instant::now();
        let mut session = GameSession::start_with_seed(8, start);
        session.update(after_ticks(start, 1));

        let final_state = session.teardown();

        assert_eq!(final_state.snake.head(), Position { x: 11, y: 10 });
    }
}
