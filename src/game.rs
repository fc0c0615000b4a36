use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::config::{FOOD_REWARD, GRID, INITIAL_DIRECTION, INITIAL_FOOD, INITIAL_SNAKE_HEAD};
use crate::food::Food;
use crate::input::{direction_change_is_valid, Direction};
use crate::snake::Snake;

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete state of one game.
///
/// `direction` is the heading committed by the last tick; input only ever
/// touches `pending_direction`, which the next tick commits.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub direction: Direction,
    pub pending_direction: Direction,
    pub score: u32,
    pub over: bool,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates the state shown when the game first appears.
    #[must_use]
    pub fn new() -> Self {
        Self::with_food(Food::new(INITIAL_FOOD))
    }

    /// Creates a post-reset state with randomly placed food.
    #[must_use]
    pub fn fresh<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_food(Food::spawn(rng, GRID))
    }

    fn with_food(food: Food) -> Self {
        Self {
            snake: Snake::new(INITIAL_SNAKE_HEAD),
            food,
            direction: INITIAL_DIRECTION,
            pending_direction: INITIAL_DIRECTION,
            score: 0,
            over: false,
            death_reason: None,
            tick_count: 0,
        }
    }

    /// Restores the initial values and places fresh food.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::fresh(rng);
        info!("game reset, food at {:?}", self.food.position);
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.over {
            return;
        }

        let new_head = self.snake.head().step(self.pending_direction);

        if !new_head.is_within_bounds(GRID) {
            self.finish(DeathReason::WallCollision);
            return;
        }

        // Checked against the pre-move body, tail included.
        if self.snake.occupies(new_head) {
            self.finish(DeathReason::SelfCollision);
            return;
        }

        self.direction = self.pending_direction;
        self.tick_count += 1;

        let ate = new_head == self.food.position;
        self.snake.advance(new_head, ate);

        if ate {
            self.score += FOOD_REWARD;
            self.food = Food::spawn(rng, GRID);
            debug!(
                "food eaten, score {} length {} next food {:?}",
                self.score,
                self.snake.len(),
                self.food.position
            );
        }
    }

    /// Stages `direction` for the next tick if it turns onto the other axis.
    ///
    /// Returns whether the request was accepted. Later accepted requests
    /// overwrite earlier ones until the next tick commits.
    pub fn apply_direction(&mut self, direction: Direction) -> bool {
        if self.over || !direction_change_is_valid(self.direction, direction) {
            debug!("direction {direction:?} rejected while heading {:?}", self.direction);
            return false;
        }

        self.pending_direction = direction;
        debug!("direction {direction:?} staged");
        true
    }

    fn finish(&mut self, reason: DeathReason) {
        self.over = true;
        self.death_reason = Some(reason);
        info!(
            "game over ({reason:?}) with score {} after {} ticks",
            self.score, self.tick_count
        );
    }
}

/// Returns the state one tick after `state`.
#[must_use]
pub fn advance_tick<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    let mut next = state.clone();
    next.tick(rng);
    next
}

/// Returns `state` with `direction` staged, when the change is accepted.
#[must_use]
pub fn apply_input(state: &GameState, direction: Direction) -> GameState {
    let mut next = state.clone();
    let _ = next.apply_direction(direction);
    next
}
