use serde::Serialize;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Axis of travel shared by a direction and its opposite.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit vector `(dx, dy)`; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    GestureStart(Point),
    GestureEnd(Point),
    Confirm,
    Quit,
}

/// Returns whether a direction change is legal.
///
/// Only turns onto the other axis are accepted. That rejects instant
/// reversals as well as repeats of the current heading.
#[must_use]
pub fn direction_change_is_valid(committed: Direction, requested: Direction) -> bool {
    committed.axis() != requested.axis()
}

/// Gesture coordinate in host units.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Maps a swipe from `start` to `end` onto a cardinal direction.
///
/// The dominant axis wins; ties go to the vertical axis. A swipe that does not
/// move yields `None`.
#[must_use]
pub fn swipe_direction(start: Point, end: Point) -> Option<Direction> {
    // Widened so any pair of `i32` points has a representable delta.
    let delta_x = i64::from(end.x) - i64::from(start.x);
    let delta_y = i64::from(end.y) - i64::from(start.y);

    if delta_x.abs() > delta_y.abs() {
        Some(if delta_x > 0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else if delta_y > 0 {
        Some(Direction::Down)
    } else if delta_y < 0 {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Remembers where the current gesture began.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureTracker {
    start: Option<Point>,
}

impl GestureTracker {
    /// Records the start of a gesture, replacing any unfinished one.
    pub fn start(&mut self, point: Point) {
        self.start = Some(point);
    }

    /// Finishes the gesture and returns its swipe direction, if any.
    ///
    /// An end without a recorded start is ignored.
    pub fn end(&mut self, point: Point) -> Option<Direction> {
        let start = self.start.take()?;
        swipe_direction(start, point)
    }
}

#[cfg(test)]
mod tests {
    use super::{direction_change_is_valid, swipe_direction, Direction, GestureTracker, Point};

    fn point(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn deltas_are_unit_vectors() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn only_perpendicular_changes_are_valid() {
        assert!(!direction_change_is_valid(Direction::Right, Direction::Left));
        assert!(!direction_change_is_valid(Direction::Right, Direction::Right));
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Up, Direction::Up));

        assert!(direction_change_is_valid(Direction::Right, Direction::Up));
        assert!(direction_change_is_valid(Direction::Right, Direction::Down));
        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Down, Direction::Right));
    }

    #[test]
    fn swipe_uses_dominant_axis() {
        assert_eq!(
            swipe_direction(point(10, 10), point(40, 15)),
            Some(Direction::Right)
        );
        assert_eq!(
            swipe_direction(point(10, 10), point(-20, 0)),
            Some(Direction::Left)
        );
        assert_eq!(
            swipe_direction(point(10, 10), point(12, 50)),
            Some(Direction::Down)
        );
        assert_eq!(
            swipe_direction(point(10, 10), point(5, -30)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn diagonal_tie_is_vertical() {
        assert_eq!(
            swipe_direction(point(0, 0), point(5, 5)),
            Some(Direction::Down)
        );
        assert_eq!(
            swipe_direction(point(0, 0), point(-5, -5)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn zero_swipe_yields_nothing() {
        assert_eq!(swipe_direction(point(7, 7), point(7, 7)), None);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        assert_eq!(
            swipe_direction(point(i32::MIN, 0), point(1, 0)),
            Some(Direction::Right)
        );
        assert_eq!(
            swipe_direction(point(0, 0), point(i32::MIN, 0)),
            Some(Direction::Left)
        );
        assert_eq!(
            swipe_direction(point(i32::MAX, i32::MIN), point(i32::MIN, i32::MAX)),
            Some(Direction::Down)
        );
        assert_eq!(
            swipe_direction(point(0, i32::MAX), point(0, i32::MIN)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn gesture_end_without_start_is_ignored() {
        let mut tracker = GestureTracker::default();
        assert_eq!(tracker.end(point(50, 0)), None);
    }

    #[test]
    fn gesture_end_clears_start() {
        let mut tracker = GestureTracker::default();
        tracker.start(point(0, 0));

        assert_eq!(tracker.end(point(30, 0)), Some(Direction::Right));
        assert_eq!(tracker.end(point(60, 0)), None);
    }
}
