use super::direction::Direction;
use super::state::Position;

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// The player-controlled snake.
///
/// Body segments are ordered head-first; the body is never empty. Direction
/// changes arriving between ticks are buffered and applied at the start of
/// the next [`advance`](Snake::advance), so input is never lost or applied
/// twice within one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub segments: Vec<Position>,
    /// Food items consumed this session
    pub score: u32,
    direction: Option<Direction>,
    pending: Option<Direction>,
    started: bool,
    /// Tail cell removed by the most recent advance; restored on growth
    vacated: Option<Position>,
}

impl Snake {
    /// Create a snake with a single segment at the given start cell
    pub fn new(start: Position) -> Self {
        Self {
            segments: vec![start],
            score: 0,
            direction: None,
            pending: None,
            started: false,
            vacated: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// The direction currently applied to movement, if any
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// The buffered direction change, if any
    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Whether movement has been activated by a first directional input
    pub fn started(&self) -> bool {
        self.started
    }

    /// Check if a position is occupied by any segment
    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Request a direction change.
    ///
    /// A request equal to the active direction, or directly opposite to it,
    /// is ignored. The first accepted request activates movement
    /// immediately; later requests are buffered until the next advance,
    /// overwriting any earlier buffered value. The reversal check is against
    /// the active direction, not the buffered one.
    pub fn set_direction(&mut self, requested: Direction) {
        if let Some(current) = self.direction {
            if current == requested || current.is_opposite(requested) {
                return;
            }
        }

        if self.started {
            self.pending = Some(requested);
        } else {
            self.direction = Some(requested);
            self.started = true;
        }
    }

    /// Move the snake one cell in its active direction.
    ///
    /// No-op until movement has been activated. Applies the buffered
    /// direction first, prepends the new head and removes the tail, so net
    /// length is unchanged.
    pub fn advance(&mut self) {
        if !self.started {
            return;
        }

        if self.pending.is_some() {
            self.direction = self.pending.take();
        }

        let Some(direction) = self.direction else {
            return;
        };

        let new_head = self.head().moved_in_direction(direction);
        self.segments.insert(0, new_head);
        self.vacated = self.segments.pop();
    }

    /// Check the post-advance state for a terminal collision
    pub fn check_collision(&self, grid_size: usize) -> Option<CollisionType> {
        let head = self.head();

        if !head.is_in_bounds(grid_size) {
            return Some(CollisionType::Wall);
        }

        if self.segments[1..].contains(&head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Grow by one segment, restoring the tail cell vacated by the last
    /// advance. Called once per food consumption.
    pub fn grow(&mut self) {
        if let Some(tail) = self.vacated.take() {
            self.segments.push(tail);
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
