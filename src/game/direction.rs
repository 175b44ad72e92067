/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Holds the direction the next tick will apply.
///
/// Proposals are checked against the *committed* direction (the one last
/// applied to the snake), not against the last proposal. Several proposals
/// between two ticks collapse into the latest legal one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionBuffer {
    committed: Direction,
    pending: Direction,
}

impl DirectionBuffer {
    pub fn new(initial: Direction) -> Self {
        Self {
            committed: initial,
            pending: initial,
        }
    }

    /// Queue a direction for the next tick. Reversals are rejected.
    pub fn propose(&mut self, direction: Direction) -> bool {
        if self.committed.is_opposite(direction) {
            return false;
        }
        self.pending = direction;
        true
    }

    /// Apply the pending direction; called exactly once per tick.
    pub fn commit(&mut self) -> Direction {
        self.committed = self.pending;
        self.committed
    }

    pub fn committed(&self) -> Direction {
        self.committed
    }

    pub fn pending(&self) -> Direction {
        self.pending
    }

    pub fn reset(&mut self, direction: Direction) {
        self.committed = direction;
        self.pending = direction;
    }
}
