use super::state::{Position, Snake};

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Check a candidate head against the board and the pre-move body.
///
/// Walls are checked first. The body is taken as it is *before* the tail
/// moves, so stepping into the cell the tail currently occupies is a
/// self-collision even when the tail would leave it this tick.
pub fn detect_collision(candidate: Position, grid_size: usize, body: &Snake) -> Option<CollisionType> {
    let size = grid_size as i32;
    if candidate.x < 0 || candidate.x >= size || candidate.y < 0 || candidate.y >= size {
        return Some(CollisionType::Wall);
    }

    if body.contains(candidate) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    fn snake() -> Snake {
        Snake::new(Position::new(10, 10), Direction::Up, 3)
    }

    #[test]
    fn test_wall_bounds() {
        let body = snake();

        assert_eq!(detect_collision(Position::new(-1, 5), 20, &body), Some(CollisionType::Wall));
        assert_eq!(detect_collision(Position::new(20, 5), 20, &body), Some(CollisionType::Wall));
        assert_eq!(detect_collision(Position::new(5, -1), 20, &body), Some(CollisionType::Wall));
        assert_eq!(detect_collision(Position::new(5, 20), 20, &body), Some(CollisionType::Wall));

        assert_eq!(detect_collision(Position::new(0, 0), 20, &body), None);
        assert_eq!(detect_collision(Position::new(19, 19), 20, &body), None);
    }

    #[test]
    fn test_self_collision_on_any_segment() {
        let body = snake();

        for segment in body.to_vec() {
            assert_eq!(
                detect_collision(segment, 20, &body),
                Some(CollisionType::SelfCollision)
            );
        }
        assert_eq!(detect_collision(Position::new(10, 9), 20, &body), None);
    }

    #[test]
    fn test_tail_cell_counts_as_collision() {
        // A 2x2 loop: the head would move into the tail's current cell.
        let body = Snake::from_segments([
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(0, 1),
            Position::new(0, 0),
        ]);

        assert_eq!(
            detect_collision(Position::new(0, 0), 20, &body),
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_wall_wins_over_self() {
        let body = Snake::from_segments([Position::new(0, 0), Position::new(1, 0)]);
        assert_eq!(detect_collision(Position::new(-1, 0), 20, &body), Some(CollisionType::Wall));
    }
}
