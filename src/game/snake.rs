use super::direction::Direction;
use super::grid::Position;

/// The snake: a head, a travel direction, and an ordered trail of body
/// segments (index 0 sits immediately behind the head).
///
/// Direction changes go through a one-slot pending buffer and take effect
/// at the start of the next tick, so a burst of key presses between ticks
/// can never turn the snake twice in one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    head: Position,
    direction: Direction,
    body: Vec<Position>,
    pending: Option<Direction>,
}

impl Snake {
    /// A fresh snake: head only, no body segments yet
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            head,
            direction,
            body: Vec::new(),
            pending: None,
        }
    }

    pub fn head_position(&self) -> Position {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Body segments ordered by distance from the head, head excluded
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Number of body segments (the head is not counted)
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// True if the head or any body segment sits on the given tile
    pub fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Buffer a direction change for the next tick. Last write wins;
    /// earlier unapplied commands are simply overwritten.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Consume the buffered command, if any. A command that would reverse
    /// straight into the first body segment is discarded; anything else
    /// becomes the travel direction. The buffer is cleared either way.
    pub fn apply_pending_direction(&mut self) {
        if let Some(requested) = self.pending.take() {
            if !self.direction.is_opposite(requested) {
                self.direction = requested;
            }
        }
    }

    /// Move one tile in the travel direction. Each body segment takes the
    /// position its predecessor held before this move: the previous
    /// position is captured first, then written to the successor, so no
    /// segment ever reads a neighbor that has already moved this tick.
    pub fn advance(&mut self) {
        let mut vacated = self.head;
        self.head = self.head.step(self.direction);
        for segment in &mut self.body {
            std::mem::swap(segment, &mut vacated);
        }
    }

    /// Append one segment at the current tail position. It overlaps the
    /// tail until the next `advance`, which is when the tail vacates that
    /// slot and the new segment becomes a proper trailing segment.
    pub fn grow(&mut self) {
        let tail = self.body.last().copied().unwrap_or(self.head);
        self.body.push(tail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_with_body(head: Position, direction: Direction, body: &[Position]) -> Snake {
        let mut snake = Snake::new(head, direction);
        snake.body = body.to_vec();
        snake
    }

    #[test]
    fn test_new_snake_has_no_body() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right);
        assert_eq!(snake.len(), 0);
        assert!(snake.is_empty());
        assert_eq!(snake.head_position(), Position::new(5, 5));
    }

    #[test]
    fn test_advance_without_body() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);
        snake.advance();
        assert_eq!(snake.head_position(), Position::new(6, 5));
        assert!(snake.segments().is_empty());
    }

    #[test]
    fn test_advance_shifts_body_into_vacated_positions() {
        let mut snake = snake_with_body(
            Position::new(5, 5),
            Direction::Right,
            &[Position::new(4, 5), Position::new(3, 5), Position::new(2, 5)],
        );

        snake.advance();

        assert_eq!(snake.head_position(), Position::new(6, 5));
        assert_eq!(
            snake.segments(),
            &[Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)]
        );
    }

    #[test]
    fn test_segments_stay_one_tile_apart() {
        let mut snake = snake_with_body(
            Position::new(5, 5),
            Direction::Right,
            &[Position::new(4, 5), Position::new(3, 5)],
        );

        for turn in [Direction::Down, Direction::Left, Direction::Down] {
            snake.set_pending_direction(turn);
            snake.apply_pending_direction();
            snake.advance();

            let mut prev = snake.head_position();
            for &seg in snake.segments() {
                let dist = (prev.x - seg.x).abs() + (prev.y - seg.y).abs();
                assert_eq!(dist, 1);
                prev = seg;
            }
        }
    }

    #[test]
    fn test_grow_appends_at_tail() {
        let mut snake = snake_with_body(
            Position::new(5, 5),
            Direction::Right,
            &[Position::new(4, 5)],
        );

        snake.grow();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.segments()[1], Position::new(4, 5));

        // The placeholder untangles on the next advance
        snake.advance();
        assert_eq!(snake.head_position(), Position::new(6, 5));
        assert_eq!(
            snake.segments(),
            &[Position::new(5, 5), Position::new(4, 5)]
        );
    }

    #[test]
    fn test_grow_on_empty_body_uses_head_position() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);
        snake.grow();
        assert_eq!(snake.segments(), &[Position::new(5, 5)]);

        snake.advance();
        assert_eq!(snake.head_position(), Position::new(6, 5));
        assert_eq!(snake.segments(), &[Position::new(5, 5)]);
    }

    #[test]
    fn test_reversal_is_discarded() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);
        snake.set_pending_direction(Direction::Left);
        snake.apply_pending_direction();
        assert_eq!(snake.direction(), Direction::Right);

        // A legal turn still goes through
        snake.set_pending_direction(Direction::Up);
        snake.apply_pending_direction();
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_pending_buffer_is_last_write_wins() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);
        snake.set_pending_direction(Direction::Up);
        snake.set_pending_direction(Direction::Down);
        snake.apply_pending_direction();
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn test_apply_without_pending_keeps_direction() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);
        snake.apply_pending_direction();
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_occupies() {
        let snake = snake_with_body(
            Position::new(5, 5),
            Direction::Right,
            &[Position::new(4, 5)],
        );
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(4, 5)));
        assert!(!snake.occupies(Position::new(3, 5)));
    }
}
