//! Pure collision predicates. Both take post-move state: the head after
//! this tick's step and the body after the same tick's shift, so the
//! snake is never compared against its own pre-move shadow.

use super::grid::{Grid, Position};

/// True if the head has left the playable field on either axis
pub fn hits_border(head: Position, grid: Grid) -> bool {
    !grid.contains(head)
}

/// True if the head sits on any body segment
pub fn hits_self(head: Position, body: &[Position]) -> bool {
    body.contains(&head)
}
