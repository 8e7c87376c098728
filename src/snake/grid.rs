//! Movement and collision detection.
//!
//! `advance` only looks; it never moves the snake. The caller decides whether
//! the tail is dropped (plain move) or kept (growth) after a clean step.

use super::types::{Cell, Collision, Direction, Snake};

/// Outcome of looking one cell ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub new_head: Cell,
    pub collision: Option<Collision>,
}

/// Compute the next head position and whether it collides.
///
/// The self check runs against the whole current body, including the tail
/// cell that a plain move would vacate this tick.
pub fn advance(snake: &Snake, direction: Direction) -> Step {
    let new_head = snake.head().offset(direction);

    let collision = if !new_head.in_bounds() {
        Some(Collision::Wall)
    } else if snake.contains(&new_head) {
        Some(Collision::SelfHit)
    } else {
        None
    };

    Step {
        new_head,
        collision,
    }
}
