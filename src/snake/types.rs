//! Grid data structures: cells, directions, the snake body and letter tokens.

use crate::core::constants::GRID_SIZE;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A position on the 20x20 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Center of the board, where every level starts.
    pub const fn center() -> Self {
        Self::new(GRID_SIZE / 2, GRID_SIZE / 2)
    }

    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }

    pub fn offset(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Cardinal movement direction. A snake that has not moved yet has no
/// direction at all (`Option<Direction>::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Whether a turn to `self` is allowed while heading `current`.
    ///
    /// Turns along the current axis are rejected: no 180° reversal, and
    /// pressing the current direction again is not a change either. Any
    /// direction is accepted while standing still.
    pub fn accepts(&self, current: Option<Direction>) -> bool {
        match current {
            None => true,
            Some(current) => current.is_horizontal() != self.is_horizontal(),
        }
    }
}

/// Why a step ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Wall,
    SelfHit,
}

/// Snake body, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A fresh one-cell snake.
    pub fn new(head: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_back(head);
        Self { body }
    }

    /// Build a snake from cells listed head first. Returns `None` for an
    /// empty list.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        (!body.is_empty()).then_some(Self { body })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body.contains(cell)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    /// Drop the last segment, keeping at least the head.
    pub fn drop_tail(&mut self) -> Option<Cell> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }
}

/// What a token does when the head lands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// `correct` records whether the letter was the one needed when spawned.
    Letter { letter: char, correct: bool },
    Eraser,
}

/// A collectible token on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterToken {
    pub position: Cell,
    pub kind: TokenKind,
}

impl LetterToken {
    pub fn letter(position: Cell, letter: char, correct: bool) -> Self {
        Self {
            position,
            kind: TokenKind::Letter { letter, correct },
        }
    }

    pub fn eraser(position: Cell) -> Self {
        Self {
            position,
            kind: TokenKind::Eraser,
        }
    }

    pub fn is_eraser(&self) -> bool {
        matches!(self.kind, TokenKind::Eraser)
    }

    pub fn is_correct(&self) -> bool {
        matches!(self.kind, TokenKind::Letter { correct: true, .. })
    }

    /// The glyph drawn on the board.
    pub fn glyph(&self) -> char {
        match self.kind {
            TokenKind::Letter { letter, .. } => letter,
            TokenKind::Eraser => '\u{232B}', // ⌫
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn test_any_direction_accepted_when_still() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert!(dir.accepts(None));
        }
    }

    #[test]
    fn test_reversal_rejected() {
        assert!(!Direction::Left.accepts(Some(Direction::Right)));
        assert!(!Direction::Right.accepts(Some(Direction::Right)));
        assert!(Direction::Up.accepts(Some(Direction::Right)));
        assert!(Direction::Down.accepts(Some(Direction::Right)));
        assert!(!Direction::Down.accepts(Some(Direction::Up)));
        assert!(Direction::Left.accepts(Some(Direction::Down)));
    }

    #[test]
    fn test_cell_bounds() {
        assert!(Cell::new(0, 0).in_bounds());
        assert!(Cell::new(GRID_SIZE - 1, GRID_SIZE - 1).in_bounds());
        assert!(!Cell::new(-1, 5).in_bounds());
        assert!(!Cell::new(5, GRID_SIZE).in_bounds());
    }

    #[test]
    fn test_center_is_inside() {
        assert_eq!(Cell::center(), Cell::new(10, 10));
        assert!(Cell::center().in_bounds());
    }

    #[test]
    fn test_snake_keeps_head_on_drop_tail() {
        let mut snake = Snake::new(Cell::new(3, 3));
        assert_eq!(snake.drop_tail(), None);
        assert_eq!(snake.len(), 1);

        snake.push_head(Cell::new(4, 3));
        assert_eq!(snake.head(), Cell::new(4, 3));
        assert_eq!(snake.tail(), Cell::new(3, 3));
        assert_eq!(snake.drop_tail(), Some(Cell::new(3, 3)));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_from_cells_rejects_empty() {
        assert!(Snake::from_cells(Vec::new()).is_none());
        let snake = Snake::from_cells([Cell::new(1, 1), Cell::new(1, 2)]).unwrap();
        assert_eq!(snake.head(), Cell::new(1, 1));
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_token_flags() {
        let hit = LetterToken::letter(Cell::new(1, 1), 'A', true);
        let miss = LetterToken::letter(Cell::new(1, 2), 'Q', false);
        let eraser = LetterToken::eraser(Cell::new(1, 3));
        assert!(hit.is_correct() && !hit.is_eraser());
        assert!(!miss.is_correct() && !miss.is_eraser());
        assert!(eraser.is_eraser() && !eraser.is_correct());
        assert_eq!(hit.glyph(), 'A');
    }
}
