//! The snake on its grid: movement, collisions and token spawning.

pub mod grid;
pub mod spawner;
pub mod types;

pub use grid::{advance, Step};
pub use spawner::{spawn, SpawnContext};
pub use types::{Cell, Collision, Direction, LetterToken, Snake, TokenKind};
