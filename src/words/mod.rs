//! Target words: the clue sequence and the word being assembled.

pub mod assembly;
pub mod clues;

pub use assembly::WordAssembly;
pub use clues::{Clue, ClueDeck};
