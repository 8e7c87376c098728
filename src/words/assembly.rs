//! The word being spelled out by the snake.
//!
//! Every collected letter is appended, right or wrong. Wrong letters are only
//! flagged for display; the player fixes them with undo.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordAssembly {
    target: Vec<char>,
    collected: Vec<char>,
}

impl WordAssembly {
    /// `target` is the answer's letters with spaces already removed.
    pub fn new(target: Vec<char>) -> Self {
        Self {
            target,
            collected: Vec::new(),
        }
    }

    /// Append a letter. Refused (returns false) once every position is
    /// filled, so the word never outgrows its answer.
    pub fn push(&mut self, letter: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.collected.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last collected letter. `None` when nothing is collected.
    pub fn pop(&mut self) -> Option<char> {
        self.collected.pop()
    }

    pub fn len(&self) -> usize {
        self.collected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collected.is_empty()
    }

    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    /// The answer letter at the next open position, or `None` once every
    /// position is filled.
    pub fn next_needed(&self) -> Option<char> {
        self.target.get(self.collected.len()).copied()
    }

    pub fn is_full(&self) -> bool {
        self.collected.len() >= self.target.len()
    }

    pub fn is_complete(&self) -> bool {
        self.collected == self.target
    }

    pub fn collected(&self) -> String {
        self.collected.iter().collect()
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// Positions whose collected letter differs from the answer.
    pub fn mistakes(&self) -> Vec<usize> {
        self.collected
            .iter()
            .zip(&self.target)
            .enumerate()
            .filter_map(|(i, (got, want))| (got != want).then_some(i))
            .collect()
    }

    /// Per-slot view for rendering: `(letter, is_correct)` for collected
    /// slots and `None` for open ones.
    pub fn slots(&self) -> Vec<Option<(char, bool)>> {
        (0..self.target.len())
            .map(|i| {
                self.collected
                    .get(i)
                    .map(|&c| (c, self.target.get(i) == Some(&c)))
            })
            .collect()
    }
}
