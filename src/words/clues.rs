//! Clue sequence: the ordered, progressively harder list of target words.

use crate::core::difficulty::DifficultyTier;
use crate::core::difficulty::DifficultyTier::{Advanced, Beginner, Expert, Intermediate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// One level's puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub clue: String,
    /// Target word; may contain spaces ("SEA TURTLE").
    pub answer: String,
    pub hint: String,
    pub fact: String,
    pub tier: DifficultyTier,
}

impl Clue {
    /// The answer's letters as collected on the board: upper-case, no spaces.
    pub fn letters(&self) -> Vec<char> {
        self.answer
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}

/// Ordered clues, indexed by level (level 1 is the first clue).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueDeck {
    clues: Vec<Clue>,
}

impl ClueDeck {
    /// Build a deck, rejecting empty decks and answers with nothing to
    /// collect.
    pub fn new(clues: Vec<Clue>) -> io::Result<Self> {
        if clues.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "clue list is empty",
            ));
        }
        let collectable = |clue: &Clue| {
            let letters = clue.letters();
            !letters.is_empty() && letters.iter().all(char::is_ascii_uppercase)
        };
        if let Some(bad) = clues.iter().find(|c| !collectable(*c)) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("answer {:?} must contain only letters A-Z and spaces", bad.answer),
            ));
        }
        Ok(Self { clues })
    }

    /// Load a custom word list: a JSON array of clues.
    pub fn from_json_file(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let clues: Vec<Clue> = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Self::new(clues)
    }

    /// The clue for `level`, or `None` once the sequence is exhausted.
    pub fn get(&self, level: u32) -> Option<&Clue> {
        let index = usize::try_from(level.checked_sub(1)?).ok()?;
        self.clues.get(index)
    }

    pub fn len(&self) -> usize {
        self.clues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    pub fn builtin() -> Self {
        Self {
            clues: BUILTIN_CLUES
                .iter()
                .map(|&(clue, answer, hint, fact, tier)| Clue {
                    clue: clue.to_string(),
                    answer: answer.to_string(),
                    hint: hint.to_string(),
                    fact: fact.to_string(),
                    tier,
                })
                .collect(),
        }
    }
}

impl Default for ClueDeck {
    fn default() -> Self {
        Self::builtin()
    }
}

// (clue, answer, hint, fact, tier)
const BUILTIN_CLUES: &[(&str, &str, &str, &str, DifficultyTier)] = &[
    (
        "A bird that hunts at night and can turn its head very far.",
        "OWL",
        "It says \"hoo-hoo\".",
        "Owls can rotate their heads up to 270 degrees.",
        Beginner,
    ),
    (
        "The large body of salt water that covers most of the Earth.",
        "SEA",
        "Waves, beaches and fish.",
        "The ocean produces over half of the oxygen we breathe.",
        Beginner,
    ),
    (
        "A tall plant with a trunk, branches and leaves.",
        "TREE",
        "Forests are full of them.",
        "One large tree can provide a day's oxygen for up to four people.",
        Beginner,
    ),
    (
        "Frozen water that falls from the sky in winter.",
        "SNOW",
        "White and cold.",
        "Fresh snow can reflect up to 90% of sunlight back into space.",
        Beginner,
    ),
    (
        "A huge ocean mammal that breathes through a blowhole.",
        "WHALE",
        "The blue one is the largest animal ever.",
        "A blue whale's heart is about the size of a small car.",
        Intermediate,
    ),
    (
        "An underwater structure built by tiny animals in warm seas.",
        "CORAL",
        "Reefs are made of it.",
        "Coral reefs cover under 1% of the ocean floor but host a quarter of marine species.",
        Intermediate,
    ),
    (
        "A marine reptile with a shell that returns to the beach where it hatched.",
        "SEA TURTLE",
        "Two words. It lays eggs in the sand.",
        "Sand temperature decides whether sea turtle hatchlings are male or female.",
        Intermediate,
    ),
    (
        "A large area of land covered with trees.",
        "FOREST",
        "Think Amazon.",
        "Forests store more carbon than the entire atmosphere.",
        Advanced,
    ),
    (
        "The natural home of an animal or plant.",
        "HABITAT",
        "Where something lives.",
        "Habitat loss is the biggest threat to wildlife worldwide.",
        Advanced,
    ),
    (
        "A flying insect that makes honey and pollinates flowers.",
        "HONEY BEE",
        "Two words. Buzz!",
        "Bees pollinate around a third of the food we eat.",
        Advanced,
    ),
    (
        "Power from the sun, wind or water that never runs out.",
        "RENEWABLE ENERGY",
        "Two words. The opposite of fossil fuels.",
        "Solar power is now the cheapest electricity in history in many countries.",
        Expert,
    ),
    (
        "The variety of all living things in one place.",
        "BIODIVERSITY",
        "Bio means life.",
        "Scientists estimate fewer than a fifth of Earth's species have been described.",
        Expert,
    ),
];
