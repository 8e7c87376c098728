//! Letter token spawning.

use super::types::{Cell, LetterToken, Snake};
use crate::core::constants::{
    CORRECT_LETTER_CHANCE, ERASER_CHANCE, GRID_SIZE, MAX_SPAWN_ATTEMPTS,
};
use rand::Rng;

/// Everything the spawner reads. It never mutates the board itself.
#[derive(Debug, Clone, Copy)]
pub struct SpawnContext<'a> {
    pub snake: &'a Snake,
    pub tokens: &'a [LetterToken],
    /// Letter the word needs next, `None` once every slot is filled.
    pub next_letter: Option<char>,
    pub collected_len: usize,
    pub max_tokens: usize,
}

/// Try to produce one new token.
///
/// Returns `None` when the board is at its token cap or no free cell turned up
/// within [`MAX_SPAWN_ATTEMPTS`] random tries.
pub fn spawn<R: Rng>(ctx: &SpawnContext, rng: &mut R) -> Option<LetterToken> {
    if ctx.tokens.len() >= ctx.max_tokens {
        return None;
    }

    let position = find_free_cell(ctx, rng)?;

    let Some(needed) = ctx.next_letter else {
        // Every slot is filled but the word is wrong: only undo helps now.
        return (ctx.collected_len > 0).then(|| LetterToken::eraser(position));
    };

    // One roll against fixed cut points: eraser, needed letter, distractor.
    // Before the first letter the eraser band goes to the needed letter.
    let roll: f64 = rng.gen();
    let token = if ctx.collected_len > 0 && roll < ERASER_CHANCE {
        LetterToken::eraser(position)
    } else if roll < ERASER_CHANCE + CORRECT_LETTER_CHANCE {
        LetterToken::letter(position, needed, true)
    } else {
        let letter = random_letter(rng);
        LetterToken::letter(position, letter, letter == needed)
    };
    Some(token)
}

/// Uniformly try random cells until one is free of snake and tokens.
pub fn find_free_cell<R: Rng>(ctx: &SpawnContext, rng: &mut R) -> Option<Cell> {
    (0..MAX_SPAWN_ATTEMPTS).find_map(|_| {
        let cell = Cell::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
        let occupied =
            ctx.snake.contains(&cell) || ctx.tokens.iter().any(|t| t.position == cell);
        (!occupied).then_some(cell)
    })
}

fn random_letter<R: Rng>(rng: &mut R) -> char {
    char::from(b'A' + rng.gen_range(0..26u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ctx<'a>(snake: &'a Snake, tokens: &'a [LetterToken], collected_len: usize) -> SpawnContext<'a> {
        SpawnContext {
            snake,
            tokens,
            next_letter: Some('O'),
            collected_len,
            max_tokens: 8,
        }
    }

    #[test]
    fn test_spawned_cell_is_free_and_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let snake = Snake::from_cells((0..10).map(|x| Cell::new(x, 0))).unwrap();
        let tokens = vec![LetterToken::letter(Cell::new(0, 1), 'X', false)];
        for _ in 0..200 {
            let token = spawn(&ctx(&snake, &tokens, 0), &mut rng).unwrap();
            assert!(token.position.in_bounds());
            assert!(!snake.contains(&token.position));
            assert_ne!(token.position, Cell::new(0, 1));
        }
    }

    #[test]
    fn test_no_eraser_with_empty_word() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let snake = Snake::new(Cell::center());
        for _ in 0..500 {
            let token = spawn(&ctx(&snake, &[], 0), &mut rng).unwrap();
            assert!(!token.is_eraser());
        }
    }

    #[test]
    fn test_erasers_appear_once_letters_collected() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let snake = Snake::new(Cell::center());
        let erasers = (0..1000)
            .filter_map(|_| spawn(&ctx(&snake, &[], 2), &mut rng))
            .filter(|t| t.is_eraser())
            .count();
        // Expect roughly 10%.
        assert!((40..200).contains(&erasers), "got {} erasers", erasers);
    }

    #[test]
    fn test_mostly_correct_letters() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let snake = Snake::new(Cell::center());
        let correct = (0..1000)
            .filter_map(|_| spawn(&ctx(&snake, &[], 0), &mut rng))
            .filter(|t| t.is_correct())
            .count();
        // 80% by odds plus the occasional lucky distractor.
        assert!((740..880).contains(&correct), "got {} correct", correct);
    }

    #[test]
    fn test_cap_refuses_spawn() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let snake = Snake::new(Cell::center());
        let tokens: Vec<_> = (0..8)
            .map(|i| LetterToken::letter(Cell::new(i, 19), 'Z', false))
            .collect();
        assert!(spawn(&ctx(&snake, &tokens, 0), &mut rng).is_none());
    }

    #[test]
    fn test_full_board_gives_up_quietly() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let cells: Vec<Cell> = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| Cell::new(x, y)))
            .collect();
        let snake = Snake::from_cells(cells).unwrap();
        let context = SpawnContext {
            max_tokens: 10,
            ..ctx(&snake, &[], 3)
        };
        assert!(spawn(&context, &mut rng).is_none());
    }

    #[test]
    fn test_only_erasers_once_word_is_full() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let snake = Snake::new(Cell::center());
        let context = SpawnContext {
            next_letter: None,
            ..ctx(&snake, &[], 3)
        };
        for _ in 0..200 {
            assert!(spawn(&context, &mut rng).unwrap().is_eraser());
        }
    }
}
