// Board
pub const GRID_SIZE: i16 = 20;
pub const MAX_SPAWN_ATTEMPTS: u32 = 100;
pub const MAX_LIVE_TOKENS: usize = 8;

// Spawn odds, cut points on a single roll: eraser (only once a letter is
// collected), then the correct next letter, the rest a random A-Z distractor.
pub const ERASER_CHANCE: f64 = 0.10;
pub const CORRECT_LETTER_CHANCE: f64 = 0.70;

// Timers
pub const SPAWN_INTERVAL_MS: u64 = 3000;
pub const CLOCK_INTERVAL_MS: u64 = 1000;
pub const CELEBRATION_MS: u64 = 3000;
pub const HINT_REVEAL_SECONDS: u32 = 30;
pub const MAX_FRAME_MS: u64 = 500;

// Speed model
pub const MIN_SPEED_MS: u64 = 70;
pub const SPEED_REDUCTION_PER_LEVEL_MS: u64 = 8;

// Scoring
pub const LEVEL_BASE_POINTS: u32 = 100;
pub const TIME_BONUS_WINDOW_SECONDS: u32 = 60;
pub const TIME_BONUS_PER_SECOND: u32 = 2;

// Terminal frontend
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
pub const MESSAGE_LOG_CAPACITY: usize = 6;
