//! Game session: state, reducer and timer driver.

pub mod logic;
pub mod timers;
pub mod types;

pub use logic::{apply_event, GameInput, SessionEvent};
pub use timers::SessionTimers;
pub use types::{GameSession, Phase};
