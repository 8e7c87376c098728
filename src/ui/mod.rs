pub mod layout;
pub mod snake_scene;

use crate::app::App;
use ratatui::Frame;

/// Draw one frame of the game.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    snake_scene::render_word_snake(frame, area, app);
}
