//! Word Snake scene: board, word slots, clue, info panel and overlays.
//!
//! Each grid cell is 2 terminal columns wide to correct for character aspect
//! ratio, which leaves room to print a letter in every cell.

use super::layout::{
    info_box, render_run_over, render_status, render_word_banner, split_scene, Callout, Outcome,
    StatusLine,
};
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use word_snake::core::Tone;
use word_snake::session::logic::level_points;
use word_snake::session::Phase;
use word_snake::snake::{Collision, LetterToken, TokenKind};
use word_snake::{GameSession, GRID_SIZE};

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const FULL_BLOCK: char = '\u{2588}'; // █

// ── Colors ───────────────────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);
const CORRECT_COLOR: Color = Color::LightGreen;
const OTHER_COLOR: Color = Color::Yellow;
const ERASER_COLOR: Color = Color::Magenta;
const MISTAKE_COLOR: Color = Color::LightRed;

const BOARD_ROWS: u16 = GRID_SIZE as u16 + 2;
const WORD_ROWS: u16 = 4;
const INFO_PANEL_WIDTH: u16 = 30;

/// Render the whole game screen.
pub fn render_word_snake(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    if let Phase::GameOver {
        completed,
        collision,
    } = session.phase
    {
        render_game_over(frame, area, app, completed, collision);
        return;
    }

    let layout = split_scene(frame, area, BOARD_ROWS, WORD_ROWS, INFO_PANEL_WIDTH);

    render_board(frame, layout.board, session);
    render_word_area(frame, layout.word, session);

    if !session.started {
        render_prompt(frame, layout.board, "[ Press Space to Start ]");
    } else if session.paused {
        render_prompt(frame, layout.board, "[ Paused ]");
    }

    if session.phase == Phase::LevelComplete {
        render_level_complete(frame, layout.play_area(), session);
    }

    render_status(frame, layout.status, &status_line(session));
    render_info_panel(frame, layout.info, app);
}

/// Calculate interpolated RGB color for a snake body segment.
fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

fn token_color(token: &LetterToken) -> Color {
    match token.kind {
        TokenKind::Eraser => ERASER_COLOR,
        TokenKind::Letter { correct: true, .. } => CORRECT_COLOR,
        TokenKind::Letter { correct: false, .. } => OTHER_COLOR,
    }
}

/// Render the bordered board with snake and tokens.
fn render_board(frame: &mut Frame, area: Rect, session: &GameSession) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let grid = GRID_SIZE as usize;
    let empty = Span::styled("  ", Style::default().bg(EMPTY_BG));
    let mut cells: Vec<Vec<Span>> = vec![vec![empty; grid]; grid];

    for token in &session.tokens {
        let (x, y) = (token.position.x as usize, token.position.y as usize);
        if x < grid && y < grid {
            cells[y][x] = Span::styled(
                format!("{} ", token.glyph()),
                Style::default()
                    .fg(token_color(token))
                    .bg(EMPTY_BG)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }

    let snake_len = session.snake.len();
    for (i, seg) in session.snake.cells().enumerate() {
        let (x, y) = (seg.x as usize, seg.y as usize);
        if x < grid && y < grid {
            let color = if i == 0 {
                HEAD_COLOR
            } else {
                body_color(i, snake_len)
            };
            let block: String = [FULL_BLOCK, FULL_BLOCK].iter().collect();
            cells[y][x] = Span::styled(block, Style::default().fg(color).bg(EMPTY_BG));
        }
    }

    let inner_w = grid * 2;
    let render_w = ((inner_w + 2) as u16).min(area.width);
    let x_off = area.x + area.width.saturating_sub(render_w) / 2;
    let border = Style::default().fg(BORDER_COLOR);

    let mut lines: Vec<Line> = Vec::with_capacity(grid + 2);

    // Top border with the level label
    let label = format!(" Level {} ", session.level);
    let pad_before = inner_w.saturating_sub(label.len() + 1);
    let pad_after = inner_w.saturating_sub(pad_before + label.len());
    lines.push(Line::from(vec![
        Span::styled(BORDER_TL.to_string(), border),
        Span::styled(horizontal(pad_before), border),
        Span::styled(label, Style::default().fg(Color::White)),
        Span::styled(horizontal(pad_after), border),
        Span::styled(BORDER_TR.to_string(), border),
    ]));

    for row in cells {
        let mut spans = Vec::with_capacity(grid + 2);
        spans.push(Span::styled(BORDER_V.to_string(), border));
        spans.extend(row);
        spans.push(Span::styled(BORDER_V.to_string(), border));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        format!("{}{}{}", BORDER_BL, horizontal(inner_w), BORDER_BR),
        border,
    )));

    let height = (lines.len() as u16).min(area.height);
    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(x_off, area.y, render_w, height),
    );
}

fn horizontal(width: usize) -> String {
    std::iter::repeat(BORDER_H).take(width).collect()
}

/// Clue, collected-word slots and the hint (once revealed).
fn render_word_area(frame: &mut Frame, area: Rect, session: &GameSession) {
    let Some(clue) = session.current_clue() else {
        return;
    };

    let mut slots: Vec<Span> = vec![Span::styled("Word: ", Style::default().fg(Color::DarkGray))];
    for slot in session.word.slots() {
        let span = match slot {
            Some((letter, true)) => Span::styled(
                format!("{} ", letter),
                Style::default()
                    .fg(CORRECT_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Some((letter, false)) => Span::styled(
                format!("{} ", letter),
                Style::default()
                    .fg(MISTAKE_COLOR)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            None => Span::styled("_ ", Style::default().fg(Color::Gray)),
        };
        slots.push(span);
    }

    let hint = if session.hint_visible {
        Line::from(vec![
            Span::styled("Hint: ", Style::default().fg(Color::DarkGray)),
            Span::styled(clue.hint.as_str(), Style::default().fg(Color::Yellow)),
        ])
    } else {
        let wait = session
            .config
            .hint_reveal_seconds
            .saturating_sub(session.elapsed_secs);
        Line::from(Span::styled(
            format!("Hint in {}s", wait),
            Style::default().fg(Color::DarkGray),
        ))
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Clue: ", Style::default().fg(Color::DarkGray)),
            Span::styled(clue.clue.as_str(), Style::default().fg(Color::White)),
        ]),
        Line::from(slots),
        hint,
    ];

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        },
    );
}

/// Centered one-line prompt over the board.
fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    if area.height < 5 || area.width < 20 {
        return;
    }

    let center_y = area.y + area.height / 2;
    let width = (prompt.len() as u16).min(area.width);
    let x = area.x + area.width.saturating_sub(width) / 2;

    let line = Paragraph::new(Line::from(Span::styled(
        prompt,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(line, Rect::new(x, center_y, width, 1));
}

fn render_level_complete(frame: &mut Frame, area: Rect, session: &GameSession) {
    let Some(clue) = session.current_clue() else {
        return;
    };
    let message = format!(
        "{} +{} points",
        clue.answer,
        level_points(session.elapsed_secs)
    );
    let callout = Callout {
        outcome: Outcome::Solved,
        title: "WORD COMPLETE",
        message: &message,
        detail: &clue.fact,
    };
    render_word_banner(frame, area, &callout);
}

fn status_line(session: &GameSession) -> StatusLine<'static> {
    let (text, color, keys): (&str, Color, &[(&str, &str)]) = if !session.started {
        ("Ready", Color::LightGreen, &[("[Space]", "Start"), ("[Q]", "Quit")])
    } else if session.paused {
        (
            "Paused",
            Color::Yellow,
            &[("[P]", "Resume"), ("[R]", "Restart"), ("[Q]", "Quit")],
        )
    } else if session.phase == Phase::LevelComplete {
        ("Next clue coming up...", Color::Green, &[])
    } else {
        let text = if session.heading().is_none() {
            "Pick a direction"
        } else {
            "Spell the answer!"
        };
        (
            text,
            Color::Green,
            &[
                ("[Arrows]", "Move"),
                ("[Bksp]", "Undo"),
                ("[P]", "Pause"),
                ("[Q]", "Quit"),
            ],
        )
    };
    StatusLine { text, color, keys }
}

fn render_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    let inner = info_box(frame, area);
    let session = &app.session;

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
    let value = |text: String| Span::styled(text, Style::default().fg(Color::White));

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            label("Mode: "),
            Span::styled(session.config.mode.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            label("Level: "),
            value(format!("{}/{}", session.level, session.deck.len())),
        ]),
        Line::from(vec![
            label("Tier: "),
            Span::styled(session.tier().name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![label("Speed: "), value(format!("{}ms", session.speed_ms()))]),
        Line::from(vec![
            label("Score: "),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![label("Time: "), value(format!("{}s", session.elapsed_secs))]),
        Line::from(vec![label("Best: "), value(app.progress.best_score.to_string())]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(HEAD_COLOR)),
            label("Snake"),
        ]),
        Line::from(vec![
            Span::styled(" A ", Style::default().fg(CORRECT_COLOR)),
            label("Needed next"),
        ]),
        Line::from(vec![
            Span::styled(" A ", Style::default().fg(OTHER_COLOR)),
            label("Other letter"),
        ]),
        Line::from(vec![
            Span::styled(" \u{232B} ", Style::default().fg(ERASER_COLOR)),
            label("Eraser"),
        ]),
        Line::from(""),
    ];

    for entry in app.log.entries() {
        let color = match entry.tone {
            Tone::Neutral => Color::Gray,
            Tone::Good => Color::Green,
            Tone::Bad => Color::LightRed,
        };
        lines.push(Line::from(Span::styled(
            entry.message.as_str(),
            Style::default().fg(color),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// Full-screen overlay once the run is over.
fn render_game_over(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    completed: bool,
    collision: Option<Collision>,
) {
    let session = &app.session;
    let detail = format!(
        "Score {}   Best {}",
        session.score, app.progress.best_score
    );

    let (outcome, title, message) = if completed {
        (
            Outcome::Solved,
            ":: EVERY WORD FOUND ::",
            format!("All {} clues solved!", session.deck.len()),
        )
    } else {
        let cause = match collision {
            Some(Collision::SelfHit) => "The snake ran into itself",
            _ => "The snake hit the wall",
        };
        (
            Outcome::Crashed,
            "GAME OVER",
            format!("{} on level {}.", cause, session.level),
        )
    };
    let callout = Callout {
        outcome,
        title,
        message: &message,
        detail: &detail,
    };
    render_run_over(frame, area, &callout);
}
