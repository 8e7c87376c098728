//! Screen regions and callout boxes for the Word Snake scene.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TITLE: &str = " Word Snake ";
const FRAME_COLOR: Color = Color::LightGreen;
const STATUS_ROWS: u16 = 2;
const RUN_OVER_KEYS: &str = "[R] Play again   [Q] Quit";

/// Regions of the play screen.
///
/// ```text
/// ┌─ Word Snake ────────────────┬─ Info ─────┐
/// │  board                      │            │
/// │  clue / word slots / hint   │            │
/// │  status + keys              │            │
/// └─────────────────────────────┴────────────┘
/// ```
pub struct SceneLayout {
    pub board: Rect,
    pub word: Rect,
    pub status: Rect,
    pub info: Rect,
}

impl SceneLayout {
    /// Board and word strip together, where banners float.
    pub fn play_area(&self) -> Rect {
        self.board.union(self.word)
    }
}

/// Draw the outer frame and carve it up. The board keeps its fixed height,
/// the word strip takes what is left above the status rows.
pub fn split_scene(
    frame: &mut Frame,
    area: Rect,
    board_rows: u16,
    word_rows: u16,
    info_width: u16,
) -> SceneLayout {
    frame.render_widget(Clear, area);
    let outer = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FRAME_COLOR));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [left, info] = columns(inner, info_width);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_rows),
            Constraint::Min(word_rows),
            Constraint::Length(STATUS_ROWS),
        ])
        .split(left);

    SceneLayout {
        board: rows[0],
        word: rows[1],
        status: rows[2],
        info,
    }
}

fn columns(area: Rect, info_width: u16) -> [Rect; 2] {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_width)])
        .split(area);
    [cols[0], cols[1]]
}

/// What the status rows say for the current phase.
pub struct StatusLine<'a> {
    pub text: &'a str,
    pub color: Color,
    /// `(key, action)` pairs, shown under the text.
    pub keys: &'a [(&'a str, &'a str)],
}

pub fn render_status(frame: &mut Frame, area: Rect, status: &StatusLine) {
    if area.height == 0 {
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        status.text,
        Style::default().fg(status.color),
    ))];
    if !status.keys.is_empty() {
        let spans: Vec<Span> = status
            .keys
            .iter()
            .enumerate()
            .flat_map(|(i, (key, action))| {
                let gap = if i == 0 { "" } else { "  " };
                [
                    Span::raw(gap),
                    Span::styled(*key, Style::default().fg(Color::White)),
                    Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Bordered box for the info panel. Returns the area inside it.
pub fn info_box(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Whether a callout celebrates or commiserates.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Crashed,
}

impl Outcome {
    fn accent(self) -> Color {
        match self {
            Outcome::Solved => Color::Green,
            Outcome::Crashed => Color::Red,
        }
    }
}

pub struct Callout<'a> {
    pub outcome: Outcome,
    pub title: &'a str,
    pub message: &'a str,
    /// Cyan line under the message: a fact or the final score.
    pub detail: &'a str,
}

impl Callout<'_> {
    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.outcome.accent()))
    }

    fn title_span(&self) -> Span<'_> {
        Span::styled(
            self.title,
            Style::default()
                .fg(self.outcome.accent())
                .add_modifier(Modifier::BOLD),
        )
    }

    fn detail_line(&self) -> Line<'_> {
        Line::from(Span::styled(self.detail, Style::default().fg(Color::Cyan)))
    }
}

/// Replace the whole screen once the run has ended.
pub fn render_run_over(frame: &mut Frame, area: Rect, callout: &Callout) {
    frame.render_widget(Clear, area);
    let block = callout.block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(callout.title_span()),
        Line::from(""),
        Line::from(Span::styled(callout.message, Style::default().fg(Color::White))),
        Line::from(""),
        callout.detail_line(),
        Line::from(""),
        Line::from(Span::styled(RUN_OVER_KEYS, Style::default().fg(Color::DarkGray))),
    ];
    let height = (lines.len() as u16).min(inner.height);
    let top = inner.y + inner.height.saturating_sub(height) / 2;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(inner.x, top, inner.width, height),
    );
}

/// Banner along the bottom of `area`, sized to fit a wrapped detail of up to
/// three lines. The board above stays visible.
pub fn render_word_banner(frame: &mut Frame, area: Rect, callout: &Callout) {
    let text_width = area.width.saturating_sub(2).max(1) as usize;
    let detail_rows = callout.detail.chars().count().div_ceil(text_width).min(3) as u16;
    let height = (3 + detail_rows).min(area.height);
    let banner = Rect {
        y: area.bottom().saturating_sub(height),
        height,
        ..area
    };

    frame.render_widget(Clear, banner);
    let block = callout.block();
    let inner = block.inner(banner);
    frame.render_widget(block, banner);

    let mut lines = vec![Line::from(vec![
        callout.title_span(),
        Span::raw(" - "),
        Span::styled(callout.message, Style::default().fg(Color::White)),
    ])];
    if !callout.detail.is_empty() {
        lines.push(callout.detail_line());
    }
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn split(width: u16, height: u16) -> SceneLayout {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut layout = None;
        terminal
            .draw(|frame| {
                let area = frame.size();
                layout = Some(split_scene(frame, area, 22, 4, 30));
            })
            .unwrap();
        layout.unwrap()
    }

    #[test]
    fn test_scene_stacks_board_word_status() {
        let layout = split(80, 40);
        assert_eq!(layout.board.height, 22);
        assert_eq!(layout.status.height, 2);
        assert!(layout.word.height >= 4);
        assert_eq!(layout.word.y, layout.board.bottom());
        assert_eq!(layout.status.y, layout.word.bottom());
        assert_eq!(layout.info.width, 30);
        assert_eq!(layout.info.x, layout.board.right());
    }

    #[test]
    fn test_play_area_covers_board_and_word() {
        let layout = split(80, 40);
        let play = layout.play_area();
        assert_eq!(play.y, layout.board.y);
        assert_eq!(play.height, layout.board.height + layout.word.height);
        assert_eq!(play.bottom(), layout.status.y);
    }

    #[test]
    fn test_callouts_render_in_small_areas() {
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        let callout = Callout {
            outcome: Outcome::Solved,
            title: "WORD COMPLETE",
            message: "OWL +200 points",
            detail: "Owls can turn their heads about 270 degrees.",
        };
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_word_banner(frame, area, &callout);
                render_run_over(frame, area, &callout);
            })
            .unwrap();
    }
}
