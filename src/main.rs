mod app;
mod cli;
mod game_events;
mod input;
mod ui;

use app::App;
use cli::{parse_args, CliAction, CliOptions, USAGE};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{map_key, InputResult};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use word_snake::build_info;
use word_snake::core::constants::REALTIME_FRAME_MS;
use word_snake::progress::SavedProgress;
use word_snake::utils::persistence::DataDir;
use word_snake::words::ClueDeck;
use word_snake::{GameConfig, GameSession};

const LOG_FILE: &str = "word-snake.log";
const LOG_ENV: &str = "WORD_SNAKE_LOG";

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(CliAction::Run(options)) => options,
        Ok(CliAction::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Ok(CliAction::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'word-snake --help' for usage.");
            std::process::exit(1);
        }
    };

    init_logging();

    let deck = match &options.clues {
        Some(path) => match ClueDeck::from_json_file(path) {
            Ok(deck) => deck,
            Err(e) => {
                eprintln!("Could not load clues from {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ClueDeck::builtin(),
    };

    let progress = SavedProgress::load();
    let session = build_session(&options, deck, &progress);
    log::info!(
        "starting at level {} ({} mode, {} clues)",
        session.level,
        session.config.mode.name(),
        session.deck.len()
    );
    let mut app = App::new(session, progress);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.save_progress();
    log::info!("exiting with score {}", app.session.score);
    result
}

/// Pick the starting point: an explicit level, the saved resume point, or
/// the configured start.
fn build_session(options: &CliOptions, deck: ClueDeck, progress: &SavedProgress) -> GameSession {
    let mut config = GameConfig::load();
    if let Some(mode) = options.mode {
        config.mode = mode;
    }

    if let Some(level) = options.level {
        config.starting_level = level;
        return GameSession::new(config, deck);
    }

    match progress.resume {
        Some(point) if !options.fresh && options.clues.is_none() => {
            GameSession::resume(config, deck, point.level, point.score)
        }
        _ => GameSession::new(config, deck),
    }
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(REALTIME_FRAME_MS))? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    InputResult::Quit => return Ok(()),
                    InputResult::Game(input) => app.handle_input(input),
                    InputResult::Ignored => {}
                }
            }
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;
        app.tick(dt_ms);

        let cues = app.take_cues();
        if app.session.config.bell && !cues.is_empty() {
            let backend = terminal.backend_mut();
            backend.write_all(b"\x07")?;
            backend.flush()?;
        }
    }
}

/// Log to `word-snake.log` in the data directory; the terminal belongs to the game.
fn init_logging() {
    let file = DataDir::locate()
        .and_then(|dir| OpenOptions::new().create(true).append(true).open(dir.file(LOG_FILE)));
    let file = match file {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            return;
        }
    };

    let env = env_logger::Env::default().filter_or(LOG_ENV, "info");
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
}
