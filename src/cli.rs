//! Command-line flags.

use std::path::PathBuf;
use word_snake::GameMode;

pub const USAGE: &str = "\
Word Snake - steer a snake, collect letters, spell the answer\n\
\n\
Usage: word-snake [options]\n\
\n\
Options:\n\
  --mode <relaxed|normal|swift>  Movement speed\n\
  --clues <file>                 Play a custom JSON clue list\n\
  --level <n>                    Start at level n (ignores saved progress)\n\
  --new                          Start over instead of resuming\n\
  --version                      Show version information\n\
  --help                         Show this help message";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub mode: Option<GameMode>,
    pub clues: Option<PathBuf>,
    pub level: Option<u32>,
    pub fresh: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(CliOptions),
    Version,
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<CliAction, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(CliAction::Version),
            "--help" | "-h" => return Ok(CliAction::Help),
            "--new" => options.fresh = true,
            "--mode" => {
                let value = iter.next().ok_or("--mode needs a value")?;
                let mode = GameMode::from_name(value)
                    .ok_or_else(|| format!("Unknown mode: {}", value))?;
                options.mode = Some(mode);
            }
            "--clues" => {
                let value = iter.next().ok_or("--clues needs a file")?;
                options.clues = Some(PathBuf::from(value));
            }
            "--level" => {
                let value = iter.next().ok_or("--level needs a number")?;
                let level = value
                    .parse::<u32>()
                    .ok()
                    .filter(|&n| n >= 1)
                    .ok_or_else(|| format!("Invalid level: {}", value))?;
                options.level = Some(level);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    Ok(CliAction::Run(options))
}
