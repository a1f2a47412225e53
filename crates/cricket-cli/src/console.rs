use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

use cricket_core::{CricketGame, GameStatus, PlayerId, Target};

use crate::config::ConsoleConfig;
use crate::error::InputError;
use crate::render;

const TARGET_PROMPT: &str = "Enter target number (15-20, 25 for bullseye): ";

/// Where a console session currently stands.
#[derive(Debug)]
enum Phase {
    AwaitingPlayerCount,
    Playing(CricketGame),
    /// `None` when input ended before a game was set up.
    Finished(Option<CricketGame>),
}

/// Why a turn did not produce a hit.
enum TurnError {
    Input { error: InputError, input: String },
    Eof,
    Io(io::Error),
}

impl TurnError {
    fn rejected(error: InputError, line: &str) -> Self {
        Self::Input {
            error,
            input: line.trim().to_string(),
        }
    }
}

impl From<io::Error> for TurnError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Interactive scorekeeping session over any line-based input and text output.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run until the quit sentinel or end of input.
    ///
    /// Returns the final standings, or `None` if no game was started. Only
    /// I/O failures on the streams themselves are returned as errors.
    pub fn run(mut self) -> io::Result<Option<GameStatus>> {
        writeln!(self.output, "Welcome to Darts Cricket!")?;

        let mut phase = Phase::AwaitingPlayerCount;
        loop {
            phase = match phase {
                Phase::AwaitingPlayerCount => match self.read_player_count()? {
                    Some(n) => {
                        tracing::info!(players = n, "Game started");
                        Phase::Playing(CricketGame::new(n))
                    },
                    None => Phase::Finished(None),
                },
                Phase::Playing(mut game) => {
                    if self.play_turn(&mut game)? {
                        Phase::Playing(game)
                    } else {
                        Phase::Finished(Some(game))
                    }
                },
                Phase::Finished(game) => {
                    let status = game.map(|g| g.status());
                    if let Some(status) = &status {
                        render::write_final_scores(&mut self.output, status)?;
                        tracing::info!(leaders = ?status.leaders(), "Game finished");
                    }
                    self.output.flush()?;
                    return Ok(status);
                },
            };
        }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn read_player_count(&mut self) -> io::Result<Option<u8>> {
        let max = self.config.max_players;
        let prompt = format!("Enter number of players (max {max}): ");
        loop {
            let Some(line) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match parse_player_count(&line, max) {
                Ok(n) => return Ok(Some(n)),
                Err(e) => {
                    tracing::debug!(input = line.trim(), error = ?e, "Rejected player count");
                    writeln!(self.output, "{e}")?;
                },
            }
        }
    }

    /// One pass of the playing loop. Returns `false` once the session should end.
    fn play_turn(&mut self, game: &mut CricketGame) -> io::Result<bool> {
        let status = game.status();
        render::write_status(&mut self.output, &status)?;
        if tracing::enabled!(tracing::Level::DEBUG) {
            match serde_json::to_string(&status) {
                Ok(json) => tracing::debug!(status = %json, "Awaiting turn"),
                Err(e) => tracing::warn!("Status snapshot not serializable: {e}"),
            }
        }

        match self.read_entry(game.num_players()) {
            Ok(Some((player, target, hits))) => {
                if let Some(outcome) = game.apply_hit(player, target, hits)
                    && self.config.announce_scoring
                {
                    render::write_outcome(&mut self.output, &outcome)?;
                }
                Ok(true)
            },
            Ok(None) | Err(TurnError::Eof) => Ok(false),
            Err(TurnError::Input { error, input }) => {
                tracing::debug!(%input, ?error, "Rejected turn entry");
                writeln!(self.output, "{error}")?;
                Ok(true)
            },
            Err(TurnError::Io(e)) => Err(e),
        }
    }

    /// Player, target and hit count for one entry; `None` on the quit sentinel.
    fn read_entry(&mut self, players: u8) -> Result<Option<(PlayerId, Target, u32)>, TurnError> {
        let prompt = format!("\nEnter player number (1-{players}) or 0 to quit: ");
        let line = self.ask(&prompt)?.ok_or(TurnError::Eof)?;
        let Some(player) =
            parse_player(&line, players).map_err(|e| TurnError::rejected(e, &line))?
        else {
            return Ok(None);
        };

        let line = self.ask(TARGET_PROMPT)?.ok_or(TurnError::Eof)?;
        let target = parse_target(&line).map_err(|e| TurnError::rejected(e, &line))?;

        let max_hits = self.config.max_hits_per_entry;
        let prompt = format!("Enter number of hits (1-{max_hits}): ");
        let line = self.ask(&prompt)?.ok_or(TurnError::Eof)?;
        let hits = parse_hits(&line, max_hits).map_err(|e| TurnError::rejected(e, &line))?;

        Ok(Some((player, target, hits)))
    }
}

/// Integer typed at a prompt. Digits too long for `i64` saturate so they
/// fail the caller's range check instead of reading as non-numeric.
fn parse_number(line: &str) -> Result<i64, InputError> {
    match line.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(InputError::NotANumber),
        },
    }
}

pub fn parse_player_count(line: &str, max: u8) -> Result<u8, InputError> {
    let n = parse_number(line).map_err(|_| InputError::InvalidCount)?;
    match u8::try_from(n) {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(InputError::PlayerCountOutOfRange { max }),
    }
}

/// `Ok(None)` for the quit sentinel `0`.
pub fn parse_player(line: &str, players: u8) -> Result<Option<PlayerId>, InputError> {
    let n = parse_number(line)?;
    if n == 0 {
        return Ok(None);
    }
    match PlayerId::try_from(n) {
        Ok(p) if p <= players => Ok(Some(p)),
        _ => Err(InputError::PlayerOutOfRange),
    }
}

pub fn parse_target(line: &str) -> Result<Target, InputError> {
    let n = parse_number(line)?;
    u32::try_from(n)
        .ok()
        .and_then(|v| Target::try_from(v).ok())
        .ok_or(InputError::UnknownTarget)
}

pub fn parse_hits(line: &str, max: u32) -> Result<u32, InputError> {
    let n = parse_number(line)?;
    match u32::try_from(n) {
        Ok(h) if (1..=max).contains(&h) => Ok(h),
        _ => Err(InputError::HitsOutOfRange),
    }
}
