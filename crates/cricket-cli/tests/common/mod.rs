use std::io::Cursor;

use cricket_cli::{Console, ConsoleConfig};
use cricket_core::GameStatus;

pub struct Session {
    pub transcript: String,
    pub result: Option<GameStatus>,
}

/// Feed `lines` to a console with default settings.
pub fn play(lines: &[&str]) -> Session {
    play_with(lines, ConsoleConfig::default())
}

/// Feed `lines` to a console, one entry per line, and capture everything it prints.
pub fn play_with(lines: &[&str], config: ConsoleConfig) -> Session {
    let mut script = lines.join("\n");
    if !script.is_empty() {
        script.push('\n');
    }
    let mut out = Vec::new();
    let result = Console::new(Cursor::new(script), &mut out, config)
        .run()
        .expect("in-memory console I/O cannot fail");
    Session {
        transcript: String::from_utf8(out).expect("console writes UTF-8"),
        result,
    }
}

impl Session {
    pub fn status(&self) -> &GameStatus {
        self.result.as_ref().expect("session should have started a game")
    }

    pub fn score(&self, player: u8) -> u32 {
        self.status().player(player).map_or(0, |p| p.score)
    }

    pub fn count(&self, needle: &str) -> usize {
        self.transcript.matches(needle).count()
    }
}
