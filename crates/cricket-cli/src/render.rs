use std::io::{self, Write};

use cricket_core::scoring::CLOSE_HITS;
use cricket_core::{GameStatus, HitOutcome};

/// `Closed` once a number is closed, otherwise `n/3`.
pub fn target_mark(hits: u32) -> String {
    if hits >= CLOSE_HITS {
        "Closed".to_string()
    } else {
        format!("{hits}/{CLOSE_HITS}")
    }
}

pub fn write_status(out: &mut impl Write, status: &GameStatus) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Current Game Status:")?;
    for p in &status.players {
        writeln!(out)?;
        writeln!(out, "Player {}:", p.player)?;
        writeln!(out, "Score: {}", p.score)?;
        writeln!(out, "Hits:")?;
        for (target, hits) in p.hits.iter() {
            writeln!(out, "{target}: {}", target_mark(hits))?;
        }
    }
    Ok(())
}

pub fn write_outcome(out: &mut impl Write, outcome: &HitOutcome) -> io::Result<()> {
    if outcome.points > 0 {
        writeln!(
            out,
            "Player {} scores {} on {}.",
            outcome.player, outcome.points, outcome.target
        )?;
    }
    Ok(())
}

pub fn write_final_scores(out: &mut impl Write, status: &GameStatus) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Final Scores:")?;
    for p in &status.players {
        writeln!(out, "Player {}: {}", p.player, p.score)?;
    }
    Ok(())
}
