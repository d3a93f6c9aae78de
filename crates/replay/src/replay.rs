//! Snapshot loading and the per-turn replay loop.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use board::{Board, BoardSnapshot, ObjectId};
use bot::GreedyBot;
use serde::{Deserialize, Serialize};

/// A snapshot file holds either one board or a sequence of turns.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Many(Vec<BoardSnapshot>),
    One(BoardSnapshot),
}

/// One output line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub dx: i32,
    pub dy: i32,
    pub phase: String,
}

pub fn parse_snapshots(json: &str) -> Result<Vec<Board>> {
    let file: SnapshotFile = serde_json::from_str(json).context("Invalid snapshot JSON")?;
    let snapshots = match file {
        SnapshotFile::Many(snapshots) => snapshots,
        SnapshotFile::One(snapshot) => vec![snapshot],
    };

    snapshots
        .into_iter()
        .enumerate()
        .map(|(turn, snapshot)| {
            Board::try_from(snapshot).with_context(|| format!("Invalid board at turn {turn}"))
        })
        .collect()
}

pub fn load_snapshots(path: &Path) -> Result<Vec<Board>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshots: {}", path.display()))?;
    parse_snapshots(&content)
}

/// Drives `bot` through `boards` in order, writing one JSON line per turn.
pub fn replay(
    bot: &mut GreedyBot,
    id: ObjectId,
    boards: &[Board],
    out: &mut impl Write,
) -> Result<Vec<TurnRecord>> {
    let mut records = Vec::with_capacity(boards.len());
    for (turn, board) in boards.iter().enumerate() {
        let step = bot
            .next_move_for(id, board)
            .with_context(|| format!("Turn {turn}"))?;
        let record = TurnRecord {
            turn,
            dx: step.dx,
            dy: step.dy,
            phase: bot.memory().phase().to_string(),
        };
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
        records.push(record);
    }
    tracing::info!(turns = records.len(), bot = %id, "replay finished");
    Ok(records)
}
