use board::{GameObject, Position};

use crate::TurnContext;

/// Shortcut through the teleporter nearest to the bot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeleportRoute<'a> {
    /// Teleporter the bot walks into.
    pub entry: &'a GameObject,
    /// Where the bot reappears.
    pub exit: Position,
    pub distance_to_entry: u32,
}

impl TeleportRoute<'_> {
    /// Walking distance to `target` when taking this route.
    pub fn distance_to(&self, target: Position) -> u32 {
        self.distance_to_entry + self.exit.manhattan(target)
    }
}

/// Route through the nearest teleporter (ties: first on the board).
///
/// Needs at least two teleporters and a linked exit for the nearest one. A
/// teleporter under the bot is never an entry.
pub fn nearest_teleporter_route<'a>(ctx: &TurnContext<'a>) -> Option<TeleportRoute<'a>> {
    let board = ctx.board;
    if board.teleporters().nth(1).is_none() {
        return None;
    }

    let entry = board
        .teleporters()
        .map(|teleporter| (ctx.distance_to(teleporter.position), teleporter))
        .filter(|(distance, _)| *distance > 0)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, teleporter)| teleporter)?;
    let exit = board.linked_teleporter(entry)?;

    Some(TeleportRoute {
        entry,
        exit: exit.position,
        distance_to_entry: ctx.distance_to(entry.position),
    })
}
