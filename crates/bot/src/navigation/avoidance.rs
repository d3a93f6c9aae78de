//! Single-step obstacle avoidance.

use board::{Board, GameObject, ObjectKind, Position, direction_to};

use crate::TurnContext;

/// Kinds of objects the bot steps around on its way to a queue target.
///
/// Categories are checked in [`ObstacleCategory::ALL`] order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ObstacleCategory {
    /// Stepping on one would teleport the bot off course.
    Teleporter,
    /// Diamonds worth `heavy_diamond_points`, which overflow the inventory
    /// one short of the cap.
    HeavyDiamond,
    /// Pressing it regenerates the diamonds.
    Button,
}

impl ObstacleCategory {
    pub const ALL: [ObstacleCategory; 3] = [
        ObstacleCategory::Teleporter,
        ObstacleCategory::HeavyDiamond,
        ObstacleCategory::Button,
    ];

    fn members<'a>(self, ctx: TurnContext<'a>) -> Box<dyn Iterator<Item = &'a GameObject> + 'a> {
        match self {
            ObstacleCategory::Teleporter => Box::new(ctx.board.of_kind(ObjectKind::Teleporter)),
            ObstacleCategory::HeavyDiamond => {
                Box::new(ctx.board.diamonds().filter(move |d| ctx.is_heavy(d)))
            }
            ObstacleCategory::Button => Box::new(ctx.board.of_kind(ObjectKind::DiamondButton)),
        }
    }

    /// Whether this category is avoided on the way to `target`.
    ///
    /// A category is never avoided when the target is one of its objects,
    /// and heavy diamonds only matter one short of the cap.
    pub fn applies(self, ctx: &TurnContext<'_>, target: Position) -> bool {
        if self == ObstacleCategory::HeavyDiamond && !ctx.one_short_of_cap() {
            return false;
        }
        !self.members(*ctx).any(|object| object.position == target)
    }

    /// Cells occupied by this category on the current board.
    pub fn positions(self, ctx: &TurnContext<'_>) -> Vec<Position> {
        self.members(*ctx).map(|object| object.position).collect()
    }
}

/// Returns a one-step detour around `obstacles` on the way from `current` to
/// `goal`, or `None` when the naive next cell is free or no detour cell
/// qualifies.
///
/// Candidates are the two cells perpendicular to the naive step, then the
/// cell behind the bot. A candidate must be inside the board and not
/// occupied by an obstacle.
pub fn avoid_obstacle(
    current: Position,
    goal: Position,
    obstacles: &[Position],
    board: &Board,
) -> Option<Position> {
    let naive = direction_to(current, goal);
    if naive.is_zero() || !obstacles.contains(&current.offset(naive)) {
        return None;
    }

    naive
        .perpendiculars()
        .into_iter()
        .chain([naive.reversed()])
        .map(|step| current.offset(step))
        .find(|cell| board.contains(*cell) && !obstacles.contains(cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(width: u32, height: u32) -> Board {
        Board::new(width, height, Vec::new()).unwrap()
    }

    #[test]
    fn free_path_needs_no_detour() {
        let detour = avoid_obstacle(
            Position::new(2, 2),
            Position::new(5, 2),
            &[Position::new(2, 3)],
            &board(8, 8),
        );
        assert_eq!(detour, None);
    }

    #[test]
    fn horizontal_step_sidesteps_north_first() {
        let detour = avoid_obstacle(
            Position::new(2, 2),
            Position::new(5, 2),
            &[Position::new(3, 2)],
            &board(8, 8),
        );
        assert_eq!(detour, Some(Position::new(2, 3)));
    }

    #[test]
    fn vertical_step_sidesteps_east_first() {
        let detour = avoid_obstacle(
            Position::new(2, 2),
            Position::new(2, 6),
            &[Position::new(2, 3), Position::new(3, 2)],
            &board(8, 8),
        );
        assert_eq!(detour, Some(Position::new(1, 2)));
    }

    #[test]
    fn falls_back_to_stepping_back() {
        // Top row: north is off the board, south is occupied.
        let detour = avoid_obstacle(
            Position::new(2, 7),
            Position::new(5, 7),
            &[Position::new(3, 7), Position::new(2, 6)],
            &board(8, 8),
        );
        assert_eq!(detour, Some(Position::new(1, 7)));
    }

    #[test]
    fn boxed_in_proceeds_without_detour() {
        let detour = avoid_obstacle(
            Position::new(0, 0),
            Position::new(3, 0),
            &[Position::new(1, 0), Position::new(0, 1)],
            &board(4, 4),
        );
        assert_eq!(detour, None);
    }

    #[test]
    fn at_goal_needs_no_detour() {
        let here = Position::new(1, 1);
        assert_eq!(avoid_obstacle(here, here, &[here], &board(4, 4)), None);
    }
}
