//! Turns the current objective into a single step.

use board::{Displacement, Position, direction_to};

use super::{ObstacleCategory, avoid_obstacle};
use crate::{GoalMemory, TurnContext};

/// Resolves the next step toward the detour or queue head.
///
/// Returns `None` when the bot should roam instead: either there is no
/// target, or the target cannot be approached. In the latter case the memory
/// is cleared first.
pub fn translate(ctx: &TurnContext<'_>, memory: &mut GoalMemory) -> Option<Displacement> {
    let current = ctx.position();

    if memory.detour().is_none()
        && let Some(goal) = memory.head()
        && goal != current
    {
        plan_detour(ctx, memory, goal);
    }

    let target = memory.target()?;
    let step = direction_to(current, target);
    if step.is_zero() && target != current {
        tracing::warn!(%current, %target, "target unreachable, clearing goal memory");
        memory.clear();
        return None;
    }
    Some(step)
}

/// Sets a detour around the first obstacle category blocking the naive step.
fn plan_detour(ctx: &TurnContext<'_>, memory: &mut GoalMemory, goal: Position) {
    let current = ctx.position();
    let naive_next = current.offset(direction_to(current, goal));

    for category in ObstacleCategory::ALL {
        if !category.applies(ctx, goal) {
            continue;
        }
        let obstacles = category.positions(ctx);
        if !obstacles.contains(&naive_next) {
            continue;
        }
        match avoid_obstacle(current, goal, &obstacles, ctx.board) {
            Some(cell) => {
                tracing::debug!(
                    %category,
                    blocked = %naive_next,
                    detour = %cell,
                    "sidestepping"
                );
                memory.set_detour(cell);
            }
            None => {
                tracing::debug!(
                    %category,
                    blocked = %naive_next,
                    "no free detour, keeping course"
                );
            }
        }
        break;
    }
}
