use board::GameObject;

use crate::{GoalMemory, Plan, PlanKind, TurnContext};

/// Nearest rival worth tackling (ties: first on the board).
///
/// A rival qualifies while carrying at least
/// `min_enemy_diamonds_to_attack`. Rivals on the bot's own cell are skipped.
pub fn best_enemy_target<'a>(ctx: &TurnContext<'a>) -> Option<&'a GameObject> {
    let min_loot = ctx.config.min_enemy_diamonds_to_attack;
    ctx.rivals()
        .filter(|rival| rival.diamonds_held() >= min_loot)
        .map(|rival| (ctx.distance_to(rival.position), rival))
        .filter(|(distance, _)| *distance > 0)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, rival)| rival)
}

/// Engage the best rival when it is strictly nearer than the current queue
/// head, or when the bot has no objective.
///
/// Only aggressive while carrying at most `max_own_diamonds_for_aggression`.
pub fn enemy_attack(ctx: &TurnContext<'_>, memory: &GoalMemory) -> Option<Plan> {
    if ctx.held() > ctx.config.max_own_diamonds_for_aggression {
        return None;
    }

    let target = best_enemy_target(ctx)?;
    let enemy_distance = ctx.distance_to(target.position);
    let current = memory.head().map(|head| ctx.distance_to(head));
    tracing::trace!(rival = %target.id, enemy_distance, ?current, "enemy candidate");

    current
        .is_none_or(|goal_distance| enemy_distance < goal_distance)
        .then(|| Plan::to(PlanKind::EngageRival, target.position))
}
