//! Conditions that send the bot home.

use crate::{GoalMemory, TurnContext};

/// Reason for heading back to base, checked in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ReturnTrigger {
    /// Inventory is at the cap.
    Full,
    /// Running out of time with a load worth banking.
    LowTime,
    /// A rival is within flee distance while the bot carries a large load.
    Threatened,
    /// Base is notably closer than the diamond last aimed for.
    Opportunistic,
}

impl ReturnTrigger {
    /// First trigger that holds this turn, if any.
    pub fn active(ctx: &TurnContext<'_>, memory: &GoalMemory) -> Option<Self> {
        use strum::IntoEnumIterator;

        Self::iter().find(|trigger| trigger.holds(ctx, memory))
    }

    pub fn holds(self, ctx: &TurnContext<'_>, memory: &GoalMemory) -> bool {
        let config = ctx.config;
        let held = ctx.held();
        match self {
            ReturnTrigger::Full => held >= config.diamond_cap,
            ReturnTrigger::LowTime => {
                ctx.me.milliseconds_left() < config.low_time_threshold_ms
                    && held >= config.min_diamonds_low_time_return
            }
            ReturnTrigger::Threatened => {
                held >= config.min_diamonds_to_flee && is_threatened(ctx)
            }
            ReturnTrigger::Opportunistic => {
                held >= config.min_diamonds_near_base_return
                    && is_opportunistic(ctx, memory.last_goal_distance())
            }
        }
    }
}

/// Any rival within `enemy_flee_distance`, whatever it carries.
fn is_threatened(ctx: &TurnContext<'_>) -> bool {
    let reach = ctx.config.enemy_flee_distance;
    ctx.rivals()
        .any(|rival| ctx.distance_to(rival.position) <= reach)
}

/// Base is closer than `opportunistic_ratio` of the distance recorded when
/// the current diamond objective was chosen.
///
/// The recorded distance is not refreshed while the bot walks, so the
/// comparison is against the distance at selection time.
fn is_opportunistic(ctx: &TurnContext<'_>, last_goal_distance: Option<u32>) -> bool {
    if ctx.held() == 0 {
        return false;
    }
    let Some(last) = last_goal_distance else {
        return false;
    };
    let to_base = ctx.distance_to(ctx.base());
    to_base > 0 && ctx.config.opportunistic_ratio.below(to_base, last)
}
