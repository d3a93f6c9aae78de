//! Goal Arbiter: decides or revises the objective every turn.
//!
//! The arbiter runs a [`Cascade`] of evaluators in strict priority order:
//!
//! 1. **Return to base** when any [`ReturnTrigger`] holds
//! 2. **Engage rival** while lightly loaded and not already heading home
//! 3. **Block cluster** when idle
//! 4. **Direct / relay diamond** when idle
//! 5. **Button** when idle
//!
//! The first evaluator that proposes a plan replaces the Goal Memory. When
//! none does, the memory carries over unchanged and the bot keeps pursuing
//! its previous objective (or roams when idle).

pub mod cascade;
pub mod triggers;

pub use cascade::{Cascade, Evaluator};
pub use triggers::ReturnTrigger;

use crate::selectors;
use crate::{GoalMemory, Plan, TurnContext};

/// Sends the bot home whenever a return trigger holds.
pub struct ReturnToBase;

impl Evaluator for ReturnToBase {
    fn name(&self) -> &'static str {
        "return_to_base"
    }

    fn evaluate(&self, ctx: &TurnContext<'_>, memory: &GoalMemory) -> Option<Plan> {
        let trigger = ReturnTrigger::active(ctx, memory)?;
        tracing::debug!(%trigger, held = ctx.held(), "return trigger");
        Some(selectors::base_route(ctx))
    }
}

/// Chases a loaded rival unless the bot is already heading home.
pub struct EngageRival;

impl Evaluator for EngageRival {
    fn name(&self) -> &'static str {
        "engage_rival"
    }

    fn evaluate(&self, ctx: &TurnContext<'_>, memory: &GoalMemory) -> Option<Plan> {
        if memory.is_returning_to(ctx.base()) {
            return None;
        }
        selectors::enemy_attack(ctx, memory)
    }
}

/// Collection rules only fire when the bot has no objective.
struct WhenIdle<F> {
    name: &'static str,
    select: F,
}

impl<F> Evaluator for WhenIdle<F>
where
    F: Fn(&TurnContext<'_>) -> Option<Plan> + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, ctx: &TurnContext<'_>, memory: &GoalMemory) -> Option<Plan> {
        if !memory.is_idle() {
            return None;
        }
        (self.select)(ctx)
    }
}

/// Wraps a collection selector so it only runs while idle.
pub fn when_idle<F>(name: &'static str, select: F) -> Box<dyn Evaluator>
where
    F: Fn(&TurnContext<'_>) -> Option<Plan> + Send + Sync + 'static,
{
    Box::new(WhenIdle { name, select })
}

/// The standard priority order.
pub fn default_cascade() -> Cascade {
    Cascade::new(vec![
        Box::new(ReturnToBase),
        Box::new(EngageRival),
        when_idle("block_cluster", selectors::block_cluster),
        when_idle("diamond", selectors::direct_or_relay_diamond),
        when_idle("button", selectors::button_fallback),
    ])
}

/// Applies the cascade's verdict to the Goal Memory.
#[derive(Debug)]
pub struct Arbiter {
    cascade: Cascade,
}

impl Arbiter {
    pub fn new(cascade: Cascade) -> Self {
        Self { cascade }
    }

    /// Runs the cascade and, if a rule fires, replaces the objective.
    ///
    /// Returns the name of the winning evaluator.
    pub fn decide(&self, ctx: &TurnContext<'_>, memory: &mut GoalMemory) -> Option<&'static str> {
        let Some((name, plan)) = self.cascade.first_plan(ctx, memory) else {
            tracing::debug!(phase = %memory.phase(), "arbiter: keeping current objective");
            return None;
        };

        tracing::debug!(
            evaluator = name,
            kind = %plan.kind,
            waypoints = ?plan.waypoints,
            relay = ?plan.relay.as_ref().map(|t| t.id),
            "arbiter: new objective"
        );

        let records_distance = plan.kind.targets_diamonds();
        memory.adopt(plan);
        if records_distance
            && let Some(head) = memory.head()
            && head != ctx.base()
        {
            memory.record_goal_distance(ctx.distance_to(head));
        }
        Some(name)
    }
}

impl Default for Arbiter {
    fn default() -> Self {
        Self::new(default_cascade())
    }
}
