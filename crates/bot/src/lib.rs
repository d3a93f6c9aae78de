//! Decision engine for a diamond-collecting grid bot.
//!
//! Every turn the engine receives a read-only [`Board`](board::Board) and the
//! bot's own [`GameObject`](board::GameObject) and answers with one cardinal
//! [`Displacement`](board::Displacement). Between turns it keeps a
//! [`GoalMemory`] describing what it is currently trying to reach.
//!
//! The turn pipeline, driven by [`GreedyBot::next_move`]:
//!
//! 1. **Arrival check**: [`GoalMemory::observe_arrival`] pops reached waypoints
//! 2. **Goal Arbiter**: [`arbiter::Arbiter`] runs the evaluator cascade
//! 3. **Path Translator**: [`navigation::translate`] picks the step, sidestepping obstacles
//! 4. **Roaming Fallback**: [`roaming::Roamer`] when no step resolves
//!
//! All heuristics use Manhattan distance only; there is no global path search.

pub mod agent;
pub mod arbiter;
pub mod config;
pub mod context;
pub mod memory;
pub mod navigation;
pub mod roaming;
pub mod score;
pub mod selectors;

pub use agent::GreedyBot;
pub use config::{BotConfig, ConfigLoader, Ratio};
pub use context::TurnContext;
pub use memory::{Arrival, GoalMemory, Phase, Plan, PlanKind};
pub use roaming::Roamer;
pub use score::PointCost;
