//! Path Translator: objective to single step.
//!
//! [`translate`] resolves the effective target (pending detour, else the
//! queue head) and sidesteps any [`ObstacleCategory`] on the naive next
//! cell. It also reports when the target cannot be approached.
//! [`avoid_obstacle`] is the pure detour rule it builds on.

mod avoidance;
mod translator;

pub use avoidance::{ObstacleCategory, avoid_obstacle};
pub use translator::translate;
