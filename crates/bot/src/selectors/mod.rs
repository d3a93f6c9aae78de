//! Target selectors.
//!
//! Each selector is a pure function of the [`TurnContext`](crate::TurnContext)
//! that proposes a [`Plan`](crate::Plan), or nothing when its heuristic has
//! no candidate on this board. Missing board features (no teleporters, no
//! rivals, no button, no diamonds) simply produce `None`.
//!
//! - [`base_route`]: direct or teleporter route home
//! - [`enemy_attack`]: nearest rival carrying enough diamonds
//! - [`block_cluster`]: richest of the 3x3 board regions
//! - [`direct_or_relay_diamond`]: best `distance / points` diamond
//! - [`button_fallback`]: the diamond button

pub mod base;
pub mod button;
pub mod cluster;
pub mod diamond;
pub mod enemy;
pub mod teleport;

pub use base::base_route;
pub use button::button_fallback;
pub use cluster::block_cluster;
pub use diamond::direct_or_relay_diamond;
pub use enemy::{best_enemy_target, enemy_attack};
pub use teleport::{TeleportRoute, nearest_teleporter_route};
