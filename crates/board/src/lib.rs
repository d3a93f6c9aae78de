//! Read-only board snapshot model for the diamond-collecting game.
//!
//! `board` describes what the agent sees each turn: grid [`Position`]s,
//! [`GameObject`]s (bots, bases, diamonds, teleporters, the diamond button)
//! and the [`Board`] that holds them. It also provides [`direction_to`], the
//! single-step primitive every movement decision is expressed through.
//!
//! With the `serde` feature the [`wire`] module parses the game server's JSON
//! board format.
pub mod board;
pub mod error;
pub mod object;
pub mod position;
#[cfg(feature = "serde")]
pub mod wire;

pub use board::Board;
pub use error::BoardError;
pub use object::{GameObject, ObjectId, ObjectKind, Properties};
pub use position::{Displacement, Position, direction_to};
#[cfg(feature = "serde")]
pub use wire::{BoardSnapshot, ObjectSnapshot};
