//! Errors raised while building a [`crate::Board`] from a snapshot.

use crate::ObjectId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions {width}x{height} are empty")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("object {id} is missing required property `{property}`")]
    MissingProperty {
        id: ObjectId,
        property: &'static str,
    },

    #[error("bot {0} not found on the board")]
    BotNotFound(ObjectId),

    #[error("malformed snapshot: {0}")]
    Malformed(String),
}
