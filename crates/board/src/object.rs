//! Game objects as they appear in a board snapshot.

use std::fmt;

use crate::Position;

/// Identifier assigned to every object by the game server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of object on the board.
///
/// String forms match the type tags used by the game server, so a kind can be
/// parsed straight from a snapshot with [`std::str::FromStr`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
pub enum ObjectKind {
    #[strum(serialize = "BotGameObject")]
    Bot,
    #[strum(serialize = "BaseGameObject")]
    Base,
    #[strum(serialize = "DiamondGameObject")]
    Diamond,
    #[strum(serialize = "TeleportGameObject")]
    Teleporter,
    #[strum(serialize = "DiamondButtonGameObject")]
    DiamondButton,
}

/// Type-specific properties. Which fields are present depends on the kind:
/// diamonds carry `points`, bots carry `diamonds`, `base` and
/// `milliseconds_left`, teleporters carry `pair_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties {
    pub points: Option<u32>,
    pub diamonds: Option<u32>,
    pub base: Option<Position>,
    pub milliseconds_left: Option<u64>,
    pub pair_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub position: Position,
    pub properties: Properties,
}

impl GameObject {
    pub fn new(id: ObjectId, kind: ObjectKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            properties: Properties::default(),
        }
    }

    /// A diamond worth `points`.
    pub fn diamond(id: u32, position: Position, points: u32) -> Self {
        let mut object = Self::new(ObjectId(id), ObjectKind::Diamond, position);
        object.properties.points = Some(points);
        object
    }

    /// A bot holding `diamonds` with the given home base and time budget.
    pub fn bot(id: u32, position: Position, base: Position, diamonds: u32, ms_left: u64) -> Self {
        let mut object = Self::new(ObjectId(id), ObjectKind::Bot, position);
        object.properties.base = Some(base);
        object.properties.diamonds = Some(diamonds);
        object.properties.milliseconds_left = Some(ms_left);
        object
    }

    /// One end of a teleporter pair.
    pub fn teleporter(id: u32, position: Position, pair_id: impl Into<String>) -> Self {
        let mut object = Self::new(ObjectId(id), ObjectKind::Teleporter, position);
        object.properties.pair_id = Some(pair_id.into());
        object
    }

    pub fn button(id: u32, position: Position) -> Self {
        Self::new(ObjectId(id), ObjectKind::DiamondButton, position)
    }

    #[inline]
    pub fn is(&self, kind: ObjectKind) -> bool {
        self.kind == kind
    }

    /// Diamond value; zero for non-diamonds.
    pub fn points(&self) -> u32 {
        self.properties.points.unwrap_or(0)
    }

    /// Diamonds currently carried; zero for non-bots.
    pub fn diamonds_held(&self) -> u32 {
        self.properties.diamonds.unwrap_or(0)
    }

    /// Home base of a bot. Objects without a base report their own position.
    pub fn base(&self) -> Position {
        self.properties.base.unwrap_or(self.position)
    }

    pub fn milliseconds_left(&self) -> u64 {
        self.properties.milliseconds_left.unwrap_or(u64::MAX)
    }

    pub fn pair_id(&self) -> Option<&str> {
        self.properties.pair_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn kind_parses_server_tags() {
        assert_eq!(
            ObjectKind::from_str("TeleportGameObject").unwrap(),
            ObjectKind::Teleporter
        );
        assert_eq!(ObjectKind::Diamond.to_string(), "DiamondGameObject");
        assert!(ObjectKind::from_str("WallGameObject").is_err());
    }

    #[test]
    fn missing_properties_fall_back() {
        let button = GameObject::button(9, Position::new(3, 3));
        assert_eq!(button.points(), 0);
        assert_eq!(button.diamonds_held(), 0);
        assert_eq!(button.base(), Position::new(3, 3));
        assert_eq!(button.milliseconds_left(), u64::MAX);
    }
}
