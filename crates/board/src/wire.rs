//! JSON wire model of the game server's board snapshot.
//!
//! The server reports every object with a string `type` tag and a loose
//! `properties` bag. Conversion into [`Board`] keeps the kinds this agent
//! reasons about and drops the rest (walls, portals of other game modes, ...).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Board, BoardError, GameObject, ObjectId, ObjectKind, Position, Properties};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub game_objects: Vec<ObjectSnapshot>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSnapshot {
    pub id: u32,
    pub position: Position,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: PropertiesSnapshot,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertiesSnapshot {
    pub points: Option<u32>,
    pub diamonds: Option<u32>,
    pub base: Option<Position>,
    pub milliseconds_left: Option<u64>,
    pub pair_id: Option<String>,
    pub name: Option<String>,
}

impl BoardSnapshot {
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        serde_json::from_str(json).map_err(|e| BoardError::Malformed(e.to_string()))
    }
}

impl ObjectSnapshot {
    /// Converts to a [`GameObject`], or `None` for kinds outside the model.
    fn into_object(self) -> Result<Option<GameObject>, BoardError> {
        let Ok(kind) = ObjectKind::from_str(&self.kind) else {
            return Ok(None);
        };
        let id = ObjectId(self.id);
        let props = self.properties;

        match kind {
            ObjectKind::Diamond if props.points.is_none() => {
                return Err(BoardError::MissingProperty {
                    id,
                    property: "points",
                });
            }
            ObjectKind::Bot if props.base.is_none() => {
                return Err(BoardError::MissingProperty {
                    id,
                    property: "base",
                });
            }
            _ => {}
        }

        Ok(Some(GameObject {
            id,
            kind,
            position: self.position,
            properties: Properties {
                points: props.points,
                diamonds: props.diamonds,
                base: props.base,
                milliseconds_left: props.milliseconds_left,
                pair_id: props.pair_id,
                name: props.name,
            },
        }))
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = BoardError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let mut objects = Vec::with_capacity(snapshot.game_objects.len());
        for object in snapshot.game_objects {
            if let Some(object) = object.into_object()? {
                objects.push(object);
            }
        }
        Board::new(snapshot.width, snapshot.height, objects)
    }
}
