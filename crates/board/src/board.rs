//! Immutable per-turn board snapshot.

use crate::{BoardError, GameObject, ObjectId, ObjectKind, Position};

/// Read-only view of the board for a single turn.
///
/// Objects are kept in the order the server reported them; every
/// type-filtered view preserves that order, which is what "first
/// encountered" tie-breaking refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    objects: Vec<GameObject>,
}

impl Board {
    pub fn new(width: u32, height: u32, objects: Vec<GameObject>) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            objects,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.iter().find(|object| object.id == id)
    }

    /// Looks up a bot by id.
    pub fn bot(&self, id: ObjectId) -> Result<&GameObject, BoardError> {
        self.objects
            .iter()
            .find(|object| object.id == id && object.is(ObjectKind::Bot))
            .ok_or(BoardError::BotNotFound(id))
    }

    pub fn of_kind(&self, kind: ObjectKind) -> impl Iterator<Item = &GameObject> + '_ {
        self.objects.iter().filter(move |object| object.is(kind))
    }

    pub fn diamonds(&self) -> impl Iterator<Item = &GameObject> + '_ {
        self.of_kind(ObjectKind::Diamond)
    }

    pub fn bots(&self) -> impl Iterator<Item = &GameObject> + '_ {
        self.of_kind(ObjectKind::Bot)
    }

    /// Every bot except the one identified by `me`.
    pub fn rivals(&self, me: ObjectId) -> impl Iterator<Item = &GameObject> + '_ {
        self.bots().filter(move |bot| bot.id != me)
    }

    pub fn teleporters(&self) -> impl Iterator<Item = &GameObject> + '_ {
        self.of_kind(ObjectKind::Teleporter)
    }

    /// The diamond button, if the board has one.
    pub fn button(&self) -> Option<&GameObject> {
        self.of_kind(ObjectKind::DiamondButton).next()
    }

    /// The other end of a teleporter pair.
    ///
    /// Matches on `pair_id` when the snapshot provides one; otherwise the
    /// first other teleporter on the board is taken as the partner.
    pub fn linked_teleporter(&self, teleporter: &GameObject) -> Option<&GameObject> {
        let paired = teleporter.pair_id().and_then(|pair| {
            self.teleporters()
                .find(|other| other.id != teleporter.id && other.pair_id() == Some(pair))
        });
        paired.or_else(|| self.teleporters().find(|other| other.id != teleporter.id))
    }
}
