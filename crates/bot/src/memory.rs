//! Goal Memory: what the bot is currently trying to reach.
//!
//! The memory persists across turns and is owned by exactly one bot
//! instance. Each turn starts with [`GoalMemory::observe_arrival`], which pops
//! or clears whatever the bot reached since the previous decision.

use std::collections::VecDeque;

use board::{Board, GameObject, Position};

/// Lifecycle state derived from the memory contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// No major objective.
    Idle,
    /// Walking toward the queue head.
    Pursuing,
    /// A one-step detour overrides the queue.
    Detouring,
}

/// Which rule produced a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PlanKind {
    ReturnToBase,
    EngageRival,
    BlockCluster,
    Diamond,
    Button,
}

impl PlanKind {
    /// Plans that aim at diamonds record their distance for the
    /// opportunistic-return check.
    pub const fn targets_diamonds(self) -> bool {
        matches!(self, PlanKind::BlockCluster | PlanKind::Diamond)
    }
}

/// Candidate waypoint queue produced by a selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    pub kind: PlanKind,
    pub waypoints: VecDeque<Position>,
    /// Teleporter entered at the first waypoint, for relay routes.
    pub relay: Option<GameObject>,
}

impl Plan {
    pub fn new(kind: PlanKind, waypoints: impl IntoIterator<Item = Position>) -> Self {
        Self {
            kind,
            waypoints: waypoints.into_iter().collect(),
            relay: None,
        }
    }

    /// Single-waypoint plan.
    pub fn to(kind: PlanKind, target: Position) -> Self {
        Self::new(kind, [target])
    }

    /// Two-leg plan through `teleporter`, finishing at `destination`.
    pub fn via(kind: PlanKind, teleporter: &GameObject, destination: Position) -> Self {
        Self {
            kind,
            waypoints: VecDeque::from([teleporter.position, destination]),
            relay: Some(teleporter.clone()),
        }
    }

    pub fn head(&self) -> Option<Position> {
        self.waypoints.front().copied()
    }
}

/// What the bot reached at the start of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Arrival {
    Nothing,
    Base,
    Detour,
    TeleporterExit,
    Waypoint,
}

/// Persistent per-bot objective state.
///
/// # Invariants
///
/// - `queue` is empty exactly when the bot is idle.
/// - `detour`, when set, wins over `queue` for one resolved step.
/// - `relay` is set only while `queue[0]` is that teleporter's position.
/// - Reaching base clears everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GoalMemory {
    queue: VecDeque<Position>,
    relay: Option<GameObject>,
    detour: Option<Position>,
    /// `None` stands for an infinite distance.
    last_goal_distance: Option<u32>,
}

impl GoalMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.detour.is_some() {
            Phase::Detouring
        } else if self.queue.is_empty() {
            Phase::Idle
        } else {
            Phase::Pursuing
        }
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn queue(&self) -> &VecDeque<Position> {
        &self.queue
    }

    pub fn head(&self) -> Option<Position> {
        self.queue.front().copied()
    }

    pub fn relay(&self) -> Option<&GameObject> {
        self.relay.as_ref()
    }

    pub fn detour(&self) -> Option<Position> {
        self.detour
    }

    pub fn last_goal_distance(&self) -> Option<u32> {
        self.last_goal_distance
    }

    /// Effective target: the detour if set, else the queue head.
    pub fn target(&self) -> Option<Position> {
        self.detour.or_else(|| self.head())
    }

    /// True while the queue ends at `base`, directly or through a teleporter.
    pub fn is_returning_to(&self, base: Position) -> bool {
        self.queue.back() == Some(&base)
    }

    /// Forgets everything, including the detour.
    pub fn clear(&mut self) {
        self.clear_objective();
        self.detour = None;
    }

    /// Forgets the major objective but keeps a pending detour.
    pub fn clear_objective(&mut self) {
        self.queue.clear();
        self.relay = None;
        self.last_goal_distance = None;
    }

    /// Replaces the objective with `plan`.
    ///
    /// The recorded goal distance is reset; callers that aim at diamonds
    /// record it afterwards with [`GoalMemory::record_goal_distance`].
    pub fn adopt(&mut self, plan: Plan) {
        self.clear_objective();
        self.queue = plan.waypoints;
        self.relay = plan.relay;
    }

    pub fn record_goal_distance(&mut self, distance: u32) {
        self.last_goal_distance = Some(distance);
    }

    pub fn set_detour(&mut self, cell: Position) {
        self.detour = Some(cell);
    }

    /// Applies the start-of-turn transitions for the bot standing at
    /// `position`. The first matching rule wins.
    pub fn observe_arrival(
        &mut self,
        position: Position,
        base: Position,
        board: &Board,
    ) -> Arrival {
        if position == base {
            self.clear();
            return Arrival::Base;
        }

        if self.detour == Some(position) {
            self.detour = None;
            return Arrival::Detour;
        }

        if let Some(relay) = &self.relay
            && board.linked_teleporter(relay).map(|exit| exit.position) == Some(position)
        {
            if self.head() == Some(relay.position) {
                self.queue.pop_front();
            }
            self.relay = None;
            if self.queue.is_empty() {
                self.clear_objective();
            }
            return Arrival::TeleporterExit;
        }

        if self.head() == Some(position) {
            self.queue.pop_front();
            if self.queue.is_empty() {
                self.clear_objective();
            }
            return Arrival::Waypoint;
        }

        Arrival::Nothing
    }
}
