//! Per-turn decision context.
//!
//! [`TurnContext`] bundles the read-only inputs of a single decision: the
//! bot's own object, the board snapshot and the configuration. Selectors and
//! navigation read everything through it, so they stay pure functions of the
//! snapshot.

use board::{Board, GameObject, Position};

use crate::BotConfig;

/// Read-only inputs for one decision.
///
/// # Lifetime
///
/// The `'a` lifetime ties the context to the snapshot it was built from.
/// Decisions are synchronous and finish within the turn, so nothing borrowed
/// from the board outlives it.
#[derive(Clone, Copy, Debug)]
pub struct TurnContext<'a> {
    /// The deciding bot as reported in this turn's snapshot.
    pub me: &'a GameObject,
    pub board: &'a Board,
    pub config: &'a BotConfig,
}

impl<'a> TurnContext<'a> {
    pub fn new(me: &'a GameObject, board: &'a Board, config: &'a BotConfig) -> Self {
        Self { me, board, config }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.me.position
    }

    #[inline]
    pub fn base(&self) -> Position {
        self.me.base()
    }

    /// Diamonds currently carried.
    #[inline]
    pub fn held(&self) -> u32 {
        self.me.diamonds_held()
    }

    #[inline]
    pub fn distance_to(&self, target: Position) -> u32 {
        self.position().manhattan(target)
    }

    /// Diamonds still needed to fill the inventory.
    pub fn capacity_left(&self) -> u32 {
        self.config.diamond_cap.saturating_sub(self.held())
    }

    /// True one diamond short of the cap, where heavy diamonds are skipped.
    pub fn one_short_of_cap(&self) -> bool {
        self.held() + 1 == self.config.diamond_cap
    }

    pub fn is_heavy(&self, diamond: &GameObject) -> bool {
        diamond.points() == self.config.heavy_diamond_points
    }

    /// Whether a diamond may be chosen as a target this turn.
    ///
    /// Heavy diamonds are excluded one short of the cap, and worthless
    /// diamonds are never targets.
    pub fn can_collect(&self, diamond: &GameObject) -> bool {
        diamond.points() > 0 && !(self.is_heavy(diamond) && self.one_short_of_cap())
    }

    pub fn eligible_diamonds(self) -> impl Iterator<Item = &'a GameObject> {
        self.board.diamonds().filter(move |d| self.can_collect(d))
    }

    pub fn rivals(self) -> impl Iterator<Item = &'a GameObject> {
        self.board.rivals(self.me.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(me: GameObject, mut rest: Vec<GameObject>) -> Board {
        rest.insert(0, me);
        Board::new(10, 10, rest).unwrap()
    }

    #[test]
    fn heavy_diamonds_are_excluded_at_four() {
        let me = GameObject::bot(1, Position::new(0, 0), Position::new(0, 0), 4, 60_000);
        let board = board_with(
            me.clone(),
            vec![
                GameObject::diamond(2, Position::new(1, 1), 2),
                GameObject::diamond(3, Position::new(2, 2), 1),
            ],
        );
        let config = BotConfig::default();
        let ctx = TurnContext::new(&me, &board, &config);

        let eligible: Vec<_> = ctx.eligible_diamonds().map(|d| d.id.0).collect();
        assert_eq!(eligible, vec![3]);
    }

    #[test]
    fn heavy_diamonds_are_eligible_below_four() {
        let me = GameObject::bot(1, Position::new(0, 0), Position::new(0, 0), 3, 60_000);
        let board = board_with(me.clone(), vec![GameObject::diamond(2, Position::new(1, 1), 2)]);
        let config = BotConfig::default();
        let ctx = TurnContext::new(&me, &board, &config);

        assert_eq!(ctx.eligible_diamonds().count(), 1);
        assert_eq!(ctx.capacity_left(), 2);
    }

    #[test]
    fn worthless_diamonds_are_never_eligible() {
        let me = GameObject::bot(1, Position::new(0, 0), Position::new(0, 0), 0, 60_000);
        let board = board_with(me.clone(), vec![GameObject::diamond(2, Position::new(1, 1), 0)]);
        let config = BotConfig::default();
        let ctx = TurnContext::new(&me, &board, &config);

        assert_eq!(ctx.eligible_diamonds().count(), 0);
    }
}
