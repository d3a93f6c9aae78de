//! The bot facade called once per turn.

use board::{Board, BoardError, Displacement, GameObject, ObjectId};

use crate::arbiter::Arbiter;
use crate::navigation::translate;
use crate::roaming::Roamer;
use crate::{BotConfig, GoalMemory, TurnContext};

/// Greedy diamond collector.
///
/// Each instance owns its Goal Memory and roaming cursor, so several bots
/// driven from one process never observe each other's state.
#[derive(Debug, Default)]
pub struct GreedyBot {
    config: BotConfig,
    memory: GoalMemory,
    roamer: Roamer,
    arbiter: Arbiter,
}

impl GreedyBot {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            memory: GoalMemory::new(),
            roamer: Roamer::new(),
            arbiter: Arbiter::default(),
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn memory(&self) -> &GoalMemory {
        &self.memory
    }

    pub fn roamer(&self) -> &Roamer {
        &self.roamer
    }

    /// Decides this turn's single cardinal step for `me` on `board`.
    pub fn next_move(&mut self, me: &GameObject, board: &Board) -> Displacement {
        let ctx = TurnContext::new(me, board, &self.config);
        let position = ctx.position();

        let arrival = self.memory.observe_arrival(position, ctx.base(), board);
        tracing::trace!(bot = %me.id, %position, %arrival, "arrival check");

        self.arbiter.decide(&ctx, &mut self.memory);

        let step = match translate(&ctx, &mut self.memory) {
            Some(step) => step,
            None => {
                let step = self.roamer.step(position, board);
                tracing::debug!(bot = %me.id, dx = step.dx, dy = step.dy, "roaming");
                step
            }
        };

        if step.is_zero()
            && let Some(head) = self.memory.head()
            && head != position
        {
            tracing::warn!(
                bot = %me.id,
                %position,
                %head,
                "stalled before goal, clearing goal memory"
            );
            self.memory.clear();
        }

        tracing::debug!(
            bot = %me.id,
            dx = step.dx,
            dy = step.dy,
            phase = %self.memory.phase(),
            "next move"
        );
        step
    }

    /// Like [`GreedyBot::next_move`], looking the bot up by id.
    pub fn next_move_for(
        &mut self,
        id: ObjectId,
        board: &Board,
    ) -> Result<Displacement, BoardError> {
        let me = board.bot(id)?;
        Ok(self.next_move(me, board))
    }
}
