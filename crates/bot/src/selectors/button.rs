use crate::{Plan, PlanKind, TurnContext};

/// Head for the diamond button, if the board has one.
pub fn button_fallback(ctx: &TurnContext<'_>) -> Option<Plan> {
    ctx.board
        .button()
        .map(|button| Plan::to(PlanKind::Button, button.position))
}
