use crate::selectors::nearest_teleporter_route;
use crate::{Plan, PlanKind, TurnContext};

/// Shortest way home: straight to base, or through the nearest teleporter
/// when that is strictly shorter.
pub fn base_route(ctx: &TurnContext<'_>) -> Plan {
    let base = ctx.base();
    let direct = ctx.distance_to(base);
    if direct == 0 {
        return Plan::to(PlanKind::ReturnToBase, base);
    }

    if let Some(route) = nearest_teleporter_route(ctx) {
        let via = route.distance_to(base);
        tracing::trace!(direct, via, "base route candidates");
        if via < direct {
            return Plan::via(PlanKind::ReturnToBase, route.entry, base);
        }
    }

    Plan::to(PlanKind::ReturnToBase, base)
}
