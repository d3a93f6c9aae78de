use board::GameObject;

use crate::score::PointCost;
use crate::selectors::nearest_teleporter_route;
use crate::{Plan, PlanKind, TurnContext};

/// Best single diamond by `distance / points`, walking or via teleporter.
///
/// Direct candidates are measured from the bot (a diamond under the bot is
/// skipped). Relay candidates go through the nearest teleporter and are
/// measured as distance to its entry plus distance from its exit. The direct
/// pick wins ties.
pub fn direct_or_relay_diamond(ctx: &TurnContext<'_>) -> Option<Plan> {
    let direct = best_by(ctx.eligible_diamonds(), |diamond| {
        let distance = ctx.distance_to(diamond.position);
        (distance > 0).then_some(distance)
    });

    let relay = nearest_teleporter_route(ctx).and_then(|route| {
        best_by(ctx.eligible_diamonds(), |diamond| {
            Some(route.distance_to(diamond.position))
        })
        .map(|(cost, diamond)| (cost, diamond, route))
    });

    tracing::trace!(
        direct = ?direct.map(|(cost, d)| (cost, d.id)),
        relay = ?relay.map(|(cost, d, _)| (cost, d.id)),
        "diamond candidates"
    );

    if let Some((direct_cost, diamond)) = direct
        && relay.is_none_or(|(relay_cost, _, _)| direct_cost <= relay_cost)
    {
        return Some(Plan::to(PlanKind::Diamond, diamond.position));
    }

    relay.map(|(_, diamond, route)| Plan::via(PlanKind::Diamond, route.entry, diamond.position))
}

/// Lowest-cost diamond, first on the board winning ties. `distance` returns
/// `None` to skip a candidate.
fn best_by<'a>(
    diamonds: impl Iterator<Item = &'a GameObject>,
    distance: impl Fn(&GameObject) -> Option<u32>,
) -> Option<(PointCost, &'a GameObject)> {
    diamonds
        .filter_map(|diamond| {
            let cost = PointCost::new(distance(diamond)?, diamond.points())?;
            Some((cost, diamond))
        })
        .min_by_key(|(cost, _)| *cost)
}
