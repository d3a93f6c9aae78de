//! Block clustering: split the board into a grid of regions and sweep the
//! richest one.

use board::Position;

use crate::{Plan, PlanKind, TurnContext};

/// Per-region tally of eligible diamonds.
#[derive(Clone, Debug, Default)]
struct Region {
    points: u32,
    diamonds: Vec<Position>,
}

/// Plan that visits every eligible diamond of the best region, nearest first.
///
/// Region score is the sum of its diamond points, plus
/// `cluster_fill_bonus` when those points alone cover the capacity still
/// free. Empty regions never win; ties go to the lowest row, then the lowest
/// column.
pub fn block_cluster(ctx: &TurnContext<'_>) -> Option<Plan> {
    let needed = ctx.capacity_left();
    if needed == 0 {
        return None;
    }

    let grid = ctx.config.cluster_grid.max(1);
    let block_w = (ctx.board.width() / grid).max(1) as i32;
    let block_h = (ctx.board.height() / grid).max(1) as i32;
    let last = (grid - 1) as usize;
    let grid = grid as usize;

    let mut regions = vec![Region::default(); grid * grid];
    for diamond in ctx.eligible_diamonds() {
        let position = diamond.position;
        if !ctx.board.contains(position) {
            continue;
        }
        let row = ((position.y / block_h) as usize).min(last);
        let col = ((position.x / block_w) as usize).min(last);
        let region = &mut regions[row * grid + col];
        region.points += diamond.points();
        region.diamonds.push(position);
    }

    let mut best: Option<(u32, usize)> = None;
    for (index, region) in regions.iter().enumerate() {
        if region.points == 0 {
            continue;
        }
        let mut score = region.points;
        if region.points >= needed {
            score += ctx.config.cluster_fill_bonus;
        }
        tracing::trace!(row = index / grid, col = index % grid, score, "region score");
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, index));
        }
    }

    let (_, index) = best?;
    let mut diamonds = std::mem::take(&mut regions[index].diamonds);
    diamonds.sort_by_key(|position| ctx.distance_to(*position));
    Some(Plan::new(PlanKind::BlockCluster, diamonds))
}
