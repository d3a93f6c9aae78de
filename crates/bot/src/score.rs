//! Distance-per-point cost used to rank diamonds.

use std::cmp::Ordering;

/// `distance / points`, compared exactly by cross-multiplication.
///
/// Lower is better. Two costs are equal when their ratios are equal, so
/// `3 / 1` and `6 / 2` tie.
#[derive(Clone, Copy, Debug)]
pub struct PointCost {
    pub distance: u32,
    pub points: u32,
}

impl PointCost {
    /// Returns `None` for worthless targets, which have no finite cost.
    pub fn new(distance: u32, points: u32) -> Option<Self> {
        (points > 0).then_some(Self { distance, points })
    }
}

impl Ord for PointCost {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u64::from(self.distance) * u64::from(other.points);
        let rhs = u64::from(other.distance) * u64::from(self.points);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for PointCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PointCost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PointCost {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cost(distance: u32, points: u32) -> PointCost {
        PointCost::new(distance, points).unwrap()
    }

    #[test]
    fn compares_ratios_not_components() {
        assert!(cost(6, 3) < cost(3, 1));
        assert_eq!(cost(3, 1), cost(6, 2));
        assert!(cost(5, 2) < cost(3, 1));
    }

    #[test]
    fn zero_points_has_no_cost() {
        assert!(PointCost::new(4, 0).is_none());
    }
}
