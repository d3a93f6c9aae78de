//! Ordered evaluator chain.
//!
//! A [`Cascade`] behaves like a behavior-tree selector: evaluators are tried
//! left to right and the first one that proposes a plan wins. Evaluators
//! after the winner are not consulted.

use std::fmt;

use crate::{GoalMemory, Plan, TurnContext};

/// One rule of the priority cascade.
///
/// Evaluators read the turn context and the current memory and never mutate
/// either; the arbiter applies the winning plan.
pub trait Evaluator: Send + Sync {
    /// Stable label used in logs.
    fn name(&self) -> &'static str;

    fn evaluate(&self, ctx: &TurnContext<'_>, memory: &GoalMemory) -> Option<Plan>;
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn evaluate(&self, ctx: &TurnContext<'_>, memory: &GoalMemory) -> Option<Plan> {
        (**self).evaluate(ctx, memory)
    }
}

/// Evaluators in strict priority order.
pub struct Cascade {
    evaluators: Vec<Box<dyn Evaluator>>,
}

impl Cascade {
    /// # Panics
    ///
    /// Panics if `evaluators` is empty. A cascade with no rules is a wiring
    /// mistake.
    pub fn new(evaluators: Vec<Box<dyn Evaluator>>) -> Self {
        assert!(
            !evaluators.is_empty(),
            "Cascade must have at least one evaluator"
        );
        Self { evaluators }
    }

    /// Returns the first proposed plan together with the evaluator's name.
    pub fn first_plan(
        &self,
        ctx: &TurnContext<'_>,
        memory: &GoalMemory,
    ) -> Option<(&'static str, Plan)> {
        self.evaluators.iter().find_map(|evaluator| {
            let plan = evaluator.evaluate(ctx, memory);
            tracing::trace!(
                evaluator = evaluator.name(),
                proposed = plan.is_some(),
                "cascade step"
            );
            plan.map(|plan| (evaluator.name(), plan))
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.evaluators.iter().map(|evaluator| evaluator.name())
    }
}

impl fmt::Debug for Cascade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
