//! Driving a labeled interval set through successive rule tables.

use crate::interval::Value;
use crate::mapper::{Labeled, StepOutput, map_intervals};
use crate::rule::RuleTable;

/// The accumulated record of every mapping step.
///
/// Keeps the initial labeled set and each step's output in step order, so a
/// report can walk the layers exactly as they were produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<L> {
    initial: Vec<Labeled<L>>,
    steps: Vec<StepOutput<L>>,
}

impl<L> History<L> {
    /// The labeled set the chain started from.
    #[must_use]
    pub fn initial(&self) -> &[Labeled<L>] {
        &self.initial
    }

    /// The per-step outputs, in step order.
    #[must_use]
    pub fn steps(&self) -> &[StepOutput<L>] {
        &self.steps
    }

    /// The interval layers in order: the initial set, then each step's output
    /// set.
    pub fn layers(&self) -> impl Iterator<Item = &[Labeled<L>]> {
        std::iter::once(self.initial.as_slice())
            .chain(self.steps.iter().map(|step| step.intervals.as_slice()))
    }

    /// The interval set after the final step.
    #[must_use]
    pub fn final_intervals(&self) -> &[Labeled<L>] {
        self.steps
            .last()
            .map_or(self.initial.as_slice(), |step| step.intervals.as_slice())
    }

    /// The minimum start value reachable after all steps, or `None` when the
    /// chain started from an empty set.
    #[must_use]
    pub fn lowest_start(&self) -> Option<Value> {
        self.final_intervals()
            .iter()
            .map(|piece| piece.interval.start())
            .min()
    }
}

/// Feed a labeled interval set through each rule table in turn, recording
/// every step's intervals and transitions.
///
/// Each step's output set becomes the next step's input. With no tables the
/// history has zero steps and the final layer is the initial set.
#[must_use]
pub fn run_chain<L: Copy>(initial: Vec<Labeled<L>>, tables: &[RuleTable]) -> History<L> {
    let mut steps: Vec<StepOutput<L>> = Vec::with_capacity(tables.len());

    for table in tables {
        let inputs = steps
            .last()
            .map_or(initial.as_slice(), |step| step.intervals.as_slice());
        let step = map_intervals(inputs, table);
        steps.push(step);
    }

    History { initial, steps }
}
