//! The range mapper: partitioning labeled intervals against a rule table.

use crate::interval::{Interval, subtract};
use crate::rule::RuleTable;

/// An interval bound to the provenance label it descends from.
///
/// The mapper never inspects the label; it only carries it onto every piece
/// the interval splits into. Downstream grouping and coloring key off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labeled<L> {
    /// The run of values.
    pub interval: Interval,

    /// The provenance label carried forward through every split.
    pub label: L,
}

impl<L> Labeled<L> {
    /// Bind an interval to a label.
    pub fn new(interval: Interval, label: L) -> Self {
        Self { interval, label }
    }
}

/// A record of how one piece of a source interval was mapped.
///
/// An identity transition (`before == after`) records a piece no rule
/// claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<L> {
    /// The piece of the source interval that was claimed.
    pub before: Interval,

    /// Where the piece landed.
    pub after: Interval,

    /// The source interval's label.
    pub label: L,
}

impl<L> Transition<L> {
    /// Whether the piece passed through unchanged.
    pub fn is_identity(&self) -> bool {
        self.before == self.after
    }
}

/// One mapping step's complete output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutput<L> {
    /// The new labeled interval set.
    pub intervals: Vec<Labeled<L>>,

    /// How each piece of each input interval moved, including identity
    /// transitions for unclaimed pieces.
    pub transitions: Vec<Transition<L>>,
}

/// Map every labeled interval through a rule table.
///
/// Inputs are processed independently, in input order, each carrying its
/// label onto every piece it produces. Rules claim sub-ranges in table order;
/// once a sub-range is claimed by an earlier rule it is never reconsidered by
/// a later one. Pieces no rule claims pass through unchanged and are recorded
/// as identity transitions.
///
/// For a table whose source spans are pairwise disjoint, the output pieces of
/// each input cover it exactly, with no value dropped or mapped twice. Spans
/// claimed by overlapping rules make the result order dependent; the table
/// order is taken as given and not validated.
#[must_use]
pub fn map_intervals<L: Copy>(inputs: &[Labeled<L>], table: &RuleTable) -> StepOutput<L> {
    let mut intervals = Vec::new();
    let mut transitions = Vec::new();

    for input in inputs {
        let source = input.interval;
        // grows into the set of pieces no rule has claimed yet
        let mut unmapped = vec![source];

        for rule in table.rules() {
            let Some(hit) = source.intersect(rule.source_span()) else {
                continue;
            };

            unmapped = subtract(&unmapped, hit);

            let mapped = rule.apply(hit);
            intervals.push(Labeled::new(mapped, input.label));
            transitions.push(Transition {
                before: hit,
                after: mapped,
                label: input.label,
            });
        }

        for piece in unmapped {
            intervals.push(Labeled::new(piece, input.label));
            transitions.push(Transition {
                before: piece,
                after: piece,
                label: input.label,
            });
        }
    }

    StepOutput {
        intervals,
        transitions,
    }
}
