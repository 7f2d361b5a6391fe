//! Remapping rules and the ordered tables that group them.

use thiserror::Error;

use crate::interval::{Interval, Value};

/// A single remapping rule.
///
/// Shifts the source span `source_start..=source_start + length - 1` onto the
/// destination span `destination_start..=destination_start + length - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// The start of the destination span, inclusive.
    destination_start: Value,

    /// The start of the source span, inclusive.
    source_start: Value,

    /// The count of values both spans cover.
    length: Value,
}

/// An error related to constructing a [`Rule`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// A rule has a length of 0. Displays the associated destination & source
    /// starts to locate it in input.
    #[error(
        "rule length must be > 0 (destination_start = {destination_start}, source_start = {source_start})"
    )]
    EmptyLength {
        destination_start: Value,
        source_start: Value,
    },

    /// Integer overflow occurred calculating the rule's source end with the
    /// given start & length.
    #[error(
        "source end overflow calculating start + length - 1 (start = {start}, length = {length})"
    )]
    SourceEndOverflow { start: Value, length: Value },

    /// Integer overflow occurred calculating the rule's destination end with
    /// the given start & length.
    #[error(
        "destination end overflow calculating start + length - 1 (start = {start}, length = {length})"
    )]
    DestinationEndOverflow { start: Value, length: Value },
}

impl Rule {
    /// Create a rule with the given destination start, source start, and span
    /// length.
    ///
    /// # Errors
    ///
    /// Rejects a zero length and any start & length whose span end would
    /// overflow [`Value`], so a constructed rule can always represent both of
    /// its spans as intervals.
    pub fn new(
        destination_start: Value,
        source_start: Value,
        length: Value,
    ) -> Result<Self, RuleError> {
        if length == 0 {
            return Err(RuleError::EmptyLength {
                destination_start,
                source_start,
            });
        }
        if source_start.checked_add(length - 1).is_none() {
            return Err(RuleError::SourceEndOverflow {
                start: source_start,
                length,
            });
        }
        if destination_start.checked_add(length - 1).is_none() {
            return Err(RuleError::DestinationEndOverflow {
                start: destination_start,
                length,
            });
        }

        Ok(Self {
            destination_start,
            source_start,
            length,
        })
    }

    /// The span of source values this rule claims.
    #[must_use]
    pub fn source_span(&self) -> Interval {
        // both ends were checked at construction
        Interval::new(
            self.source_start,
            self.source_start + (self.length - 1),
        )
    }

    /// Map a sub-span of the source span onto the destination span.
    ///
    /// Every value keeps its offset from the span start, so the result covers
    /// as many values as `hit`.
    ///
    /// # Panics
    ///
    /// Panics if `hit` reaches outside the source span.
    #[must_use]
    pub fn apply(&self, hit: Interval) -> Interval {
        let span = self.source_span();
        assert!(
            span.start() <= hit.start() && hit.end() <= span.end(),
            "hit {hit} reaches outside rule source span {span}"
        );
        // the destination end was checked at construction, so offsetting any
        // in-span value stays representable
        Interval::new(
            self.destination_start + (hit.start() - self.source_start),
            self.destination_start + (hit.end() - self.source_start),
        )
    }
}

/// An ordered table of remapping rules.
///
/// Rules are evaluated in the order given. When source spans overlap, the
/// earliest rule claims the shared values first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable(Vec<Rule>);

impl RuleTable {
    /// A table with no rules; every value maps onto itself.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a table from an iterator of
    /// `(destination_start, source_start, length)` triples.
    ///
    /// Iteration order is preserved: it decides which rule claims a value
    /// first when source spans overlap.
    ///
    /// # Errors
    ///
    /// Any [`RuleError`] from constructing a rule is returned, identifying the
    /// offending triple.
    pub fn from_triples<I>(triples: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (Value, Value, Value)>,
    {
        let rules = triples
            .into_iter()
            .map(|(destination_start, source_start, length)| {
                Rule::new(destination_start, source_start, length)
            })
            .collect::<Result<_, _>>()?;
        Ok(Self(rules))
    }

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_length() {
        assert_eq!(
            Rule::new(100, 10, 0),
            Err(RuleError::EmptyLength {
                destination_start: 100,
                source_start: 10,
            })
        );
    }

    #[test]
    fn new_rejects_source_end_overflow() {
        assert_eq!(
            Rule::new(0, Value::MAX, 2),
            Err(RuleError::SourceEndOverflow {
                start: Value::MAX,
                length: 2,
            })
        );
    }

    #[test]
    fn new_rejects_destination_end_overflow() {
        assert_eq!(
            Rule::new(Value::MAX, 0, 2),
            Err(RuleError::DestinationEndOverflow {
                start: Value::MAX,
                length: 2,
            })
        );
    }

    #[test]
    fn new_accepts_spans_ending_at_value_max() -> Result<(), RuleError> {
        let rule = Rule::new(Value::MAX - 9, Value::MAX - 9, 10)?;
        assert_eq!(
            rule.source_span(),
            Interval::new(Value::MAX - 9, Value::MAX)
        );
        Ok(())
    }

    #[test]
    fn source_span_covers_length_values() -> Result<(), RuleError> {
        let rule = Rule::new(100, 10, 10)?;
        assert_eq!(rule.source_span(), Interval::new(10, 19));
        Ok(())
    }

    #[test]
    fn apply_offsets_a_full_span_hit() -> Result<(), RuleError> {
        let rule = Rule::new(100, 10, 10)?;
        assert_eq!(
            rule.apply(Interval::new(10, 19)),
            Interval::new(100, 109)
        );
        Ok(())
    }

    #[test]
    fn apply_offsets_a_partial_hit() -> Result<(), RuleError> {
        // a backward shift, destination below source
        let rule = Rule::new(50, 98, 2)?;
        assert_eq!(rule.apply(Interval::new(98, 98)), Interval::new(50, 50));
        assert_eq!(rule.apply(Interval::new(99, 99)), Interval::new(51, 51));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "reaches outside rule source span")]
    fn apply_panics_on_out_of_span_hit() {
        let rule = Rule::new(100, 10, 10).expect("rule should construct");
        let _ = rule.apply(Interval::new(15, 25));
    }

    #[test]
    fn from_triples_preserves_order() -> Result<(), RuleError> {
        let table = RuleTable::from_triples([(0, 90, 5), (100, 10, 10)])?;
        let spans: Vec<_> = table.rules().iter().map(Rule::source_span).collect();
        assert_eq!(
            spans,
            vec![Interval::new(90, 94), Interval::new(10, 19)]
        );
        Ok(())
    }

    #[test]
    fn from_triples_surfaces_the_offending_rule() {
        let result = RuleTable::from_triples([(52, 50, 48), (100, 10, 0)]);
        assert_eq!(
            result,
            Err(RuleError::EmptyLength {
                destination_start: 100,
                source_start: 10,
            })
        );
    }

    #[test]
    fn empty_table_has_no_rules() {
        assert!(RuleTable::empty().rules().is_empty());
    }
}
