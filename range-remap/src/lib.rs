//! Engine for mapping sets of labeled integer intervals through ordered
//! remapping tables.
//!
//! A remapping table is a sequence of rules, each shifting one span of source
//! values onto a span of destination values. Mapping an interval through a
//! table partitions it into the pieces claimed by rules (offset onto their
//! destination spans) and the pieces no rule claims (passed through
//! unchanged), with every split recorded as a [`Transition`].
//!
//! # Quick Start
//!
//! ```
//! use range_remap::{Interval, Labeled, RuleTable, run_chain};
//!
//! let seeds = vec![Labeled::new(Interval::new(79, 92), 0_usize)];
//! let table = RuleTable::from_triples([(52, 50, 48)])?;
//!
//! let history = run_chain(seeds, &[table]);
//! assert_eq!(history.lowest_start(), Some(81));
//! # Ok::<(), range_remap::RuleError>(())
//! ```

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

pub mod chain;
pub mod interval;
pub mod mapper;
pub mod rule;

pub use chain::{History, run_chain};
pub use interval::{Interval, Value, subtract};
pub use mapper::{Labeled, StepOutput, Transition, map_intervals};
pub use rule::{Rule, RuleError, RuleTable};
