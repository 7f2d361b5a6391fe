//! Parsing the almanac input format into seed ranges and rule tables.
//!
//! The format is block oriented: a `seeds:` line of paired
//! `start length` integers, then blank-line-separated blocks each holding a
//! header line containing `map` followed by `destination source length`
//! triples. Parsing works over the pre-split blocks, so no reader state leaks
//! into the mapping engine.

use std::num::ParseIntError;

use range_remap::{Interval, Labeled, RuleError, RuleTable, Value};
use thiserror::Error;

/// The provenance group assigned to each pair on the seeds line.
///
/// Groups only matter to reporting: every piece split off a seed range keeps
/// the group of the pair it descends from, and the chart colors by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedGroup(pub usize);

/// The parsed almanac: the initial labeled seed ranges and the ordered
/// sequence of rule tables to thread them through.
#[derive(Debug)]
pub struct Almanac {
    /// Seed ranges parsed from the first line, one group per pair.
    pub seed_ranges: Vec<Labeled<SeedGroup>>,

    /// The rule tables in the order the file defines them.
    pub tables: Vec<RuleTable>,
}

/// A number failed to parse, with the token that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse number: {token:?}")]
pub struct ParseNumberError {
    /// The token that was being parsed.
    token: String,
    source: ParseIntError,
}

/// Parse a whitespace-separated token as a [`Value`], keeping the token as
/// error context.
fn parse_value(token: &str) -> Result<Value, ParseNumberError> {
    token.parse().map_err(|source| ParseNumberError {
        token: token.to_owned(),
        source,
    })
}

#[derive(Error, Debug)]
pub enum AlmanacParseError {
    #[error("expected block for seeds")]
    MissingSeedsBlock,

    #[error("expected seeds line to start with \"seeds:\"")]
    MissingSeedsPrefix,

    /// The seeds line holds `(start, length)` pairs, so an even count of
    /// numbers.
    #[error("expected an even count of seed numbers, found {count}")]
    OddSeedCount { count: usize },

    /// A seed pair describes a range no interval can represent.
    #[error("seed range is empty or overflows (start = {start}, length = {length})")]
    InvalidSeedRange { start: Value, length: Value },

    /// Expected a header line containing "map" to open a table block, with
    /// the found line.
    #[error("expected a map header line, found: {0:?}")]
    ExpectedMapHeader(String),

    /// Expected a line formatted as three numbers for a rule, with the found
    /// line.
    #[error("expected three space-separated numbers as a rule, found: {0:?}")]
    ExpectedRuleFormat(String),

    #[error(transparent)]
    ParseNumber(#[from] ParseNumberError),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl Almanac {
    /// Parse almanac text into seed ranges and rule tables.
    ///
    /// # Errors
    ///
    /// Returns an [`AlmanacParseError`] describing the first malformed piece
    /// of input encountered.
    pub fn parse(input: &str) -> Result<Self, AlmanacParseError> {
        let blocks = split_blocks(input);
        let mut blocks = blocks.iter();

        let seeds_block = blocks.next().ok_or(AlmanacParseError::MissingSeedsBlock)?;
        // blocks are never empty, so the seeds line is always present
        let seed_ranges = parse_seed_ranges(seeds_block[0])?;

        let tables = blocks
            .map(|block| parse_table(block))
            .collect::<Result<_, _>>()?;

        Ok(Self { seed_ranges, tables })
    }
}

/// Group the input into blocks of non-empty lines separated by blank lines.
fn split_blocks(input: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Parse the seeds line: paired `start length` integers, each pair one
/// interval labeled with its pair index.
fn parse_seed_ranges(line: &str) -> Result<Vec<Labeled<SeedGroup>>, AlmanacParseError> {
    let list = line
        .strip_prefix("seeds:")
        .ok_or(AlmanacParseError::MissingSeedsPrefix)?;

    let numbers: Vec<Value> = list
        .split_whitespace()
        .map(parse_value)
        .collect::<Result<_, _>>()?;
    if numbers.len() % 2 != 0 {
        return Err(AlmanacParseError::OddSeedCount {
            count: numbers.len(),
        });
    }

    numbers
        .chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| {
            let (start, length) = (pair[0], pair[1]);
            let interval = Interval::from_start_length(start, length)
                .ok_or(AlmanacParseError::InvalidSeedRange { start, length })?;
            Ok(Labeled::new(interval, SeedGroup(index)))
        })
        .collect()
}

/// Parse one table block: a header line containing "map", then rule triples.
fn parse_table(block: &[&str]) -> Result<RuleTable, AlmanacParseError> {
    // blocks are never empty, so the header line is always present
    let header = block[0];
    if !header.contains("map") {
        return Err(AlmanacParseError::ExpectedMapHeader(header.to_owned()));
    }

    let triples = block[1..]
        .iter()
        .map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let &[destination, source, length] = fields.as_slice() else {
                return Err(AlmanacParseError::ExpectedRuleFormat((*line).to_owned()));
            };
            Ok((
                parse_value(destination)?,
                parse_value(source)?,
                parse_value(length)?,
            ))
        })
        .collect::<Result<Vec<_>, AlmanacParseError>>()?;

    Ok(RuleTable::from_triples(triples)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use range_remap::run_chain;

    const EXAMPLE_INPUT: &str = r"seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn parses_example_seed_ranges_and_tables() -> Result<(), AlmanacParseError> {
        let almanac = Almanac::parse(EXAMPLE_INPUT)?;

        assert_eq!(
            almanac.seed_ranges,
            vec![
                Labeled::new(Interval::new(79, 92), SeedGroup(0)),
                Labeled::new(Interval::new(55, 67), SeedGroup(1)),
            ]
        );
        assert_eq!(almanac.tables.len(), 7);
        assert_eq!(almanac.tables[0].rules().len(), 2);
        assert_eq!(almanac.tables[6].rules().len(), 2);
        Ok(())
    }

    #[test]
    fn example_chain_reaches_location_46() -> Result<(), AlmanacParseError> {
        let Almanac { seed_ranges, tables } = Almanac::parse(EXAMPLE_INPUT)?;
        let history = run_chain(seed_ranges, &tables);

        assert_eq!(history.lowest_start(), Some(46));
        Ok(())
    }

    #[test]
    fn example_history_records_every_step() -> Result<(), AlmanacParseError> {
        let Almanac { seed_ranges, tables } = Almanac::parse(EXAMPLE_INPUT)?;
        let history = run_chain(seed_ranges, &tables);

        assert_eq!(history.steps().len(), 7);
        assert_eq!(history.layers().count(), 8);
        Ok(())
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            Almanac::parse(""),
            Err(AlmanacParseError::MissingSeedsBlock)
        ));
    }

    #[test]
    fn rejects_missing_seeds_prefix() {
        assert!(matches!(
            Almanac::parse("79 14 55 13"),
            Err(AlmanacParseError::MissingSeedsPrefix)
        ));
    }

    #[test]
    fn rejects_odd_seed_count() {
        assert!(matches!(
            Almanac::parse("seeds: 79 14 55"),
            Err(AlmanacParseError::OddSeedCount { count: 3 })
        ));
    }

    #[test]
    fn rejects_zero_length_seed_range() {
        assert!(matches!(
            Almanac::parse("seeds: 79 0"),
            Err(AlmanacParseError::InvalidSeedRange { start: 79, length: 0 })
        ));
    }

    #[test]
    fn rejects_block_without_map_header() {
        let input = "seeds: 1 2\n\n50 98 2\n";
        assert!(matches!(
            Almanac::parse(input),
            Err(AlmanacParseError::ExpectedMapHeader(_))
        ));
    }

    #[test]
    fn rejects_rule_with_wrong_field_count() {
        let input = "seeds: 1 2\n\nseed-to-soil map:\n50 98\n";
        assert!(matches!(
            Almanac::parse(input),
            Err(AlmanacParseError::ExpectedRuleFormat(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_rule_field() {
        let input = "seeds: 1 2\n\nseed-to-soil map:\n50 ninety-eight 2\n";
        assert!(matches!(
            Almanac::parse(input),
            Err(AlmanacParseError::ParseNumber(_))
        ));
    }

    #[test]
    fn surfaces_zero_length_rule_from_table() {
        let input = "seeds: 1 2\n\nseed-to-soil map:\n50 98 0\n";
        assert!(matches!(
            Almanac::parse(input),
            Err(AlmanacParseError::Rule(RuleError::EmptyLength { .. }))
        ));
    }

    #[test]
    fn accepts_a_table_with_no_rules() -> Result<(), AlmanacParseError> {
        let input = "seeds: 1 2\n\nseed-to-soil map:\n";
        let almanac = Almanac::parse(input)?;
        assert_eq!(almanac.tables.len(), 1);
        assert!(almanac.tables[0].rules().is_empty());
        Ok(())
    }
}
