//! Mathematical interval conditions for count-dependent messages.
//!
//! An interval is either a finite set of numbers:
//!
//! ```text
//! {1,2,3,4}
//! ```
//!
//! or a range between two bounds:
//!
//! ```text
//! [1, +Inf]
//! ]-1,2[
//! ```
//!
//! The left delimiter can be `[` (inclusive) or `]` (exclusive). The right
//! delimiter can be `[` (exclusive) or `]` (inclusive). Besides numbers a
//! bound can be `-Inf`, `+Inf`, `Inf` or `*`. Any positive infinity written
//! as the *left* bound is read as negative infinity, so `[*,5]` means
//! "at most five".
//!
//! Numbers may carry a decimal fraction, but only their integer part is
//! compared against the count.

use std::{cmp::Ordering, fmt::Display, str::FromStr};

use crate::error::Error;

/// One side of a range interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    NegInfinity,
    PosInfinity,
    Value(i64),
}

impl Bound {
    /// Where `count` sits relative to this bound.
    fn compare(self, count: i64) -> Ordering {
        match self {
            Bound::NegInfinity => Ordering::Greater,
            Bound::PosInfinity => Ordering::Less,
            Bound::Value(value) => count.cmp(&value),
        }
    }

    /// Left bounds never mean +Inf: an unbounded left edge is -Inf however it is written.
    fn as_left_edge(self) -> Self {
        match self {
            Bound::PosInfinity => Bound::NegInfinity,
            other => other,
        }
    }
}

impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::NegInfinity => f.write_str("-Inf"),
            Bound::PosInfinity => f.write_str("+Inf"),
            Bound::Value(value) => write!(f, "{}", value),
        }
    }
}

/// A parsed interval expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interval {
    /// `{n1, n2, ...}`: matches exactly the listed integers.
    Set(Vec<i64>),
    /// `[low, high]` and its half-open variants.
    Range {
        low: Bound,
        low_inclusive: bool,
        high: Bound,
        high_inclusive: bool,
    },
}

impl Interval {
    /// Parses an interval expression. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::malformed_interval(input, "empty interval"));
        }

        let mut cursor = Cursor::new(trimmed);
        let interval = match cursor.peek() {
            Some(b'{') => cursor.parse_set()?,
            Some(b'[') | Some(b']') => cursor.parse_range()?,
            _ => return Err(cursor.error("expected `{`, `[` or `]`")),
        };

        cursor.skip_whitespace();
        if !cursor.at_end() {
            return Err(cursor.error("unexpected trailing input"));
        }
        Ok(interval)
    }

    /// Tests whether `count` belongs to this interval.
    pub fn contains(&self, count: i64) -> bool {
        match self {
            Interval::Set(values) => values.contains(&count),
            Interval::Range {
                low,
                low_inclusive,
                high,
                high_inclusive,
            } => {
                let from_low = low.compare(count);
                let above = if *low_inclusive {
                    from_low != Ordering::Less
                } else {
                    from_low == Ordering::Greater
                };

                let from_high = high.compare(count);
                let below = if *high_inclusive {
                    from_high != Ordering::Greater
                } else {
                    from_high == Ordering::Less
                };

                above && below
            }
        }
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::parse(s)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interval::Set(values) => {
                let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "{{{}}}", items.join(","))
            }
            Interval::Range {
                low,
                low_inclusive,
                high,
                high_inclusive,
            } => write!(
                f,
                "{}{},{}{}",
                if *low_inclusive { '[' } else { ']' },
                low,
                high,
                if *high_inclusive { ']' } else { '[' },
            ),
        }
    }
}

/// Tests if `count` belongs to the interval written in `interval`.
///
/// A malformed interval is an error, never a silent `false`.
pub fn test_interval(count: i64, interval: &str) -> Result<bool, Error> {
    let parsed = Interval::parse(interval)?;
    let matched = parsed.contains(count);
    tracing::trace!(count, interval = %parsed, matched, "tested interval");
    Ok(matched)
}

struct Cursor<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn error(&self, reason: &str) -> Error {
        Error::malformed_interval(self.input, format!("{} at offset {}", reason, self.pos))
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.input[self.pos..].starts_with(keyword) {
            self.pos += keyword.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), Error> {
        self.skip_whitespace();
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.error(&format!("expected `{}`", byte as char)))
        }
    }

    fn parse_set(&mut self) -> Result<Interval, Error> {
        self.expect(b'{')?;
        let mut values = vec![self.parse_number()?];
        loop {
            self.skip_whitespace();
            if self.eat(b'}') {
                return Ok(Interval::Set(values));
            }
            self.expect(b',')?;
            values.push(self.parse_number()?);
        }
    }

    fn parse_range(&mut self) -> Result<Interval, Error> {
        let low_inclusive = match self.peek() {
            Some(b'[') => true,
            Some(b']') => false,
            _ => return Err(self.error("expected `[` or `]`")),
        };
        self.pos += 1;

        let low = self.parse_bound()?.as_left_edge();
        self.expect(b',')?;
        let high = self.parse_bound()?;

        self.skip_whitespace();
        let high_inclusive = match self.peek() {
            Some(b']') => true,
            Some(b'[') => false,
            _ => return Err(self.error("expected `[` or `]`")),
        };
        self.pos += 1;

        Ok(Interval::Range {
            low,
            low_inclusive,
            high,
            high_inclusive,
        })
    }

    fn parse_bound(&mut self) -> Result<Bound, Error> {
        self.skip_whitespace();
        if self.eat_keyword("-Inf") {
            Ok(Bound::NegInfinity)
        } else if self.eat_keyword("+Inf") || self.eat_keyword("Inf") || self.eat(b'*') {
            Ok(Bound::PosInfinity)
        } else {
            self.parse_number().map(Bound::Value)
        }
    }

    /// `-?\d+(\.\d+)?`, keeping only the integer part.
    fn parse_number(&mut self) -> Result<i64, Error> {
        self.skip_whitespace();
        let start = self.pos;
        self.eat(b'-');

        let digits_start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == digits_start {
            self.pos = start;
            return Err(self.error("expected a number"));
        }
        let integer_end = self.pos;

        if self.eat(b'.') {
            let fraction_start = self.pos;
            while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                self.pos += 1;
            }
            if self.pos == fraction_start {
                return Err(self.error("expected digits after `.`"));
            }
        }

        self.input[start..integer_end]
            .parse::<i64>()
            .map_err(|_| Error::malformed_interval(self.input, "number out of range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        let interval = Interval::parse("{1, 2,3}").unwrap();
        assert_eq!(interval, Interval::Set(vec![1, 2, 3]));
    }

    #[test]
    fn test_parse_single_element_set() {
        assert_eq!(Interval::parse("{0}").unwrap(), Interval::Set(vec![0]));
    }

    #[test]
    fn test_parse_range_bounds() {
        let interval = Interval::parse(" ]-1, +Inf] ").unwrap();
        assert_eq!(
            interval,
            Interval::Range {
                low: Bound::Value(-1),
                low_inclusive: false,
                high: Bound::PosInfinity,
                high_inclusive: true,
            }
        );
    }

    #[test]
    fn test_left_positive_infinity_is_remapped() {
        for input in ["[*,5]", "[Inf,5]", "[+Inf,5]"] {
            match Interval::parse(input).unwrap() {
                Interval::Range { low, .. } => assert_eq!(low, Bound::NegInfinity, "{}", input),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_right_bound_is_not_remapped() {
        match Interval::parse("[1,-Inf]").unwrap() {
            Interval::Range { high, .. } => assert_eq!(high, Bound::NegInfinity),
            other => panic!("unexpected {:?}", other),
        }
        assert!(!test_interval(5, "[1,-Inf]").unwrap());
    }

    #[test]
    fn test_fraction_keeps_integer_part() {
        assert_eq!(Interval::parse("{1.9}").unwrap(), Interval::Set(vec![1]));
        assert_eq!(Interval::parse("{-0.5}").unwrap(), Interval::Set(vec![0]));
        assert!(test_interval(2, "[1.5,2.5]").unwrap());
        assert!(!test_interval(3, "[1.5,2.5]").unwrap());
    }

    #[test]
    fn test_range_delimiters() {
        assert!(test_interval(5, "[1,10]").unwrap());
        assert!(test_interval(10, "[1,10]").unwrap());
        assert!(!test_interval(10, "[1,10[").unwrap());
        assert!(!test_interval(1, "]1,10]").unwrap());
        assert!(test_interval(2, "]1,10]").unwrap());
        assert!(test_interval(0, "[*,5]").unwrap());
        assert!(test_interval(i64::MIN, "]-Inf,0]").unwrap());
        assert!(test_interval(i64::MAX, "[0,*]").unwrap());
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in [
            "",
            "   ",
            "not an interval",
            "{}",
            "{1,}",
            "{1 2}",
            "{a}",
            "[1,2",
            "[1;2]",
            "[foo,2]",
            "[1,bar]",
            "(1,2)",
            "[1,2] extra",
            "{1.}",
            "[+5,6]",
            "{99999999999999999999}",
        ] {
            let err = Interval::parse(input).unwrap_err();
            assert!(
                matches!(err, Error::MalformedInterval { .. }),
                "{:?} should be malformed",
                input
            );
        }
    }

    #[test]
    fn test_display_is_reparsable() {
        for input in ["{1,2,3}", "[1,+Inf[", "]-Inf,-1]", "[*,0]"] {
            let interval = Interval::parse(input).unwrap();
            assert_eq!(Interval::parse(&interval.to_string()).unwrap(), interval);
        }
    }
}
