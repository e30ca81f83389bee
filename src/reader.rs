//! A reader for the line-oriented text input format:
//!
//! ```text
//! 7                   <- number of keys
//! 10 5 15 3 7 12 18   <- keys, inserted in order
//! 6 13                <- interval bounds
//! ```

use std::{
    io::Read,
    num::ParseIntError,
    str::{FromStr, Lines},
};

use thiserror::Error;

use crate::{Error, Interval, Tree};

/// Errors returned when reading malformed input.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Reading the input stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before the named line.
    #[error("missing {0} line")]
    MissingLine(&'static str),

    /// A token is not a valid integer.
    #[error("line {line}: invalid integer {token:?}: {source}")]
    InvalidInteger {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
        /// The parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The key line does not hold the declared number of keys.
    #[error("line 2: expected {expected} keys, found {found}")]
    KeyCount {
        /// The count declared on line 1.
        expected: usize,
        /// The number of keys present.
        found: usize,
    },

    /// The interval line does not hold exactly two bounds.
    #[error("line 3: expected 2 interval bounds, found {found}")]
    IntervalBounds {
        /// The number of bounds present.
        found: usize,
    },

    /// The input is well-formed but describes an invalid tree or interval.
    #[error(transparent)]
    Tree(#[from] Error),
}

/// A parsed and validated input: the keys to insert and the interval to
/// delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Keys in insertion order.
    pub keys: Vec<i64>,

    /// The interval to delete.
    pub interval: Interval,
}

impl Input {
    /// Read and parse an input from `r`.
    pub fn read<R>(mut r: R) -> Result<Self, ReadError>
    where
        R: Read,
    {
        let mut buf = String::new();
        r.read_to_string(&mut buf)?;
        buf.parse()
    }

    /// Build the initial tree by inserting the keys in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if a key repeats.
    pub fn tree(&self) -> Result<Tree, Error> {
        Tree::from_keys(self.keys.iter().copied())
    }
}

impl FromStr for Input {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();

        let token = next_line(&mut lines, "key count")?.trim();
        let count = token
            .parse::<usize>()
            .map_err(|source| ReadError::InvalidInteger {
                line: 1,
                token: token.to_string(),
                source,
            })?;

        let keys = integers::<i64>(2, next_line(&mut lines, "key")?)?;
        if keys.len() != count {
            return Err(ReadError::KeyCount {
                expected: count,
                found: keys.len(),
            });
        }

        let interval = match integers::<i64>(3, next_line(&mut lines, "interval")?)?[..] {
            [lo, hi] => Interval::new(lo, hi)?,
            ref v => return Err(ReadError::IntervalBounds { found: v.len() }),
        };

        Ok(Self { keys, interval })
    }
}

fn next_line<'a>(lines: &mut Lines<'a>, name: &'static str) -> Result<&'a str, ReadError> {
    lines.next().ok_or(ReadError::MissingLine(name))
}

fn integers<T>(line: usize, s: &str) -> Result<Vec<T>, ReadError>
where
    T: FromStr<Err = ParseIntError>,
{
    s.split_whitespace()
        .map(|token| {
            token.parse().map_err(|source| ReadError::InvalidInteger {
                line,
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let input = "7\n10 5 15 3 7 12 18\n6 13\n".parse::<Input>().unwrap();

        assert_eq!(input.keys, [10, 5, 15, 3, 7, 12, 18]);
        assert_eq!(input.interval, Interval::new(6, 13).unwrap());

        let t = input.tree().unwrap();
        assert_eq!(t.len(), 7);
        assert_eq!(t.root_key(), Some(10));
    }

    #[test]
    fn test_read() {
        let input = Input::read("1\n42\n0 100".as_bytes()).unwrap();

        assert_eq!(input.keys, [42]);
        assert_eq!(input.interval, Interval::new(0, 100).unwrap());
    }

    #[test]
    fn test_whitespace_tolerant() {
        let input = " 3 \r\n-1   2\t3\r\n -5 -2 \r\n".parse::<Input>().unwrap();

        assert_eq!(input.keys, [-1, 2, 3]);
        assert_eq!(input.interval, Interval::new(-5, -2).unwrap());
    }

    #[test]
    fn test_empty_tree() {
        let input = "0\n\n1 2\n".parse::<Input>().unwrap();

        assert!(input.keys.is_empty());
        assert!(input.tree().unwrap().is_empty());
    }

    #[test]
    fn test_missing_lines() {
        assert!(matches!("".parse::<Input>(), Err(ReadError::MissingLine("key count"))));
        assert!(matches!("1".parse::<Input>(), Err(ReadError::MissingLine("key"))));
        assert!(matches!("1\n5".parse::<Input>(), Err(ReadError::MissingLine("interval"))));
    }

    #[test]
    fn test_invalid_integer() {
        assert!(matches!(
            "2\n1 x\n0 1".parse::<Input>(),
            Err(ReadError::InvalidInteger { line: 2, ref token, .. }) if token == "x"
        ));
        assert!(matches!(
            "-1\n\n0 1".parse::<Input>(),
            Err(ReadError::InvalidInteger { line: 1, .. })
        ));
        assert!(matches!(
            "1 2\n1\n0 1".parse::<Input>(),
            Err(ReadError::InvalidInteger { line: 1, ref token, .. }) if token == "1 2"
        ));
    }

    #[test]
    fn test_key_count_mismatch() {
        assert!(matches!(
            "3\n1 2\n0 1".parse::<Input>(),
            Err(ReadError::KeyCount {
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            "1\n1 2\n0 1".parse::<Input>(),
            Err(ReadError::KeyCount {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn test_interval_bounds() {
        assert!(matches!(
            "1\n1\n0".parse::<Input>(),
            Err(ReadError::IntervalBounds { found: 1 })
        ));
        assert!(matches!(
            "1\n1\n5 1".parse::<Input>(),
            Err(ReadError::Tree(Error::InvalidInterval { lo: 5, hi: 1 }))
        ));
    }

    #[test]
    fn test_duplicate_keys() {
        let input = "2\n1 1\n0 1".parse::<Input>().unwrap();
        assert_eq!(input.tree().unwrap_err(), Error::DuplicateKey(1));
    }
}
