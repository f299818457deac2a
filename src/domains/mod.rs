//! The scalar [`Domain`] value type: an immutable description of the
//! admissible values of one integer variable.
//!
//! A domain is a value, not an identity. Narrowing operations return a fresh
//! (narrower) domain or signal [`EmptyDomain`]; the owner of a variable
//! replaces its domain rather than mutating it in place.

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use thiserror::Error;

/// Marker for a narrowing operation that would leave no values; converted
/// into a propagation-time contradiction by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDomain;

/// Error raised when parsing the compact debug rendering of a domain back
/// into a value set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainParseError {
    #[error("domain string is not wrapped in braces: {0:?}")]
    MissingBraces(String),
    #[error("invalid integer in domain string: {0:?}")]
    InvalidInteger(String),
    #[error("misplaced ellipsis in domain string")]
    MisplacedEllipsis,
    #[error("domain string values are not strictly increasing")]
    NotSorted,
    #[error("domain string contains no values")]
    Empty,
}

/// The set of values an integer variable may still take.
///
/// Two representations are used for compactness: a contiguous inclusive
/// range stays [`Domain::Bounded`], anything with holes is
/// [`Domain::Enumerated`] with sorted unique values. The constructors
/// canonicalise (a contiguous value list becomes `Bounded`), so the derived
/// equality is value-set equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Domain {
    Bounded { low: i32, high: i32 },
    Enumerated(Box<[i32]>),
}

impl Domain {
    /// Creates the contiguous domain `{low, ..., high}`.
    pub fn bounded(low: i32, high: i32) -> Domain {
        assert!(low <= high, "domain [{low}, {high}] is empty");
        Domain::Bounded { low, high }
    }

    /// Creates the domain holding exactly `value`.
    pub fn singleton(value: i32) -> Domain {
        Domain::Bounded {
            low: value,
            high: value,
        }
    }

    /// Creates a domain over the given values. The values are sorted and
    /// deduplicated; a contiguous set collapses to [`Domain::Bounded`].
    pub fn enumerated(values: impl Into<Vec<i32>>) -> Domain {
        let mut values = values.into();
        values.sort_unstable();
        values.dedup();
        assert!(!values.is_empty(), "domain over zero values is empty");
        Domain::from_sorted(values)
    }

    /// `values` must be sorted, unique and non-empty.
    fn from_sorted(values: Vec<i32>) -> Domain {
        let low = values[0];
        let high = values[values.len() - 1];
        if high as i64 - low as i64 + 1 == values.len() as i64 {
            Domain::Bounded { low, high }
        } else {
            Domain::Enumerated(values.into_boxed_slice())
        }
    }

    pub fn low(&self) -> i32 {
        match self {
            Domain::Bounded { low, .. } => *low,
            Domain::Enumerated(values) => values[0],
        }
    }

    pub fn high(&self) -> i32 {
        match self {
            Domain::Bounded { high, .. } => *high,
            Domain::Enumerated(values) => values[values.len() - 1],
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Domain::Bounded { low, high } => (*high as i64 - *low as i64 + 1) as u64,
            Domain::Enumerated(values) => values.len() as u64,
        }
    }

    pub fn is_singleton(&self) -> bool {
        self.size() == 1
    }

    /// The value of a singleton domain.
    pub fn value(&self) -> Option<i32> {
        if self.is_singleton() {
            Some(self.low())
        } else {
            None
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        match self {
            Domain::Bounded { low, high } => value >= *low && value <= *high,
            Domain::Enumerated(values) => values.binary_search(&value).is_ok(),
        }
    }

    /// Iterates the values in ascending order.
    pub fn iter(&self) -> DomainIter<'_> {
        match self {
            Domain::Bounded { low, high } => DomainIter::Range(*low..=*high),
            Domain::Enumerated(values) => DomainIter::Slice(values.iter()),
        }
    }

    /// The values present in both this domain and `other`.
    pub fn intersect(&self, other: &Domain) -> Result<Domain, EmptyDomain> {
        match (self, other) {
            (
                Domain::Bounded { low, high },
                Domain::Bounded {
                    low: other_low,
                    high: other_high,
                },
            ) => {
                let low = (*low).max(*other_low);
                let high = (*high).min(*other_high);
                if low > high {
                    Err(EmptyDomain)
                } else {
                    Ok(Domain::Bounded { low, high })
                }
            }
            _ => {
                let values: Vec<i32> = self.iter().filter(|&v| other.contains(v)).collect();
                if values.is_empty() {
                    Err(EmptyDomain)
                } else {
                    Ok(Domain::from_sorted(values))
                }
            }
        }
    }

    /// Removes `value`; removing an absent value is a no-op.
    pub fn remove(&self, value: i32) -> Result<Domain, EmptyDomain> {
        if !self.contains(value) {
            return Ok(self.clone());
        }
        if self.is_singleton() {
            return Err(EmptyDomain);
        }
        match self {
            Domain::Bounded { low, high } => {
                if value == *low {
                    Ok(Domain::Bounded {
                        low: low + 1,
                        high: *high,
                    })
                } else if value == *high {
                    Ok(Domain::Bounded {
                        low: *low,
                        high: high - 1,
                    })
                } else {
                    // An interior removal punches a hole; promote to the
                    // enumerated representation.
                    let values: Vec<i32> = (*low..=*high).filter(|&v| v != value).collect();
                    Ok(Domain::Enumerated(values.into_boxed_slice()))
                }
            }
            Domain::Enumerated(values) => {
                let values: Vec<i32> = values.iter().copied().filter(|&v| v != value).collect();
                Ok(Domain::from_sorted(values))
            }
        }
    }

    pub fn tighten_low(&self, bound: i32) -> Result<Domain, EmptyDomain> {
        if bound <= self.low() {
            return Ok(self.clone());
        }
        if bound > self.high() {
            return Err(EmptyDomain);
        }
        match self {
            Domain::Bounded { high, .. } => Ok(Domain::Bounded {
                low: bound,
                high: *high,
            }),
            Domain::Enumerated(values) => {
                let values: Vec<i32> = values.iter().copied().filter(|&v| v >= bound).collect();
                Ok(Domain::from_sorted(values))
            }
        }
    }

    pub fn tighten_high(&self, bound: i32) -> Result<Domain, EmptyDomain> {
        if bound >= self.high() {
            return Ok(self.clone());
        }
        if bound < self.low() {
            return Err(EmptyDomain);
        }
        match self {
            Domain::Bounded { low, .. } => Ok(Domain::Bounded {
                low: *low,
                high: bound,
            }),
            Domain::Enumerated(values) => {
                let values: Vec<i32> = values.iter().copied().filter(|&v| v <= bound).collect();
                Ok(Domain::from_sorted(values))
            }
        }
    }

    /// Parses the rendering produced by [`Display`]. Every rendered domain
    /// parses back to an equal value set: an ellipsis always stands for the
    /// full run of integers between its printed neighbours.
    pub fn from_debug_str(input: &str) -> Result<Domain, DomainParseError> {
        let inner = input
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| DomainParseError::MissingBraces(input.to_owned()))?;
        let mut values: Vec<i32> = Vec::new();
        let mut pending_ellipsis = false;
        for token in inner.split(',').map(str::trim) {
            if token == "..." {
                if values.is_empty() || pending_ellipsis {
                    return Err(DomainParseError::MisplacedEllipsis);
                }
                pending_ellipsis = true;
                continue;
            }
            let value: i32 = token
                .parse()
                .map_err(|_| DomainParseError::InvalidInteger(token.to_owned()))?;
            if let Some(&last) = values.last() {
                if value <= last {
                    return Err(DomainParseError::NotSorted);
                }
                if pending_ellipsis {
                    values.extend(last + 1..value);
                    pending_ellipsis = false;
                }
            }
            values.push(value);
        }
        if pending_ellipsis {
            return Err(DomainParseError::MisplacedEllipsis);
        }
        if values.is_empty() {
            return Err(DomainParseError::Empty);
        }
        Ok(Domain::from_sorted(values))
    }
}

impl FromStr for Domain {
    type Err = DomainParseError;

    fn from_str(input: &str) -> Result<Domain, DomainParseError> {
        Domain::from_debug_str(input)
    }
}

/// Compact diagnostic rendering: maximal runs of consecutive integers
/// collapse their interior into one ellipsis, e.g. `{1, ..., 7, 10}`.
impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Domain::Bounded { low, high } = self {
            return match self.size() {
                1 => write!(f, "{{{low}}}"),
                2 => write!(f, "{{{low}, {high}}}"),
                _ => write!(f, "{{{low}, ..., {high}}}"),
            };
        }
        let values: Vec<i32> = self.iter().collect();
        write!(f, "{{{}", values[0])?;
        let mut elided = false;
        for i in 1..values.len() {
            if i < values.len() - 1 && values[i - 1] + 1 == values[i] && values[i] + 1 == values[i + 1]
            {
                if !elided {
                    write!(f, ", ...")?;
                    elided = true;
                }
            } else {
                write!(f, ", {}", values[i])?;
                elided = false;
            }
        }
        write!(f, "}}")
    }
}

#[derive(Debug, Clone)]
pub enum DomainIter<'a> {
    Range(std::ops::RangeInclusive<i32>),
    Slice(std::slice::Iter<'a, i32>),
}

impl Iterator for DomainIter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        match self {
            DomainIter::Range(range) => range.next(),
            DomainIter::Slice(iter) => iter.next().copied(),
        }
    }
}
