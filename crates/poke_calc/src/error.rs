//! Error types.
//!
//! Invalid caller input is reported through [`CalcError`]. Outcomes where a
//! move simply deals no damage (status moves, immunities, absorbing
//! abilities) are NOT errors; they are ordinary results tagged with a
//! [`NoDamageReason`](crate::damage::result::NoDamageReason).

use std::fmt;

use crate::stats::Stat;

/// Which per-stat input table carried a rejected value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    BaseStat,
    IndividualValue,
    EffortValue,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueKind::BaseStat => "base stat",
            ValueKind::IndividualValue => "IV",
            ValueKind::EffortValue => "EV",
        };
        f.write_str(label)
    }
}

/// A caller-supplied argument outside its legal domain.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("level {0} is outside 1..=100")]
    Level(u8),
    #[error("generation {0} is outside 1..=9")]
    Generation(u8),
    #[error("{kind} for {stat:?} must not be negative (got {value})")]
    Negative {
        kind: ValueKind,
        stat: Stat,
        value: i32,
    },
}

/// Errors raised by the calculation engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),
}

/// Errors raised at the catalog boundary.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{kind} `{id}` not found")]
    NotFound { kind: &'static str, id: String },
    #[error("malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}
