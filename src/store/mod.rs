//! Data-access layer
//!
//! Typed accessors over the SeaORM connection. Every function takes the
//! connection handle explicitly; there is no module-level engine state.
//! Absence of a row is `Ok(None)`, never an error; uniqueness and
//! foreign-key breaches surface as [`StoreError::Constraint`].

use chrono::{NaiveDateTime, Timelike};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub mod average;
pub mod category;
pub mod daily;
pub mod item;
pub mod latest;
pub mod material;
pub mod production;
pub mod skill;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Uniqueness or foreign-key breach on write. Client-input error; the
    /// route layer answers 409 rather than 500.
    #[error("constraint violation: {0}")]
    Constraint(#[source] DbErr),
    #[error(transparent)]
    Db(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_))
            | Some(SqlErr::ForeignKeyConstraintViolation(_)) => StoreError::Constraint(err),
            _ => StoreError::Db(err),
        }
    }
}

/// Floor a timestamp to the given minute granularity.
///
/// Used with `step = 1` before persisting latest/average rows so repeated
/// observations within the same minute land on the same bucket.
pub fn truncate_to_minute(ts: NaiveDateTime, step: u32) -> NaiveDateTime {
    let step = step.max(1);
    let minute = ts.minute() - ts.minute() % step;
    ts.with_minute(minute)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    #[test]
    fn test_truncate_drops_seconds() {
        assert_eq!(truncate_to_minute(ts(12, 34, 56), 1), ts(12, 34, 0));
    }

    #[test]
    fn test_truncate_noop_on_boundary() {
        assert_eq!(truncate_to_minute(ts(12, 34, 0), 1), ts(12, 34, 0));
    }

    #[test]
    fn test_truncate_respects_step() {
        assert_eq!(truncate_to_minute(ts(12, 34, 56), 5), ts(12, 30, 0));
        assert_eq!(truncate_to_minute(ts(12, 59, 1), 15), ts(12, 45, 0));
    }

    #[test]
    fn test_truncate_zero_step_treated_as_one() {
        assert_eq!(truncate_to_minute(ts(12, 34, 7), 0), ts(12, 34, 0));
    }

    #[test]
    fn test_truncate_drops_nanoseconds() {
        let with_nanos = ts(8, 15, 30).with_nanosecond(123_456_789).unwrap();
        assert_eq!(truncate_to_minute(with_nanos, 1), ts(8, 15, 0));
    }
}
