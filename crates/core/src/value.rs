//! Typed reference values for query criteria.
//!
//! This module defines the `Value` enum which represents any value a query
//! criterion can compare a close-approach attribute against.

use crate::types::DataType;
use chrono::NaiveDate;
use core::cmp::Ordering;

/// A typed value that a query criterion compares against.
///
/// Comparison is only defined between values of the same variant; comparing
/// across variants yields no ordering. Float comparisons involving NaN (the
/// unknown-diameter sentinel) also yield no ordering, so an unknown diameter
/// never satisfies a diameter bound.
#[derive(Clone, Copy, Debug)]
pub enum Value {
    /// Calendar date
    Date(NaiveDate),
    /// 64-bit floating point
    Float64(f64),
    /// Boolean flag
    Boolean(bool),
}

impl Value {
    /// Returns the data type of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Date(_) => DataType::Date,
            Value::Float64(_) => DataType::Float64,
            Value::Boolean(_) => DataType::Boolean,
        }
    }

    /// Returns the date if this is a Date, None otherwise.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the f64 value if this is a Float64, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the boolean value if this is a Boolean, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            // NaN on either side compares as incomparable
            (Value::Float64(a), Value::Float64(b)) => a.partial_cmp(b),
            (Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}
