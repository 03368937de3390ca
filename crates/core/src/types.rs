//! Data type definitions for query criterion values.

/// The type of a criterion reference value.
///
/// Criteria over close approaches compare calendar dates, floating point
/// quantities (distance, velocity, diameter), or boolean flags; nothing else
/// is comparable, so the set is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Calendar date (no time-of-day component)
    Date,
    /// 64-bit floating point number
    Float64,
    /// Boolean type (true/false)
    Boolean,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_equality() {
        assert_eq!(DataType::Date, DataType::Date);
        assert_ne!(DataType::Float64, DataType::Boolean);
    }
}
