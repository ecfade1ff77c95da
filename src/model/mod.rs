//! Model Module
//!
//! Employee records, raw input drafts and the statistic shapes returned to clients.

pub mod employee;
pub mod statistic;

pub use employee::{Currency, Employee, EmployeeDraft, LooseValue};
pub use statistic::{
    DepartmentBreakdown, DepartmentStatistic, GroupStatistic, SubDepartmentStatistic,
    SummaryStatistic,
};

use serde::Serializer;

/// Emit integral floats as JSON integers (`2` rather than `2.0`).
pub(crate) fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Wrapper {
        #[serde(serialize_with = "serialize_number")]
        value: f64,
    }

    #[test]
    fn test_integral_values_have_no_fraction() {
        let json = serde_json::to_string(&Wrapper { value: 20.0 }).unwrap();
        assert_eq!(json, r#"{"value":20}"#);
    }

    #[test]
    fn test_fractional_values_are_kept() {
        let json = serde_json::to_string(&Wrapper { value: 2.5 }).unwrap();
        assert_eq!(json, r#"{"value":2.5}"#);
    }
}
