//! Statistics Engine
//!
//! Pure aggregation over employee snapshots: overall and contractor
//! summaries, plus grouping by one or two keys. Groups are always emitted in
//! the order their key first appears in the input, never sorted.

mod grouping;

pub use grouping::{group_and_summarize, group_by_dept_then_sub_dept, partition, GroupKey};

use crate::model::{Employee, SummaryStatistic};

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summarize salaries in a single pass. Empty input yields all zeros.
pub fn compute_summary<'a, I>(records: I) -> SummaryStatistic
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut iter = records.into_iter();
    let first = match iter.next() {
        Some(employee) => employee.salary,
        None => return SummaryStatistic::default(),
    };

    let (mut min, mut max, mut total, mut count) = (first, first, first, 1usize);
    for employee in iter {
        let salary = employee.salary;
        if salary < min {
            min = salary;
        }
        if salary > max {
            max = salary;
        }
        total += salary;
        count += 1;
    }

    SummaryStatistic::new(min, max, round2(total / count as f64))
}

/// Summary restricted to employees on contract
pub fn compute_for_contractors(records: &[Employee]) -> SummaryStatistic {
    compute_summary(records.iter().filter(|e| e.on_contract))
}
