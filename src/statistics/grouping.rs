//! Stable group-by over employee records.

use std::collections::HashMap;

use super::compute_summary;
use crate::model::{DepartmentBreakdown, Employee, GroupStatistic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Department,
    SubDepartment,
}

impl GroupKey {
    pub fn of<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            GroupKey::Department => &employee.department,
            GroupKey::SubDepartment => &employee.sub_department,
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            GroupKey::Department => "department",
            GroupKey::SubDepartment => "sub_department",
        }
    }
}

/// Partition records by `key`, keeping groups in first-occurrence order and
/// records within a group in input order.
pub fn partition<'a, I>(records: I, key: GroupKey) -> Vec<(&'a str, Vec<&'a Employee>)>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, Vec<&'a Employee>)> = Vec::new();

    for employee in records {
        let value = key.of(employee);
        let slot = *slots.entry(value).or_insert_with(|| {
            groups.push((value, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(employee);
    }

    groups
}

/// Summary per distinct value of `key`, in first-occurrence order
pub fn group_and_summarize<'a, I>(records: I, key: GroupKey) -> Vec<GroupStatistic>
where
    I: IntoIterator<Item = &'a Employee>,
{
    partition(records, key)
        .into_iter()
        .map(|(value, members)| GroupStatistic {
            key: value.to_string(),
            statistics: compute_summary(members),
        })
        .collect()
}

/// Two-level breakdown. Sub-departments are grouped within each department
/// separately, so a sub-department name shared by two departments yields two
/// independent entries.
pub fn group_by_dept_then_sub_dept(records: &[Employee]) -> Vec<DepartmentBreakdown> {
    partition(records, GroupKey::Department)
        .into_iter()
        .map(|(department, members)| DepartmentBreakdown {
            department: department.to_string(),
            sub_departments: group_and_summarize(members, GroupKey::SubDepartment)
                .into_iter()
                .map(Into::into)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SummaryStatistic;
    use crate::statistics::fixtures::employee;

    fn keys(groups: &[GroupStatistic]) -> Vec<&str> {
        groups.iter().map(|g| g.key.as_str()).collect()
    }

    #[test]
    fn test_groups_follow_first_occurrence() {
        let records = vec![
            employee(1.0, "B", "x", false),
            employee(2.0, "A", "x", false),
            employee(3.0, "B", "x", false),
            employee(4.0, "C", "x", false),
        ];
        let groups = group_and_summarize(&records, GroupKey::Department);
        assert_eq!(keys(&groups), vec!["B", "A", "C"]);
        assert_eq!(groups[0].statistics, SummaryStatistic::new(1.0, 3.0, 2.0));
    }

    #[test]
    fn test_by_department() {
        let records = vec![
            employee(1.0, "A", "s", true),
            employee(3.0, "A", "s", false),
            employee(10.0, "B", "s", true),
            employee(20.0, "B", "s", false),
            employee(30.0, "B", "s", false),
        ];
        let groups = group_and_summarize(&records, GroupKey::Department);
        assert_eq!(
            groups,
            vec![
                GroupStatistic {
                    key: "A".to_string(),
                    statistics: SummaryStatistic::new(1.0, 3.0, 2.0),
                },
                GroupStatistic {
                    key: "B".to_string(),
                    statistics: SummaryStatistic::new(10.0, 30.0, 20.0),
                },
            ]
        );
    }

    #[test]
    fn test_group_empty_input() {
        let records: Vec<Employee> = Vec::new();
        assert!(group_and_summarize(&records, GroupKey::SubDepartment).is_empty());
        assert!(group_by_dept_then_sub_dept(&records).is_empty());
    }

    #[test]
    fn test_partition_keeps_member_order() {
        let records = vec![
            employee(5.0, "A", "s1", false),
            employee(6.0, "A", "s2", false),
            employee(7.0, "A", "s1", false),
        ];
        let parts = partition(&records, GroupKey::SubDepartment);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].0, "s1");
        let salaries: Vec<f64> = parts[0].1.iter().map(|e| e.salary).collect();
        assert_eq!(salaries, vec![5.0, 7.0]);
    }

    #[test]
    fn test_sub_departments_are_not_merged_across_departments() {
        let records = vec![
            employee(1.0, "A", "s1", true),
            employee(3.0, "A", "s1", true),
            employee(3.0, "A", "s2", false),
            employee(10.0, "B", "s2", true),
            employee(20.0, "B", "s3", false),
            employee(30.0, "B", "s3", false),
        ];
        let breakdown = group_by_dept_then_sub_dept(&records);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].department, "A");
        assert_eq!(breakdown[1].department, "B");

        let a: Vec<(&str, SummaryStatistic)> = breakdown[0]
            .sub_departments
            .iter()
            .map(|s| (s.sub_department.as_str(), s.statistics))
            .collect();
        assert_eq!(
            a,
            vec![
                ("s1", SummaryStatistic::new(1.0, 3.0, 2.0)),
                ("s2", SummaryStatistic::new(3.0, 3.0, 3.0)),
            ]
        );

        let b: Vec<(&str, SummaryStatistic)> = breakdown[1]
            .sub_departments
            .iter()
            .map(|s| (s.sub_department.as_str(), s.statistics))
            .collect();
        assert_eq!(
            b,
            vec![
                ("s2", SummaryStatistic::new(10.0, 10.0, 10.0)),
                ("s3", SummaryStatistic::new(20.0, 30.0, 25.0)),
            ]
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(GroupKey::Department.field_name(), "department");
        assert_eq!(GroupKey::SubDepartment.field_name(), "sub_department");
    }
}
