use serde::{Deserialize, Serialize};

/// Min / max / mean over a salary set
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistic {
    #[serde(serialize_with = "super::serialize_number")]
    pub min: f64,
    #[serde(serialize_with = "super::serialize_number")]
    pub max: f64,
    #[serde(serialize_with = "super::serialize_number")]
    pub mean: f64,
}

impl SummaryStatistic {
    pub fn new(min: f64, max: f64, mean: f64) -> Self {
        Self { min, max, mean }
    }
}

/// Statistic for one value of a grouping key
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStatistic {
    pub key: String,
    pub statistics: SummaryStatistic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentStatistic {
    pub department: String,
    pub statistics: SummaryStatistic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubDepartmentStatistic {
    pub sub_department: String,
    pub statistics: SummaryStatistic,
}

/// A department together with its per-sub-department statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentBreakdown {
    pub department: String,
    #[serde(rename = "subDepartments")]
    pub sub_departments: Vec<SubDepartmentStatistic>,
}

impl From<GroupStatistic> for DepartmentStatistic {
    fn from(group: GroupStatistic) -> Self {
        Self {
            department: group.key,
            statistics: group.statistics,
        }
    }
}

impl From<GroupStatistic> for SubDepartmentStatistic {
    fn from(group: GroupStatistic) -> Self {
        Self {
            sub_department: group.key,
            statistics: group.statistics,
        }
    }
}
