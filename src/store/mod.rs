//! Record Store
//!
//! The repository interface the HTTP layer talks to, its in-memory
//! implementation and the seed dataset loader.

pub mod dataset;
mod in_memory;

pub use dataset::{default_dataset, load_dataset, seed_records};
pub use in_memory::InMemoryRepo;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{DepartmentBreakdown, DepartmentStatistic, Employee, SummaryStatistic};
use crate::statistics::{self, GroupKey};

/// Interface for employee record storage.
///
/// Mutations go through `add_record`/`delete_record`; every statistics query
/// works on a snapshot taken by `all()`.
#[async_trait]
pub trait EmployeeRepo: Send + Sync {
    /// Append a record and return it
    async fn add_record(&self, employee: Employee) -> Employee;

    /// Remove the first record with this name
    async fn delete_record(&self, name: &str) -> Result<Employee>;

    /// Snapshot of all records in insertion order
    async fn all(&self) -> Vec<Employee>;

    async fn len(&self) -> usize {
        self.all().await.len()
    }

    async fn overall_statistics(&self) -> SummaryStatistic {
        statistics::compute_summary(&self.all().await)
    }

    async fn contractor_statistics(&self) -> SummaryStatistic {
        statistics::compute_for_contractors(&self.all().await)
    }

    async fn statistics_by_department(&self) -> Vec<DepartmentStatistic> {
        statistics::group_and_summarize(&self.all().await, GroupKey::Department)
            .into_iter()
            .map(Into::into)
            .collect()
    }

    async fn statistics_by_department_and_sub_department(&self) -> Vec<DepartmentBreakdown> {
        statistics::group_by_dept_then_sub_dept(&self.all().await)
    }
}
