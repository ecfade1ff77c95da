use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::EmployeeRepo;
use crate::error::{Error, Result};
use crate::model::Employee;

/// Process-lifetime record store. The vector is owned here and only mutated
/// under the write lock.
#[derive(Debug, Default)]
pub struct InMemoryRepo {
    records: RwLock<Vec<Employee>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Employee>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl EmployeeRepo for InMemoryRepo {
    async fn add_record(&self, employee: Employee) -> Employee {
        let mut records = self.records.write().await;
        records.push(employee.clone());
        debug!("Stored employee '{}' ({} records)", employee.name, records.len());
        employee
    }

    async fn delete_record(&self, name: &str) -> Result<Employee> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| Error::not_found(name))?;
        let employee = records.remove(index);
        debug!("Deleted employee '{}' ({} records)", name, records.len());
        Ok(employee)
    }

    async fn all(&self) -> Vec<Employee> {
        self.records.read().await.clone()
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
