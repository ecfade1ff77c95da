//! Salary Statistics Service
//!
//! In-memory employee salary records behind a small HTTP API:
//! - Record store with add / delete-by-name
//! - Summary statistics (min, max, mean) overall and for contractors
//! - Per-department and per-department/sub-department breakdowns

pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod statistics;
pub mod store;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};
pub use model::{Employee, EmployeeDraft, SummaryStatistic};
pub use store::{EmployeeRepo, InMemoryRepo};
