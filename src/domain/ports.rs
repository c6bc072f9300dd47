use crate::domain::model::Employee;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The single collection of employees, keyed by id.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn put(&self, employee: &Employee) -> Result<()>;
    async fn scan_all(&self) -> Result<Vec<Employee>>;
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_id(&self) -> String {
        self()
    }
}
