use crate::domain::model::Employee;
use crate::domain::ports::EmployeeStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Employees kept in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryTable {
    items: RwLock<Vec<Employee>>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Employee>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl EmployeeStore for MemoryTable {
    async fn put(&self, employee: &Employee) -> Result<()> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|existing| existing.id == employee.id) {
            Some(existing) => *existing = employee.clone(),
            None => items.push(employee.clone()),
        }
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<Employee>> {
        Ok(self.items.read().await.clone())
    }
}
