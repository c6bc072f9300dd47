use crate::core::{Employee, EmployeeStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// A table stored as a JSON array in a single local file.
#[derive(Debug)]
pub struct LocalTable {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_items(&self) -> Result<Vec<Employee>> {
        match tokio::fs::read(&self.path).await {
            Ok(data) => Ok(serde_json::from_slice(&data)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Table file {} not found, treating as empty", self.path.display());
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl EmployeeStore for LocalTable {
    async fn put(&self, employee: &Employee) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut items = self.read_items().await?;
        match items.iter_mut().find(|existing| existing.id == employee.id) {
            Some(existing) => *existing = employee.clone(),
            None => items.push(employee.clone()),
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let data = serde_json::to_vec_pretty(&items)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<Employee>> {
        self.read_items().await
    }
}
