pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalTable, CliConfig};

#[cfg(feature = "lambda")]
pub use config::lambda::{DynamoTable, LambdaConfig};

pub use adapters::{id::UuidGenerator, memory::MemoryTable};
pub use core::handlers::EmployeeHandlers;
pub use core::response::{ApiRequest, ApiResponse};
pub use domain::model::{Employee, Level};
pub use utils::error::{EmployeeError, Result};
