pub mod builder;
pub mod handlers;
pub mod response;
pub mod validator;

pub use crate::domain::model::{Employee, Level, ValidatedInput};
pub use crate::domain::ports::{EmployeeStore, IdGenerator};
pub use crate::utils::error::Result;
