use crate::core::builder::build;
use crate::core::response::{
    ApiRequest, ApiResponse, HELLO_MESSAGE, INVALID_DATA_MESSAGE, MISSING_BODY_MESSAGE,
};
use crate::core::validator::validate;
use crate::core::{Employee, EmployeeStore, IdGenerator};
use crate::utils::error::{EmployeeError, ErrorCategory, Result};

/// The three request handlers. The store and id source are injected by the
/// process bootstrap; nothing here outlives a single call except them.
pub struct EmployeeHandlers<S: EmployeeStore, G: IdGenerator> {
    store: S,
    ids: G,
}

impl<S: EmployeeStore, G: IdGenerator> EmployeeHandlers<S, G> {
    pub fn new(store: S, ids: G) -> Self {
        Self { store, ids }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn create_employee(&self, request: &ApiRequest) -> ApiResponse {
        tracing::debug!("Handling create employee request");

        match self.try_create_employee(request).await {
            Ok(employee) => {
                tracing::info!(id = %employee.id, "Employee created");
                ApiResponse::json(201, &employee).unwrap_or_else(|e| server_error(&e))
            }
            Err(e) => error_response(&e),
        }
    }

    pub async fn get_employees(&self, _request: &ApiRequest) -> ApiResponse {
        tracing::debug!("Handling list employees request");

        self.try_get_employees()
            .await
            .unwrap_or_else(|e| error_response(&e))
    }

    pub async fn hello_world(&self, _request: &ApiRequest) -> ApiResponse {
        hello_world()
    }

    async fn try_create_employee(&self, request: &ApiRequest) -> Result<Employee> {
        let body = match request.body.as_deref() {
            Some(body) if !body.is_empty() => body,
            _ => return Err(EmployeeError::MissingBody),
        };

        let raw: serde_json::Value =
            serde_json::from_str(body).map_err(|e| EmployeeError::MalformedInput {
                message: e.to_string(),
            })?;
        if raw.is_null() {
            return Err(EmployeeError::MalformedInput {
                message: "request body is null".to_string(),
            });
        }

        let validated = validate(&raw)?;
        let employee = build(validated, || self.ids.next_id());

        self.store.put(&employee).await?;
        Ok(employee)
    }

    async fn try_get_employees(&self) -> Result<ApiResponse> {
        let employees = self.store.scan_all().await?;
        tracing::debug!("Scanned {} employees", employees.len());
        ApiResponse::json(200, &employees)
    }
}

/// Health check. Needs no collaborators, so it is usable without a store.
pub fn hello_world() -> ApiResponse {
    ApiResponse::json(200, &serde_json::json!({ "message": HELLO_MESSAGE }))
        .unwrap_or_else(|e| server_error(&e))
}

fn error_response(error: &EmployeeError) -> ApiResponse {
    match (error.category(), error) {
        (ErrorCategory::Client, EmployeeError::MissingBody) => {
            tracing::warn!("Rejected request: {}", error);
            ApiResponse::message(error.status_code(), MISSING_BODY_MESSAGE)
        }
        (ErrorCategory::Client, _) => {
            tracing::warn!("Rejected request: {}", error);
            ApiResponse::message(error.status_code(), INVALID_DATA_MESSAGE)
        }
        (ErrorCategory::Server, _) => server_error(error),
    }
}

fn server_error(error: &EmployeeError) -> ApiResponse {
    tracing::error!(error = %error, "Request failed");
    ApiResponse::server_error()
}
