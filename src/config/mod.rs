#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "lambda")]
pub mod lambda;

#[cfg(feature = "cli")]
use crate::core::response::ApiRequest;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "employee-api")]
#[command(about = "Run the employee handlers against a local JSON table")]
pub struct CliConfig {
    #[arg(long, default_value = "./EmployeeTable.json")]
    pub table_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create an employee, either from a raw JSON body or from field flags
    Create {
        #[arg(long, conflicts_with_all = ["name", "position", "level"])]
        body: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long, help = "junior, mid or senior")]
        level: Option<String>,
    },
    /// List every employee in the table
    List,
    /// Health check
    Hello,
}

#[cfg(feature = "cli")]
impl Command {
    /// The gateway event this command stands for.
    pub fn to_request(&self) -> ApiRequest {
        match self {
            Command::Create {
                body: Some(body), ..
            } => ApiRequest::with_body(body.clone()),
            Command::Create {
                body: None,
                name,
                position,
                level,
            } => {
                let mut fields = serde_json::Map::new();
                for (key, value) in [("name", name), ("position", position), ("level", level)] {
                    if let Some(value) = value {
                        fields.insert(key.to_string(), serde_json::Value::String(value.clone()));
                    }
                }
                if fields.is_empty() {
                    ApiRequest::empty()
                } else {
                    ApiRequest::with_body(serde_json::Value::Object(fields).to_string())
                }
            }
            Command::List | Command::Hello => ApiRequest::empty(),
        }
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        crate::utils::validation::validate_path("table_path", &self.table_path)?;
        tracing::debug!("CLI configuration validation passed");
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_create_flags_become_json_body() {
        let config = CliConfig::parse_from([
            "employee-api",
            "create",
            "--name",
            "Alice",
            "--position",
            "Engineer",
            "--level",
            "mid",
        ]);
        let request = config.command.to_request();
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();

        assert_eq!(body["name"], "Alice");
        assert_eq!(body["position"], "Engineer");
        assert_eq!(body["level"], "mid");
        assert_eq!(config.table_path, "./EmployeeTable.json");
    }

    #[test]
    fn test_create_without_fields_has_no_body() {
        let config = CliConfig::parse_from(["employee-api", "create"]);
        assert!(config.command.to_request().body.is_none());
    }

    #[test]
    fn test_raw_body_is_passed_through() {
        let config = CliConfig::parse_from(["employee-api", "create", "--body", "{not json"]);
        assert_eq!(config.command.to_request().body.as_deref(), Some("{not json"));
    }
}
