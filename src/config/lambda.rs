use crate::core::{Employee, EmployeeStore, Level};
use crate::utils::error::{EmployeeError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;
use std::env;

pub const DEFAULT_TABLE_NAME: &str = "EmployeeTable";

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub table_name: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string()),
            region: env::var("DYNAMODB_REGION").ok(),
            endpoint_url: env::var("DYNAMODB_ENDPOINT").ok(),
        })
    }
}

impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_table_name("table_name", &self.table_name)?;

        if let Some(region) = &self.region {
            validate_aws_region("region", region)?;
        }

        if let Some(endpoint) = &self.endpoint_url {
            validate_non_empty_string("endpoint_url", endpoint)?;
        }

        tracing::info!("Lambda configuration validation passed");
        Ok(())
    }
}

/// The employee collection as a DynamoDB table keyed by `id`.
#[derive(Debug, Clone)]
pub struct DynamoTable {
    client: DynamoClient,
    table_name: String,
}

impl DynamoTable {
    pub fn new(client: DynamoClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Loads the AWS environment once per container and builds the client.
    pub async fn from_config(config: &LambdaConfig) -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
        if let Some(region) = &config.region {
            builder = builder.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(
            DynamoClient::from_conf(builder.build()),
            config.table_name.clone(),
        )
    }
}

#[async_trait]
impl EmployeeStore for DynamoTable {
    async fn put(&self, employee: &Employee) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(employee)))
            .send()
            .await
            .map_err(|e| EmployeeError::StorageError {
                message: format!("Failed to put item: {}", DisplayErrorContext(&e)),
            })?;
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<Employee>> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| EmployeeError::StorageError {
                message: format!("Failed to scan table: {}", DisplayErrorContext(&e)),
            })?;

        output.items().iter().map(from_item).collect()
    }
}

pub fn to_item(employee: &Employee) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(employee.id.clone())),
        ("name".to_string(), AttributeValue::S(employee.name.clone())),
        (
            "position".to_string(),
            AttributeValue::S(employee.position.clone()),
        ),
        (
            "level".to_string(),
            AttributeValue::S(employee.level.as_str().to_string()),
        ),
    ])
}

pub fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Employee> {
    let level = string_attribute(item, "level")?;
    Ok(Employee {
        id: string_attribute(item, "id")?,
        name: string_attribute(item, "name")?,
        position: string_attribute(item, "position")?,
        level: level.parse::<Level>().map_err(|value| EmployeeError::StorageError {
            message: format!("Stored item has unknown level: {}", value),
        })?,
    })
}

fn string_attribute(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String> {
    item.get(key)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| EmployeeError::StorageError {
            message: format!("Stored item is missing string attribute: {}", key),
        })
}
