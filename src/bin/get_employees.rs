use employee_api::utils::{logger, validation::Validate};
use employee_api::{ApiRequest, DynamoTable, EmployeeHandlers, LambdaConfig, UuidGenerator};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;
    tracing::info!("Starting get_employees function (table: {})", config.table_name);

    // One client per container, shared by every invocation it serves.
    let table = DynamoTable::from_config(&config).await;
    let handlers = EmployeeHandlers::new(table, UuidGenerator);
    let handlers = &handlers;

    run(service_fn(move |event: LambdaEvent<ApiRequest>| async move {
        Ok::<_, Error>(handlers.get_employees(&event.payload).await)
    }))
    .await
}
