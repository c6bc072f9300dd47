use employee_api::core::handlers::hello_world;
use employee_api::utils::logger;
use employee_api::ApiRequest;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(|_event: LambdaEvent<ApiRequest>| async {
        Ok::<_, Error>(hello_world())
    }))
    .await
}
