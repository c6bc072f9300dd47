use clap::Parser;
use employee_api::config::Command;
use employee_api::utils::{logger, validation::Validate};
use employee_api::{CliConfig, EmployeeHandlers, LocalTable, UuidGenerator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting employee-api CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let table = LocalTable::new(&config.table_path);
    let handlers = EmployeeHandlers::new(table, UuidGenerator);

    let request = config.command.to_request();
    let response = match config.command {
        Command::Create { .. } => handlers.create_employee(&request).await,
        Command::List => handlers.get_employees(&request).await,
        Command::Hello => handlers.hello_world(&request).await,
    };

    println!("{}", response.status_code);
    println!("{}", response.body);

    if response.status_code >= 400 {
        std::process::exit(1);
    }

    Ok(())
}
