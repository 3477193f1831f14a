use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::main;

use crate::config::Config;
use crate::router::build_router;

mod config;
mod endpoint_handlers;
mod responses;
mod router;

#[derive(Clone)]
pub struct DatabaseState {
    connection: DatabaseConnection,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, short, default_value_t = 3)]
    verbosity: usize,
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
    #[arg(long, short)]
    config: String,
}

#[main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = stderrlog::new()
        .verbosity(args.verbosity)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Millisecond)
        .init()
    {
        eprintln!("Could not initialise logging: {}", err);
        return ExitCode::FAILURE;
    }

    info!("Configuration path: {}", args.config);
    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut options = ConnectOptions::new(config.database_url.to_owned());
    options.max_connections(config.max_connections);
    let connection = match Database::connect(options).await {
        Ok(connection) => connection,
        Err(err) => {
            error!("Error connecting to database: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = Migrator::up(&connection, None).await {
        error!("Error running migrations: {}", err);
        return ExitCode::FAILURE;
    }

    let app = build_router(DatabaseState { connection });

    let address = config.listen_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Could not listen on {}: {}", address, err);
            return ExitCode::FAILURE;
        }
    };
    info!("Listening on {}", address);
    info!("Welcome to Showbill!");

    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
