//! `zyxsh` command line tool.
//!
//! ```bash
//! zyxsh -H 192.168.1.1 version
//! zyxsh -H 192.168.1.1 --output-json mac-table
//! PASSWORD=secret zyxsh -H 192.168.1.1 --prompt-marker 'GS1900#' interface-details
//! ```

mod cli;
mod credentials;
mod interactive;
mod logging;
mod terminal;

use std::error::Error;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::debug;
use serde::Serialize;
use zyxsh::error::DriverError;
use zyxsh::parse::{InterfaceInfo, parse_interface, parse_output};
use zyxsh::{Driver, SwitchDriver};

use cli::{Cli, Command};

/// One port of `interface-details --output-json`.
#[derive(Serialize)]
struct PortDetail {
    port: u32,
    #[serde(flatten)]
    info: InterfaceInfo,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(command) = cli.command.clone() else {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    };

    logging::init(cli.debug, &cli.host, command.label());

    match run(&cli, &command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, command: &Command) -> Result<(), Box<dyn Error>> {
    let password = credentials::resolve_password(cli.password.as_deref(), &cli.user, &cli.host)?;
    let mut driver = cli.driver_builder().password(password).build()?;

    debug!("Connecting to {} for {:?}", cli.host, command);
    driver.open().await?;

    let outcome = tokio::select! {
        result = execute(&mut driver, command, cli) => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted");
            Err(zyxsh::Error::from(DriverError::Interrupted).into())
        }
    };

    let closed = driver.close().await;
    outcome?;
    Ok(closed?)
}

async fn execute(
    driver: &mut SwitchDriver,
    command: &Command,
    cli: &Cli,
) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Interactive => interactive::run(driver).await,
        Command::InterfaceDetails => interface_details(driver, cli).await,
        Command::Exec { command } => show(driver, command, cli.output_json).await,
        fixed => {
            let alias = fixed.alias().unwrap_or_default();
            let device_command = driver.profile().command(alias).unwrap_or(alias).to_string();
            show(driver, &device_command, cli.output_json).await
        }
    }
}

async fn show(driver: &mut SwitchDriver, command: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let response = driver.send_command(command).await?;
    debug!("'{}' took {:?}", command, response.elapsed);

    if json {
        let record = parse_output(command, &response.result);
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", response.result);
    }
    Ok(())
}

async fn interface_details(driver: &mut SwitchDriver, cli: &Cli) -> Result<(), Box<dyn Error>> {
    let ports = driver.collect_interfaces(cli.max_ports).await?;

    if cli.output_json {
        let details: Vec<PortDetail> = ports
            .iter()
            .map(|(port, text)| PortDetail {
                port: *port,
                info: parse_interface(text),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        for (port, text) in &ports {
            println!("=== Port {port} ===\n{text}\n");
        }
    }
    Ok(())
}
