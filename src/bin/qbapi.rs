//! QuickBooks API CLI binary.
//!
//! A command-line interface for creating and deleting QuickBooks entities.

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use qbapi::cli::{Cli, Command, Entity};
use qbapi::output::PrettyPrint;
use qbapi::{Create, Delete, Purchase, QuickbooksClient, QuickbooksError, SalesReceipt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match QuickbooksClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set QBO_ACCESS_TOKEN and QBO_REALM_ID environment variables");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &QuickbooksClient, cli: Cli) -> qbapi::Result<()> {
    match cli.command {
        Command::Create { entity, file } => handle_create(client, entity, &file, cli.json).await,
        Command::Delete {
            entity,
            id,
            sync_token,
        } => handle_delete(client, entity, &id, &sync_token).await,
    }
}

async fn handle_create(
    client: &QuickbooksClient,
    entity: Entity,
    file: &Path,
    json: bool,
) -> qbapi::Result<()> {
    match entity {
        Entity::Purchase => {
            let purchase: Purchase = read_record(file)?;
            let created = purchase.create(client).await?;
            output_single(&created, json)?;
        }
        Entity::Salesreceipt => {
            let receipt: SalesReceipt = read_record(file)?;
            let created = receipt.create(client).await?;
            output_single(&created, json)?;
        }
    }
    Ok(())
}

async fn handle_delete(
    client: &QuickbooksClient,
    entity: Entity,
    id: &str,
    sync_token: &str,
) -> qbapi::Result<()> {
    match entity {
        Entity::Purchase => Purchase::delete(client, id, sync_token).await?,
        Entity::Salesreceipt => SalesReceipt::delete(client, id, sync_token).await?,
    }
    println!("Deleted {} {}", entity_label(entity), id);
    Ok(())
}

fn read_record<T: DeserializeOwned>(file: &Path) -> qbapi::Result<T> {
    let mut raw = String::new();
    if file.as_os_str() == "-" {
        std::io::stdin().read_to_string(&mut raw)?;
    } else {
        raw = std::fs::read_to_string(file)?;
    }
    Ok(serde_json::from_str(&raw)?)
}

fn entity_label(entity: Entity) -> &'static str {
    match entity {
        Entity::Purchase => "purchase",
        Entity::Salesreceipt => "sales receipt",
    }
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> qbapi::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(item).map_err(QuickbooksError::Serialize)?
        );
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}
