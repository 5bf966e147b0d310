//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the qbapi binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// QuickBooks API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "qbapi", about = "QuickBooks Online API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of key/value text.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an entity from a JSON file.
    Create {
        /// The type of entity to create.
        entity: Entity,

        /// Path to the JSON record, or `-` for stdin.
        file: PathBuf,
    },

    /// Delete an entity by id and sync token.
    Delete {
        /// The type of entity to delete.
        entity: Entity,

        /// The entity id.
        id: String,

        /// The entity's current sync token.
        sync_token: String,
    },
}

/// Entity types that can be operated on.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A purchase (expense).
    #[value(alias = "purchases")]
    Purchase,
    /// A sales receipt.
    #[value(alias = "salesreceipts", alias = "sales-receipt", alias = "sales-receipts")]
    Salesreceipt,
}
