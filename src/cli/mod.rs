//! CLI module for docgate
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docgate - checklist completion and status transition gates for fleet and HR records
#[derive(Parser, Debug)]
#[command(name = "docgate")]
#[command(version)]
#[command(about = "Checklist completion and status transition gates for fleet and HR records")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create .docgate/ with default config and the built-in checklists
    Init {
        /// Overwrite existing config and checklist files
        #[arg(long)]
        force: bool,
    },

    /// List checklist definitions and the transitions they gate
    Checklists {
        /// Only show checklists for this entity type
        #[arg(long)]
        entity_type: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show checklist completion for an entity
    Progress {
        /// Entity type (employee, driver, truck, wcb_claim, incident, ...)
        entity_type: String,

        /// Entity ID
        entity_id: String,

        /// Only evaluate this checklist
        #[arg(long)]
        checklist: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a status change is allowed by its gates
    Transition {
        /// Entity type
        entity_type: String,

        /// Entity ID
        entity_id: String,

        /// Current status
        from: String,

        /// Requested status
        to: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate config, checklists and stored documents
    Doctor,
}
