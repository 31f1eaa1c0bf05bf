//! Simauction CLI - Auction house operations from the command line
//!
//! Usage:
//! ```bash
//! simauction run
//! simauction run --capacity 10
//! simauction report --report-type auctions --format markdown
//! simauction report --report-type winners --format csv --output winners.csv
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod banner;
mod commands;
mod demo;

use commands::{report, run};

/// Simauction - an auction house simulation with interactive bidding
#[derive(Parser)]
#[command(name = "simauction")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an interactive auction session over the demo data
    Run {
        /// Bound the house to a fixed number of participants and auctions
        #[arg(long)]
        capacity: Option<usize>,
    },

    /// Generate reports from the demo dataset
    Report {
        /// Report format
        #[arg(long, default_value = "markdown")]
        format: ReportFormat,
        /// Output file path (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Report type
        #[arg(long, default_value = "auctions")]
        report_type: ReportType,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Csv,
    Json,
    Markdown,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportType {
    Participants,
    Auctions,
    Winners,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { capacity } => {
            run::interactive_session(capacity)?;
        }

        Commands::Report {
            format,
            output,
            report_type,
        } => {
            report::generate_report(format, output, report_type)?;
        }
    }

    Ok(())
}
