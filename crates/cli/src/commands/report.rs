//! Report generation command.

use anyhow::{Context, Result};
use simauction_reports::{
    AuctionReport, CsvExporter, JsonExporter, MarkdownExporter, ParticipantReport, ReportData,
    ReportExporter, WinnerReport,
};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::demo;
use crate::{ReportFormat, ReportType};

/// Generate a report over the demo dataset
pub fn generate_report(
    format: ReportFormat,
    output: Option<PathBuf>,
    report_type: ReportType,
) -> Result<()> {
    let house = demo::seed_house(None)?;

    let content = match report_type {
        ReportType::Participants => export(
            &ParticipantReport::from_house("Participant Roster", &house),
            format,
        ),
        ReportType::Auctions => export(
            &AuctionReport::from_house("Auction Listings", &house),
            format,
        ),
        ReportType::Winners => export(&WinnerReport::from_house("Auction Winners", &house), format),
    };

    match output {
        Some(path) => {
            fs::write(&path, &content).context("Failed to write report file")?;
            info!(path = %path.display(), "report written");
            println!("✅ Report generated: {:?}", path);
        }
        None => {
            println!("{}", content);
        }
    }

    Ok(())
}

fn export(report: &dyn ReportData, format: ReportFormat) -> String {
    match format {
        ReportFormat::Csv => CsvExporter::new().export(report),
        ReportFormat::Json => JsonExporter::new().export(report),
        ReportFormat::Markdown => MarkdownExporter::new().export(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_formats_over_demo_data() {
        let house = demo::seed_house(None).unwrap();
        let report = AuctionReport::from_house("Auction Listings", &house);

        let csv = export(&report, ReportFormat::Csv);
        assert!(csv.starts_with("Title,Kind,Details,Starting Bid,Current Bid,Status,Winner\n"));
        assert!(csv.contains("Laptop,Item Auction,Brand new laptop,500,500,Open,-\n"));

        let json = export(&report, ReportFormat::Json);
        assert!(json.contains("\"title\": \"Auction Listings\""));

        let markdown = export(&report, ReportFormat::Markdown);
        assert!(markdown.starts_with("# Auction Listings\n"));
    }
}
