//! # Simauction Reports
//!
//! Report generation - CSV, JSON, Markdown exports of auction house state.
//!
//! ## Exporters
//!
//! - [`CsvExporter`] - CSV format with proper escaping
//! - [`JsonExporter`] - JSON format (pretty or compact)
//! - [`MarkdownExporter`] - Markdown tables for documentation
//!
//! ## Reports
//!
//! - [`ParticipantReport`] - the registered participant roster
//! - [`AuctionReport`] - every listed auction with its bidding state
//! - [`WinnerReport`] - closed auctions with resolvable winners
//!
//! ## Example
//!
//! ```rust,ignore
//! use simauction_reports::{AuctionReport, MarkdownExporter, ReportExporter};
//!
//! let report = AuctionReport::from_house("Auction Listings", &house);
//! let output = MarkdownExporter::new().export(&report);
//! ```

pub mod exporters;
pub mod house_reports;

// Re-export main types
pub use exporters::{CsvExporter, JsonExporter, MarkdownExporter, ReportData, ReportExporter};
pub use house_reports::{
    AuctionReport, AuctionRow, ParticipantReport, ParticipantRow, WinnerReport, WinnerRow,
};
