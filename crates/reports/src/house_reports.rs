//! Report types built from auction house state.
//!
//! Each report snapshots `&AuctionHouse` into rows at construction time
//! and implements [`ReportData`] so any exporter can render it.

use crate::exporters::ReportData;
use chrono::{DateTime, Utc};
use simauction_core::AuctionHouse;

// ============================================================================
// Participant Roster
// ============================================================================

/// One row per registered participant
#[derive(Debug, Clone)]
pub struct ParticipantReport {
    pub title: String,
    pub rows: Vec<ParticipantRow>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ParticipantRow {
    pub name: String,
    pub phone_number: String,
    pub account_details: String,
    pub gender: String,
    pub balance: String,
}

impl ParticipantReport {
    pub fn from_house(title: &str, house: &AuctionHouse) -> Self {
        let rows = house
            .participants()
            .iter()
            .map(|p| ParticipantRow {
                name: p.name().to_string(),
                phone_number: p.phone_number().to_string(),
                account_details: p.account_details().to_string(),
                gender: p.gender().to_string(),
                balance: p.balance().to_string(),
            })
            .collect();

        Self {
            title: title.to_string(),
            rows,
            generated_at: Utc::now(),
        }
    }
}

impl ReportData for ParticipantReport {
    fn title(&self) -> &str {
        &self.title
    }

    fn headers(&self) -> Vec<String> {
        vec![
            "Name".to_string(),
            "Phone Number".to_string(),
            "Account Details".to_string(),
            "Gender".to_string(),
            "Balance".to_string(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.phone_number.clone(),
                    r.account_details.clone(),
                    r.gender.clone(),
                    r.balance.clone(),
                ]
            })
            .collect()
    }

    fn summary(&self) -> Vec<(String, String)> {
        vec![
            (
                "Total Participants".to_string(),
                self.rows.len().to_string(),
            ),
            ("Generated At".to_string(), self.generated_at.to_rfc3339()),
        ]
    }
}

// ============================================================================
// Auction Listings
// ============================================================================

/// One row per listed auction, open or closed
#[derive(Debug, Clone)]
pub struct AuctionReport {
    pub title: String,
    pub rows: Vec<AuctionRow>,
    pub open_count: usize,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AuctionRow {
    pub auction_title: String,
    pub kind: String,
    pub details: String,
    pub starting_bid: String,
    pub current_bid: String,
    pub status: String,
    pub winner: String,
}

impl AuctionReport {
    pub fn from_house(title: &str, house: &AuctionHouse) -> Self {
        let rows: Vec<AuctionRow> = house
            .auctions()
            .iter()
            .map(|a| {
                let (_, details) = a.kind().metadata();
                AuctionRow {
                    auction_title: a.title().to_string(),
                    kind: a.kind().label().to_string(),
                    details: details.to_string(),
                    starting_bid: a.starting_bid().to_string(),
                    current_bid: a.current_bid().to_string(),
                    status: a.status().as_str().to_string(),
                    winner: a.winner().unwrap_or("-").to_string(),
                }
            })
            .collect();

        let open_count = house.auctions().iter().filter(|a| a.is_open()).count();

        Self {
            title: title.to_string(),
            rows,
            open_count,
            generated_at: Utc::now(),
        }
    }
}

impl ReportData for AuctionReport {
    fn title(&self) -> &str {
        &self.title
    }

    fn headers(&self) -> Vec<String> {
        vec![
            "Title".to_string(),
            "Kind".to_string(),
            "Details".to_string(),
            "Starting Bid".to_string(),
            "Current Bid".to_string(),
            "Status".to_string(),
            "Winner".to_string(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.auction_title.clone(),
                    r.kind.clone(),
                    r.details.clone(),
                    r.starting_bid.clone(),
                    r.current_bid.clone(),
                    r.status.clone(),
                    r.winner.clone(),
                ]
            })
            .collect()
    }

    fn summary(&self) -> Vec<(String, String)> {
        vec![
            ("Total Auctions".to_string(), self.rows.len().to_string()),
            ("Open Auctions".to_string(), self.open_count.to_string()),
            (
                "Closed Auctions".to_string(),
                (self.rows.len() - self.open_count).to_string(),
            ),
            ("Generated At".to_string(), self.generated_at.to_rfc3339()),
        ]
    }
}

// ============================================================================
// Winners
// ============================================================================

/// Closed auctions whose recorded winner resolves to a registered
/// participant.
///
/// Winners are stored by name and resolved with the house's linear
/// lookup; a closed auction whose winner name matches nobody is dropped
/// from the rows, matching the end-of-day summary's silent no-match.
#[derive(Debug, Clone)]
pub struct WinnerReport {
    pub title: String,
    pub rows: Vec<WinnerRow>,
    pub closed_count: usize,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct WinnerRow {
    pub auction_title: String,
    pub winner: String,
    pub winning_bid: String,
    pub remaining_balance: String,
}

impl WinnerReport {
    pub fn from_house(title: &str, house: &AuctionHouse) -> Self {
        let closed: Vec<_> = house.auctions().iter().filter(|a| !a.is_open()).collect();
        let closed_count = closed.len();

        let rows = closed
            .into_iter()
            .filter_map(|a| {
                let winner = a.winner()?;
                let participant = house.find_participant(winner)?;
                Some(WinnerRow {
                    auction_title: a.title().to_string(),
                    winner: winner.to_string(),
                    winning_bid: a.current_bid().to_string(),
                    remaining_balance: participant.balance().to_string(),
                })
            })
            .collect();

        Self {
            title: title.to_string(),
            rows,
            closed_count,
            generated_at: Utc::now(),
        }
    }
}

impl ReportData for WinnerReport {
    fn title(&self) -> &str {
        &self.title
    }

    fn headers(&self) -> Vec<String> {
        vec![
            "Auction".to_string(),
            "Winner".to_string(),
            "Winning Bid".to_string(),
            "Remaining Balance".to_string(),
        ]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.auction_title.clone(),
                    r.winner.clone(),
                    r.winning_bid.clone(),
                    r.remaining_balance.clone(),
                ]
            })
            .collect()
    }

    fn summary(&self) -> Vec<(String, String)> {
        vec![
            ("Closed Auctions".to_string(), self.closed_count.to_string()),
            ("Winners Resolved".to_string(), self.rows.len().to_string()),
            ("Generated At".to_string(), self.generated_at.to_rfc3339()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporters::{CsvExporter, MarkdownExporter, ReportExporter};
    use rust_decimal_macros::dec;
    use simauction_core::{Auction, Participant};

    fn sample_house() -> AuctionHouse {
        let mut house = AuctionHouse::new();
        house
            .add_participant(Participant::new(
                "John",
                dec!(1000),
                "1234567890",
                "A123456789",
                "Male",
            ))
            .unwrap();
        house
            .add_participant(Participant::new(
                "Alice",
                dec!(2000),
                "9876543210",
                "B987654321",
                "Female",
            ))
            .unwrap();
        house
            .add_auction(Auction::item("Laptop", dec!(500), "Brand new laptop"))
            .unwrap();
        house
            .add_auction(Auction::art("Painting", dec!(2000), "Renowned artist"))
            .unwrap();
        house
    }

    #[test]
    fn test_participant_report() {
        let house = sample_house();
        let report = ParticipantReport::from_house("Participant Roster", &house);

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].name, "John");
        assert_eq!(report.rows[0].balance, "1000");

        let output = CsvExporter::new().export(&report);
        assert!(output.starts_with("Name,Phone Number,Account Details,Gender,Balance\n"));
        assert!(output.contains("John,1234567890,A123456789,Male,1000\n"));
    }

    #[test]
    fn test_auction_report() {
        let mut house = sample_house();
        house.place_bid(0, 0, dec!(600)).unwrap();
        house.close_auction(0).unwrap();

        let report = AuctionReport::from_house("Auction Listings", &house);

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.open_count, 1);
        assert_eq!(report.rows[0].current_bid, "600");
        assert_eq!(report.rows[0].status, "Closed");
        assert_eq!(report.rows[0].winner, "John");
        // open auction with no bids shows a placeholder winner
        assert_eq!(report.rows[1].winner, "-");

        let summary = report.summary();
        assert!(summary.contains(&("Open Auctions".to_string(), "1".to_string())));
        assert!(summary.contains(&("Closed Auctions".to_string(), "1".to_string())));
    }

    #[test]
    fn test_winner_report_resolves_by_name() {
        let mut house = sample_house();
        house.place_bid(0, 1, dec!(600)).unwrap();
        house.close_auction(0).unwrap();
        house.close_auction(1).unwrap();

        let report = WinnerReport::from_house("Auction Winners", &house);

        // two closed auctions, one resolvable winner
        assert_eq!(report.closed_count, 2);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].winner, "Alice");
        assert_eq!(report.rows[0].winning_bid, "600");
        assert_eq!(report.rows[0].remaining_balance, "1400");
    }

    #[test]
    fn test_winner_report_drops_unresolved_names() {
        let mut house = AuctionHouse::new();
        let mut outsider = Participant::new("Ghost", dec!(5000), "0", "X", "Male");
        let mut auction = Auction::item("Laptop", dec!(500), "Brand new laptop");
        auction.place_bid(&mut outsider, dec!(600)).unwrap();
        auction.close();
        house.add_auction(auction).unwrap();

        let report = WinnerReport::from_house("Auction Winners", &house);
        assert_eq!(report.closed_count, 1);
        assert!(report.rows.is_empty());
    }

    #[test]
    fn test_markdown_render_of_auction_report() {
        let house = sample_house();
        let report = AuctionReport::from_house("Auction Listings", &house);
        let output = MarkdownExporter::new().export(&report);

        assert!(output.starts_with("# Auction Listings\n"));
        assert!(output
            .contains("| Title | Kind | Details | Starting Bid | Current Bid | Status | Winner |"));
        assert!(output.contains("| Laptop | Item Auction | Brand new laptop | 500 | 500 | Open | - |"));
    }
}
