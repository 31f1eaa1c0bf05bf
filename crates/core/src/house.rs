//! # Auction House Module
//!
//! The house owns the participants and auctions for a session and renders
//! the human-readable listings, including the end-of-day summary. It never
//! mutates bidding state itself - bids flow through [`Auction::place_bid`],
//! the house only resolves indices and reads state back for reporting.

use crate::auction::Auction;
use crate::error::{CoreError, CoreResult};
use crate::participant::Participant;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator line between report entries
const SEPARATOR: &str = "---------------------------";

/// Owns the participants and auctions of one session, in insertion order.
///
/// The collections grow dynamically. An optional capacity can be set for
/// bounded demo setups; when it is reached, additions fail with
/// [`CoreError::HouseFull`] instead of being dropped silently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuctionHouse {
    participants: Vec<Participant>,
    auctions: Vec<Auction>,
    capacity: Option<usize>,
}

impl AuctionHouse {
    /// Create an unbounded auction house
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a house that holds at most `capacity` participants and at
    /// most `capacity` auctions
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            participants: Vec::new(),
            auctions: Vec::new(),
            capacity: Some(capacity),
        }
    }

    fn check_capacity(&self, len: usize) -> CoreResult<()> {
        match self.capacity {
            Some(capacity) if len >= capacity => Err(CoreError::HouseFull { capacity }),
            _ => Ok(()),
        }
    }

    /// Register a participant
    pub fn add_participant(&mut self, participant: Participant) -> CoreResult<()> {
        self.check_capacity(self.participants.len())?;
        self.participants.push(participant);
        Ok(())
    }

    /// List an auction
    pub fn add_auction(&mut self, auction: Auction) -> CoreResult<()> {
        self.check_capacity(self.auctions.len())?;
        self.auctions.push(auction);
        Ok(())
    }

    /// Registered participants, in insertion order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Listed auctions, in insertion order
    pub fn auctions(&self) -> &[Auction] {
        &self.auctions
    }

    /// Resolve a participant by name (linear search).
    ///
    /// This is how auction winners - recorded by name - are resolved back
    /// to participant records at report time.
    pub fn find_participant(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name() == name)
    }

    /// Place a bid on the auction at `auction_index` for the participant
    /// at `participant_index`.
    ///
    /// The house only resolves the indices; validation and the balance
    /// deduction happen in [`Auction::place_bid`]. Unknown indices are
    /// reported as [`CoreError::UnknownAuction`] /
    /// [`CoreError::UnknownParticipant`].
    pub fn place_bid(
        &mut self,
        auction_index: usize,
        participant_index: usize,
        amount: Decimal,
    ) -> CoreResult<()> {
        if auction_index >= self.auctions.len() {
            return Err(CoreError::UnknownAuction(auction_index));
        }
        if participant_index >= self.participants.len() {
            return Err(CoreError::UnknownParticipant(participant_index));
        }
        let auction = &mut self.auctions[auction_index];
        let bidder = &mut self.participants[participant_index];
        auction.place_bid(bidder, amount)
    }

    /// Close the auction at `auction_index` and report its winner, if any
    pub fn close_auction(&mut self, auction_index: usize) -> CoreResult<Option<String>> {
        let auction = self
            .auctions
            .get_mut(auction_index)
            .ok_or(CoreError::UnknownAuction(auction_index))?;
        Ok(auction.close().map(str::to_string))
    }

    /// Listing of every auction, in insertion order
    pub fn display_auctions_info(&self) -> String {
        let mut out = String::new();
        out.push_str("Auction House: Available Auctions\n");
        for auction in &self.auctions {
            out.push_str(&auction.display_info());
            out.push_str(SEPARATOR);
            out.push('\n');
        }
        out
    }

    /// Listing of every participant, in insertion order
    pub fn display_participants_info(&self) -> String {
        let mut out = String::new();
        out.push_str("Auction House: Participants\n");
        for participant in &self.participants {
            out.push_str(&participant.display_info());
            out.push_str(SEPARATOR);
            out.push('\n');
        }
        out
    }

    /// The end-of-day summary: participants, auctions with an
    /// affordability listing, and winners of closed auctions.
    ///
    /// The "Bids" section lists every participant whose CURRENT balance
    /// covers the auction's current bid. The house records no bid log,
    /// only the single standing high bid, so this affordability check is
    /// the report's stand-in for a bid history.
    pub fn display_end_of_day_summary(&self) -> String {
        let mut out = String::new();
        out.push_str("End of Day Summary:\n");

        out.push_str("Participants: \n");
        for participant in &self.participants {
            out.push_str(&participant.display_info());
            out.push_str(SEPARATOR);
            out.push('\n');
        }

        out.push_str("Auctions: \n");
        for auction in &self.auctions {
            out.push_str(&auction.display_info());
            out.push_str(SEPARATOR);
            out.push('\n');
            out.push_str("Bids: \n");
            for participant in &self.participants {
                if participant.can_afford(auction.current_bid()) {
                    out.push_str(&format!("Participant: {}\n", participant.name()));
                    out.push_str(&format!("Bid Amount: {}\n", auction.current_bid()));
                    out.push_str(SEPARATOR);
                    out.push('\n');
                }
            }
            out.push('\n');
        }

        out.push_str("Auction Winners and Items Won: \n");
        for auction in &self.auctions {
            if auction.is_open() {
                continue;
            }
            out.push_str(&format!("Auction: {}\n", auction.title()));
            match auction.winner() {
                Some(winner) => {
                    out.push_str(&format!("Winner: {}\n", winner));
                    // Resolved by name; a stale winner name that matches no
                    // participant produces no line at all.
                    if let Some(participant) = self.find_participant(winner) {
                        out.push_str(&format!(
                            "Participant {} won the item.\n",
                            participant.name()
                        ));
                    }
                }
                None => {
                    out.push_str("No winner for this auction.\n");
                }
            }
            out.push_str(SEPARATOR);
            out.push('\n');
        }

        out
    }
}

impl fmt::Display for AuctionHouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AuctionHouse ({} participants, {} auctions)",
            self.participants.len(),
            self.auctions.len()
        )
    }
}
